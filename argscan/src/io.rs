//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::io;

/// `strerror`-style text for `e`, without the "(os error N)" suffix that
/// `io::Error` appends.
pub fn error_string(e: &io::Error) -> String {
    match e.raw_os_error() {
        Some(code) => errno::Errno(code).to_string(),
        None => e.to_string(),
    }
}
