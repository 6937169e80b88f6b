//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

/// Reason a directory operand was refused.  Callers pick the wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirPathError {
    Empty,
    TrailingSlash,
    Dot,
    DotDot,
}

/// Accept `path` as a directory to operate on.
pub fn dir_operand(path: &str) -> Result<(), DirPathError> {
    if path.is_empty() {
        return Err(DirPathError::Empty);
    }
    if path.ends_with('/') {
        return Err(DirPathError::TrailingSlash);
    }

    match path.rsplit('/').next() {
        Some(".") => Err(DirPathError::Dot),
        Some("..") => Err(DirPathError::DotDot),
        _ => Ok(()),
    }
}
