//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Text shown to users: option listings, help, version, usage errors.

use std::fmt;

use crate::option::{ArgMode, Options};
use crate::PROJECT_NAME;

const DESC_INDENT: &str = "        ";

/// One heading line plus one indented description line per option, in
/// declaration order.
pub fn option_lines<K: Copy + PartialEq>(opts: &Options<'_, K>) -> String {
    let mut out = String::new();

    for spec in opts.iter() {
        let marker = match spec.mode {
            ArgMode::None => "",
            ArgMode::Required => " <arg>",
            ArgMode::Optional => " [arg]",
        };

        let heading = match (spec.short, spec.long) {
            (Some(c), Some(name)) => format!("  -{}, --{}{}", c, name, marker),
            (Some(c), None) => format!("  -{}{}", c, marker),
            (None, Some(name)) => format!("      --{}{}", name, marker),
            (None, None) => String::new(),
        };
        out.push_str(&heading);
        out.push('\n');

        if !spec.help.is_empty() {
            out.push_str(DESC_INDENT);
            out.push_str(spec.help);
            out.push('\n');
        }
    }

    out
}

pub fn render_help<K: Copy + PartialEq>(
    program: &str,
    usage: &str,
    about: &str,
    opts: &Options<'_, K>,
) -> String {
    let mut out = format!("Usage: {} {}\n{}\n", program, usage, about);
    if !opts.is_empty() {
        out.push_str("\nOptions:\n");
        out.push_str(&option_lines(opts));
    }
    out
}

pub fn version_text(program: &str, version: &str) -> String {
    format!("{} ({}) {}\n", program, PROJECT_NAME, version)
}

/// The two-line diagnostic every utility prints for a bad command line.
pub fn usage_error(program: &str, message: &dyn fmt::Display) -> String {
    format!(
        "{}: {}\nTry '{} --help' for more information.\n",
        program, message, program
    )
}
