//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Errors produced while validating a registry or resolving arguments.
//!
//! Nothing in this crate prints.  Callers render these values, usually via
//! [`crate::Args::try_help`], and turn them into an exit status.

use std::fmt;
use thiserror::Error;

/// The spelling of an option as it appeared on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptName {
    Short(char),
    Long(String),
}

impl fmt::Display for OptName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptName::Short(c) => write!(f, "-{}", c),
            OptName::Long(name) => write!(f, "--{}", name),
        }
    }
}

/// Argument resolution failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{}", unknown_option(.0))]
    UnknownOption(OptName),

    #[error("{}", missing_argument(.0))]
    MissingOptionArgument(OptName),

    #[error("option '{0}' doesn't allow an argument")]
    UnexpectedArgument(OptName),

    #[error("missing program name")]
    NoProgramName,

    #[error("argument '{0}' is not valid UTF-8")]
    InvalidUnicode(String),
}

fn unknown_option(name: &OptName) -> String {
    match name {
        OptName::Short(c) => format!("invalid option -- '{}'", c),
        OptName::Long(_) => format!("unrecognized option '{}'", name),
    }
}

fn missing_argument(name: &OptName) -> String {
    match name {
        OptName::Short(c) => format!("option requires an argument -- '{}'", c),
        OptName::Long(_) => format!("option '{}' requires an argument", name),
    }
}

/// Registry validation failure, raised by [`crate::Options::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("option #{0} has neither a short nor a long name")]
    Unnamed(usize),

    #[error("invalid short option name '{0}'")]
    InvalidShort(char),

    #[error("invalid long option name '{0}'")]
    InvalidLong(&'static str),

    #[error("short option '-{0}' declared more than once")]
    DuplicateShort(char),

    #[error("long option '--{0}' declared more than once")]
    DuplicateLong(&'static str),
}
