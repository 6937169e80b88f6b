//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Declarative option tables.
//!
//! A utility declares its options once, as a `static` array of [`OptSpec`]
//! values tagged with its own identity type (normally a fieldless enum), and
//! wraps it in [`Options`] to validate it.  The table is never mutated.

use crate::error::{Error, SpecError};
use crate::iter::Args;

/// Whether an option takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgMode {
    None,
    Required,
    Optional,
}

impl ArgMode {
    pub fn takes_value(self) -> bool {
        self != ArgMode::None
    }
}

/// One recognized option.
#[derive(Debug, Clone, Copy)]
pub struct OptSpec<K> {
    pub id: K,
    pub short: Option<char>,
    pub long: Option<&'static str>,
    pub mode: ArgMode,
    pub help: &'static str,
}

impl<K> OptSpec<K> {
    pub const fn new(
        id: K,
        short: Option<char>,
        long: Option<&'static str>,
        mode: ArgMode,
        help: &'static str,
    ) -> Self {
        OptSpec {
            id,
            short,
            long,
            mode,
            help,
        }
    }

    /// Short and long spelling, no value.
    pub const fn flag(id: K, short: char, long: &'static str, help: &'static str) -> Self {
        OptSpec::new(id, Some(short), Some(long), ArgMode::None, help)
    }

    pub const fn short_only(id: K, short: char, mode: ArgMode, help: &'static str) -> Self {
        OptSpec::new(id, Some(short), None, mode, help)
    }

    pub const fn long_only(id: K, long: &'static str, mode: ArgMode, help: &'static str) -> Self {
        OptSpec::new(id, None, Some(long), mode, help)
    }
}

/// A validated, immutable option registry.
#[derive(Debug)]
pub struct Options<'s, K> {
    specs: &'s [OptSpec<K>],
}

impl<K> Clone for Options<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Options<'_, K> {}

impl<'s, K: Copy + PartialEq> Options<'s, K> {
    /// Validate `specs`: every entry must be nameable, and no short or long
    /// name may appear twice.
    pub fn new(specs: &'s [OptSpec<K>]) -> Result<Self, SpecError> {
        for (i, spec) in specs.iter().enumerate() {
            if spec.short.is_none() && spec.long.is_none() {
                return Err(SpecError::Unnamed(i));
            }

            if let Some(c) = spec.short {
                if c == '-' || c.is_whitespace() {
                    return Err(SpecError::InvalidShort(c));
                }
                if specs[..i].iter().any(|prev| prev.short == Some(c)) {
                    return Err(SpecError::DuplicateShort(c));
                }
            }

            if let Some(name) = spec.long {
                if name.is_empty() || name.contains('=') {
                    return Err(SpecError::InvalidLong(name));
                }
                if specs[..i].iter().any(|prev| prev.long == Some(name)) {
                    return Err(SpecError::DuplicateLong(name));
                }
            }
        }

        Ok(Options { specs })
    }

    pub fn find_short(&self, c: char) -> Option<(usize, &'s OptSpec<K>)> {
        self.specs
            .iter()
            .enumerate()
            .find(|(_, spec)| spec.short == Some(c))
    }

    pub fn find_long(&self, name: &str) -> Option<(usize, &'s OptSpec<K>)> {
        self.specs
            .iter()
            .enumerate()
            .find(|(_, spec)| spec.long == Some(name))
    }

    /// Declaration-order position of the option tagged `id`.
    pub fn index_of(&self, id: K) -> Option<usize> {
        self.specs.iter().position(|spec| spec.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'s, OptSpec<K>> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Capture the program name from `argv[0]` and return a handle over the
    /// remaining arguments.
    pub fn args<'a>(&self, argv: &'a [String]) -> Result<Args<'a, 's, K>, Error> {
        Args::new(*self, argv)
    }
}
