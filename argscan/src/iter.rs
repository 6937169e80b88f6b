//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Option resolution and the three traversal modes.
//!
//! A utility normally makes two passes over its arguments: one with
//! [`Iter::next_option`] to collect flags, then a second, fresh one with
//! [`Iter::next_operand`] to walk the operands.  Each pass resolves every
//! option token it meets against the registry, so an operand pass skips
//! option values correctly whether or not an option pass ran first.

use std::ffi::OsString;
use std::fmt;
use std::path::Path;

use crate::error::{Error, OptName};
use crate::help;
use crate::option::{ArgMode, OptSpec, Options};
use crate::scanner::{Scanner, Token};

/// Where the value of the most recent occurrence of an option came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueSource {
    #[default]
    Absent,
    /// Same argument as the option: `-ofile`, `--out=file`.
    Inline,
    /// The following argument: `-o file`.
    Separate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flag<'a> {
    Short(char),
    Long(&'a str),
}

impl Flag<'_> {
    fn name(self) -> OptName {
        match self {
            Flag::Short(c) => OptName::Short(c),
            Flag::Long(name) => OptName::Long(name.to_string()),
        }
    }
}

/// Split a token into its option part, or hand back the operand.
fn classify(token: Token<'_>) -> Result<(Flag<'_>, Option<&str>), &str> {
    match token {
        Token::Short { ch, inline } => Ok((Flag::Short(ch), inline)),
        Token::Long { name, inline } => Ok((Flag::Long(name), inline)),
        Token::Operand(s) => Err(s),
    }
}

/// A token matched against the registry.
#[derive(Debug, Clone, Copy)]
pub struct ParsedOption<'a, 's, K> {
    index: usize,
    spec: &'s OptSpec<K>,
    flag: Flag<'a>,
    value: Option<&'a str>,
}

impl<'a, 's, K: Copy> ParsedOption<'a, 's, K> {
    pub fn id(&self) -> K {
        self.spec.id
    }

    pub fn spec(&self) -> &'s OptSpec<K> {
        self.spec
    }

    /// Declaration-order position in the registry.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn value(&self) -> Option<&'a str> {
        self.value
    }

    /// The option as the user spelled it, `-x` or `--name`.
    pub fn name(&self) -> OptName {
        self.flag.name()
    }
}

/// One item of a combined, in-order traversal.
#[derive(Debug, Clone, Copy)]
pub enum ParsedArg<'a, 's, K> {
    Option(ParsedOption<'a, 's, K>),
    Operand(&'a str),
}

/// Convert process arguments, normally `std::env::args_os()`, into the
/// `String`s an [`Args`] handle borrows.
///
/// An argument that is not valid UTF-8 fails with the complete usage
/// diagnostic, ready for standard error, naming the program by the basename
/// of `argv[0]`.
pub fn utf8_args<I>(args: I) -> Result<Vec<String>, String>
where
    I: IntoIterator<Item = OsString>,
{
    let args: Vec<OsString> = args.into_iter().collect();

    args.iter()
        .map(|arg| {
            arg.to_str().map(str::to_owned).ok_or_else(|| {
                let program = args
                    .first()
                    .and_then(|first| Path::new(first).file_name())
                    .map(|name| name.to_string_lossy())
                    .unwrap_or_default();
                let err = Error::InvalidUnicode(arg.to_string_lossy().into_owned());
                help::usage_error(&program, &err)
            })
        })
        .collect()
}

/// Handle over a process argument list: the program name plus everything
/// after it.
#[derive(Debug)]
pub struct Args<'a, 's, K> {
    program: &'a str,
    argv: &'a [String],
    opts: Options<'s, K>,
}

impl<K> Clone for Args<'_, '_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Args<'_, '_, K> {}

impl<'a, 's, K: Copy + PartialEq> Args<'a, 's, K> {
    pub(crate) fn new(opts: Options<'s, K>, argv: &'a [String]) -> Result<Self, Error> {
        let (first, rest) = argv.split_first().ok_or(Error::NoProgramName)?;
        let program = Path::new(first)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(first.as_str());

        Ok(Args {
            program,
            argv: rest,
            opts,
        })
    }

    /// Basename of `argv[0]`.
    pub fn program(&self) -> &'a str {
        self.program
    }

    pub fn options(&self) -> Options<'s, K> {
        self.opts
    }

    /// Arguments after the program name.
    pub fn raw(&self) -> &'a [String] {
        self.argv
    }

    /// Start a new traversal with fresh state.
    pub fn iter(&self) -> Iter<'a, 's, K> {
        Iter::new(self.opts, self.argv)
    }

    /// Render `err` as a usage diagnostic for standard error.
    pub fn try_help(&self, err: &dyn fmt::Display) -> String {
        help::usage_error(self.program, err)
    }

    pub fn help(&self, usage: &str, about: &str) -> String {
        help::render_help(self.program, usage, about, &self.opts)
    }

    pub fn version(&self, version: &str) -> String {
        help::version_text(self.program, version)
    }
}

/// One traversal session over the arguments.
#[derive(Debug, Clone)]
pub struct Iter<'a, 's, K> {
    opts: Options<'s, K>,
    scanner: Scanner<'a>,
    state: Vec<ValueSource>,
}

impl<'a, 's, K: Copy + PartialEq> Iter<'a, 's, K> {
    /// `args` must not include the program name.
    pub fn new(opts: Options<'s, K>, args: &'a [String]) -> Self {
        Iter {
            opts,
            scanner: Scanner::new(args),
            state: vec![ValueSource::Absent; opts.len()],
        }
    }

    /// Rewind to the first argument, clearing scanner and parse state.
    pub fn reset(&mut self) {
        self.scanner.reset();
        self.state.fill(ValueSource::Absent);
    }

    /// Next option, skipping operands.
    pub fn next_option(&mut self) -> Result<Option<ParsedOption<'a, 's, K>>, Error> {
        while let Some(token) = self.scanner.next_token(&self.opts) {
            if let Ok((flag, inline)) = classify(token) {
                return self.resolve(flag, inline).map(Some);
            }
        }
        Ok(None)
    }

    /// Next operand, skipping options together with any value they consume.
    pub fn next_operand(&mut self) -> Result<Option<&'a str>, Error> {
        while let Some(token) = self.scanner.next_token(&self.opts) {
            match classify(token) {
                Ok((flag, inline)) => {
                    self.resolve(flag, inline)?;
                }
                Err(operand) => return Ok(Some(operand)),
            }
        }
        Ok(None)
    }

    /// Next option or operand, in command line order.
    pub fn next_arg(&mut self) -> Result<Option<ParsedArg<'a, 's, K>>, Error> {
        let Some(token) = self.scanner.next_token(&self.opts) else {
            return Ok(None);
        };

        match classify(token) {
            Ok((flag, inline)) => self
                .resolve(flag, inline)
                .map(|opt| Some(ParsedArg::Option(opt))),
            Err(operand) => Ok(Some(ParsedArg::Operand(operand))),
        }
    }

    /// How the last resolved occurrence of `id` got its value during this
    /// traversal.
    pub fn value_source(&self, id: K) -> ValueSource {
        self.opts
            .index_of(id)
            .map(|i| self.state[i])
            .unwrap_or_default()
    }

    pub fn options(self) -> OptionIter<'a, 's, K> {
        OptionIter(self)
    }

    pub fn operands(self) -> OperandIter<'a, 's, K> {
        OperandIter(self)
    }

    fn resolve(
        &mut self,
        flag: Flag<'a>,
        inline: Option<&'a str>,
    ) -> Result<ParsedOption<'a, 's, K>, Error> {
        let found = match flag {
            Flag::Short(c) => self.opts.find_short(c),
            Flag::Long(name) => self.opts.find_long(name),
        };
        let (index, spec) = found.ok_or_else(|| {
            Error::UnknownOption(match (flag, inline) {
                // `--=x`: show the whole argument rather than a bare `--`
                (Flag::Long(""), Some(value)) => OptName::Long(format!("={}", value)),
                _ => flag.name(),
            })
        })?;

        let (value, source) = match (spec.mode, inline) {
            (ArgMode::None, Some(_)) => return Err(Error::UnexpectedArgument(flag.name())),
            (ArgMode::None, None) => (None, ValueSource::Absent),
            (_, Some(value)) => (Some(value), ValueSource::Inline),
            (ArgMode::Required, None) => match self.scanner.next_raw() {
                Some(value) => (Some(value), ValueSource::Separate),
                None => return Err(Error::MissingOptionArgument(flag.name())),
            },
            (ArgMode::Optional, None) => match self.scanner.peek_operand(&self.opts) {
                Some(value) => {
                    self.scanner.next_raw();
                    (Some(value), ValueSource::Separate)
                }
                None => (None, ValueSource::Absent),
            },
        };

        self.state[index] = source;

        Ok(ParsedOption {
            index,
            spec,
            flag,
            value,
        })
    }
}

impl<'a, 's, K: Copy + PartialEq> Iterator for Iter<'a, 's, K> {
    type Item = Result<ParsedArg<'a, 's, K>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_arg().transpose()
    }
}

/// Options-only traversal, see [`Iter::options`].
#[derive(Debug)]
pub struct OptionIter<'a, 's, K>(Iter<'a, 's, K>);

impl<'a, 's, K: Copy + PartialEq> Iterator for OptionIter<'a, 's, K> {
    type Item = Result<ParsedOption<'a, 's, K>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next_option().transpose()
    }
}

/// Operands-only traversal, see [`Iter::operands`].
#[derive(Debug)]
pub struct OperandIter<'a, 's, K>(Iter<'a, 's, K>);

impl<'a, K: Copy + PartialEq> Iterator for OperandIter<'a, '_, K> {
    type Item = Result<&'a str, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next_operand().transpose()
    }
}
