//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Lowest level of argument handling: split raw arguments into tokens.
//!
//! The scanner never copies argument text.  Every token borrows from the
//! argument slice it was created over.

use crate::option::Options;

/// One logical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Short { ch: char, inline: Option<&'a str> },
    Long { name: &'a str, inline: Option<&'a str> },
    Operand(&'a str),
}

/// Cursor over raw arguments, plus the `--` and short-cluster state.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    args: &'a [String],
    pos: usize,
    delimited: bool,
    cluster: Option<&'a str>,
}

impl<'a> Scanner<'a> {
    /// `args` must not include the program name.
    pub fn new(args: &'a [String]) -> Self {
        Scanner {
            args,
            pos: 0,
            delimited: false,
            cluster: None,
        }
    }

    /// Rewind to the first argument and forget all state.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.delimited = false;
        self.cluster = None;
    }

    pub fn is_delimited(&self) -> bool {
        self.delimited
    }

    /// Raw arguments not yet pulled.  A partially scanned cluster is not
    /// included.
    pub fn remaining(&self) -> &'a [String] {
        &self.args[self.pos..]
    }

    /// Pull the next raw argument as-is, whatever it looks like.
    pub fn next_raw(&mut self) -> Option<&'a str> {
        let arg = self.args.get(self.pos)?;
        self.pos += 1;
        Some(arg.as_str())
    }

    pub fn next_token<K: Copy + PartialEq>(
        &mut self,
        opts: &Options<'_, K>,
    ) -> Option<Token<'a>> {
        loop {
            if let Some(cluster) = self.cluster.take() {
                let mut chars = cluster.chars();
                if let Some(ch) = chars.next() {
                    return Some(self.short_token(ch, chars.as_str(), opts));
                }
            }

            let arg = self.next_raw()?;

            if self.delimited {
                return Some(Token::Operand(arg));
            }
            if arg == "--" {
                self.delimited = true;
                continue;
            }
            if arg == "-" {
                return Some(Token::Operand(arg));
            }

            if let Some(long) = arg.strip_prefix("--") {
                return Some(match long.split_once('=') {
                    Some((name, value)) => Token::Long {
                        name,
                        inline: Some(value),
                    },
                    None => Token::Long {
                        name: long,
                        inline: None,
                    },
                });
            }

            match arg.strip_prefix('-') {
                Some(shorts) => self.cluster = Some(shorts),
                None => return Some(Token::Operand(arg)),
            }
        }
    }

    /// Emit `ch` from a cluster.  An option that takes a value swallows the
    /// rest of the cluster as its inline value.
    fn short_token<K: Copy + PartialEq>(
        &mut self,
        ch: char,
        rest: &'a str,
        opts: &Options<'_, K>,
    ) -> Token<'a> {
        let takes_value = opts
            .find_short(ch)
            .is_some_and(|(_, spec)| spec.mode.takes_value());

        if takes_value && !rest.is_empty() {
            return Token::Short {
                ch,
                inline: Some(rest),
            };
        }

        self.cluster = if rest.is_empty() { None } else { Some(rest) };
        Token::Short { ch, inline: None }
    }

    /// Look at the next token without consuming it.  Only plain operands
    /// are reported: option tokens, operands beginning with `-`, and
    /// operands that sit behind a `--` delimiter all yield `None`.
    pub fn peek_operand<K: Copy + PartialEq>(
        &mut self,
        opts: &Options<'_, K>,
    ) -> Option<&'a str> {
        let saved = *self;
        let token = self.next_token(opts);
        let crossed_delimiter = self.delimited && !saved.delimited;
        *self = saved;

        match token {
            Some(Token::Operand(s)) if !crossed_delimiter && !s.starts_with('-') => Some(s),
            _ => None,
        }
    }
}
