//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Command line scanning shared by the smallutils binaries.
//!
//! ```ignore
//! static OPTIONS: [OptSpec<Opt>; 2] = [
//!     OptSpec::flag(Opt::Parents, 'p', "parents", "remove ancestors too"),
//!     OptSpec::long_only(Opt::Help, "help", ArgMode::None, "display this help and exit"),
//! ];
//!
//! let argv = utf8_args(std::env::args_os())?;
//! let opts = Options::new(&OPTIONS)?;
//! let args = opts.args(&argv)?;
//! for opt in args.iter().options() {
//!     match opt?.id() { /* ... */ }
//! }
//! for dir in args.iter().operands() { /* ... */ }
//! ```

pub mod error;
pub mod help;
pub mod io;
pub mod iter;
pub mod option;
pub mod scanner;
pub mod testing;
pub mod validate;

pub use error::{Error, OptName, SpecError};
pub use iter::{
    utf8_args, Args, Iter, OperandIter, OptionIter, ParsedArg, ParsedOption, ValueSource,
};
pub use option::{ArgMode, OptSpec, Options};
pub use scanner::{Scanner, Token};

pub const PROJECT_NAME: &'static str = "smallutils";

pub const BUFSZ: usize = 8 * 1024;

/// Exit status of a utility that failed.
pub const EXIT_FAILURE: i32 = 1;
