//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use argscan::{ArgMode, OptSpec, Options, PROJECT_NAME};
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opt {
    Help,
    Version,
}

static OPTIONS: [OptSpec<Opt>; 2] = [
    OptSpec::long_only(Opt::Help, "help", ArgMode::None, "display this help and exit"),
    OptSpec::long_only(
        Opt::Version,
        "version",
        ArgMode::None,
        "output version information and exit",
    ),
];

// Only a lone --help or --version is honored; every other argument,
// including unknown options, is ignored and the exit status stays 0.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;

    let argv: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let opts = Options::new(&OPTIONS)?;
    let args = opts.args(&argv)?;

    if args.raw().len() != 1 {
        return Ok(());
    }

    if let Ok(Some(opt)) = args.iter().next_option() {
        match opt.id() {
            Opt::Help => print!(
                "{}",
                args.help(
                    &gettext("[ignored command line arguments]"),
                    &gettext("Exit with a status code indicating success.")
                )
            ),
            Opt::Version => print!("{}", args.version(env!("CARGO_PKG_VERSION"))),
        }
    }

    Ok(())
}
