//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use argscan::io::error_string;
use argscan::{utf8_args, ArgMode, OptSpec, Options, BUFSZ, EXIT_FAILURE, PROJECT_NAME};
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use std::io::{self, Write};

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

/// Whole lines of `line`, repeated to fill roughly one buffer.
fn fill_chunk(line: &str) -> Vec<u8> {
    let count = (BUFSZ / line.len()).max(1);
    line.repeat(count).into_bytes()
}

fn write_forever(out: &mut impl Write, chunk: &[u8]) -> io::Error {
    loop {
        if let Err(e) = out.write_all(chunk) {
            return e;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;

    let argv = match utf8_args(std::env::args_os()) {
        Ok(argv) => argv,
        Err(msg) => {
            eprint!("{}", msg);
            std::process::exit(EXIT_FAILURE);
        }
    };
    let opts = Options::new(&OPTIONS)?;
    let args = opts.args(&argv)?;

    for opt in args.iter().options() {
        match opt {
            Ok(opt) => match opt.id() {
                Opt::Help => {
                    print!(
                        "{}",
                        args.help(
                            &gettext("[STRING]..."),
                            &gettext("Repeatedly output a line with all specified STRING(s), or 'y'.")
                        )
                    );
                    return Ok(());
                }
                Opt::Version => {
                    print!("{}", args.version(env!("CARGO_PKG_VERSION")));
                    return Ok(());
                }
            },
            Err(e) => {
                eprint!("{}", args.try_help(&e));
                std::process::exit(EXIT_FAILURE);
            }
        }
    }

    let operands = args.iter().operands().collect::<Result<Vec<_>, _>>()?;
    let mut line = if operands.is_empty() {
        String::from("y")
    } else {
        operands.join(" ")
    };
    line.push('\n');

    let chunk = fill_chunk(&line);
    let e = write_forever(&mut io::stdout().lock(), &chunk);
    if e.kind() == io::ErrorKind::BrokenPipe {
        return Ok(());
    }

    eprintln!(
        "{}: {}: {}",
        args.program(),
        gettext("standard output"),
        error_string(&e)
    );
    std::process::exit(EXIT_FAILURE)
}
