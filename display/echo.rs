//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use argscan::{utf8_args, ArgMode, Args, Error, OptSpec, Options, EXIT_FAILURE, PROJECT_NAME};
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opt {
    NoNewline,
    Escapes,
    NoEscapes,
    Help,
    Version,
}

static OPTIONS: [OptSpec<Opt>; 5] = [
    OptSpec::short_only(
        Opt::NoNewline,
        'n',
        ArgMode::None,
        "do not output the trailing newline",
    ),
    OptSpec::short_only(
        Opt::Escapes,
        'e',
        ArgMode::None,
        "enable interpretation of backslash escapes",
    ),
    OptSpec::short_only(
        Opt::NoEscapes,
        'E',
        ArgMode::None,
        "disable interpretation of backslash escapes (default)",
    ),
    OptSpec::long_only(Opt::Help, "help", ArgMode::None, "display this help and exit"),
    OptSpec::long_only(
        Opt::Version,
        "version",
        ArgMode::None,
        "output version information and exit",
    ),
];

struct Config {
    newline: bool,
    escapes: bool,
}

enum Action {
    Echo(Config),
    Help,
    Version,
}

fn parse_args(args: &Args<'_, '_, Opt>) -> Result<Action, Error> {
    let mut config = Config {
        newline: true,
        escapes: false,
    };

    for opt in args.iter().options() {
        match opt?.id() {
            Opt::NoNewline => config.newline = false,
            Opt::Escapes => config.escapes = true,
            Opt::NoEscapes => config.escapes = false,
            Opt::Help => return Ok(Action::Help),
            Opt::Version => return Ok(Action::Version),
        }
    }

    Ok(Action::Echo(config))
}

/// Expand backslash escapes in `s`.  The flag is false when `\c` cut the
/// output short.
fn translate_str(s: &str) -> (Vec<u8>, bool) {
    let mut output = Vec::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    let mut utf8 = [0u8; 4];

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            output.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
            continue;
        }

        let Some(next) = chars.next() else {
            // trailing backslash
            output.push(b'\\');
            break;
        };

        match next {
            'a' => output.push(0x07),
            'b' => output.push(0x08),
            'c' => return (output, false),
            'f' => output.push(0x0c),
            'n' => output.push(b'\n'),
            'r' => output.push(b'\r'),
            't' => output.push(b'\t'),
            'v' => output.push(0x0b),
            '\\' => output.push(b'\\'),
            '0' => {
                // \0num, num is up to three octal digits
                let mut value: u32 = 0;
                for _ in 0..3 {
                    match chars.peek().and_then(|d| d.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                output.push((value & 0xff) as u8);
            }
            _ => {
                output.push(b'\\');
                output.extend_from_slice(next.encode_utf8(&mut utf8).as_bytes());
            }
        }
    }

    (output, true)
}

fn render(operands: &[&str], config: &Config) -> Vec<u8> {
    let text = operands.join(" ");

    let (mut output, keep_going) = if config.escapes {
        translate_str(&text)
    } else {
        (text.into_bytes(), true)
    };

    if keep_going && config.newline {
        output.push(b'\n');
    }
    output
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

    let config = match parse_args(&args) {
        Ok(Action::Echo(config)) => config,
        Ok(Action::Help) => {
            print!(
                "{}",
                args.help(
                    &gettext("[SHORT-OPTION]... [STRING]..."),
                    &gettext("Echo the STRING(s) to standard output.")
                )
            );
            return Ok(());
        }
        Ok(Action::Version) => {
            print!("{}", args.version(env!("CARGO_PKG_VERSION")));
            return Ok(());
        }
        Err(e) => {
            eprint!("{}", args.try_help(&e));
            std::process::exit(EXIT_FAILURE);
        }
    };

    let operands = args.iter().operands().collect::<Result<Vec<_>, _>>()?;

    io::stdout().write_all(&render(&operands, &config))?;

    Ok(())
}
