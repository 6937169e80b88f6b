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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opt {
    Short,
    Help,
    Version,
}

static OPTIONS: [OptSpec<Opt>; 3] = [
    OptSpec::flag(Opt::Short, 's', "short", "print the host name up to the first '.'"),
    OptSpec::long_only(Opt::Help, "help", ArgMode::None, "display this help and exit"),
    OptSpec::long_only(
        Opt::Version,
        "version",
        ArgMode::None,
        "output version information and exit",
    ),
];

enum Action {
    Print { short: bool },
    Help,
    Version,
}

enum Failure {
    Usage(String),
    Args(Error),
}

fn parse_args(args: &Args<'_, '_, Opt>) -> Result<Action, Failure> {
    let mut short = false;

    for opt in args.iter().options() {
        match opt.map_err(Failure::Args)?.id() {
            Opt::Short => short = true,
            Opt::Help => return Ok(Action::Help),
            Opt::Version => return Ok(Action::Version),
        }
    }

    if let Some(operand) = args.iter().next_operand().map_err(Failure::Args)? {
        return Err(Failure::Usage(format!(
            "{} '{}'",
            gettext("extra operand"),
            operand
        )));
    }

    Ok(Action::Print { short })
}

fn gethostname() -> Result<String, errno::Errno> {
    // HOST_NAME_MAX plus the terminating NUL
    let mut buf = vec![0u8; 256];
    let ret = unsafe { libc::gethostname(buf.as_mut_ptr() as *mut libc::c_char, buf.len()) };
    if ret != 0 {
        return Err(errno::errno());
    }

    let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    buf.truncate(len);
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn short_name(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
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

    let short = match parse_args(&args) {
        Ok(Action::Print { short }) => short,
        Ok(Action::Help) => {
            print!(
                "{}",
                args.help(
                    &gettext("[OPTION]..."),
                    &gettext("Print the name of the current host system.")
                )
            );
            return Ok(());
        }
        Ok(Action::Version) => {
            print!("{}", args.version(env!("CARGO_PKG_VERSION")));
            return Ok(());
        }
        Err(Failure::Usage(msg)) => {
            eprint!("{}", args.try_help(&msg));
            std::process::exit(EXIT_FAILURE);
        }
        Err(Failure::Args(e)) => {
            eprint!("{}", args.try_help(&e));
            std::process::exit(EXIT_FAILURE);
        }
    };

    let mut exit_code = 0;

    match gethostname() {
        Ok(name) if short => println!("{}", short_name(&name)),
        Ok(name) => println!("{}", name),
        Err(e) => {
            eprintln!("{}: {}", args.program(), e);
            exit_code = EXIT_FAILURE;
        }
    }

    std::process::exit(exit_code)
}
