//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use argscan::io::error_string;
use argscan::validate::{dir_operand, DirPathError};
use argscan::{utf8_args, ArgMode, Args, Error, OptSpec, Options, EXIT_FAILURE, PROJECT_NAME};
use errno::Errno;
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opt {
    Parents,
    Verbose,
    Help,
    Version,
}

static OPTIONS: [OptSpec<Opt>; 4] = [
    OptSpec::flag(
        Opt::Parents,
        'p',
        "parents",
        "remove DIRECTORY and its ancestors; e.g., 'rmdir -p a/b' is similar to 'rmdir a/b a'",
    ),
    OptSpec::flag(
        Opt::Verbose,
        'v',
        "verbose",
        "output a diagnostic for every directory processed",
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
    parents: bool,
    verbose: bool,
}

enum Action {
    Remove(Config),
    Help,
    Version,
}

fn parse_args(args: &Args<'_, '_, Opt>) -> Result<Action, Error> {
    let mut config = Config {
        parents: false,
        verbose: false,
    };

    for opt in args.iter().options() {
        match opt?.id() {
            Opt::Parents => config.parents = true,
            Opt::Verbose => config.verbose = true,
            Opt::Help => return Ok(Action::Help),
            Opt::Version => return Ok(Action::Version),
        }
    }

    Ok(Action::Remove(config))
}

fn refusal_reason(e: DirPathError) -> String {
    match e {
        DirPathError::Empty => Errno(libc::ENOENT).to_string(),
        DirPathError::Dot | DirPathError::DotDot => Errno(libc::EINVAL).to_string(),
        DirPathError::TrailingSlash => gettext("trailing slash not permitted"),
    }
}

fn report_failure(program: &str, dirname: &str, reason: &str) {
    eprintln!(
        "{}: {} '{}': {}",
        program,
        gettext("failed to remove"),
        dirname,
        reason
    );
}

/// Remove `dirname`, and with `-p` each of its parents in turn.  Returns
/// false if anything could not be removed.
fn remove_dir(program: &str, dirname: &str, config: &Config) -> bool {
    if let Err(e) = dir_operand(dirname) {
        report_failure(program, dirname, &refusal_reason(e));
        return false;
    }

    let mut path = Path::new(dirname);
    loop {
        if config.verbose {
            println!(
                "{}: {}, '{}'",
                program,
                gettext("removing directory"),
                path.display()
            );
        }

        if let Err(e) = fs::remove_dir(path) {
            report_failure(program, &path.display().to_string(), &error_string(&e));
            return false;
        }

        if !config.parents {
            return true;
        }

        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && parent != Path::new("/") => {
                path = parent;
            }
            _ => return true,
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

    let config = match parse_args(&args) {
        Ok(Action::Remove(config)) => config,
        Ok(Action::Help) => {
            print!(
                "{}",
                args.help(
                    &gettext("[OPTION]... DIRECTORY..."),
                    &gettext("Remove the DIRECTORY(ies), if they are empty.")
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

    let dirs = args.iter().operands().collect::<Result<Vec<_>, _>>()?;
    if dirs.is_empty() {
        eprint!("{}", args.try_help(&gettext("missing operand")));
        std::process::exit(EXIT_FAILURE);
    }

    let mut exit_code = 0;

    for dirname in dirs {
        if !remove_dir(args.program(), dirname, &config) {
            exit_code = EXIT_FAILURE;
        }
    }

    std::process::exit(exit_code)
}
