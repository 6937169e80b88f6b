//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use argscan::testing::{bin_path, run_test, run_test_with_checker, TestPlan};
use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::process::Command;

fn echo_test(args: &[&str], expected_output: &str) {
    let str_args: Vec<String> = args.iter().map(|s| String::from(*s)).collect();

    run_test(TestPlan {
        cmd: String::from("echo"),
        args: str_args,
        stdin_data: String::new(),
        expected_out: String::from(expected_output),
        expected_err: String::from(""),
        expected_exit_code: 0,
    });
}

fn echo_error_test(args: &[&str], expected_err: &str) {
    let str_args: Vec<String> = args.iter().map(|s| String::from(*s)).collect();

    run_test(TestPlan {
        cmd: String::from("echo"),
        args: str_args,
        stdin_data: String::new(),
        expected_out: String::new(),
        expected_err: String::from(expected_err),
        expected_exit_code: 1,
    });
}

#[test]
fn test_echo_no_args() {
    // No arguments - only newline is written
    echo_test(&[], "\n");
}

#[test]
fn test_echo_basic() {
    echo_test(&["hello"], "hello\n");
    echo_test(&["big", "brown", "bear"], "big brown bear\n");
    echo_test(&["hello", "world"], "hello world\n");
}

#[test]
fn test_echo_suppress_newline_n() {
    echo_test(&["-n", "foo", "bar"], "foo bar");
    echo_test(&["-n", "hello"], "hello");
    echo_test(&["-n"], "");
    // options are collected wherever they appear
    echo_test(&["foo", "-n", "bar"], "foo bar");
}

#[test]
fn test_echo_escapes_off_by_default() {
    echo_test(&["hello\\nworld"], "hello\\nworld\n");
    echo_test(&["-E", "a\\tb"], "a\\tb\n");
    echo_test(&["-e", "-E", "a\\tb"], "a\\tb\n");
}

#[test]
fn test_echo_suppress_newline_c() {
    // \c suppresses newline and ignores following characters
    echo_test(&["-e", "foo", "bar\\c"], "foo bar");
    echo_test(&["-e", "hello\\c", "world"], "hello");
    echo_test(&["-e", "abc\\cdef"], "abc");
}

#[test]
fn test_echo_escape_chars() {
    echo_test(&["-e", "hello\\aworld"], "hello\x07world\n");
    echo_test(&["-e", "hello\\bworld"], "hello\x08world\n");
    echo_test(&["-e", "hello\\fworld"], "hello\x0cworld\n");
    echo_test(&["-e", "hello\\nworld"], "hello\nworld\n");
    echo_test(&["-e", "hello\\rworld"], "hello\rworld\n");
    echo_test(&["-e", "hello\\tworld"], "hello\tworld\n");
    echo_test(&["-e", "hello\\vworld"], "hello\x0bworld\n");
    echo_test(&["-e", "hello\\\\world"], "hello\\world\n");
}

#[test]
fn test_echo_octal_escapes() {
    echo_test(&["-e", "hello\\0world"], "hello\x00world\n");
    echo_test(&["-e", "\\07"], "\x07\n");
    echo_test(&["-e", "\\012"], "\n\n");
    echo_test(&["-e", "\\041"], "!\n");
    echo_test(&["-e", "\\0101"], "A\n");
    echo_test(&["-e", "\\0141"], "a\n");
    // a non-octal digit ends the sequence
    echo_test(&["-e", "\\018"], "\x018\n");
    echo_test(&["-e", "\\0789"], "\x0789\n");
}

#[test]
fn test_echo_octal_high_byte() {
    let plan = TestPlan {
        cmd: String::from("echo"),
        args: vec![String::from("-en"), String::from("\\0377")],
        stdin_data: String::new(),
        expected_out: String::new(),
        expected_err: String::new(),
        expected_exit_code: 0,
    };

    run_test_with_checker(plan, |_, output| {
        assert_eq!(output.stdout, vec![0xff]);
        assert!(output.status.success());
    });
}

#[test]
fn test_echo_unknown_escape() {
    echo_test(&["-e", "hello\\xworld"], "hello\\xworld\n");
    echo_test(&["-e", "\\q"], "\\q\n");
    echo_test(&["-e", "\\1"], "\\1\n");
}

#[test]
fn test_echo_trailing_backslash() {
    echo_test(&["-e", "hello\\"], "hello\\\n");
}

#[test]
fn test_echo_double_dash() {
    // "--" ends option scanning and is not printed
    echo_test(&["--"], "\n");
    echo_test(&["--", "-n", "hello"], "-n hello\n");
    echo_test(&["hello", "--", "-e", "world"], "hello -e world\n");
}

#[test]
fn test_echo_lone_dash() {
    echo_test(&["-"], "-\n");
    echo_test(&["a", "-", "b"], "a - b\n");
}

#[test]
fn test_echo_empty_string() {
    echo_test(&[""], "\n");
    echo_test(&["", ""], " \n");
}

#[test]
fn test_echo_invalid_option() {
    echo_error_test(
        &["-x", "hello"],
        "echo: invalid option -- 'x'\nTry 'echo --help' for more information.\n",
    );
    echo_error_test(
        &["--nope"],
        "echo: unrecognized option '--nope'\nTry 'echo --help' for more information.\n",
    );
    echo_error_test(
        &["--help=yes"],
        "echo: option '--help' doesn't allow an argument\nTry 'echo --help' for more information.\n",
    );
}

#[test]
fn test_echo_help() {
    let plan = TestPlan {
        cmd: String::from("echo"),
        args: vec![String::from("--help")],
        stdin_data: String::new(),
        expected_out: String::new(),
        expected_err: String::new(),
        expected_exit_code: 0,
    };

    run_test_with_checker(plan, |_, output| {
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with("Usage: echo [SHORT-OPTION]... [STRING]...\n"));
        assert!(stdout.contains("  -n\n        do not output the trailing newline\n"));
        assert!(stdout.contains("      --version\n"));
        assert!(output.status.success());
    });
}

#[test]
fn test_echo_version() {
    echo_test(
        &["--version"],
        &format!("echo (smallutils) {}\n", env!("CARGO_PKG_VERSION")),
    );
}

#[test]
fn test_echo_non_utf8_argument() {
    let output = Command::new(bin_path("echo"))
        .arg(OsStr::from_bytes(b"caf\xff"))
        .output()
        .expect("failed to run echo");

    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "echo: argument 'caf\u{FFFD}' is not valid UTF-8\n\
         Try 'echo --help' for more information.\n"
    );
    assert_eq!(output.status.code(), Some(1));
}
