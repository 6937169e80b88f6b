//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use argscan::testing::{run_test, run_test_base, run_test_with_checker, TestPlan};
use std::process::Output;

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;

fn run_hostname_test(args: Vec<&str>, expected_exit_code: i32, check_fn: fn(&TestPlan, &Output)) {
    let plan = TestPlan {
        cmd: "hostname".to_string(),
        args: args.iter().map(|&s| s.to_string()).collect(),
        stdin_data: String::new(),
        expected_out: String::new(),
        expected_err: String::new(),
        expected_exit_code,
    };
    run_test_with_checker(plan, check_fn);
}

fn get_hostname_output(args: &[&str]) -> String {
    let str_args: Vec<String> = args.iter().map(|&s| s.to_string()).collect();
    let output = run_test_base("hostname", &str_args, &[]);
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_hostname_prints_one_line() {
    run_hostname_test(vec![], EXIT_SUCCESS, |plan, output| {
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.ends_with('\n'));
        assert_eq!(stdout.lines().count(), 1);
        assert!(!stdout.trim_end().is_empty());
        assert!(output.stderr.is_empty());
        assert_eq!(output.status.code(), Some(plan.expected_exit_code));
    });
}

#[test]
fn test_hostname_short() {
    let full = get_hostname_output(&[]);
    let short = get_hostname_output(&["-s"]);
    let long_form = get_hostname_output(&["--short"]);

    assert_eq!(short, long_form);
    assert!(!short.trim_end().contains('.'));
    assert!(full.starts_with(short.trim_end()));
}

#[test]
fn test_hostname_after_delimiter() {
    // "--" alone leaves no operand behind
    assert_eq!(get_hostname_output(&["--"]), get_hostname_output(&[]));
}

#[test]
fn test_hostname_extra_operand() {
    run_test(TestPlan {
        cmd: String::from("hostname"),
        args: vec![String::from("newname")],
        stdin_data: String::new(),
        expected_out: String::new(),
        expected_err: String::from(
            "hostname: extra operand 'newname'\nTry 'hostname --help' for more information.\n",
        ),
        expected_exit_code: EXIT_FAILURE,
    });
}

#[test]
fn test_hostname_invalid_option() {
    run_test(TestPlan {
        cmd: String::from("hostname"),
        args: vec![String::from("--shrot")],
        stdin_data: String::new(),
        expected_out: String::new(),
        expected_err: String::from(
            "hostname: unrecognized option '--shrot'\nTry 'hostname --help' for more information.\n",
        ),
        expected_exit_code: EXIT_FAILURE,
    });
}

#[test]
fn test_hostname_help() {
    run_hostname_test(vec!["--help"], EXIT_SUCCESS, |_, output| {
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with("Usage: hostname [OPTION]...\n"));
        assert!(stdout.contains("  -s, --short\n"));
        assert_eq!(output.status.code(), Some(EXIT_SUCCESS));
    });
}
