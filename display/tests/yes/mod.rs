//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use argscan::testing::{bin_path, run_test, TestPlan};
use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};

// yes never exits on its own; read a few lines and kill it
fn yes_lines(args: &[&str], count: usize) -> Vec<String> {
    let mut child = Command::new(bin_path("yes"))
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn yes");

    let stdout = child.stdout.take().expect("no stdout");
    let lines: Vec<String> = BufReader::new(stdout)
        .lines()
        .take(count)
        .map(|line| line.expect("read failed"))
        .collect();

    child.kill().expect("failed to kill yes");
    child.wait().expect("failed to wait for yes");
    lines
}

#[test]
fn test_yes_default() {
    assert_eq!(yes_lines(&[], 3), vec!["y", "y", "y"]);
}

#[test]
fn test_yes_operands() {
    assert_eq!(yes_lines(&["hello"], 2), vec!["hello", "hello"]);
    assert_eq!(yes_lines(&["a", "b", "c"], 2), vec!["a b c", "a b c"]);
    assert_eq!(yes_lines(&["--", "-n"], 2), vec!["-n", "-n"]);
}

#[test]
fn test_yes_many_lines() {
    // more than one buffer's worth
    let lines = yes_lines(&["xyz"], 10_000);
    assert_eq!(lines.len(), 10_000);
    assert!(lines.iter().all(|line| line == "xyz"));
}

#[test]
fn test_yes_invalid_option() {
    run_test(TestPlan {
        cmd: String::from("yes"),
        args: vec![String::from("-q")],
        stdin_data: String::new(),
        expected_out: String::new(),
        expected_err: String::from(
            "yes: invalid option -- 'q'\nTry 'yes --help' for more information.\n",
        ),
        expected_exit_code: 1,
    });
}

#[test]
fn test_yes_version() {
    run_test(TestPlan {
        cmd: String::from("yes"),
        args: vec![String::from("--version")],
        stdin_data: String::new(),
        expected_out: format!("yes (smallutils) {}\n", env!("CARGO_PKG_VERSION")),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}
