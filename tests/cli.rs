extern crate tempfile;

use std::fs;
use std::process::{Command, Output};

/// Run `program` in a fresh directory, with `input` as the contents of the
/// `input` file, or with no such file at all.
fn run(program: &str, input: Option<&str>) -> Output {
    let dir = tempfile::tempdir().unwrap();
    if let Some(text) = input {
        fs::write(dir.path().join("input"), text).unwrap();
    }
    Command::new(program)
        .current_dir(dir.path())
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).unwrap()
}

const TOTAL: &str = env!("CARGO_BIN_EXE_total");
const FIRST_REPEAT: &str = env!("CARGO_BIN_EXE_first-repeat");

#[test]
fn total_prints_sum() {
    let output = run(TOTAL, Some("+1\n-2\n+3\n"));
    assert!(output.status.success());
    assert_eq!(stdout(&output), "2\n");
}

#[test]
fn total_of_zero() {
    let output = run(TOTAL, Some("+0\n"));
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0\n");
}

#[test]
fn total_of_empty_file() {
    let output = run(TOTAL, Some(""));
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0\n");
}

#[test]
fn total_tolerates_line_endings() {
    let output = run(TOTAL, Some("+10\r\n-3 \r\n"));
    assert!(output.status.success());
    assert_eq!(stdout(&output), "7\n");
}

#[test]
fn total_rejects_bad_line() {
    let output = run(TOTAL, Some("+1\n+ 2\n"));
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("\"+ 2\""), "stderr: {}", stderr);
}

#[test]
fn total_without_input_file() {
    let output = run(TOTAL, None);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
}

#[test]
fn first_repeat_found() {
    let output = run(FIRST_REPEAT, Some("+3\n+3\n+4\n-2\n-4\n"));
    assert!(output.status.success());
    assert_eq!(stdout(&output), "10\n");
}

#[test]
fn first_repeat_of_empty_file() {
    let output = run(FIRST_REPEAT, Some(""));
    assert!(output.status.success());
    assert_eq!(stdout(&output), "never found a repeating value\n");
}

#[test]
fn first_repeat_without_input_file() {
    let output = run(FIRST_REPEAT, None);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
}
