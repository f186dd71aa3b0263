//! # Command line application
//!
//! Runs the built binary on the textbook problems and checks what it prints and how it exits.
use std::io::Write;
use std::process::{Command, Output, Stdio};

use crate::textbook::get_test_file_path;

fn simplex() -> Command {
    Command::new(env!("CARGO_BIN_EXE_simplex"))
}

fn run_on_file(name: &str, arguments: &[&str]) -> Output {
    simplex()
        .arg(get_test_file_path(name))
        .args(arguments)
        .output()
        .unwrap()
}

fn run_on_input(program: &str) -> Output {
    let mut child = simplex()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(program.as_bytes()).unwrap();

    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn optimum() {
    let output = run_on_file("production", &[]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "objective value: 12\nx = 4\ny = 0\n");
}

#[test]
fn infeasible() {
    let output = run_on_file("infeasible", &[]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "problem is infeasible\n");
}

#[test]
fn unbounded() {
    let output = run_on_file("unbounded", &[]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "problem is unbounded\n");
}

#[test]
fn statistics() {
    let output = run_on_file("production", &["--statistics"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).lines().last().unwrap().starts_with("pivots: "));
}

#[test]
fn from_standard_input() {
    let output = run_on_input("x + y <= 4\nx + 3*y <= 6\n#maximize 3*x + 2*y\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "objective value: 12\nx = 4\ny = 0\n");
}

#[test]
fn malformed_input() {
    let output = run_on_input("x * y <= 1\n#maximize x\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());

    let message = stderr(&output);
    assert_eq!(message.matches("Product of two variables").count(), 1);
    assert!(message.contains("line 1, column 3"));
}

#[test]
fn missing_file() {
    let output = simplex().arg("this/file/does/not/exist.lp").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("this/file/does/not/exist.lp"));
}

#[test]
fn iteration_limit() {
    let output = run_on_file("beale", &["--pivot-rule", "largest-coefficient", "--iteration-limit", "10"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("no result after 10 pivots"));

    let output = run_on_file("beale", &["--pivot-rule", "bland"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("objective value: 1\n"));
}
