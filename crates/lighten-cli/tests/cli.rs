//! End-to-end tests against the built `lighten` binary.

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lighten"))
        .args(args)
        .output()
        .expect("failed to spawn lighten binary")
}

fn stdout_line(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).trim_end().to_string()
}

#[test]
fn lightens_a_valid_color() {
    let out = run(&["#336699", "1.3"]);
    assert!(out.status.success());
    assert_eq!(stdout_line(&out), "#4784c1");
}

#[test]
fn accepts_color_without_prefix() {
    let out = run(&["336699", "10.0"]);
    assert!(out.status.success());
    assert_eq!(stdout_line(&out), "#ffffff");
}

#[test]
fn darkens_with_fractional_factor() {
    let out = run(&["#808080", "0.5"]);
    assert!(out.status.success());
    let line = stdout_line(&out);
    // Truncation can land either side of the exact half.
    assert!(line == "#404040" || line == "#3f3f3f", "got {line}");
}

#[test]
fn malformed_color_is_echoed_and_exits_zero() {
    let out = run(&["zzzzzz", "1.2"]);
    assert!(out.status.success());
    assert_eq!(stdout_line(&out), "#zzzzzz");
}

#[test]
fn degrade_path_is_quiet_on_stderr_by_default() {
    let out = Command::new(env!("CARGO_BIN_EXE_lighten"))
        .args(["zzzzzz", "1.2"])
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn lighten binary");
    assert!(out.status.success());
    assert!(out.stderr.is_empty(), "{}", String::from_utf8_lossy(&out.stderr));
}

#[test]
fn shorthand_color_is_echoed_unexpanded() {
    let out = run(&["#fff", "1.2"]);
    assert!(out.status.success());
    assert_eq!(stdout_line(&out), "#fff");
}

#[test]
fn no_arguments_prints_fallback_and_exits_one() {
    let out = run(&[]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout_line(&out), "#000000");
    assert!(!out.stderr.is_empty());
}

#[test]
fn one_argument_prints_fallback_and_exits_one() {
    let out = run(&["#336699"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout_line(&out), "#000000");
    assert!(!out.stderr.is_empty());
}

#[test]
fn extra_arguments_print_fallback_and_exit_one() {
    let out = run(&["#336699", "1.2", "surplus"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout_line(&out), "#000000");
}

#[test]
fn non_numeric_factor_echoes_color_and_exits_one() {
    let out = run(&["#336699", "abc"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout_line(&out), "#336699");
    assert!(String::from_utf8_lossy(&out.stderr).contains("factor"));
}
