//! Integration tests driving the optreg-demo binary end to end.

use std::path::PathBuf;
use std::process::{Command, Output};

fn demo_bin() -> PathBuf {
    // `cargo test` places the binary in the target directory.
    PathBuf::from(env!("CARGO_BIN_EXE_optreg-demo"))
}

fn run_demo(args: &[&str]) -> Output {
    Command::new(demo_bin())
        .args(args)
        .output()
        .expect("failed to run optreg-demo")
}

#[test]
fn test_help_flag_prints_listing() {
    let output = run_demo(&["--help"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Available command line options:"));
    assert!(stdout.contains(" -w, --width: Window width in pixels"));
    assert!(stdout.contains(" --help: Show this help listing"));
}

#[test]
fn test_defaults_without_arguments() {
    let output = run_demo(&[]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("width = 1280"));
    assert!(stdout.contains("height = 720"));
    assert!(stdout.contains("fullscreen = false"));
    assert!(stdout.contains("gpu = auto"));
}

#[test]
fn test_values_and_flags_are_resolved() {
    let output = run_demo(&["-w", "1920", "--height", "1080", "--fullscreen", "-g", "discrete"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("width = 1920"));
    assert!(stdout.contains("height = 1080"));
    assert!(stdout.contains("fullscreen = true"));
    assert!(stdout.contains("gpu = discrete"));
}

#[test]
fn test_missing_value_falls_back_to_help() {
    let output = run_demo(&["-w"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Available command line options:"));
    assert!(!stdout.contains("width ="));
}

#[test]
fn test_malformed_integer_degrades_to_default() {
    let output = run_demo(&["-w", "abc", "--height", "-1"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("width = 1280"));
    assert!(stdout.contains("height = 720"));
}
