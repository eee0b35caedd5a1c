//! CLI integration tests.
//!
//! These invoke the compiled binary and only exercise paths that need no
//! network access: help output, argument validation, and config errors.

use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_username-check"))
}

#[test]
fn help_mentions_core_flags() {
    let output = bin().arg("--help").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--platforms-file"));
    assert!(stdout.contains("--json"));
    assert!(stdout.contains("--timeout"));
    assert!(stdout.contains("--concurrency"));
}

#[test]
fn no_username_is_an_error() {
    let output = bin().output().unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("at least one username"));
}

#[test]
fn json_and_pretty_conflict() {
    let output = bin().args(["alice", "--json", "--pretty"]).output().unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--json and --pretty"));
}

#[test]
fn out_of_range_concurrency_is_rejected() {
    let output = bin().args(["alice", "-c", "500"]).output().unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("between 1 and 100"));
}

#[test]
fn invalid_timeout_is_rejected() {
    let output = bin().args(["alice", "-t", "soon"]).output().unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid timeout"));
}

#[test]
fn missing_explicit_config_file_is_fatal() {
    let output = bin()
        .args(["alice", "--config", "/nonexistent/.username-check.toml"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load config file"));
}

#[test]
fn missing_platforms_file_still_exits_zero_with_sentinel() {
    // The engine encodes a source failure as a sentinel result instead of
    // terminating; the CLI reports it and exits 0.
    let output = bin()
        .args(["alice", "--json", "-f", "/nonexistent/socials.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let results: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = results.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["platform"], "Error");
    assert_eq!(entries[0]["exists"], false);
    assert!(entries[0]["error"].as_str().unwrap().contains("socials.txt"));
}
