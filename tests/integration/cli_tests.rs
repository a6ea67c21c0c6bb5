//! Integration tests for the CLI surface: usage errors, help, and the
//! fail-fast configuration path. No test here touches the network.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

const VERBS: [&str; 7] = [
    "deploy",
    "start",
    "stop",
    "restart",
    "status",
    "log",
    "fetch-log",
];

fn aladdinctl() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("aladdinctl"));
    cmd.env("NO_COLOR", "1");
    cmd
}

// --- Usage errors ---

#[test]
fn test_no_verb_fails_and_lists_every_verb() {
    let assert = aladdinctl().assert().failure();
    let output = assert.get_output();
    let stderr = String::from_utf8_lossy(&output.stderr);
    for verb in VERBS {
        assert!(stderr.contains(verb), "usage should list {verb}: {stderr}");
    }
}

#[test]
fn test_unknown_verb_fails_with_usage() {
    aladdinctl()
        .arg("redeploy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

// --- Help and version ---

#[test]
fn test_help_flag_shows_usage_and_commands() {
    aladdinctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_help_lists_every_verb() {
    let assert = aladdinctl().arg("--help").assert().success();
    let output = assert.get_output();
    let stdout = String::from_utf8_lossy(&output.stdout);
    for verb in VERBS {
        assert!(stdout.contains(verb), "help should list {verb}");
    }
}

#[test]
fn test_version_flag_shows_version() {
    aladdinctl()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("aladdinctl"));
}

// --- Configuration fail-fast ---

#[test]
fn test_unreadable_config_file_aborts() {
    aladdinctl()
        .arg("status")
        .env("ALADDINCTL_CONFIG", "/nonexistent/aladdinctl.yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn test_missing_host_aborts_before_any_remote_action() {
    // No config file anywhere: temp cwd, temp HOME, no explicit override.
    // The built-in defaults have no host, so validation must reject them.
    let dir = tempfile::TempDir::new().expect("tempdir");
    aladdinctl()
        .arg("status")
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("ALADDINCTL_CONFIG")
        .assert()
        .failure()
        .stderr(predicate::str::contains("host"));
}

#[test]
fn test_invalid_config_yaml_aborts() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    let path = dir.path().join("broken.yaml");
    std::fs::write(&path, "host: [not, a, string\n").expect("write");
    aladdinctl()
        .arg("status")
        .env("ALADDINCTL_CONFIG", &path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot parse"));
}
