//! Focused CLI argument parsing tests.
//!
//! Tests that verify command-line argument parsing works correctly without
//! touching any project files.

#![allow(deprecated)] // Command::cargo_bin is deprecated but replacement requires newer assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn version_command_succeeds() {
    Command::cargo_bin("plantel")
        .unwrap()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("plantel"));
}

#[test]
fn version_flag_shows_version() {
    Command::cargo_bin("plantel")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("plantel"));
}

#[test]
fn help_flag_shows_usage() {
    Command::cargo_bin("plantel")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn check_requires_three_arguments() {
    Command::cargo_bin("plantel")
        .unwrap()
        .args(["check", "admin", "escuela"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn entities_requires_role() {
    Command::cargo_bin("plantel")
        .unwrap()
        .arg("entities")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn unknown_subcommand_fails() {
    Command::cargo_bin("plantel")
        .unwrap()
        .arg("grant")
        .assert()
        .failure();
}
