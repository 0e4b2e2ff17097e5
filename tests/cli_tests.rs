//! Integration tests for the crashtest CLI surface.
//!
//! These only exercise argument parsing and version output, everything that
//! runs without a multipass installation on the test machine. The pipeline
//! itself is covered by the service tests against backend doubles.

#![allow(clippy::expect_used, deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn crashtest() -> Command {
    Command::cargo_bin("crashtest").expect("crashtest binary should exist")
}

#[test]
fn version_flag_shows_name_and_version() {
    crashtest()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("crashtest"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn short_version_flag_works() {
    crashtest()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_required_arguments_fail_with_usage() {
    // clap reports missing required args on stderr and exits 2
    crashtest()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--instance-name"))
        .stderr(predicate::str::contains("--project"));
}

#[test]
fn help_lists_the_flags() {
    crashtest()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--install-dependencies"))
        .stdout(predicate::str::contains("--delete"));
}

#[test]
fn project_flag_requires_a_value() {
    crashtest()
        .args(["-i", "box", "-p"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--project"));
}
