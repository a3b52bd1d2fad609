//! Integration tests for configuration layering.
//!
//! Tests the priority chain: hardcoded defaults < XDG config < project config < CLI args

#![allow(clippy::unwrap_used)] // Test code uses unwrap for brevity
#![allow(deprecated)] // cargo_bin deprecation warning

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

/// Get path to test fixtures
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("face-trigger-adapters/tests/fixtures")
}

fn project_with_config(contents: &str) -> tempfile::TempDir {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join(".face-trigger.toml"), contents).unwrap();
    temp_dir
}

#[test]
fn test_project_config_applies_format() {
    let temp_dir = project_with_config(
        r"
[output]
format = 'json'
",
    );

    let mut cmd = Command::cargo_bin("face-trigger").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg(fixtures_dir().join("clean.jsonl"));

    cmd.assert()
        .code(0)
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn test_cli_overrides_project_config() {
    let temp_dir = project_with_config(
        r"
[output]
format = 'json'
",
    );

    let mut cmd = Command::cargo_bin("face-trigger").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("--format")
        .arg("jsonl")
        .arg(fixtures_dir().join("clean.jsonl"));

    cmd.assert()
        .code(0)
        .stdout(predicate::str::starts_with("{"));
}

#[test]
fn test_project_config_sets_threshold() {
    // Blink peaks at 0.9 in the fixture
    let temp_dir = project_with_config(
        r"
[blink]
threshold = 0.95
",
    );

    let mut cmd = Command::cargo_bin("face-trigger").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg(fixtures_dir().join("clean.jsonl"));

    cmd.assert()
        .code(0)
        .stdout(predicate::str::contains("\"condition\":\"blink\"").not());
}

#[test]
fn test_cli_threshold_overrides_project_config() {
    let temp_dir = project_with_config(
        r"
[blink]
threshold = 0.95
",
    );

    let mut cmd = Command::cargo_bin("face-trigger").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("--blink-threshold")
        .arg("0.5")
        .arg(fixtures_dir().join("clean.jsonl"));

    cmd.assert()
        .code(0)
        .stdout(predicate::str::contains("\"condition\":\"blink\""));
}

#[test]
fn test_config_disables_evaluator() {
    let temp_dir = project_with_config(
        r"
[jaw_open]
enabled = false
",
    );

    let mut cmd = Command::cargo_bin("face-trigger").unwrap();
    cmd.current_dir(temp_dir.path()).arg("evaluators");

    cmd.assert()
        .code(0)
        .stdout(predicate::str::contains("jaw_open").not())
        .stdout(predicate::str::contains("jaw_left"));
}

#[test]
fn test_config_found_in_parent_directory() {
    let temp_dir = project_with_config(
        r"
[smile]
threshold = 0.4
",
    );
    let nested = temp_dir.path().join("sessions/today");
    fs::create_dir_all(&nested).unwrap();

    let mut cmd = Command::cargo_bin("face-trigger").unwrap();
    cmd.current_dir(&nested).arg("evaluators");

    cmd.assert()
        .code(0)
        .stdout(predicate::str::contains("0.40"));
}

#[test]
fn test_invalid_config_value_warns() {
    let temp_dir = project_with_config(
        r"
[squint]
threshold = 1.5
",
    );

    let mut cmd = Command::cargo_bin("face-trigger").unwrap();
    cmd.current_dir(temp_dir.path()).arg("evaluators");

    cmd.assert()
        .stderr(predicate::str::contains("squint.threshold must be 0.0-1.0"));
}

#[test]
fn test_malformed_config_falls_back_to_defaults() {
    let temp_dir = project_with_config("[blink\nthreshold = 0.5\n");

    let mut cmd = Command::cargo_bin("face-trigger").unwrap();
    cmd.current_dir(temp_dir.path()).arg("evaluators");

    cmd.assert()
        .code(0)
        .stdout(predicate::str::contains("0.80"))
        .stderr(predicate::str::contains("Failed to parse config file"));
}
