//! Output format validation tests.
//!
//! Tests JSON/JSONL event output and required field presence.

#![allow(clippy::unwrap_used)]
#![allow(deprecated)] // cargo_bin deprecation

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("face-trigger-adapters/tests/fixtures")
}

fn replay(args: &[&str]) -> (String, tempfile::TempDir) {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("face-trigger").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(args)
        .arg(fixtures_dir().join("clean.jsonl"));

    let output = cmd.output().unwrap();
    (String::from_utf8_lossy(&output.stdout).into_owned(), temp_dir)
}

// === JSONL Format Tests ===

#[test]
fn test_jsonl_format_single_object_per_line() {
    let (stdout, _dir) = replay(&["--format", "jsonl"]);

    for line in stdout.lines() {
        let value: Value = serde_json::from_str(line)
            .unwrap_or_else(|e| panic!("Each JSONL line should be valid JSON: {line}: {e}"));
        assert!(value.is_object(), "JSONL line should be an object");
    }
}

#[test]
fn test_jsonl_event_sequence() {
    let (stdout, _dir) = replay(&[]);
    let events: Vec<Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    let summary: Vec<(u64, &str, &str)> = events
        .iter()
        .map(|e| {
            (
                e["frame"].as_u64().unwrap(),
                e["condition"].as_str().unwrap(),
                e["event"].as_str().unwrap(),
            )
        })
        .collect();

    assert_eq!(
        summary,
        [
            (1, "blink", "did_change"),
            (1, "blink", "triggered"),
            (2, "jaw_open", "did_change"),
            (2, "jaw_open", "triggered"),
            (3, "jaw_open", "did_change"),
        ]
    );
}

#[test]
fn test_did_change_carries_active_flag() {
    let (stdout, _dir) = replay(&[]);

    for line in stdout.lines() {
        let value: Value = serde_json::from_str(line).unwrap();
        match value["event"].as_str().unwrap() {
            "did_change" => assert!(value["active"].is_boolean()),
            "triggered" => assert!(value.get("active").is_none()),
            other => panic!("unexpected event kind {other}"),
        }
    }
}

// === JSON Array Tests ===

#[test]
fn test_json_format_is_array() {
    let (stdout, _dir) = replay(&["--format", "json"]);

    let value: Value = serde_json::from_str(&stdout).unwrap();
    let events = value.as_array().unwrap();
    assert_eq!(events.len(), 5);
    assert_eq!(events[4]["active"], false);
}

#[test]
fn test_json_pretty_output() {
    let (stdout, _dir) = replay(&["--format", "json", "--pretty"]);

    assert!(stdout.lines().count() > 1, "pretty output spans lines");
    let value: Value = serde_json::from_str(&stdout).unwrap();
    assert!(value.is_array());
}

#[test]
fn test_json_empty_when_no_events() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("face-trigger").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["--format", "json"])
        .write_stdin("{\"jawOpen\": 0.1}\n");

    cmd.assert().code(0).stdout("[]\n");
}

#[test]
fn test_invalid_format_rejected() {
    let mut cmd = Command::cargo_bin("face-trigger").unwrap();
    cmd.arg("--format")
        .arg("xml")
        .arg(fixtures_dir().join("clean.jsonl"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("json").or(predicate::str::contains("jsonl")));
}
