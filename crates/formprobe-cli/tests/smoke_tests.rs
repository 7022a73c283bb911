//! Smoke tests for the formprobe CLI
//!
//! These tests drive the built binary end to end against fixture files.

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command for the formprobe binary
fn formprobe() -> Command {
    Command::cargo_bin("formprobe").expect("formprobe binary should exist")
}

const SIGNUP: &str = r#"{
    "formId": "signup",
    "fields": [
        { "id": "email", "name": "email", "inputType": "email", "isVisible": true },
        { "name": "first_name", "placeholder": "First name", "isVisible": true },
        { "name": "last_name", "isVisible": true },
        { "elementKind": "select", "name": "country" },
        { "name": "favorite_color" }
    ]
}"#;

fn write_fixture(dir: &TempDir, name: &str, json: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, json).unwrap();
    path
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    formprobe()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    formprobe()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("fill"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn test_no_args_fails() {
    formprobe().assert().failure();
}

// ============================================================================
// Analyze
// ============================================================================

#[test]
fn test_analyze_text() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "signup.json", SIGNUP);

    formprobe()
        .arg("analyze")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total fields analyzed: 5"))
        .stdout(predicate::str::contains("Purpose detected: 4/5"))
        .stdout(predicate::str::contains("Purpose: email"));
}

#[test]
fn test_analyze_warns_about_unknown_fields() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "signup.json", SIGNUP);

    formprobe()
        .args(["--color", "never", "-v", "analyze"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "WARN 1 of 5 fields have no detected purpose: favorite_color",
        ));
}

#[test]
fn test_analyze_json() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "signup.json", SIGNUP);

    let output = formprobe()
        .args(["analyze", "--format", "json", "--top", "2"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["totalFields"], 5);
    assert_eq!(json["topFields"].as_array().unwrap().len(), 2);
    assert_eq!(json["topFields"][0]["purpose"], "email");
}

#[test]
fn test_analyze_missing_file() {
    formprobe()
        .args(["analyze", "/nonexistent/signup.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_analyze_empty_fixture() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "empty.json", "[]");

    formprobe()
        .arg("analyze")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no fields"));
}

// ============================================================================
// Fill
// ============================================================================

#[test]
fn test_fill_summary() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "signup.json", SIGNUP);

    formprobe()
        .args(["fill", "--runs", "2"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Fields filled: 8"))
        .stdout(predicate::str::contains("Fields tested: 10"))
        .stdout(predicate::str::contains("Overall accuracy: 80.0%"))
        .stdout(predicate::str::contains("Score: good"));
}

#[test]
fn test_fill_zero_runs() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "signup.json", SIGNUP);

    formprobe()
        .args(["fill", "--runs", "0"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--runs"));
}

// ============================================================================
// Validate
// ============================================================================

#[test]
fn test_validate_email() {
    formprobe()
        .args(["--color", "never", "validate", "email", "john@example.com"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Valid email format"));
}

#[test]
fn test_validate_invalid_phone() {
    formprobe()
        .args(["--color", "never", "validate", "phone", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("FAIL"));
}

#[test]
fn test_validate_url_quiet_success_is_silent() {
    formprobe()
        .args(["-q", "validate", "url", "https://example.com"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
