//! Corruption recovery tests for wellp.
//!
//! These tests verify the system can handle:
//! - Corrupted program history
//! - Corrupted wellbeing log lines
//! - Missing files

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write as IoWrite;
use std::path::Path;
use tempfile::TempDir;

fn cli(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("wellp"));
    cmd.env("XDG_CONFIG_HOME", home.join("config"));
    cmd
}

fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

const VALID_LOG: &str = r#"{"id":"7f1c1b36-1d7a-4a43-9e0a-2b1f1a2f3c4d","date":"2026-01-05T08:00:00Z","sleep_quality":2,"energy_level":2,"mood":"tired","muscle_pain":[],"notes":null}"#;

#[test]
fn test_corrupted_history_file() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    let history_path = data_dir.join("program_history.json");
    fs::write(&history_path, "{ invalid json }}}}").expect("Failed to write corrupted history");

    cli(data_dir)
        .arg("generate")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success();

    // Corrupt history is replaced by a fresh one holding the new program
    let contents = fs::read_to_string(&history_path).unwrap();
    let history: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(history["programs"].as_array().unwrap().len(), 1);
}

#[test]
fn test_corrupted_history_shown_as_empty() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();
    fs::write(data_dir.join("program_history.json"), "not json").unwrap();

    cli(data_dir)
        .arg("history")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No programs saved yet."));
}

#[test]
fn test_corrupted_log_lines_skipped() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();
    fs::create_dir_all(data_dir.join("logs")).unwrap();

    let log_path = data_dir.join("logs/wellbeing.jsonl");
    let mut file = fs::File::create(&log_path).unwrap();
    writeln!(file, "{{ invalid json }}").unwrap();
    writeln!(file, "{}", VALID_LOG).unwrap();
    writeln!(file, "{{ \"partial\": ").unwrap();

    cli(data_dir)
        .arg("stats")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total logs:      1"));
}

#[test]
fn test_generate_uses_valid_entry_despite_corrupt_lines() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();
    fs::create_dir_all(data_dir.join("logs")).unwrap();

    let log_path = data_dir.join("logs/wellbeing.jsonl");
    fs::write(&log_path, format!("garbage\n{}\n", VALID_LOG)).unwrap();

    let output = cli(data_dir)
        .args(["generate", "--json", "--dry-run"])
        .arg("--data-dir")
        .arg(data_dir)
        .output()
        .unwrap();
    assert!(output.status.success());

    let program: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    // Poor sleep and low energy: 5 - 2 - 2
    assert_eq!(program["recommendations"]["suggested_rpe"], 1);
}

#[test]
fn test_missing_data_directory_created() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().join("nested/deeper");

    cli(temp_dir.path())
        .args(["log", "--sleep", "3", "--energy", "3", "--mood", "ok"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    assert!(data_dir.join("logs/wellbeing.jsonl").exists());
}

#[test]
fn test_empty_log_file() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();
    fs::create_dir_all(data_dir.join("logs")).unwrap();
    fs::write(data_dir.join("logs/wellbeing.jsonl"), "").unwrap();

    cli(data_dir)
        .arg("stats")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total logs:      0"));
}
