//! Binary tests for `split-confirm`
//!
//! Only paths that never open the terminal modal are exercised here.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn command(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("split-confirm").expect("binary should build");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

#[test]
fn test_clean_stack_prints_proceed() {
    let dir = TempDir::new().unwrap();
    let stack = dir.path().join("stack.json");
    fs::write(
        &stack,
        r#"{
            "commits": [
                { "hash": "a1", "title": "Add parser" },
                { "hash": "b2", "title": "Use parser", "fields_being_edited": { "Title": false } }
            ]
        }"#,
    )
    .unwrap();

    command(&dir)
        .arg("--state")
        .arg(&stack)
        .assert()
        .success()
        .stdout(predicate::str::diff("proceed\n"));

    assert!(dir.path().join("logs").join("split-confirm.log").exists());
}

fn clean_stack(dir: &TempDir) -> std::path::PathBuf {
    let stack = dir.path().join("stack.json");
    fs::write(&stack, r#"{ "commits": [{ "hash": "a1", "title": "Add parser" }] }"#).unwrap();
    stack
}

fn log_contents(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("logs").join("split-confirm.log")).unwrap()
}

#[test]
fn test_rust_log_level_reaches_log_file() {
    let dir = TempDir::new().unwrap();
    let stack = clean_stack(&dir);

    command(&dir)
        .env("RUST_LOG", "debug")
        .arg("--state")
        .arg(&stack)
        .assert()
        .success();

    assert!(log_contents(&dir).contains("No unsaved commit message edits"));
}

#[test]
fn test_default_log_level_is_warn() {
    let dir = TempDir::new().unwrap();
    let stack = clean_stack(&dir);

    command(&dir)
        .env_remove("RUST_LOG")
        .arg("--state")
        .arg(&stack)
        .assert()
        .success();

    let log = log_contents(&dir);
    assert!(!log.contains("No unsaved commit message edits"));
    assert!(!log.contains("Split confirmation finished"));
}

#[test]
fn test_first_run_writes_example_config() {
    let dir = TempDir::new().unwrap();
    let stack = clean_stack(&dir);

    command(&dir).arg("--state").arg(&stack).assert().success();

    let config = fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(config.contains("[dialog]"));
}

#[test]
fn test_empty_stack_prints_proceed() {
    let dir = TempDir::new().unwrap();
    let stack = dir.path().join("stack.json");
    fs::write(&stack, r#"{ "commits": [] }"#).unwrap();

    command(&dir)
        .args(["-s", stack.to_str().unwrap()])
        .assert()
        .success()
        .stdout("proceed\n");
}

#[test]
fn test_missing_stack_file_fails() {
    let dir = TempDir::new().unwrap();

    command(&dir)
        .arg("--state")
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not load stack"));
}

#[test]
fn test_malformed_stack_file_fails() {
    let dir = TempDir::new().unwrap();
    let stack = dir.path().join("stack.json");
    fs::write(&stack, "{ not json").unwrap();

    command(&dir)
        .arg("--state")
        .arg(&stack)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid stack file"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let stack = dir.path().join("stack.json");
    let config = dir.path().join("config.toml");
    fs::write(&stack, r#"{ "commits": [] }"#).unwrap();
    fs::write(&config, "[dialog]\nwidth = 3\n").unwrap();

    command(&dir)
        .arg("--state")
        .arg(&stack)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("dialog.width"));
}

#[test]
fn test_state_flag_is_required() {
    let dir = TempDir::new().unwrap();

    command(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--state"));
}
