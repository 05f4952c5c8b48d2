use crate::support::rapport;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_missing_database_is_data_error() {
    let dir = tempdir().unwrap();

    rapport(dir.path())
        .args(["analyze", "--me", "alice", "--partner", "bob"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("run `rapport init`"));
}

#[test]
fn test_json_error_envelope() {
    let dir = tempdir().unwrap();

    let output = rapport(dir.path())
        .args(["--format", "json", "transcript", "--me", "alice", "--partner", "bob"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let envelope: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(envelope["error"]["code"], 3);
    assert_eq!(envelope["error"]["type"], "database_not_found");
}

#[test]
fn test_clap_error_in_json_mode() {
    let dir = tempdir().unwrap();

    let output = rapport(dir.path())
        .args(["--format", "json", "analyze", "--me", "alice"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let envelope: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(envelope["error"]["type"], "usage_error");
}

#[test]
fn test_quiet_suppresses_error_text() {
    let dir = tempdir().unwrap();

    rapport(dir.path())
        .args(["--quiet", "transcript", "--me", "alice", "--partner", "bob"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_invalid_config_is_usage_error() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "feedback_max_chars = 0\n").unwrap();

    rapport(dir.path())
        .args(["--config", config.to_str().unwrap(), "init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("feedback_max_chars"));
}

#[test]
fn test_no_command_prints_version() {
    let dir = tempdir().unwrap();

    rapport(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("rapport "))
        .stdout(predicate::str::contains("rapport --help"));
}

#[test]
fn test_repeated_format_in_json_mode() {
    let dir = tempdir().unwrap();

    let output = rapport(dir.path())
        .args(["--format", "json", "--format", "json", "init"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let envelope: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(envelope["error"]["type"], "duplicate_format");
}
