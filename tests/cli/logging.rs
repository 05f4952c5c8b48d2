use crate::support::{init, rapport};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_verbose_shows_debug_messages() {
    let dir = tempdir().unwrap();
    init(dir.path());

    rapport(dir.path())
        .args(["--verbose", "analyze", "--me", "alice", "--partner", "bob"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("metric_evaluated"));
}

#[test]
fn test_default_level_is_quiet() {
    let dir = tempdir().unwrap();
    init(dir.path());

    rapport(dir.path())
        .args(["analyze", "--me", "alice", "--partner", "bob"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = tempdir().unwrap();
    init(dir.path());

    let output = rapport(dir.path())
        .args(["--log-level", "debug", "--log-json", "transcript", "--me", "alice", "--partner", "bob"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap();
    let line: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(line.get("level").is_some());
}

#[test]
fn test_rapport_log_env_overrides_flags() {
    let dir = tempdir().unwrap();
    init(dir.path());

    rapport(dir.path())
        .env("RAPPORT_LOG", "rapport=debug")
        .args(["transcript", "--me", "alice", "--partner", "bob"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}
