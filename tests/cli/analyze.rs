use crate::support::{init, rapport, seed_chat};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_analyze_all_metrics_human() {
    let dir = tempdir().unwrap();
    seed_chat(dir.path());

    rapport(dir.path())
        .args(["--locale", "en", "analyze", "--me", "alice", "--partner", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alice / bob (4 messages)"))
        .stdout(predicate::str::contains("balance"))
        .stdout(predicate::str::contains("(50%)"))
        .stdout(predicate::str::contains("flow"));
}

#[test]
fn test_analyze_json_report() {
    let dir = tempdir().unwrap();
    seed_chat(dir.path());

    let output = rapport(dir.path())
        .args(["--format", "json", "analyze", "--me", "alice", "--partner", "bob"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["me"], "alice");
    assert_eq!(report["messages"], 4);

    let results = report["results"].as_array().unwrap();
    assert_eq!(results.len(), 10);
    assert_eq!(results[0]["metric"], "balance");
    assert_eq!(results[0]["verdict"], "balanced");
    assert_eq!(results[0]["evidence"]["percent"], 50);
    assert_eq!(results[9]["metric"], "flow");
    assert_eq!(results[9]["verdict"], "natural_flow");
}

#[test]
fn test_analyze_single_metric_by_function_name() {
    let dir = tempdir().unwrap();
    seed_chat(dir.path());

    rapport(dir.path())
        .args([
            "--format",
            "records",
            "analyze",
            "--me",
            "alice",
            "--partner",
            "bob",
            "--metric",
            "question_feedback",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("R questions verdict=moderate_questions"))
        .stdout(predicate::str::contains("R balance").not());
}

#[test]
fn test_analyze_empty_conversation_is_insufficient() {
    let dir = tempdir().unwrap();
    init(dir.path());

    rapport(dir.path())
        .args(["--format", "json", "analyze", "--me", "alice", "--partner", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"verdict\": \"insufficient_data\""))
        .stdout(predicate::str::contains("会話がまだ始まっていません"));
}

#[test]
fn test_analyze_unknown_metric_is_usage_error() {
    let dir = tempdir().unwrap();
    init(dir.path());

    rapport(dir.path())
        .args(["analyze", "--me", "alice", "--partner", "bob", "--metric", "charisma"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported metric"));
}

#[test]
fn test_analyze_same_participant_is_usage_error() {
    let dir = tempdir().unwrap();
    init(dir.path());

    rapport(dir.path())
        .args(["analyze", "--me", "alice", "--partner", "alice"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("must differ"));
}

#[test]
fn test_locale_from_config() {
    let dir = tempdir().unwrap();
    seed_chat(dir.path());
    let config_dir = dir.path().join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "locale = \"en\"\n").unwrap();

    rapport(dir.path())
        .args(["analyze", "--me", "alice", "--partner", "bob", "--metric", "balance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A well-balanced conversation (50%)"));
}
