use crate::support::{init, rapport};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_feedback_add_and_list_newest_first() {
    let dir = tempdir().unwrap();
    init(dir.path());

    for text in ["first note", "second note"] {
        rapport(dir.path())
            .args(["feedback", "add", "--me", "alice", "--partner", "bob", text])
            .assert()
            .success();
    }

    let output = rapport(dir.path())
        .args(["--format", "json", "feedback", "list", "--me", "alice", "--partner", "bob"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["text"], "second note");
    assert_eq!(entries[1]["text"], "first note");
    assert_eq!(entries[0]["author"], "alice");
}

#[test]
fn test_feedback_is_scoped_to_author_and_partner() {
    let dir = tempdir().unwrap();
    init(dir.path());

    rapport(dir.path())
        .args(["feedback", "add", "--me", "alice", "--partner", "bob", "about bob"])
        .assert()
        .success();

    rapport(dir.path())
        .args(["feedback", "list", "--me", "bob", "--partner", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No feedback for alice yet"));
}

#[test]
fn test_feedback_length_limit() {
    let dir = tempdir().unwrap();
    init(dir.path());
    let text = "あ".repeat(151);

    rapport(dir.path())
        .args(["feedback", "add", "--me", "alice", "--partner", "bob", text.as_str()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("151 characters (limit 150)"));

    let text = "あ".repeat(150);
    rapport(dir.path())
        .args(["feedback", "add", "--me", "alice", "--partner", "bob", text.as_str()])
        .assert()
        .success();
}

#[test]
fn test_feedback_records_format() {
    let dir = tempdir().unwrap();
    init(dir.path());

    rapport(dir.path())
        .args(["feedback", "add", "--me", "alice", "--partner", "bob", "said \"thanks\""])
        .assert()
        .success();

    rapport(dir.path())
        .args(["--format", "records", "feedback", "list", "--me", "alice", "--partner", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=feedback.list me=alice partner=bob count=1"))
        .stdout(predicate::str::contains(r#""said \"thanks\"""#));
}
