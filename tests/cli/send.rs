use crate::support::{init, rapport, seed_chat};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_send_then_transcript_in_order() {
    let dir = tempdir().unwrap();
    seed_chat(dir.path());

    rapport(dir.path())
        .args(["transcript", "--me", "alice", "--partner", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[2024-03-10 20:00:00] alice: 元気?"))
        .stdout(predicate::str::contains("[2024-03-10 20:01:30] bob: よかったね"));
}

#[test]
fn test_send_sanitizes_text() {
    let dir = tempdir().unwrap();
    init(dir.path());

    rapport(dir.path())
        .args([
            "send",
            "--from",
            "alice",
            "--to",
            "bob",
            "--at",
            "2024-01-01 09:00:00",
            "  first line\n\nsecond   line  ",
        ])
        .assert()
        .success();

    rapport(dir.path())
        .args(["--format", "json", "transcript", "--me", "alice", "--partner", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"text\": \"first line second line\""))
        .stdout(predicate::str::contains("\"sent_at\": \"2024-01-01 09:00:00\""));
}

#[test]
fn test_send_rejects_bad_timestamp() {
    let dir = tempdir().unwrap();
    init(dir.path());

    rapport(dir.path())
        .args(["send", "--from", "alice", "--to", "bob", "--at", "2024-01-01T09:00", "hi"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("YYYY-MM-DD HH:MM:SS"));
}

#[test]
fn test_send_rejects_empty_text() {
    let dir = tempdir().unwrap();
    init(dir.path());

    rapport(dir.path())
        .args(["send", "--from", "alice", "--to", "bob", "   "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid message"));
}

#[test]
fn test_transcript_records_format() {
    let dir = tempdir().unwrap();
    seed_chat(dir.path());

    rapport(dir.path())
        .args(["--format", "records", "transcript", "--me", "bob", "--partner", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=transcript me=bob partner=alice messages=4"))
        .stdout(predicate::str::contains("M alice at=\"2024-03-10 20:00:00\" \"元気?\""));
}
