use crate::support::rapport;
use predicates::prelude::*;
use tempfile::tempdir;

const ROWS: &str = r#"[
  {"sender": "alice", "receiver": "bob", "message": "hi?", "timestamp": "2024-01-01 10:00:00"},
  {"sender": "bob", "receiver": "alice", "message": "hello", "timestamp": "2024-01-01 10:00:40"},
  {"sender": "alice", "receiver": "bob", "message": "how are you?", "timestamp": "2024-01-01 10:01:20"}
]"#;

#[test]
fn test_import_creates_database_and_loads_rows() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("chat.json"), ROWS).unwrap();

    rapport(dir.path())
        .args(["import", "chat.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 3 messages"));

    rapport(dir.path())
        .args(["--format", "records", "transcript", "--me", "alice", "--partner", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("messages=3"));
}

#[test]
fn test_import_from_stdin() {
    let dir = tempdir().unwrap();

    rapport(dir.path())
        .args(["--format", "json", "import", "-"])
        .write_stdin(ROWS)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"imported\": 3"));
}

#[test]
fn test_import_bad_timestamp_writes_nothing() {
    let dir = tempdir().unwrap();
    let rows = ROWS.replace("2024-01-01 10:01:20", "yesterday");
    std::fs::write(dir.path().join("chat.json"), rows).unwrap();

    rapport(dir.path())
        .args(["import", "chat.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid timestamp"));

    rapport(dir.path())
        .args(["--format", "records", "transcript", "--me", "alice", "--partner", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("messages=0"));
}

#[test]
fn test_import_rejects_non_json_file() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("chat.csv"), "alice,bob,hi").unwrap();

    rapport(dir.path())
        .args(["import", "chat.csv"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported import file type"));
}
