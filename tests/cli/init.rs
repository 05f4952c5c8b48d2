use crate::support::rapport;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_init_creates_database() {
    let dir = tempdir().unwrap();

    rapport(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized rapport database"));

    assert!(dir.path().join("rapport.db").exists());
}

#[test]
fn test_init_idempotent() {
    let dir = tempdir().unwrap();

    rapport(dir.path()).arg("init").assert().success();
    rapport(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));
}

#[test]
fn test_init_respects_db_flag() {
    let dir = tempdir().unwrap();

    rapport(dir.path())
        .args(["--db", "data/chat.db", "init", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"created\": true"));

    assert!(dir.path().join("data/chat.db").exists());
    assert!(!dir.path().join("rapport.db").exists());
}

#[test]
fn test_init_uses_configured_database() {
    let dir = tempdir().unwrap();
    let config_dir = dir.path().join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "database = \"configured.db\"\n").unwrap();

    rapport(dir.path()).arg("init").assert().success();

    assert!(dir.path().join("configured.db").exists());
}

#[test]
fn test_init_records_header() {
    let dir = tempdir().unwrap();

    rapport(dir.path())
        .args(["--format", "records", "init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H rapport=1 records=1 mode=init"))
        .stdout(predicate::str::contains("status=created"));
}

#[test]
fn test_init_writes_schema_version() {
    let dir = tempdir().unwrap();
    rapport(dir.path()).arg("init").assert().success();

    let conn = rusqlite::Connection::open(dir.path().join("rapport.db")).unwrap();
    let version: String = conn
        .query_row(
            "SELECT value FROM meta WHERE key = 'schema_version'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(version, "1");
}

#[test]
fn test_init_writes_default_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config").join("config.toml");

    rapport(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("database = \"rapport.db\""));
    assert!(content.contains("locale = \"ja\""));
}

#[test]
fn test_init_keeps_existing_config() {
    let dir = tempdir().unwrap();
    let config_dir = dir.path().join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "locale = \"en\"\n").unwrap();

    rapport(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config").not());

    let content = std::fs::read_to_string(config_dir.join("config.toml")).unwrap();
    assert_eq!(content, "locale = \"en\"\n");
}

#[test]
fn test_init_with_explicit_config_writes_nothing() {
    let dir = tempdir().unwrap();
    let custom = dir.path().join("custom.toml");
    std::fs::write(&custom, "database = \"custom.db\"\n").unwrap();

    rapport(dir.path())
        .args(["--config", custom.to_str().unwrap(), "init"])
        .assert()
        .success();

    assert!(dir.path().join("custom.db").exists());
    assert!(!dir.path().join("config").join("config.toml").exists());
}
