//! SQLite database schema for rapport

use rusqlite::{Connection, OptionalExtension};

use crate::error::{RapportError, Result};

pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// What `create_schema` found
#[derive(Debug, PartialEq, Eq)]
pub enum SchemaStatus {
    /// Fresh database, tables created
    Created,
    /// Tables already at the current version
    Current,
}

const SCHEMA_SQL: &str = r#"
-- Chat messages between two users
CREATE TABLE IF NOT EXISTS chat_messages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    sender TEXT NOT NULL,
    receiver TEXT NOT NULL,
    message TEXT NOT NULL,
    timestamp TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_chat_messages_pair ON chat_messages(sender, receiver, timestamp);

-- Manual feedback notes, append-only
CREATE TABLE IF NOT EXISTS chat_feedback (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    sender TEXT NOT NULL,
    receiver TEXT NOT NULL,
    feedback TEXT NOT NULL,
    timestamp TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_chat_feedback_pair ON chat_feedback(sender, receiver, timestamp);

-- Database metadata
CREATE TABLE IF NOT EXISTS meta (
    key TEXT PRIMARY KEY,
    value TEXT
);
"#;

fn stored_version(conn: &Connection) -> Result<Option<i32>> {
    let has_meta: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type = 'table' AND name = 'meta'",
        [],
        |r| r.get(0),
    )?;
    if !has_meta {
        return Ok(None);
    }

    let raw: Option<String> = conn
        .query_row(
            "SELECT value FROM meta WHERE key = 'schema_version'",
            [],
            |r| r.get(0),
        )
        .optional()?;

    raw.map(|v| {
        v.parse()
            .map_err(|_| RapportError::invalid_value("schema_version", v))
    })
    .transpose()
}

pub fn create_schema(conn: &Connection) -> Result<SchemaStatus> {
    match stored_version(conn)? {
        None => {
            conn.execute_batch(SCHEMA_SQL)?;
            conn.execute(
                "INSERT OR REPLACE INTO meta (key, value) VALUES ('schema_version', ?1)",
                [CURRENT_SCHEMA_VERSION.to_string()],
            )?;
            Ok(SchemaStatus::Created)
        }
        Some(v) if v > CURRENT_SCHEMA_VERSION => Err(RapportError::Other(format!(
            "database schema version {} is newer than supported version {}",
            v, CURRENT_SCHEMA_VERSION
        ))),
        Some(_) => {
            conn.execute_batch(SCHEMA_SQL)?;
            Ok(SchemaStatus::Current)
        }
    }
}
