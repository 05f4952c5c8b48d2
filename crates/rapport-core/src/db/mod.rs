//! SQLite database module for rapport
//!
//! Holds chat messages and feedback notes. Implements [`TranscriptSource`]
//! and [`FeedbackStore`] so the CLI and the metrics never touch SQL.
//!
//! [`TranscriptSource`]: crate::transcript::TranscriptSource
//! [`FeedbackStore`]: crate::feedback::FeedbackStore

mod feedback;
mod messages;
mod schema;

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::clock::{Clock, SystemClock};
use crate::config::{RapportConfig, DEFAULT_MESSAGE_MAX_CHARS};
use crate::error::{RapportError, Result};
use crate::feedback::DEFAULT_FEEDBACK_MAX_CHARS;

pub use messages::ImportRow;
pub use schema::{create_schema, SchemaStatus, CURRENT_SCHEMA_VERSION};

/// SQLite database for rapport
#[derive(Debug)]
pub struct Database {
    conn: Connection,
    path: Option<PathBuf>,
    clock: Box<dyn Clock>,
    message_max_chars: usize,
    feedback_max_chars: usize,
}

impl Database {
    /// Open an existing database. Fails with `DatabaseNotFound` if the file is missing.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RapportError::DatabaseNotFound {
                path: path.to_path_buf(),
            });
        }
        Self::open_or_create(path)
    }

    /// Open the database, creating the file and schema if needed
    pub fn open_or_create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path).map_err(|e| {
            RapportError::Other(format!(
                "failed to open database at {}: {}",
                path.display(),
                e
            ))
        })?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| RapportError::Other(format!("failed to enable WAL mode: {}", e)))?;

        Self::from_connection(conn, Some(path.to_path_buf()))
    }

    /// Private in-memory database, mainly for tests
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?, None)
    }

    fn from_connection(conn: Connection, path: Option<PathBuf>) -> Result<Self> {
        let status = create_schema(&conn)?;
        tracing::debug!(
            path = ?path,
            ?status,
            version = CURRENT_SCHEMA_VERSION,
            "database ready"
        );

        Ok(Database {
            conn,
            path,
            clock: Box::new(SystemClock),
            message_max_chars: DEFAULT_MESSAGE_MAX_CHARS,
            feedback_max_chars: DEFAULT_FEEDBACK_MAX_CHARS,
        })
    }

    /// Apply size limits from configuration
    pub fn with_config(mut self, config: &RapportConfig) -> Self {
        self.message_max_chars = config.message_max_chars;
        self.feedback_max_chars = config.feedback_max_chars;
        self
    }

    /// Replace the clock used for default timestamps
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        // Checkpoint so other processes see every committed row
        if let Err(e) = self.conn.pragma_update(None, "wal_checkpoint", "TRUNCATE") {
            tracing::debug!(path = ?self.path, error = %e, "wal checkpoint failed");
        }
    }
}
