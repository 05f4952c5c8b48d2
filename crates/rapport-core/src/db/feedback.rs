//! Feedback note storage

use rusqlite::params;

use super::Database;
use crate::error::{RapportError, Result};
use crate::feedback::{validate_feedback_text, FeedbackEntry, FeedbackStore};
use crate::map_db_err;
use crate::transcript::{format_timestamp, parse_timestamp};

impl FeedbackStore for Database {
    fn save_feedback(&self, author: &str, partner: &str, text: &str) -> Result<FeedbackEntry> {
        let text = validate_feedback_text(text, self.feedback_max_chars)?;
        let created_at = self.clock.now();

        self.conn
            .execute(
                "INSERT INTO chat_feedback (sender, receiver, feedback, timestamp) VALUES (?1, ?2, ?3, ?4)",
                params![author, partner, text, format_timestamp(&created_at)],
            )
            .map_err(|e| map_db_err!("insert feedback", e))?;

        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, author, partner, "feedback saved");

        Ok(FeedbackEntry {
            id,
            author: author.to_string(),
            partner: partner.to_string(),
            text,
            created_at,
        })
    }

    fn get_feedback(&self, author: &str, partner: &str) -> Result<Vec<FeedbackEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, feedback, timestamp FROM chat_feedback
             WHERE sender = ?1 AND receiver = ?2
             ORDER BY timestamp DESC, id DESC",
        )?;

        let rows = stmt
            .query_map(params![author, partner], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })
            .map_err(|e| map_db_err!("query feedback", e))?;

        let mut entries = Vec::new();
        for row in rows {
            let (id, text, created_at) =
                row.map_err(|e| RapportError::field_extraction("feedback row", e))?;
            entries.push(FeedbackEntry {
                id,
                author: author.to_string(),
                partner: partner.to_string(),
                text,
                created_at: parse_timestamp(&created_at)?,
            });
        }
        Ok(entries)
    }
}
