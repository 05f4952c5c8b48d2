//! Chat message storage and transcript reads

use chrono::NaiveDateTime;
use rusqlite::params;
use serde::Deserialize;

use super::Database;
use crate::error::{RapportError, Result};
use crate::map_db_err;
use crate::transcript::{
    format_timestamp, parse_timestamp, validate_message, Message, Transcript, TranscriptSource,
};

/// One message in an import file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImportRow {
    pub sender: String,
    pub receiver: String,
    pub message: String,
    /// `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
}

impl Database {
    fn prepare_message(&self, sender: &str, receiver: &str, text: &str) -> Result<String> {
        validate_message(sender, receiver, text, self.message_max_chars)
    }

    /// Record a message. `sent_at` defaults to the database clock.
    /// Returns the row id.
    pub fn save_message(
        &self,
        sender: &str,
        receiver: &str,
        text: &str,
        sent_at: Option<NaiveDateTime>,
    ) -> Result<i64> {
        let clean = self.prepare_message(sender, receiver, text)?;
        let sent_at = sent_at.unwrap_or_else(|| self.clock.now());

        self.conn
            .execute(
                "INSERT INTO chat_messages (sender, receiver, message, timestamp) VALUES (?1, ?2, ?3, ?4)",
                params![sender, receiver, clean, format_timestamp(&sent_at)],
            )
            .map_err(|e| map_db_err!("insert message", e))?;

        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, sender, receiver, "message saved");
        Ok(id)
    }

    /// Insert many messages in one transaction. Every row is validated
    /// before anything is written.
    pub fn import_messages(&mut self, rows: &[ImportRow]) -> Result<usize> {
        let prepared = rows
            .iter()
            .map(|row| {
                let clean = self.prepare_message(&row.sender, &row.receiver, &row.message)?;
                let sent_at = parse_timestamp(&row.timestamp)?;
                Ok((row, clean, sent_at))
            })
            .collect::<Result<Vec<_>>>()?;

        let tx = self
            .conn
            .transaction()
            .map_err(|e| map_db_err!("begin import transaction", e))?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO chat_messages (sender, receiver, message, timestamp) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for (row, clean, sent_at) in &prepared {
                stmt.execute(params![
                    row.sender,
                    row.receiver,
                    clean,
                    format_timestamp(sent_at)
                ])
                .map_err(|e| map_db_err!("import message", e))?;
            }
        }
        tx.commit()
            .map_err(|e| map_db_err!("commit import transaction", e))?;

        tracing::debug!(count = prepared.len(), "messages imported");
        Ok(prepared.len())
    }

    #[cfg(test)]
    pub(crate) fn message_count(&self, a: &str, b: &str) -> Result<i64> {
        self.conn
            .query_row(
                "SELECT COUNT(*) FROM chat_messages
                 WHERE (sender = ?1 AND receiver = ?2) OR (sender = ?2 AND receiver = ?1)",
                params![a, b],
                |r| r.get(0),
            )
            .map_err(|e| map_db_err!("count messages", e))
    }
}

impl TranscriptSource for Database {
    fn get_transcript(&self, me: &str, partner: &str) -> Result<Transcript> {
        let mut stmt = self.conn.prepare(
            "SELECT sender, message, timestamp FROM chat_messages
             WHERE (sender = ?1 AND receiver = ?2) OR (sender = ?2 AND receiver = ?1)
             ORDER BY timestamp, id",
        )?;

        let rows = stmt
            .query_map(params![me, partner], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })
            .map_err(|e| map_db_err!("query transcript", e))?;

        let mut messages = Vec::new();
        for row in rows {
            let (speaker, text, sent_at) =
                row.map_err(|e| RapportError::field_extraction("message row", e))?;
            messages.push(Message::from_row(&speaker, &text, &sent_at)?);
        }

        tracing::debug!(me, partner, messages = messages.len(), "transcript loaded");
        Transcript::new(me, partner, messages)
    }
}
