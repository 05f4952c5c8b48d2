//! Manual feedback notes one participant writes about a conversation

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::{RapportError, Result};
use crate::transcript::timestamp;

/// Longest feedback entry accepted, in characters
pub const DEFAULT_FEEDBACK_MAX_CHARS: usize = 150;

/// A stored feedback note. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackEntry {
    pub id: i64,
    pub author: String,
    pub partner: String,
    pub text: String,
    #[serde(with = "timestamp::serde_format")]
    pub created_at: NaiveDateTime,
}

/// Persists and lists feedback notes
pub trait FeedbackStore {
    /// Append a note written by `author` about their conversation with `partner`
    fn save_feedback(&self, author: &str, partner: &str, text: &str) -> Result<FeedbackEntry>;

    /// Notes by `author` about `partner`, newest first
    fn get_feedback(&self, author: &str, partner: &str) -> Result<Vec<FeedbackEntry>>;
}

/// Trim and check a feedback note before it is stored
pub fn validate_feedback_text(text: &str, max_chars: usize) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(RapportError::invalid_value("feedback", "empty text"));
    }
    let chars = trimmed.chars().count();
    if chars > max_chars {
        return Err(RapportError::invalid_value(
            "feedback",
            format!("{} characters (limit {})", chars, max_chars),
        ));
    }
    Ok(trimmed.to_string())
}

/// Newest first; entries sharing a timestamp keep reverse insertion order
pub(crate) fn sort_newest_first(entries: &mut [FeedbackEntry]) {
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
}
