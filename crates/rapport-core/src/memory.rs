//! In-process transcript and feedback store

use std::sync::{PoisonError, RwLock};

use chrono::NaiveDateTime;

use crate::clock::{Clock, SystemClock};
use crate::config::DEFAULT_MESSAGE_MAX_CHARS;
use crate::error::{RapportError, Result};
use crate::feedback::{
    sort_newest_first, validate_feedback_text, FeedbackEntry, FeedbackStore,
    DEFAULT_FEEDBACK_MAX_CHARS,
};
use crate::transcript::{validate_message, Message, Transcript, TranscriptSource};

fn poisoned<T>(_: PoisonError<T>) -> RapportError {
    RapportError::Other("memory store lock poisoned".to_string())
}

#[derive(Debug, Clone)]
struct StoredMessage {
    receiver: String,
    message: Message,
}

/// Keeps messages and feedback in memory. Safe to share across threads.
#[derive(Debug)]
pub struct MemoryStore<C: Clock = SystemClock> {
    clock: C,
    message_max_chars: usize,
    feedback_max_chars: usize,
    messages: RwLock<Vec<StoredMessage>>,
    feedback: RwLock<Vec<FeedbackEntry>>,
}

impl Default for MemoryStore<SystemClock> {
    fn default() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl MemoryStore<SystemClock> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> MemoryStore<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            message_max_chars: DEFAULT_MESSAGE_MAX_CHARS,
            feedback_max_chars: DEFAULT_FEEDBACK_MAX_CHARS,
            messages: RwLock::new(Vec::new()),
            feedback: RwLock::new(Vec::new()),
        }
    }

    pub fn with_message_max_chars(mut self, max_chars: usize) -> Self {
        self.message_max_chars = max_chars;
        self
    }

    pub fn with_feedback_max_chars(mut self, max_chars: usize) -> Self {
        self.feedback_max_chars = max_chars;
        self
    }

    /// Record a message from `sender` to `receiver`. `sent_at` defaults to the clock.
    /// Validated and sanitized the same way as [`crate::db::Database::save_message`].
    pub fn save_message(
        &self,
        sender: &str,
        receiver: &str,
        text: &str,
        sent_at: Option<NaiveDateTime>,
    ) -> Result<()> {
        let clean = validate_message(sender, receiver, text, self.message_max_chars)?;
        let message = Message::new(sender, clean, sent_at.unwrap_or_else(|| self.clock.now()));
        self.messages.write().map_err(poisoned)?.push(StoredMessage {
            receiver: receiver.to_string(),
            message,
        });
        Ok(())
    }
}

impl<C: Clock> TranscriptSource for MemoryStore<C> {
    fn get_transcript(&self, me: &str, partner: &str) -> Result<Transcript> {
        let messages = self
            .messages
            .read()
            .map_err(poisoned)?
            .iter()
            .filter(|m| {
                (m.message.speaker == me && m.receiver == partner)
                    || (m.message.speaker == partner && m.receiver == me)
            })
            .map(|m| m.message.clone())
            .collect();
        Transcript::new(me, partner, messages)
    }
}

impl<C: Clock> FeedbackStore for MemoryStore<C> {
    fn save_feedback(&self, author: &str, partner: &str, text: &str) -> Result<FeedbackEntry> {
        let text = validate_feedback_text(text, self.feedback_max_chars)?;
        let mut feedback = self.feedback.write().map_err(poisoned)?;
        let entry = FeedbackEntry {
            id: feedback.len() as i64 + 1,
            author: author.to_string(),
            partner: partner.to_string(),
            text,
            created_at: self.clock.now(),
        };
        feedback.push(entry.clone());
        Ok(entry)
    }

    fn get_feedback(&self, author: &str, partner: &str) -> Result<Vec<FeedbackEntry>> {
        let mut entries: Vec<_> = self
            .feedback
            .read()
            .map_err(poisoned)?
            .iter()
            .filter(|e| e.author == author && e.partner == partner)
            .cloned()
            .collect();
        sort_newest_first(&mut entries);
        Ok(entries)
    }
}
