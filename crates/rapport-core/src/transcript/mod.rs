//! Two-party transcript model
//!
//! A [`Transcript`] is the time-ordered message history between a designated
//! "self" participant (`me`) and one `partner`. Every metric in
//! [`crate::metrics`] reads a transcript and nothing else.

pub mod timestamp;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{RapportError, Result};
use crate::text::sanitize_message;

pub use timestamp::{format_timestamp, parse_timestamp, TIMESTAMP_FORMAT};

/// A single chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Identity of the author
    pub speaker: String,
    /// Message body
    pub text: String,
    /// Naive local send time
    #[serde(with = "timestamp::serde_format")]
    pub sent_at: NaiveDateTime,
}

impl Message {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>, sent_at: NaiveDateTime) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
            sent_at,
        }
    }

    /// Build a message from a stored row, parsing the timestamp
    pub fn from_row(speaker: &str, text: &str, sent_at: &str) -> Result<Self> {
        Ok(Self::new(speaker, text, parse_timestamp(sent_at)?))
    }
}

/// Ordered message history between exactly two participants
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    me: String,
    partner: String,
    messages: Vec<Message>,
}

impl Transcript {
    /// Build a transcript, enforcing the two-party invariant.
    ///
    /// Messages are sorted by `sent_at`; the sort is stable, so messages
    /// sharing a timestamp keep their insertion order.
    pub fn new(
        me: impl Into<String>,
        partner: impl Into<String>,
        mut messages: Vec<Message>,
    ) -> Result<Self> {
        let me = me.into();
        let partner = partner.into();

        if me.is_empty() || partner.is_empty() {
            return Err(RapportError::invalid_transcript(
                "participant identities must not be empty",
            ));
        }
        if me == partner {
            return Err(RapportError::invalid_transcript(format!(
                "participants must differ (both are {:?})",
                me
            )));
        }
        if let Some(stranger) = messages
            .iter()
            .find(|m| m.speaker != me && m.speaker != partner)
        {
            return Err(RapportError::invalid_transcript(format!(
                "speaker {:?} is neither {:?} nor {:?}",
                stranger.speaker, me, partner
            )));
        }

        messages.sort_by_key(|m| m.sent_at);

        Ok(Self {
            me,
            partner,
            messages,
        })
    }

    /// Build a transcript from `(speaker, text, timestamp)` rows
    pub fn from_rows<'a, I>(me: &str, partner: &str, rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str, &'a str)>,
    {
        let messages = rows
            .into_iter()
            .map(|(speaker, text, sent_at)| Message::from_row(speaker, text, sent_at))
            .collect::<Result<Vec<_>>>()?;
        Self::new(me, partner, messages)
    }

    /// The designated "self" participant
    pub fn me(&self) -> &str {
        &self.me
    }

    pub fn partner(&self) -> &str {
        &self.partner
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Whether a message was authored by `me`
    pub fn is_mine(&self, message: &Message) -> bool {
        message.speaker == self.me
    }

    /// Messages authored by `me`, in order
    pub fn my_messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(move |m| self.is_mine(m))
    }

    pub fn first(&self) -> Option<&Message> {
        self.messages.first()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

/// Supplies transcripts for a pair of participants
pub trait TranscriptSource {
    /// Fetch every message exchanged between `me` and `partner`, oldest first
    fn get_transcript(&self, me: &str, partner: &str) -> Result<Transcript>;
}

/// Check both participants and clean the text of a message before it is stored.
/// Returns the sanitized text.
pub fn validate_message(
    sender: &str,
    receiver: &str,
    text: &str,
    max_chars: usize,
) -> Result<String> {
    if sender.trim().is_empty() || receiver.trim().is_empty() {
        return Err(RapportError::invalid_value("participant", "empty name"));
    }
    if sender == receiver {
        return Err(RapportError::invalid_value(
            "participant",
            format!("{} cannot message themselves", sender),
        ));
    }
    let clean = sanitize_message(text, max_chars);
    if clean.is_empty() {
        return Err(RapportError::invalid_value("message", "empty text"));
    }
    Ok(clean)
}
