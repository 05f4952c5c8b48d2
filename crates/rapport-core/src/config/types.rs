//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::feedback::DEFAULT_FEEDBACK_MAX_CHARS;
use crate::lexicon::LexiconMatch;
use crate::metrics::Locale;
use crate::text::TokenizerKind;

/// Default database file, relative to the working directory
pub const DEFAULT_DATABASE: &str = "rapport.db";

/// Longest stored chat message, in characters
pub const DEFAULT_MESSAGE_MAX_CHARS: usize = 500;

/// rapport configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RapportConfig {
    /// SQLite database path
    #[serde(default = "default_database")]
    pub database: String,

    /// Language metric labels are rendered in
    #[serde(default)]
    pub locale: Locale,

    /// Segmenter used by the diversity metric
    #[serde(default)]
    pub tokenizer: TokenizerKind,

    /// Stem latin-script tokens before counting distinct words (default false)
    #[serde(default)]
    pub stemming: bool,

    /// How emotion and disclosure word lists are matched
    #[serde(default)]
    pub lexicon_match: LexiconMatch,

    /// Longest accepted feedback note
    #[serde(default = "default_feedback_max_chars")]
    pub feedback_max_chars: usize,

    /// Messages are truncated to this many characters when stored
    #[serde(default = "default_message_max_chars")]
    pub message_max_chars: usize,
}

impl Default for RapportConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            locale: Locale::default(),
            tokenizer: TokenizerKind::default(),
            stemming: false,
            lexicon_match: LexiconMatch::default(),
            feedback_max_chars: default_feedback_max_chars(),
            message_max_chars: default_message_max_chars(),
        }
    }
}

fn default_database() -> String {
    DEFAULT_DATABASE.to_string()
}

fn default_feedback_max_chars() -> usize {
    DEFAULT_FEEDBACK_MAX_CHARS
}

fn default_message_max_chars() -> usize {
    DEFAULT_MESSAGE_MAX_CHARS
}
