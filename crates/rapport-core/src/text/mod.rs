//! Word segmentation for chat text
//!
//! Japanese has no spaces between words, so splitting on non-alphanumeric
//! characters alone would turn whole sentences into single tokens.
//! [`ScriptSegmenter`] additionally breaks at script transitions (kanji,
//! hiragana, katakana, hangul, latin). This is a dictionary-free
//! approximation of morphological analysis: `楽しい` segments as `楽` + `しい`.
//! [`WhitespaceSegmenter`] is the fallback used whenever script segmentation
//! reports an error.

mod sanitize;

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};

use crate::error::{RapportError, Result};

pub use sanitize::sanitize_message;

/// Porter stemmer for latin-script tokens
static STEMMER: OnceLock<Stemmer> = OnceLock::new();

fn get_stemmer() -> &'static Stemmer {
    STEMMER.get_or_init(|| Stemmer::create(Algorithm::English))
}

/// Splits text into word units
pub trait Segmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>>;
}

/// Splits on Unicode whitespace only. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceSegmenter;

impl Segmenter for WhitespaceSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.split_whitespace().map(str::to_string).collect())
    }
}

/// Script class of a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Han,
    Hiragana,
    Katakana,
    Hangul,
    /// Latin, Greek, Cyrillic letters and digits
    Word,
    /// Prolonged sound and voicing marks: extend whatever run precedes them
    Extend,
    /// Whitespace, punctuation, symbols
    Break,
}

fn classify(c: char) -> Option<Script> {
    let script = match c as u32 {
        0x3005..=0x3007 | 0x3400..=0x4DBF | 0x4E00..=0x9FFF | 0xF900..=0xFAFF => Script::Han,
        0x20000..=0x2FA1F => Script::Han,
        0x3099..=0x309A | 0x30FC | 0xFF70 => Script::Extend,
        0x3041..=0x309F => Script::Hiragana,
        0x30A0..=0x30FF | 0x31F0..=0x31FF | 0xFF66..=0xFF9F => Script::Katakana,
        0x1100..=0x11FF | 0x3130..=0x318F | 0xAC00..=0xD7AF => Script::Hangul,
        0x00C0..=0x024F | 0x0370..=0x03FF | 0x0400..=0x04FF => Script::Word,
        0xFF10..=0xFF19 | 0xFF21..=0xFF3A | 0xFF41..=0xFF5A => Script::Word,
        _ if c.is_ascii_alphanumeric() => Script::Word,
        _ if c.is_alphanumeric() => return None,
        _ => Script::Break,
    };
    Some(script)
}

/// Dictionary-free segmenter breaking at whitespace, punctuation and script changes
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptSegmenter {
    /// Apply English stemming to latin-script tokens
    pub stemming: bool,
}

impl ScriptSegmenter {
    pub fn new(stemming: bool) -> Self {
        Self { stemming }
    }

    fn finish(&self, run: &mut String, script: Option<Script>, out: &mut Vec<String>) {
        if run.is_empty() {
            return;
        }
        let token = std::mem::take(run);
        if script == Some(Script::Word) {
            let lower = token.to_lowercase();
            if self.stemming {
                out.push(get_stemmer().stem(&lower).into_owned());
            } else {
                out.push(lower);
            }
        } else {
            out.push(token);
        }
    }
}

impl Segmenter for ScriptSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>> {
        let mut tokens = Vec::new();
        let mut run = String::new();
        let mut current: Option<Script> = None;

        for c in text.chars() {
            let script = classify(c).ok_or_else(|| {
                RapportError::unsupported(
                    "script",
                    format!("{:?} (U+{:04X})", c, c as u32),
                    "latin, greek, cyrillic, kanji, kana, hangul",
                )
            })?;

            match script {
                Script::Break => {
                    self.finish(&mut run, current, &mut tokens);
                    current = None;
                }
                Script::Extend if current.is_some() => run.push(c),
                Script::Extend => {}
                _ => {
                    if current != Some(script) {
                        self.finish(&mut run, current, &mut tokens);
                        current = Some(script);
                    }
                    run.push(c);
                }
            }
        }
        self.finish(&mut run, current, &mut tokens);

        Ok(tokens)
    }
}

/// Which segmenter the diversity metric uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    /// Script-transition segmentation (default)
    #[default]
    Script,
    /// Whitespace splitting only
    Whitespace,
}

impl FromStr for TokenizerKind {
    type Err = RapportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "script" => Ok(TokenizerKind::Script),
            "whitespace" => Ok(TokenizerKind::Whitespace),
            other => Err(RapportError::unsupported(
                "tokenizer",
                other,
                "script, whitespace",
            )),
        }
    }
}

impl fmt::Display for TokenizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizerKind::Script => write!(f, "script"),
            TokenizerKind::Whitespace => write!(f, "whitespace"),
        }
    }
}

/// Tokenizer adapter: runs the configured segmenter and falls back to
/// whitespace splitting when it fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tokenizer {
    pub kind: TokenizerKind,
    pub stemming: bool,
}

impl Tokenizer {
    pub fn new(kind: TokenizerKind, stemming: bool) -> Self {
        Self { kind, stemming }
    }

    /// Tokenize one message. Never fails.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let segmented = match self.kind {
            TokenizerKind::Script => ScriptSegmenter::new(self.stemming).segment(text),
            TokenizerKind::Whitespace => WhitespaceSegmenter.segment(text),
        };

        segmented.unwrap_or_else(|e| {
            tracing::debug!(error = %e, "segmentation failed, falling back to whitespace");
            text.split_whitespace().map(str::to_string).collect()
        })
    }
}
