//! Fixed word lists used by the emotion and self-disclosure metrics

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RapportError, Result};
use crate::text::Tokenizer;

/// Affect words: happy, fun, sad, anxious, relieved, painful, like, dislike
pub const EMOTION_WORDS: &[&str] = &[
    "嬉しい", "楽しい", "悲しい", "不安", "安心", "つらい", "好き", "嫌い",
];

/// First-person and introspective markers: I, myself, recently, worry,
/// like, dislike, think, consider
pub const DISCLOSURE_KEYWORDS: &[&str] = &[
    "私", "自分", "最近", "悩み", "好き", "嫌い", "思う", "考える",
];

/// How lexicon terms are matched against message text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LexiconMatch {
    /// Plain substring search. Matches inside longer words (`私立` contains `私`).
    #[default]
    Substring,
    /// Term must start on a token boundary and cover whole tokens, except
    /// for an inflected hiragana tail (`好き` matches `好きです` but not
    /// `大好きです`)
    Token,
}

impl FromStr for LexiconMatch {
    type Err = RapportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "substring" => Ok(LexiconMatch::Substring),
            "token" => Ok(LexiconMatch::Token),
            other => Err(RapportError::unsupported(
                "lexicon match",
                other,
                "substring, token",
            )),
        }
    }
}

impl fmt::Display for LexiconMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexiconMatch::Substring => write!(f, "substring"),
            LexiconMatch::Token => write!(f, "token"),
        }
    }
}

/// Whether `text` contains any of `terms` under the given match mode
pub fn contains_any(text: &str, terms: &[&str], mode: LexiconMatch, tokenizer: &Tokenizer) -> bool {
    match mode {
        LexiconMatch::Substring => terms.iter().any(|term| text.contains(term)),
        LexiconMatch::Token => {
            let tokens = tokenizer.tokenize(text);
            terms
                .iter()
                .any(|term| covers_token_run(&tokens, &tokenizer.tokenize(term)))
        }
    }
}

fn is_hiragana(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| ('\u{3041}'..='\u{309F}').contains(&c))
}

/// True when `term` lines up with a run of whole tokens. A trailing
/// hiragana token of the term may be a prefix of the text token, so
/// `好き` (`好` + `き`) matches `好きです` (`好` + `きです`).
fn covers_token_run(tokens: &[String], term: &[String]) -> bool {
    let Some((last, stem)) = term.split_last() else {
        return false;
    };
    tokens.windows(term.len()).any(|window| {
        let Some((tail, head)) = window.split_last() else {
            return false;
        };
        let inflected = is_hiragana(last) && is_hiragana(tail) && tail.starts_with(last.as_str());
        head == stem && (tail == last || inflected)
    })
}
