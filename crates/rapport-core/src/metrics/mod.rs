//! Conversation feedback metrics
//!
//! Ten independent analyzers over a [`Transcript`]. Each one is a pure
//! function returning a [`MetricResult`]: a bucket ([`Verdict`]), the numbers
//! behind it ([`Evidence`]) and a rendered sentence. Transcripts shorter than
//! a metric's minimum length yield that metric's insufficient-data result.

pub mod labels;
mod language;
pub mod stats;
mod tempo;
mod turns;

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::Serialize;

use crate::error::{RapportError, Result};
use crate::lexicon::LexiconMatch;
use crate::text::Tokenizer;
use crate::transcript::Transcript;

pub use labels::Locale;
pub use language::{disclosure_feedback, diversity_feedback, emotion_feedback};
pub use tempo::{continuity_duration_feedback, continuity_feedback, length_feedback, silence_feedback};
pub use turns::{auto_feedback, question_feedback, response_feedback};

/// The analyzers, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    /// Share of messages written by `me`
    Balance,
    /// `me` messages containing `?`
    Questions,
    /// Mean gap between messages
    Silence,
    /// `me` messages using affect words
    Emotion,
    /// How often `me` answers the partner
    Response,
    /// Message count and elapsed minutes
    Length,
    /// Distinct tokens written by `me`
    Diversity,
    /// `me` messages with introspective markers
    Disclosure,
    /// Days between first and last message
    Relationship,
    /// Tempo and turn-taking together
    Flow,
}

impl Metric {
    pub const ALL: [Metric; 10] = [
        Metric::Balance,
        Metric::Questions,
        Metric::Silence,
        Metric::Emotion,
        Metric::Response,
        Metric::Length,
        Metric::Diversity,
        Metric::Disclosure,
        Metric::Relationship,
        Metric::Flow,
    ];

    /// Minimum number of messages the metric needs
    pub fn min_len(self) -> usize {
        match self {
            Metric::Silence | Metric::Response => 2,
            Metric::Flow => 4,
            _ => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Metric::Balance => "balance",
            Metric::Questions => "questions",
            Metric::Silence => "silence",
            Metric::Emotion => "emotion",
            Metric::Response => "response",
            Metric::Length => "length",
            Metric::Diversity => "diversity",
            Metric::Disclosure => "disclosure",
            Metric::Relationship => "relationship",
            Metric::Flow => "flow",
        }
    }

    /// Name of the analyzer function backing this metric
    pub fn function_name(self) -> &'static str {
        match self {
            Metric::Balance => "auto_feedback",
            Metric::Questions => "question_feedback",
            Metric::Silence => "silence_feedback",
            Metric::Emotion => "emotion_feedback",
            Metric::Response => "response_feedback",
            Metric::Length => "length_feedback",
            Metric::Diversity => "diversity_feedback",
            Metric::Disclosure => "disclosure_feedback",
            Metric::Relationship => "continuity_duration_feedback",
            Metric::Flow => "continuity_feedback",
        }
    }

    /// Run this metric against a transcript
    pub fn evaluate(self, transcript: &Transcript, options: &AnalysisOptions) -> MetricResult {
        match self {
            Metric::Balance => auto_feedback(transcript, options),
            Metric::Questions => question_feedback(transcript, options),
            Metric::Silence => silence_feedback(transcript, options),
            Metric::Emotion => emotion_feedback(transcript, options),
            Metric::Response => response_feedback(transcript, options),
            Metric::Length => length_feedback(transcript, options),
            Metric::Diversity => diversity_feedback(transcript, options),
            Metric::Disclosure => disclosure_feedback(transcript, options),
            Metric::Relationship => continuity_duration_feedback(transcript, options),
            Metric::Flow => continuity_feedback(transcript, options),
        }
    }
}

impl FromStr for Metric {
    type Err = RapportError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Metric::ALL
            .into_iter()
            .find(|m| m.name() == wanted || m.function_name() == wanted)
            .ok_or_else(|| {
                let supported: Vec<_> = Metric::ALL.iter().map(|m| m.name()).collect();
                RapportError::unsupported("metric", s, supported.join(", "))
            })
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bucket a metric placed the transcript in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    InsufficientData,
    // balance
    SelfDominates,
    SelfListens,
    Balanced,
    // questions
    NoQuestions,
    ManyQuestions,
    ModerateQuestions,
    // silence
    LongSilences,
    ModeratePacing,
    BriskPace,
    // emotion
    EmotionRestrained,
    EmotionShared,
    EmotionModerate,
    // response
    AttentiveResponder,
    QuestionOrSilenceCentered,
    // length
    SustainedConversation,
    BriefConversation,
    // diversity
    RichVocabulary,
    ModerateVocabulary,
    LimitedVocabulary,
    // disclosure
    HighDisclosure,
    ModerateDisclosure,
    ReservedDisclosure,
    // relationship
    SustainedDialogue,
    StableExchange,
    BuddingDialogue,
    JustStarted,
    // flow
    NaturalFlow,
    ModerateTempo,
    IntermittentFlow,
}

/// Numbers justifying a verdict. Fields a metric does not use stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Evidence {
    /// Messages in the transcript
    pub messages: usize,
    /// Minimum length the metric required (insufficient-data results only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_len: Option<usize>,
    /// Matching messages or responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f64>,
    /// `ratio` as a truncated whole percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<u32>,
    /// Mean inter-message gap, truncated to whole seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_gap_secs: Option<u64>,
    /// Whole minutes between first and last message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<i64>,
    /// Whole days between first and last message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_tokens: Option<usize>,
    /// Turn-switch ratio as a truncated whole percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_percent: Option<u32>,
}

impl Evidence {
    fn for_transcript(transcript: &Transcript) -> Self {
        Self {
            messages: transcript.len(),
            ..Default::default()
        }
    }
}

/// Outcome of one metric
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricResult {
    pub metric: Metric,
    pub verdict: Verdict,
    pub evidence: Evidence,
    /// Rendered sentence embedding the evidence
    pub label: String,
}

impl MetricResult {
    pub fn new(metric: Metric, verdict: Verdict, evidence: Evidence, locale: Locale) -> Self {
        let label = labels::render(metric, verdict, &evidence, locale);
        tracing::debug!(metric = metric.name(), ?verdict, "metric_evaluated");
        Self {
            metric,
            verdict,
            evidence,
            label,
        }
    }

    pub fn insufficient(metric: Metric, messages: usize, locale: Locale) -> Self {
        let evidence = Evidence {
            messages,
            min_len: Some(metric.min_len()),
            ..Default::default()
        };
        Self::new(metric, Verdict::InsufficientData, evidence, locale)
    }

    pub fn is_insufficient(&self) -> bool {
        self.verdict == Verdict::InsufficientData
    }
}

/// Knobs that affect tokenization, lexicon matching and label language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub locale: Locale,
    pub tokenizer: Tokenizer,
    pub lexicon_match: LexiconMatch,
}

/// Every metric evaluated against one transcript
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub me: String,
    pub partner: String,
    pub messages: usize,
    pub results: Vec<MetricResult>,
}

/// Run every metric. Each metric is evaluated on its own; a short transcript
/// only affects the metrics whose minimum it misses.
pub fn analyze_all(transcript: &Transcript, options: &AnalysisOptions) -> Report {
    analyze(transcript, &Metric::ALL, options)
}

/// Run a chosen subset of metrics, in the order given
pub fn analyze(transcript: &Transcript, metrics: &[Metric], options: &AnalysisOptions) -> Report {
    let start = Instant::now();
    let results = metrics
        .iter()
        .map(|metric| metric.evaluate(transcript, options))
        .collect();
    crate::trace_time!(start, "analyze", metrics = metrics.len(), messages = transcript.len());

    Report {
        me: transcript.me().to_string(),
        partner: transcript.partner().to_string(),
        messages: transcript.len(),
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_parse_accepts_name_and_function() {
        assert_eq!("flow".parse::<Metric>().unwrap(), Metric::Flow);
        assert_eq!(
            "continuity_duration_feedback".parse::<Metric>().unwrap(),
            Metric::Relationship
        );
        assert!(matches!(
            "vibes".parse::<Metric>(),
            Err(RapportError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_min_lengths() {
        assert_eq!(Metric::Balance.min_len(), 1);
        assert_eq!(Metric::Silence.min_len(), 2);
        assert_eq!(Metric::Response.min_len(), 2);
        assert_eq!(Metric::Flow.min_len(), 4);
    }

    #[test]
    fn test_evidence_serialization_skips_unused_fields() {
        let result = MetricResult::insufficient(Metric::Flow, 3, Locale::En);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["metric"], "flow");
        assert_eq!(json["verdict"], "insufficient_data");
        assert_eq!(json["evidence"]["min_len"], 4);
        assert_eq!(json["evidence"]["messages"], 3);
        assert!(json["evidence"].get("days").is_none());
    }
}
