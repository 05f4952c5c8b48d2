//! Turn-taking metrics: balance, questions, responses

use super::stats::{gate, percent, responses};
use super::{AnalysisOptions, Evidence, Metric, MetricResult, Verdict};
use crate::transcript::Transcript;

/// ASCII question mark only; the full-width `？` is deliberately not matched
const QUESTION_MARKER: char = '?';

/// Share of the conversation written by `me`
pub fn auto_feedback(transcript: &Transcript, options: &AnalysisOptions) -> MetricResult {
    let metric = Metric::Balance;
    if let Some(short) = gate(metric, transcript, options) {
        return short;
    }

    let total = transcript.len();
    let mine = transcript.my_messages().count();
    let ratio = mine as f64 / total as f64;

    let verdict = if ratio > 0.7 {
        Verdict::SelfDominates
    } else if ratio < 0.3 {
        Verdict::SelfListens
    } else {
        Verdict::Balanced
    };

    let evidence = Evidence {
        count: Some(mine),
        ratio: Some(ratio),
        percent: Some(percent(ratio)),
        ..Evidence::for_transcript(transcript)
    };
    MetricResult::new(metric, verdict, evidence, options.locale)
}

/// How many of `me`'s messages ask something
pub fn question_feedback(transcript: &Transcript, options: &AnalysisOptions) -> MetricResult {
    let metric = Metric::Questions;
    if let Some(short) = gate(metric, transcript, options) {
        return short;
    }

    let total = transcript.len();
    let questions = transcript
        .my_messages()
        .filter(|m| m.text.contains(QUESTION_MARKER))
        .count();
    let ratio = questions as f64 / total as f64;

    let verdict = if questions == 0 {
        Verdict::NoQuestions
    } else if ratio > 0.5 {
        Verdict::ManyQuestions
    } else {
        Verdict::ModerateQuestions
    };

    let evidence = Evidence {
        count: Some(questions),
        ratio: Some(ratio),
        ..Evidence::for_transcript(transcript)
    };
    MetricResult::new(metric, verdict, evidence, options.locale)
}

/// How often `me` answers right after the partner speaks
pub fn response_feedback(transcript: &Transcript, options: &AnalysisOptions) -> MetricResult {
    let metric = Metric::Response;
    if let Some(short) = gate(metric, transcript, options) {
        return short;
    }

    let answered = responses(transcript);
    let ratio = answered as f64 / transcript.len() as f64;

    let verdict = if ratio > 0.4 {
        Verdict::AttentiveResponder
    } else {
        Verdict::QuestionOrSilenceCentered
    };

    let evidence = Evidence {
        count: Some(answered),
        ratio: Some(ratio),
        percent: Some(percent(ratio)),
        ..Evidence::for_transcript(transcript)
    };
    MetricResult::new(metric, verdict, evidence, options.locale)
}
