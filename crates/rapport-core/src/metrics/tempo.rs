//! Timing metrics: pace, length, relationship span, flow

use super::stats::{gate, mean_gap_secs, percent, span, switch_ratio};
use super::{AnalysisOptions, Evidence, Metric, MetricResult, Verdict};
use crate::transcript::Transcript;

/// Average silence between messages
pub fn silence_feedback(transcript: &Transcript, options: &AnalysisOptions) -> MetricResult {
    let metric = Metric::Silence;
    if let Some(short) = gate(metric, transcript, options) {
        return short;
    }
    let Some(mean_gap) = mean_gap_secs(transcript) else {
        return MetricResult::insufficient(metric, transcript.len(), options.locale);
    };

    let verdict = if mean_gap > 300.0 {
        Verdict::LongSilences
    } else if mean_gap > 60.0 {
        Verdict::ModeratePacing
    } else {
        Verdict::BriskPace
    };

    let evidence = Evidence {
        mean_gap_secs: Some(mean_gap as u64),
        ..Evidence::for_transcript(transcript)
    };
    MetricResult::new(metric, verdict, evidence, options.locale)
}

/// Message count and minutes from first to last message
pub fn length_feedback(transcript: &Transcript, options: &AnalysisOptions) -> MetricResult {
    let metric = Metric::Length;
    if let Some(short) = gate(metric, transcript, options) {
        return short;
    }
    let Some(elapsed) = span(transcript) else {
        return MetricResult::insufficient(metric, transcript.len(), options.locale);
    };

    let count = transcript.len();
    let minutes = elapsed.num_seconds() as f64 / 60.0;

    let verdict = if count > 20 && minutes > 30.0 {
        Verdict::SustainedConversation
    } else {
        Verdict::BriefConversation
    };

    let evidence = Evidence {
        count: Some(count),
        minutes: Some(minutes as i64),
        ..Evidence::for_transcript(transcript)
    };
    MetricResult::new(metric, verdict, evidence, options.locale)
}

/// Whole days the pair has been talking, floored
pub fn continuity_duration_feedback(
    transcript: &Transcript,
    options: &AnalysisOptions,
) -> MetricResult {
    let metric = Metric::Relationship;
    if let Some(short) = gate(metric, transcript, options) {
        return short;
    }
    let Some(elapsed) = span(transcript) else {
        return MetricResult::insufficient(metric, transcript.len(), options.locale);
    };

    let days = elapsed.num_days();
    let verdict = match days {
        d if d >= 30 => Verdict::SustainedDialogue,
        d if d >= 7 => Verdict::StableExchange,
        d if d >= 2 => Verdict::BuddingDialogue,
        _ => Verdict::JustStarted,
    };

    let evidence = Evidence {
        days: Some(days),
        ..Evidence::for_transcript(transcript)
    };
    MetricResult::new(metric, verdict, evidence, options.locale)
}

/// Tempo and turn alternation together
pub fn continuity_feedback(transcript: &Transcript, options: &AnalysisOptions) -> MetricResult {
    let metric = Metric::Flow;
    if let Some(short) = gate(metric, transcript, options) {
        return short;
    }
    let (Some(mean_gap), Some(switches)) = (mean_gap_secs(transcript), switch_ratio(transcript))
    else {
        return MetricResult::insufficient(metric, transcript.len(), options.locale);
    };

    let verdict = if mean_gap < 90.0 && switches > 0.6 {
        Verdict::NaturalFlow
    } else if mean_gap < 180.0 {
        Verdict::ModerateTempo
    } else {
        Verdict::IntermittentFlow
    };

    let evidence = Evidence {
        ratio: Some(switches),
        mean_gap_secs: Some(mean_gap as u64),
        switch_percent: Some(percent(switches)),
        ..Evidence::for_transcript(transcript)
    };
    MetricResult::new(metric, verdict, evidence, options.locale)
}
