//! Word-level metrics: emotion, vocabulary diversity, self-disclosure

use std::collections::HashSet;

use super::stats::gate;
use super::{AnalysisOptions, Evidence, Metric, MetricResult, Verdict};
use crate::lexicon::{contains_any, DISCLOSURE_KEYWORDS, EMOTION_WORDS};
use crate::transcript::Transcript;

/// `me` messages containing any term of `lexicon`
fn count_matching(transcript: &Transcript, lexicon: &[&str], options: &AnalysisOptions) -> usize {
    transcript
        .my_messages()
        .filter(|m| contains_any(&m.text, lexicon, options.lexicon_match, &options.tokenizer))
        .count()
}

/// How often `me` names a feeling
pub fn emotion_feedback(transcript: &Transcript, options: &AnalysisOptions) -> MetricResult {
    let metric = Metric::Emotion;
    if let Some(short) = gate(metric, transcript, options) {
        return short;
    }

    let count = count_matching(transcript, EMOTION_WORDS, options);
    let verdict = match count {
        0 => Verdict::EmotionRestrained,
        c if c > 5 => Verdict::EmotionShared,
        _ => Verdict::EmotionModerate,
    };

    let evidence = Evidence {
        count: Some(count),
        ..Evidence::for_transcript(transcript)
    };
    MetricResult::new(metric, verdict, evidence, options.locale)
}

/// Distinct tokens across everything `me` wrote
pub fn diversity_feedback(transcript: &Transcript, options: &AnalysisOptions) -> MetricResult {
    let metric = Metric::Diversity;
    if let Some(short) = gate(metric, transcript, options) {
        return short;
    }

    let vocabulary: HashSet<String> = transcript
        .my_messages()
        .flat_map(|m| options.tokenizer.tokenize(&m.text))
        .collect();
    let unique = vocabulary.len();

    let verdict = if unique > 50 {
        Verdict::RichVocabulary
    } else if unique > 20 {
        Verdict::ModerateVocabulary
    } else {
        Verdict::LimitedVocabulary
    };

    let evidence = Evidence {
        unique_tokens: Some(unique),
        ..Evidence::for_transcript(transcript)
    };
    MetricResult::new(metric, verdict, evidence, options.locale)
}

/// How often `me` talks about themselves
pub fn disclosure_feedback(transcript: &Transcript, options: &AnalysisOptions) -> MetricResult {
    let metric = Metric::Disclosure;
    if let Some(short) = gate(metric, transcript, options) {
        return short;
    }

    let count = count_matching(transcript, DISCLOSURE_KEYWORDS, options);
    let verdict = if count > 10 {
        Verdict::HighDisclosure
    } else if count > 3 {
        Verdict::ModerateDisclosure
    } else {
        Verdict::ReservedDisclosure
    };

    let evidence = Evidence {
        count: Some(count),
        ..Evidence::for_transcript(transcript)
    };
    MetricResult::new(metric, verdict, evidence, options.locale)
}
