//! Shared statistics over a transcript: validity gate, gaps, turn switches

use chrono::TimeDelta;

use super::{AnalysisOptions, Metric, MetricResult};
use crate::transcript::Transcript;

/// Returns the metric's insufficient-data result when the transcript is shorter
/// than the metric's minimum length
pub fn gate(metric: Metric, transcript: &Transcript, options: &AnalysisOptions) -> Option<MetricResult> {
    if transcript.len() < metric.min_len() {
        Some(MetricResult::insufficient(metric, transcript.len(), options.locale))
    } else {
        None
    }
}

/// Seconds between each pair of consecutive messages (N-1 values)
pub fn gaps_secs(transcript: &Transcript) -> Vec<f64> {
    transcript
        .messages()
        .windows(2)
        .map(|pair| (pair[1].sent_at - pair[0].sent_at).num_seconds() as f64)
        .collect()
}

/// Mean inter-message gap in seconds; `None` below two messages
pub fn mean_gap_secs(transcript: &Transcript) -> Option<f64> {
    let gaps = gaps_secs(transcript);
    if gaps.is_empty() {
        return None;
    }
    Some(gaps.iter().sum::<f64>() / gaps.len() as f64)
}

/// Number of consecutive pairs whose speakers differ
pub fn turn_switches(transcript: &Transcript) -> usize {
    transcript
        .messages()
        .windows(2)
        .filter(|pair| pair[0].speaker != pair[1].speaker)
        .count()
}

/// Turn switches divided by consecutive pairs; `None` below two messages
pub fn switch_ratio(transcript: &Transcript) -> Option<f64> {
    let pairs = transcript.len().checked_sub(1).filter(|&n| n > 0)?;
    Some(turn_switches(transcript) as f64 / pairs as f64)
}

/// Transitions where the partner spoke and `me` answered next
pub fn responses(transcript: &Transcript) -> usize {
    transcript
        .messages()
        .windows(2)
        .filter(|pair| !transcript.is_mine(&pair[0]) && transcript.is_mine(&pair[1]))
        .count()
}

/// Time between first and last message; `None` for an empty transcript
pub fn span(transcript: &Transcript) -> Option<TimeDelta> {
    Some(transcript.last()?.sent_at - transcript.first()?.sent_at)
}

/// Whole percentage, truncated toward zero
pub fn percent(ratio: f64) -> u32 {
    (ratio * 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(rows: &[(&str, &str)]) -> Transcript {
        Transcript::from_rows("me", "you", rows.iter().map(|(s, at)| (*s, "text", *at))).unwrap()
    }

    #[test]
    fn test_gaps_and_mean() {
        let t = transcript(&[
            ("me", "2024-01-01 10:00:00"),
            ("you", "2024-01-01 10:00:30"),
            ("me", "2024-01-01 10:01:30"),
        ]);
        assert_eq!(gaps_secs(&t), vec![30.0, 60.0]);
        assert_eq!(mean_gap_secs(&t), Some(45.0));
    }

    #[test]
    fn test_mean_gap_needs_two_messages() {
        let t = transcript(&[("me", "2024-01-01 10:00:00")]);
        assert_eq!(mean_gap_secs(&t), None);
        assert_eq!(switch_ratio(&t), None);
    }

    #[test]
    fn test_switch_ratio_and_responses() {
        let t = transcript(&[
            ("me", "2024-01-01 10:00:00"),
            ("you", "2024-01-01 10:00:01"),
            ("me", "2024-01-01 10:00:02"),
            ("me", "2024-01-01 10:00:03"),
            ("you", "2024-01-01 10:00:04"),
        ]);
        assert_eq!(turn_switches(&t), 3);
        assert_eq!(switch_ratio(&t), Some(0.75));
        // only you -> me counts
        assert_eq!(responses(&t), 1);
    }

    #[test]
    fn test_percent_truncates() {
        assert_eq!(percent(0.999), 99);
        assert_eq!(percent(1.0), 100);
        assert_eq!(percent(2.0 / 3.0), 66);
    }

    #[test]
    fn test_span() {
        let t = transcript(&[("me", "2024-01-01 10:00:00"), ("you", "2024-01-01 11:30:00")]);
        assert_eq!(span(&t).map(|d| d.num_minutes()), Some(90));
    }
}
