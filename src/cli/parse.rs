use chrono::NaiveDateTime;
use rapport_core::metrics::{Locale, Metric};

/// Parse a label locale from string
pub fn parse_locale(s: &str) -> std::result::Result<Locale, String> {
    s.parse::<Locale>().map_err(|e| e.to_string())
}

/// Parse a metric name or function name
pub fn parse_metric(s: &str) -> std::result::Result<Metric, String> {
    s.parse::<Metric>().map_err(|e| e.to_string())
}

/// Parse a `YYYY-MM-DD HH:MM:SS` timestamp
pub fn parse_timestamp(s: &str) -> std::result::Result<NaiveDateTime, String> {
    rapport_core::transcript::parse_timestamp(s).map_err(|e| e.to_string())
}
