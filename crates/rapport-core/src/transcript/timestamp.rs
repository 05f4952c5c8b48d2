//! Timestamp parsing and formatting for transcript rows
//!
//! Stored timestamps are naive local-time strings (`YYYY-MM-DD HH:MM:SS`).
//! They are parsed once, at the boundary; a malformed value is a data error.

use chrono::NaiveDateTime;

use crate::error::{RapportError, Result};

/// Wire format for stored message and feedback timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a stored timestamp string
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT).map_err(|e| {
        RapportError::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        }
    })
}

/// Format a timestamp in the stored wire format
pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Serde adapter so timestamps serialize in the wire format rather than ISO 8601
pub mod serde_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &NaiveDateTime,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_timestamp(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_valid_timestamp() {
        let ts = parse_timestamp("2024-01-31 23:59:58").unwrap();
        assert_eq!(ts.hour(), 23);
        assert_eq!(ts.second(), 58);
    }

    #[test]
    fn test_parse_rejects_iso_t_separator() {
        let err = parse_timestamp("2024-01-31T23:59:58").unwrap_err();
        assert!(matches!(err, RapportError::InvalidTimestamp { .. }));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_err());
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn test_format_matches_wire_format() {
        let ts = parse_timestamp("2024-03-05 07:08:09").unwrap();
        assert_eq!(format_timestamp(&ts), "2024-03-05 07:08:09");
    }
}
