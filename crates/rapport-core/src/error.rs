//! Error types and exit codes for rapport
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed timestamp, foreign speaker, missing database, etc.)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the rapport CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed transcript rows, missing database (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<rusqlite::Error> for RapportError {
    fn from(err: rusqlite::Error) -> Self {
        RapportError::Other(err.to_string())
    }
}

/// Errors that can occur during rapport operations
#[derive(Error, Debug)]
pub enum RapportError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("invalid timestamp {value:?}: {reason} (expected YYYY-MM-DD HH:MM:SS)")]
    InvalidTimestamp { value: String, reason: String },

    #[error("invalid transcript: {reason}")]
    InvalidTranscript { reason: String },

    #[error("database not found at {path:?} (run `rapport init`)")]
    DatabaseNotFound { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl RapportError {
    /// Create an error for a failed database operation
    pub fn db_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        RapportError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a row field that could not be read
    pub fn field_extraction(field: &str, error: impl std::fmt::Display) -> Self {
        RapportError::FailedOperation {
            operation: format!("get {}", field),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RapportError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        RapportError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a transcript that breaks the two-party invariant
    pub fn invalid_transcript(reason: impl Into<String>) -> Self {
        RapportError::InvalidTranscript {
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RapportError::UnknownFormat(_)
            | RapportError::DuplicateFormat
            | RapportError::UsageError(_)
            | RapportError::InvalidValue { .. }
            | RapportError::Unsupported { .. } => ExitCode::Usage,

            RapportError::InvalidTimestamp { .. }
            | RapportError::InvalidTranscript { .. }
            | RapportError::DatabaseNotFound { .. } => ExitCode::Data,

            RapportError::Io(_)
            | RapportError::Json(_)
            | RapportError::Toml(_)
            | RapportError::FailedOperation { .. }
            | RapportError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RapportError::UnknownFormat(_) => "unknown_format",
            RapportError::DuplicateFormat => "duplicate_format",
            RapportError::UsageError(_) => "usage_error",
            RapportError::InvalidValue { .. } => "invalid_value",
            RapportError::Unsupported { .. } => "unsupported",
            RapportError::InvalidTimestamp { .. } => "invalid_timestamp",
            RapportError::InvalidTranscript { .. } => "invalid_transcript",
            RapportError::DatabaseNotFound { .. } => "database_not_found",
            RapportError::Io(_) => "io_error",
            RapportError::Json(_) => "json_error",
            RapportError::Toml(_) => "toml_error",
            RapportError::FailedOperation { .. } => "failed_operation",
            RapportError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for rapport operations
pub type Result<T> = std::result::Result<T, RapportError>;
