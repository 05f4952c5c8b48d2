//! CLI argument parsing for rapport
//!
//! Global flags: --db, --config, --format, --locale, --quiet, --verbose,
//! --log-level, --log-json

pub mod commands;
pub mod format;
pub mod output;
pub mod parse;

use clap::Parser;
use std::path::PathBuf;

use rapport_core::metrics::Locale;

pub use commands::{Commands, FeedbackCommands};
pub use output::OutputFormat;
use parse::parse_locale;

/// Rapport - conversation feedback for two-party chats
#[derive(Parser, Debug)]
#[command(name = "rapport")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// SQLite database path (overrides the config file)
    #[arg(long, global = true, env = "RAPPORT_DB")]
    pub db: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Language for metric labels (ja, en)
    #[arg(long, global = true, value_parser = parse_locale)]
    pub locale: Option<Locale>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, rapport_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "rapport",
            "analyze",
            "--me",
            "alice",
            "--partner",
            "bob",
            "--format",
            "json",
            "--locale",
            "en",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.locale, Some(Locale::En));
        assert!(matches!(cli.command, Some(Commands::Analyze { .. })));
    }

    #[test]
    fn test_rejects_unknown_locale() {
        let err = Cli::try_parse_from(["rapport", "--locale", "fr", "init"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
