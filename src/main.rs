//! Rapport - conversation feedback analytics CLI
//!
//! Records two-party chat transcripts and reports qualitative feedback on
//! them: turn balance, pacing, questions, emotional language, vocabulary
//! and relationship continuity.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use rapport_core::error::{ExitCode as RapportExitCode, RapportError};
use rapport_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(RapportExitCode::Success as u8),
        Err(e) => {
            report(&e, cli.format, cli.quiet);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// clap rejected argv before `Cli.format` exists. JSON callers still get an
/// envelope; everyone else gets clap's own message.
fn parse_failure(err: clap::Error) -> ExitCode {
    let formats = format_values(env::args().skip(1));
    let wants_json = formats.iter().any(|f| f == "json");
    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) || !wants_json {
        err.exit();
    }

    let error = if formats.len() > 1 {
        RapportError::DuplicateFormat
    } else {
        RapportError::UsageError(err.to_string())
    };
    report(&error, OutputFormat::Json, false);
    ExitCode::from(error.exit_code() as u8)
}

fn report(error: &RapportError, format: OutputFormat, quiet: bool) {
    if format == OutputFormat::Json {
        eprintln!("{}", error.to_json());
    } else if !quiet {
        eprintln!("error: {}", error);
    }
}

/// Every value passed to `--format`, in order
fn format_values(args: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut values = Vec::new();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--format" {
            values.extend(args.next());
        } else if let Some(value) = arg.strip_prefix("--format=") {
            values.push(value.to_string());
        }
    }
    values
}
