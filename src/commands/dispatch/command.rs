//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use rapport_core::bail_usage;
use rapport_core::config::RapportConfig;
use rapport_core::db::Database;
use rapport_core::error::Result;
use rapport_core::metrics::AnalysisOptions;

use super::macros::trace_command;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: RapportConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: RapportConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// `--db` wins over the configured database path
    pub fn db_path(&self) -> PathBuf {
        self.cli
            .db
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.config.database))
    }

    /// Open an existing database
    pub fn open_database(&self) -> Result<Database> {
        let db = Database::open(&self.db_path())?.with_config(&self.config);
        trace_command!(self.start, "open_database");
        Ok(db)
    }

    /// Open the database, creating it if needed
    pub fn open_or_create_database(&self) -> Result<Database> {
        let db = Database::open_or_create(&self.db_path())?.with_config(&self.config);
        trace_command!(self.start, "open_database");
        Ok(db)
    }

    /// Metric options from config, with `--locale` applied
    pub fn analysis_options(&self) -> AnalysisOptions {
        let mut options = self.config.analysis_options();
        if let Some(locale) = self.cli.locale {
            options.locale = locale;
        }
        options
    }
}

/// Reject a conversation "between" a participant and themselves
pub fn require_pair(me: &str, partner: &str) -> Result<()> {
    if me.trim().is_empty() || partner.trim().is_empty() {
        bail_usage!("--me and --partner must not be empty");
    }
    if me == partner {
        bail_usage!(format!("--me and --partner must differ (both are {:?})", me));
    }
    Ok(())
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("rapport {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Conversation feedback for two-party chats.");
        println!();
        println!("Run `rapport --help` for usage information.");
        Ok(())
    }
}
