//! Command dispatch logic for rapport

use std::time::Instant;

use crate::cli::Cli;
use rapport_core::config::RapportConfig;
use rapport_core::error::Result;
use tracing::debug;

mod command;
mod commands;
mod macros;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = RapportConfig::discover(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
