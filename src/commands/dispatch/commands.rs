//! Command implementations for all rapport commands

use crate::cli::{Commands, FeedbackCommands};
use crate::commands;
use crate::commands::dispatch::command::{require_pair, Command, CommandContext};
use rapport_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Init => commands::init::execute(ctx),
            Commands::Send { from, to, at, text } => {
                commands::send::execute(ctx, from, to, *at, text)
            }
            Commands::Import { file } => commands::import::execute(ctx, file),
            Commands::Analyze {
                me,
                partner,
                metric,
            } => {
                require_pair(me, partner)?;
                commands::analyze::execute(ctx, me, partner, metric)
            }
            Commands::Feedback { command } => command.execute(ctx),
            Commands::Transcript { me, partner } => {
                require_pair(me, partner)?;
                commands::transcript::execute(ctx, me, partner)
            }
        }
    }
}

impl Command for FeedbackCommands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            FeedbackCommands::Add { me, partner, text } => {
                require_pair(me, partner)?;
                commands::feedback::add(ctx, me, partner, text)
            }
            FeedbackCommands::List { me, partner } => {
                require_pair(me, partner)?;
                commands::feedback::list(ctx, me, partner)
            }
        }
    }
}
