//! Subcommands and their arguments

use clap::Subcommand;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use rapport_core::metrics::Metric;

use crate::cli::parse::{parse_metric, parse_timestamp};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the database (safe to run again)
    Init,

    /// Record a chat message
    Send {
        /// Sender
        #[arg(long)]
        from: String,

        /// Receiver
        #[arg(long)]
        to: String,

        /// Send time (YYYY-MM-DD HH:MM:SS, default: now)
        #[arg(long, value_parser = parse_timestamp)]
        at: Option<NaiveDateTime>,

        /// Message text
        text: String,
    },

    /// Import messages from a JSON file (array of {sender, receiver, message, timestamp})
    Import {
        /// File to read, or `-` for stdin
        file: PathBuf,
    },

    /// Analyze the conversation between two participants
    Analyze {
        /// Participant the feedback is about
        #[arg(long)]
        me: String,

        /// The other participant
        #[arg(long)]
        partner: String,

        /// Only run these metrics (repeatable; name or function name)
        #[arg(long, short, value_parser = parse_metric, action = clap::ArgAction::Append)]
        metric: Vec<Metric>,
    },

    /// Manual feedback notes about a conversation partner
    Feedback {
        #[command(subcommand)]
        command: FeedbackCommands,
    },

    /// Print the ordered transcript between two participants
    Transcript {
        #[arg(long)]
        me: String,

        #[arg(long)]
        partner: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum FeedbackCommands {
    /// Save a feedback note
    Add {
        /// Author of the note
        #[arg(long)]
        me: String,

        /// Partner the note is about
        #[arg(long)]
        partner: String,

        /// Note text (at most 150 characters by default)
        text: String,
    },

    /// List feedback notes, newest first
    List {
        #[arg(long)]
        me: String,

        #[arg(long)]
        partner: String,
    },
}
