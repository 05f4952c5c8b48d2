//! `rapport feedback` commands - manual notes about a partner

use rapport_core::error::Result;
use rapport_core::feedback::FeedbackStore;
use rapport_core::format::escape_quotes;
use rapport_core::transcript::format_timestamp;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_json, print_records_header};

/// Save one feedback note
pub fn add(ctx: &CommandContext, me: &str, partner: &str, text: &str) -> Result<()> {
    let db = ctx.open_database()?;
    let entry = db.save_feedback(me, partner, text)?;
    let quiet = ctx.cli.quiet;

    output_by_format_result!(ctx.cli.format,
        json => print_json(&entry),
        human => {
            if !quiet {
                println!("Feedback {} saved for {}", entry.id, entry.partner);
            }
        },
        records => {
            print_records_header("feedback.add", &[
                ("id", entry.id.to_string()),
                ("me", entry.author.clone()),
                ("partner", entry.partner.clone()),
            ]);
        }
    )
}

/// List feedback notes, newest first
pub fn list(ctx: &CommandContext, me: &str, partner: &str) -> Result<()> {
    let db = ctx.open_database()?;
    let entries = db.get_feedback(me, partner)?;

    output_by_format_result!(ctx.cli.format,
        json => print_json(&entries),
        human => {
            if entries.is_empty() && !ctx.cli.quiet {
                println!("No feedback for {} yet", partner);
            }
            for entry in &entries {
                println!("[{}] {}", format_timestamp(&entry.created_at), entry.text);
            }
        },
        records => {
            print_records_header("feedback.list", &[
                ("me", me.to_string()),
                ("partner", partner.to_string()),
                ("count", entries.len().to_string()),
            ]);
            for entry in &entries {
                println!(
                    "F {} at=\"{}\" \"{}\"",
                    entry.id,
                    format_timestamp(&entry.created_at),
                    escape_quotes(&entry.text)
                );
            }
        }
    )
}
