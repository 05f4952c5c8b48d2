//! `rapport transcript` command - print the ordered conversation

use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_json, print_records_header};
use rapport_core::error::Result;
use rapport_core::format::escape_quotes;
use rapport_core::transcript::{format_timestamp, TranscriptSource};

/// Execute the transcript command
pub fn execute(ctx: &CommandContext, me: &str, partner: &str) -> Result<()> {
    let db = ctx.open_database()?;
    let transcript = db.get_transcript(me, partner)?;

    output_by_format_result!(ctx.cli.format,
        json => print_json(&transcript),
        human => {
            if transcript.is_empty() && !ctx.cli.quiet {
                println!("No messages between {} and {}", me, partner);
            }
            for message in transcript.messages() {
                println!(
                    "[{}] {}: {}",
                    format_timestamp(&message.sent_at),
                    message.speaker,
                    message.text
                );
            }
        },
        records => {
            print_records_header("transcript", &[
                ("me", me.to_string()),
                ("partner", partner.to_string()),
                ("messages", transcript.len().to_string()),
            ]);
            for message in transcript.messages() {
                println!(
                    "M {} at=\"{}\" \"{}\"",
                    message.speaker,
                    format_timestamp(&message.sent_at),
                    escape_quotes(&message.text)
                );
            }
        }
    )
}
