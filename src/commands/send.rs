//! `rapport send` command - record one chat message

use chrono::NaiveDateTime;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_json_status, print_records_header};
use rapport_core::error::Result;

/// Execute the send command
pub fn execute(
    ctx: &CommandContext,
    from: &str,
    to: &str,
    at: Option<NaiveDateTime>,
    text: &str,
) -> Result<()> {
    let db = ctx.open_database()?;
    let id = db.save_message(from, to, text, at)?;
    let quiet = ctx.cli.quiet;

    output_by_format_result!(ctx.cli.format,
        json => print_json_status("ok", &[
            ("id", serde_json::json!(id)),
            ("from", serde_json::json!(from)),
            ("to", serde_json::json!(to)),
        ]),
        human => {
            if !quiet {
                println!("Message {} recorded ({} -> {})", id, from, to);
            }
        },
        records => {
            print_records_header("send", &[
                ("id", id.to_string()),
                ("from", from.to_string()),
                ("to", to.to_string()),
            ]);
        }
    )
}
