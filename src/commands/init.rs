//! `rapport init` command - create the database
//!
//! Idempotent: an existing database is opened and its schema checked.
//! Also writes the default config file when none exists and `--config`
//! was not given.

use std::path::PathBuf;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_json_status, print_records_header};
use rapport_core::config::RapportConfig;
use rapport_core::error::Result;

/// Execute the init command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let path = ctx.db_path();
    let existed = path.exists();
    ctx.open_or_create_database()?;
    let written = write_default_config(ctx)?;

    let status = if existed { "exists" } else { "created" };
    let quiet = ctx.cli.quiet;

    output_by_format_result!(ctx.cli.format,
        json => print_json_status("ok", &[
            ("database", serde_json::json!(path.display().to_string())),
            ("created", serde_json::json!(!existed)),
            ("config_written", serde_json::json!(written.as_ref().map(|p| p.display().to_string()))),
        ]),
        human => {
            if !quiet {
                if existed {
                    println!("Database already initialized at {}", path.display());
                } else {
                    println!("Initialized rapport database at {}", path.display());
                }
                if let Some(config_path) = &written {
                    println!("Wrote default config to {}", config_path.display());
                }
            }
        },
        records => {
            print_records_header("init", &[
                ("database", path.display().to_string()),
                ("status", status.to_string()),
            ]);
        }
    )
}

/// Save the effective config to the default location if nothing is there yet
fn write_default_config(ctx: &CommandContext) -> Result<Option<PathBuf>> {
    if ctx.cli.config.is_some() {
        return Ok(None);
    }
    let path = RapportConfig::default_path()?;
    if path.exists() {
        return Ok(None);
    }
    ctx.config.save(&path)?;
    tracing::debug!(path = %path.display(), "wrote default config");
    Ok(Some(path))
}
