//! `rapport import` command - load messages from a JSON file

use std::io::Read;
use std::path::Path;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_json_status, print_records_header};
use rapport_core::bail_unsupported;
use rapport_core::db::ImportRow;
use rapport_core::error::Result;

fn read_source(file: &Path) -> Result<String> {
    if file == Path::new("-") {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }

    if let Some(ext) = file.extension().and_then(|e| e.to_str()) {
        if !ext.eq_ignore_ascii_case("json") {
            bail_unsupported!("import file type", ext, "json");
        }
    }
    Ok(std::fs::read_to_string(file)?)
}

/// Execute the import command
pub fn execute(ctx: &CommandContext, file: &Path) -> Result<()> {
    let content = read_source(file)?;
    let rows: Vec<ImportRow> = serde_json::from_str(&content)?;

    let mut db = ctx.open_or_create_database()?;
    let imported = db.import_messages(&rows)?;
    let quiet = ctx.cli.quiet;

    output_by_format_result!(ctx.cli.format,
        json => print_json_status("ok", &[("imported", serde_json::json!(imported))]),
        human => {
            if !quiet {
                println!("Imported {} messages", imported);
            }
        },
        records => {
            print_records_header("import", &[("imported", imported.to_string())]);
        }
    )
}
