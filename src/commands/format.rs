//! Shared output helpers for commands

use serde::Serialize;
use serde_json::json;

use rapport_core::error::Result;

pub use crate::output_by_format_result;

/// Pretty-print any serializable value as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a JSON status message with extra fields
pub fn print_json_status(status: &str, extra_fields: &[(&str, serde_json::Value)]) -> Result<()> {
    let mut output = json!({ "status": status });

    if let Some(obj) = output.as_object_mut() {
        for (key, value) in extra_fields {
            obj.insert(key.to_string(), value.clone());
        }
    }

    print_json(&output)
}

/// Print the records header line (`H rapport=1 records=1 mode=... k=v ...`)
pub fn print_records_header(mode: &str, fields: &[(&str, String)]) {
    let mut line = format!("H rapport=1 records=1 mode={}", mode);
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    println!("{}", line);
}
