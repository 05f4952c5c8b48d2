//! `rapport analyze` command - run the feedback metrics

use rapport_core::error::Result;
use rapport_core::format::escape_quotes;
use rapport_core::metrics::{self, Metric, MetricResult, Report};
use rapport_core::transcript::TranscriptSource;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_json, print_records_header};

/// Execute the analyze command. An empty `only` runs every metric.
pub fn execute(ctx: &CommandContext, me: &str, partner: &str, only: &[Metric]) -> Result<()> {
    let db = ctx.open_database()?;
    let transcript = db.get_transcript(me, partner)?;
    let options = ctx.analysis_options();

    let selected = if only.is_empty() { &Metric::ALL[..] } else { only };
    let report = metrics::analyze(&transcript, selected, &options);

    tracing::debug!(
        me,
        partner,
        messages = report.messages,
        metrics = report.results.len(),
        "analysis complete"
    );

    output_by_format_result!(ctx.cli.format,
        json => print_json(&report),
        human => { print_human(&report); },
        records => { print_records(&report)?; }
    )
}

fn print_human(report: &Report) {
    println!(
        "{} / {} ({} messages)",
        report.me, report.partner, report.messages
    );
    println!();
    for result in &report.results {
        println!("  {:<13} {}", result.metric.name(), result.label);
    }
}

fn print_records(report: &Report) -> Result<()> {
    print_records_header(
        "analyze",
        &[
            ("me", report.me.clone()),
            ("partner", report.partner.clone()),
            ("messages", report.messages.to_string()),
        ],
    );
    for result in &report.results {
        println!("{}", records_line(result)?);
    }
    Ok(())
}

/// `R <metric> verdict=<verdict> <evidence k=v...> "<label>"`
fn records_line(result: &MetricResult) -> Result<String> {
    let verdict = serde_json::to_value(result.verdict)?;
    let mut line = format!(
        "R {} verdict={}",
        result.metric.name(),
        verdict.as_str().unwrap_or_default()
    );

    if let serde_json::Value::Object(fields) = serde_json::to_value(&result.evidence)? {
        for (key, value) in fields {
            line.push_str(&format!(" {}={}", key, value));
        }
    }

    line.push_str(&format!(" \"{}\"", escape_quotes(&result.label)));
    Ok(line)
}
