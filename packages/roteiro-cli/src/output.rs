//! Terminal output.

use anyhow::{Context, Result};
use colored::Colorize;
use itinerary_extract::{ExtractionReport, View};

/// Print a view as colored text, or as JSON.
pub fn print_view(view: &View, json: bool) -> Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(view).context("Failed to serialize view")?;
        println!("{}", rendered);
        return Ok(());
    }

    let heading = match view {
        View::Error { .. } => view.heading().bright_red().bold(),
        _ => view.heading().bright_cyan().bold(),
    };
    println!("{}", heading);
    println!();
    println!("{}", view.body());
    Ok(())
}

/// Print extraction diagnostics to stderr.
pub fn print_report(report: &ExtractionReport) {
    let resolved_by = report
        .resolved_by
        .map(|s| s.to_string())
        .unwrap_or_else(|| "none".to_string());

    eprintln!("{}", "Extraction report".bright_yellow().bold());
    eprintln!("  rounds:      {}", report.rounds);
    eprintln!("  resolved by: {}", resolved_by);
    eprintln!(
        "  outcome:     {}",
        if report.outcome.is_structured() {
            "structured"
        } else {
            "fallback"
        }
    );
    if let Some(reason) = &report.fallback_reason {
        eprintln!("  reason:      {}", reason);
    }
}
