//! Output formatting functions.

pub mod pretty;

use crate::cli::OutputFormat;
use crate::commands::Report;

/// Format a command report for output.
pub fn format_output(report: &Report, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(report).unwrap_or_default(),
        OutputFormat::Pretty => pretty::format_report(report),
    }
}
