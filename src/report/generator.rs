//! Report generation.
//!
//! Renders the grouped counts either as an aligned text table or as a JSON
//! document.

use crate::models::{GroupRow, Report};
use anyhow::Result;

const COUNT_HEADER: &str = "Count";
const TRAINING_HEADER: &str = "Training Years";
const EVALUATION_HEADER: &str = "Evaluation Years";

/// Minimum width of the count column.
const MIN_COUNT_WIDTH: usize = 5;

/// Widths of the three table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub count: usize,
    pub training: usize,
    pub evaluation: usize,
}

impl ColumnWidths {
    /// Widest of the header text and every cell, per column.
    pub fn compute(rows: &[GroupRow]) -> Self {
        let mut widths = Self {
            count: MIN_COUNT_WIDTH.max(COUNT_HEADER.len()),
            training: TRAINING_HEADER.len(),
            evaluation: EVALUATION_HEADER.len(),
        };

        for row in rows {
            widths.count = widths.count.max(row.count.to_string().len());
            widths.training = widths.training.max(row.training_years.to_string().len());
            widths.evaluation = widths
                .evaluation
                .max(row.evaluation_years.to_string().len());
        }

        widths
    }
}

/// Generate the full text report: status line, blank line, then the table.
pub fn generate_text_report(report: &Report) -> String {
    let mut output = String::new();

    output.push_str(&generate_status_line(report));
    output.push('\n');
    output.push('\n');
    output.push_str(&generate_table(&report.groups));

    output
}

/// One-line summary of the run.
pub fn generate_status_line(report: &Report) -> String {
    format!(
        "Processed {} files from {} in {}ms",
        report.metadata.files_processed,
        report.metadata.index_directory,
        report.metadata.duration_ms
    )
}

/// Render the groups as an aligned table, one line per group.
pub fn generate_table(rows: &[GroupRow]) -> String {
    let widths = ColumnWidths::compute(rows);
    let mut table = String::new();

    table.push_str(&format_line(
        COUNT_HEADER,
        TRAINING_HEADER,
        EVALUATION_HEADER,
        &widths,
    ));
    table.push_str(&format!(
        "{}  {}\t{}\n",
        "-".repeat(widths.count),
        "-".repeat(widths.training),
        "-".repeat(widths.evaluation)
    ));

    for row in rows {
        table.push_str(&format_line(
            &row.count.to_string(),
            &row.training_years.to_string(),
            &row.evaluation_years.to_string(),
            &widths,
        ));
    }

    table
}

fn format_line(count: &str, training: &str, evaluation: &str, widths: &ColumnWidths) -> String {
    format!(
        "{:>cw$}: {:<tw$}\t{:<ew$}\n",
        count,
        training,
        evaluation,
        cw = widths.count,
        tw = widths.training,
        ew = widths.evaluation
    )
}

/// Generate a JSON report.
pub fn generate_json_report(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}
