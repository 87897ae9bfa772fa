//! Table output formatting for CLI commands
//!
//! Renders issue batches, submission reports, and the label list using
//! comfy-table.

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use std::env;

use crate::domain::models::{IssueBatch, Label, SubmissionOutcome, SubmissionReport};

use super::truncate;

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
        }
    }

    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Format an extracted batch
    pub fn format_batch(&self, batch: &IssueBatch) -> String {
        let mut table = Self::create_base_table();
        table.set_header(header(&["#", "Title", "Labels", "Body"]));

        for (index, issue) in batch.iter().enumerate() {
            let labels = if issue.labels().is_empty() {
                "-".to_string()
            } else {
                issue.label_names().join(", ")
            };
            table.add_row(vec![
                Cell::new(index + 1),
                Cell::new(truncate(issue.title(), 60)),
                self.colored(labels, Color::Cyan),
                Cell::new(truncate(&issue.body().replace('\n', " "), 60)),
            ]);
        }

        table.to_string()
    }

    /// Format per-issue submission outcomes
    pub fn format_report(&self, report: &SubmissionReport) -> String {
        let mut table = Self::create_base_table();
        table.set_header(header(&["#", "Title", "Status", "Detail"]));

        for (index, result) in report.results.iter().enumerate() {
            let (status, color, detail) = match &result.outcome {
                SubmissionOutcome::Created { issue } => {
                    let detail = if issue.html_url.is_empty() {
                        format!("#{}", issue.number)
                    } else {
                        issue.html_url.clone()
                    };
                    ("created".to_string(), Color::Green, detail)
                }
                SubmissionOutcome::Rejected { status_code, body } => (
                    format!("rejected ({status_code})"),
                    Color::Red,
                    truncate(body, 80),
                ),
                SubmissionOutcome::NetworkFailure { error } => {
                    ("network error".to_string(), Color::Red, truncate(error, 80))
                }
                SubmissionOutcome::Failed { error } => {
                    ("failed".to_string(), Color::Red, truncate(error, 80))
                }
            };

            table.add_row(vec![
                Cell::new(index + 1),
                Cell::new(truncate(&result.title, 50)),
                self.colored(status, color),
                Cell::new(detail),
            ]);
        }

        table.to_string()
    }

    /// Format the closed label list
    pub fn format_labels(&self, labels: &[Label]) -> String {
        let mut table = Self::create_base_table();
        table.set_header(header(&["Label"]));
        for label in labels {
            table.add_row(vec![self.colored(label.as_str().to_string(), Color::Cyan)]);
        }
        table.to_string()
    }

    fn colored(&self, text: String, color: Color) -> Cell {
        if self.use_colors {
            Cell::new(text).fg(color)
        } else {
            Cell::new(text)
        }
    }

    /// Create a base table with common settings
    fn create_base_table() -> Table {
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn header(names: &[&str]) -> Vec<Cell> {
    names
        .iter()
        .map(|name| Cell::new(name).add_attribute(Attribute::Bold))
        .collect()
}

/// Check if color output is supported
fn supports_color() -> bool {
    // Respect NO_COLOR environment variable
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::Term::stdout().is_term()
}
