//! Output formatting for CLI commands.
//!
//! Reports go to stderr so that stdout can carry the sanitized plan.

use colored::Colorize;
use tabled::{Table, Tabled};

use crate::document::DocumentHasher;
use crate::sanitize::RedactionReport;

use super::commands::OutputFormat;

/// Output formatter for CLI.
#[derive(Debug)]
pub struct OutputFormatter {
    /// Output format.
    format: OutputFormat,
}

/// Report section row for table display.
#[derive(Tabled)]
struct SectionRow {
    #[tabled(rename = "Section")]
    section: String,
    #[tabled(rename = "Redacted")]
    redacted: usize,
}

impl OutputFormatter {
    /// Creates a new output formatter.
    #[must_use]
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a redaction report for display.
    #[must_use]
    pub fn format_report(&self, report: &RedactionReport) -> String {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(report).unwrap_or_default(),
            OutputFormat::Text => Self::format_report_text(report),
        }
    }

    /// Formats a report as text.
    fn format_report_text(report: &RedactionReport) -> String {
        if report.is_clean() {
            return format!("{} No sensitive values found.\n", "✓".green());
        }

        let rows: Vec<SectionRow> = report
            .sections()
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(section, redacted)| SectionRow {
                section: section.replace('_', " "),
                redacted,
            })
            .collect();

        let mut output = format!(
            "{} Redacted {} sensitive values\n\n{}\n",
            "✓".green(),
            report.total().to_string().bold(),
            Table::new(rows)
        );

        if let Some(digest) = &report.digest {
            output.push_str(&format!(
                "\nSHA-256: {}\n",
                DocumentHasher::new().short_hash(digest).dimmed()
            ));
        }

        output
    }
}
