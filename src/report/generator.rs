//! Markdown and JSON report generation.
//!
//! This module renders the computed statistics into a Markdown document
//! or a machine-readable JSON report.

use crate::models::{ReignStats, ReportMetadata, StatsReport};
use anyhow::Result;

/// Options controlling report contents.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Include the per-house totals table.
    pub include_house_table: bool,
    /// Include the first-name frequency table.
    pub include_name_table: bool,
    /// Maximum rows per table.
    pub max_table_rows: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            include_house_table: true,
            include_name_table: true,
            max_table_rows: 20,
        }
    }
}

impl From<&crate::config::ReportConfig> for ReportOptions {
    fn from(config: &crate::config::ReportConfig) -> Self {
        Self {
            include_house_table: config.include_house_table,
            include_name_table: config.include_name_table,
            max_table_rows: config.max_table_rows,
        }
    }
}

/// Generate a complete Markdown report.
pub fn generate_markdown_report(report: &StatsReport, options: &ReportOptions) -> String {
    let mut output = String::new();

    output.push_str("# Reignstat Report\n\n");
    output.push_str(&generate_metadata_section(&report.metadata));
    output.push_str(&generate_summary_section(&report.stats));

    if options.include_house_table {
        output.push_str(&generate_house_section(report, options.max_table_rows));
    }
    if options.include_name_table {
        output.push_str(&generate_name_section(report, options.max_table_rows));
    }

    output.push_str(&generate_footer());

    output
}

/// Generate the metadata section.
fn generate_metadata_section(metadata: &ReportMetadata) -> String {
    let mut section = String::new();

    section.push_str("## Metadata\n\n");
    section.push_str(&format!("- **Dataset:** {}\n", metadata.dataset_source));
    section.push_str(&format!(
        "- **Generated:** {}\n",
        metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    section.push_str(&format!(
        "- **Reference Year:** {}\n",
        metadata.reference_year
    ));
    section.push_str(&format!(
        "- **Duration:** {:.1}s\n",
        metadata.duration_seconds
    ));
    section.push('\n');

    section
}

/// Generate the headline statistics section.
fn generate_summary_section(stats: &ReignStats) -> String {
    let mut section = String::new();

    section.push_str("## Summary\n\n");
    section.push_str(&format!(
        "- **Total Monarchs:** {}\n",
        stats.total_monarchs
    ));
    section.push_str(&format!(
        "- **Longest Reign:** {} ({} years)\n",
        stats.longest_reign.name, stats.longest_reign.years
    ));
    section.push_str(&format!(
        "- **Longest Ruling House:** {} ({} years total)\n",
        stats.longest_house.house, stats.longest_house.years
    ));
    section.push_str(&format!(
        "- **Most Common First Name:** {}\n",
        stats.most_common_first_name
    ));
    section.push('\n');

    section
}

/// Generate the per-house totals table.
fn generate_house_section(report: &StatsReport, max_rows: usize) -> String {
    let mut section = String::new();

    section.push_str("## Reign Duration by House\n\n");
    section.push_str("| House | Years |\n");
    section.push_str("|:---|:---:|\n");

    let mut totals: Vec<_> = report.house_totals.iter().collect();
    totals.sort_by_key(|t| std::cmp::Reverse(t.years));

    for total in totals.iter().take(max_rows) {
        section.push_str(&format!("| {} | {} |\n", total.house, total.years));
    }
    section.push('\n');

    section
}

/// Generate the first-name frequency table.
fn generate_name_section(report: &StatsReport, max_rows: usize) -> String {
    let mut section = String::new();

    section.push_str("## First Name Frequency\n\n");
    section.push_str("| Name | Count |\n");
    section.push_str("|:---|:---:|\n");

    let mut counts: Vec<_> = report.first_name_counts.iter().collect();
    counts.sort_by_key(|(_, count)| std::cmp::Reverse(*count));

    for (name, count) in counts.iter().take(max_rows) {
        section.push_str(&format!("| {} | {} |\n", name, count));
    }
    section.push('\n');

    section
}

/// Generate the report footer.
fn generate_footer() -> String {
    format!(
        "---\n\n*Generated by Reignstat v{}*\n",
        env!("CARGO_PKG_VERSION")
    )
}

/// Generate a JSON report.
pub fn generate_json_report(report: &StatsReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}
