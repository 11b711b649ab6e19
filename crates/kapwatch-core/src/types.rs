//! Shared report types produced by both the API and browser extraction paths.

use serde::Serialize;

/// One normalized row of the daily disclosure report.
///
/// Field values are already cleaned (no embedded newlines) and empty strings
/// stand in for anything the platform omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// 1-based position in the report table.
    pub seq: usize,
    /// Publication timestamp as shown by the platform.
    pub date: String,
    /// Ticker code(s) of the disclosing company.
    pub stock_code: String,
    /// Company display name.
    pub company: String,
    /// Disclosure subject line.
    pub subject: String,
    /// Free-text summary.
    pub summary: String,
    /// Other companies named in the disclosure.
    pub related: String,
    /// Link to the disclosure detail page, when the platform exposes one.
    pub link: Option<String>,
}

/// Flattens embedded newlines (literal and the escaped two-character `\n`
/// sequence the API sometimes emits) and collapses runs of whitespace.
#[must_use]
pub fn clean_cell(raw: &str) -> String {
    raw.replace("\\n", " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
