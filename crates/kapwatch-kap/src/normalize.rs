//! Normalization of API disclosure records into report rows.

use kapwatch_core::types::{clean_cell, ReportRow};

use crate::types::Disclosure;

const DETAIL_BASE_URL: &str = "https://www.kap.org.tr/tr/Bildirim";

/// Converts raw API records into ordered, cleaned [`ReportRow`]s.
///
/// Sequence numbers are 1-based, text fields are newline-flattened, and a
/// detail link is attached when the record carries a disclosure index.
#[must_use]
pub fn normalize_disclosures(records: &[Disclosure]) -> Vec<ReportRow> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| ReportRow {
            seq: i + 1,
            date: cleaned(r.publish_date.as_deref()),
            stock_code: cleaned(r.stock_codes.as_deref()),
            company: cleaned(r.kap_title.as_deref()),
            subject: cleaned(r.subject.as_deref()),
            summary: cleaned(r.summary.as_deref()),
            related: cleaned(r.related_stocks.as_deref()),
            link: r.disclosure_index.map(detail_link),
        })
        .collect()
}

/// Builds the public detail-page URL for a disclosure index.
#[must_use]
pub fn detail_link(disclosure_index: i64) -> String {
    format!("{DETAIL_BASE_URL}/{disclosure_index}")
}

fn cleaned(value: Option<&str>) -> String {
    value.map(clean_cell).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, index: Option<i64>) -> Disclosure {
        Disclosure {
            publish_date: Some("22.07.2025 18:05".to_string()),
            stock_codes: Some("ACME".to_string()),
            kap_title: Some(title.to_string()),
            subject: Some("Özel Durum Açıklaması".to_string()),
            summary: Some("line one\\nline two".to_string()),
            related_stocks: None,
            disclosure_index: index,
        }
    }

    #[test]
    fn rows_are_numbered_from_one() {
        let rows = normalize_disclosures(&[record("A", None), record("B", None)]);
        assert_eq!(rows[0].seq, 1);
        assert_eq!(rows[1].seq, 2);
    }

    #[test]
    fn missing_fields_become_empty_strings() {
        let rows = normalize_disclosures(&[record("ACME A.Ş.", None)]);
        assert_eq!(rows[0].related, "");
    }

    #[test]
    fn summary_newlines_are_flattened() {
        let rows = normalize_disclosures(&[record("ACME A.Ş.", None)]);
        assert_eq!(rows[0].summary, "line one line two");
    }

    #[test]
    fn detail_link_attached_when_index_present() {
        let rows = normalize_disclosures(&[record("ACME A.Ş.", Some(1234567))]);
        assert_eq!(
            rows[0].link.as_deref(),
            Some("https://www.kap.org.tr/tr/Bildirim/1234567")
        );
    }

    #[test]
    fn no_link_without_index() {
        let rows = normalize_disclosures(&[record("ACME A.Ş.", None)]);
        assert!(rows[0].link.is_none());
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(normalize_disclosures(&[]).is_empty());
    }
}
