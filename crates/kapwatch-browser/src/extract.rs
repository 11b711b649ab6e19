//! The four-step browser extraction sequence.
//!
//! 1. Open the disclosure query page and apply the index filter.
//! 2. Set the from-date through the date-picker widget.
//! 3. Set the to-date the same way.
//! 4. Run the query and read the result table out of the DOM.

use std::time::Duration;

use chrono::NaiveDate;
use kapwatch_core::types::{clean_cell, ReportRow};

use crate::driver::{wait_for, PageDriver};
use crate::error::BrowserError;
use crate::picker::{select_date, PickerSelectors};

const PAGE_TIMEOUT: Duration = Duration::from_secs(20);
const RESULTS_TIMEOUT: Duration = Duration::from_secs(30);

/// Columns of the platform's result table, in display order.
const EXPECTED_CELLS: usize = 6;

/// CSS selectors for the disclosure query page.
#[derive(Debug, Clone)]
pub struct QuerySelectors {
    /// Control that opens the index filter list.
    pub filter_toggle: String,
    /// Prefix for filter list entries; options carry the index name in a
    /// `data-label` attribute.
    pub index_option_prefix: String,
    pub apply_button: String,
    pub results_table: String,
    pub result_rows: String,
    pub row_cells: String,
    pub from_picker: PickerSelectors,
    pub to_picker: PickerSelectors,
}

impl QuerySelectors {
    #[must_use]
    pub fn index_option(&self, index_name: &str) -> String {
        format!("{}[data-label=\"{index_name}\"]", self.index_option_prefix)
    }
}

impl Default for QuerySelectors {
    /// Selectors for the production query page. Both pickers are the same
    /// widget instance re-anchored to whichever input opened it, so they share
    /// the header and navigation controls.
    fn default() -> Self {
        let picker = |input: &str| PickerSelectors {
            input: input.to_string(),
            header: ".datepicker .header".to_string(),
            prev: ".datepicker .prev".to_string(),
            next: ".datepicker .next".to_string(),
            calendar: ".datepicker .days".to_string(),
        };
        Self {
            filter_toggle: ".query-filters .index-select".to_string(),
            index_option_prefix: ".query-filters .index-select li".to_string(),
            apply_button: ".query-filters button.apply".to_string(),
            results_table: "table.disclosure-results".to_string(),
            result_rows: "table.disclosure-results tbody tr".to_string(),
            row_cells: "td".to_string(),
            from_picker: picker("#fromDate"),
            to_picker: picker("#toDate"),
        }
    }
}

/// Runs the four-step sequence and returns the normalized report rows.
///
/// # Errors
///
/// Propagates [`BrowserError`]s from navigation, the date-picker executor,
/// and result-table reads. Rows with fewer cells than the table schema are
/// skipped with a warning rather than failing the run.
pub async fn extract_disclosures<D>(
    page: &D,
    selectors: &QuerySelectors,
    query_page_url: &str,
    index_name: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<ReportRow>, BrowserError>
where
    D: PageDriver + ?Sized,
{
    page.goto(query_page_url).await?;
    wait_for(page, &selectors.filter_toggle, PAGE_TIMEOUT).await?;
    page.click(&selectors.filter_toggle).await?;
    page.click(&selectors.index_option(index_name)).await?;
    tracing::debug!(index = index_name, "index filter applied");

    select_date(page, &selectors.from_picker, from).await?;
    select_date(page, &selectors.to_picker, to).await?;

    page.click(&selectors.apply_button).await?;
    wait_for(page, &selectors.results_table, RESULTS_TIMEOUT).await?;
    let raw = page
        .table_rows(&selectors.result_rows, &selectors.row_cells)
        .await?;
    tracing::debug!(rows = raw.len(), "result table read");

    Ok(rows_to_report(raw))
}

/// Maps raw cell texts to [`ReportRow`]s, skipping malformed rows.
fn rows_to_report(raw: Vec<Vec<String>>) -> Vec<ReportRow> {
    let mut rows = Vec::with_capacity(raw.len());
    for cells in raw {
        if cells.len() < EXPECTED_CELLS {
            tracing::warn!(cells = cells.len(), "skipping short result row");
            continue;
        }
        rows.push(ReportRow {
            seq: rows.len() + 1,
            date: clean_cell(&cells[0]),
            stock_code: clean_cell(&cells[1]),
            company: clean_cell(&cells[2]),
            subject: clean_cell(&cells[3]),
            summary: clean_cell(&cells[4]),
            related: clean_cell(&cells[5]),
            link: None,
        });
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::YearMonth;
    use crate::testutil::FakePage;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Query selectors wired to the fake's picker widget, with distinct
    /// from/to inputs.
    fn fake_selectors() -> QuerySelectors {
        let mut from_picker = FakePage::picker_selectors();
        from_picker.input = "#fromDate".to_string();
        let mut to_picker = FakePage::picker_selectors();
        to_picker.input = "#toDate".to_string();
        QuerySelectors {
            from_picker,
            to_picker,
            ..QuerySelectors::default()
        }
    }

    fn sample_row(date: &str, code: &str) -> Vec<String> {
        vec![
            date.to_string(),
            code.to_string(),
            format!("{code} A.Ş."),
            "Özel Durum Açıklaması".to_string(),
            "özet\\nsatırı".to_string(),
            String::new(),
        ]
    }

    #[tokio::test]
    async fn full_sequence_produces_clean_rows() {
        let page = FakePage::displaying(YearMonth::new(2025, 7)).with_rows(vec![
            sample_row("21.07.2025 10:00", "ACME"),
            sample_row("21.07.2025 11:30", "BETA"),
        ]);
        let selectors = fake_selectors();

        let rows = extract_disclosures(
            &page,
            &selectors,
            "https://example.com/tr/bildirim-sorgu",
            "XK100",
            date(2025, 6, 30),
            date(2025, 7, 1),
        )
        .await
        .expect("extraction should succeed");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].seq, 1);
        assert_eq!(rows[0].stock_code, "ACME");
        assert_eq!(rows[0].summary, "özet satırı");
        assert_eq!(rows[1].seq, 2);
        assert_eq!(rows[1].company, "BETA A.Ş.");

        let state = page.state.lock().unwrap();
        assert_eq!(state.visited, vec!["https://example.com/tr/bildirim-sorgu"]);
        // From-picker went back one month, to-picker came forward again.
        assert_eq!(state.displayed, YearMonth::new(2025, 7));
        assert!(state.clicks.contains(&selectors.apply_button));
        assert!(state
            .clicks
            .contains(&selectors.index_option("XK100")));
    }

    #[tokio::test]
    async fn short_rows_are_skipped_and_renumbered() {
        let page = FakePage::displaying(YearMonth::new(2025, 7)).with_rows(vec![
            sample_row("21.07.2025 10:00", "ACME"),
            vec!["truncated".to_string()],
            sample_row("21.07.2025 12:00", "GAMA"),
        ]);

        let rows = extract_disclosures(
            &page,
            &fake_selectors(),
            "https://example.com/tr/bildirim-sorgu",
            "XK100",
            date(2025, 7, 18),
            date(2025, 7, 21),
        )
        .await
        .expect("extraction should succeed");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].stock_code, "ACME");
        assert_eq!(rows[1].stock_code, "GAMA");
        assert_eq!(rows[1].seq, 2);
    }

    #[tokio::test]
    async fn empty_result_table_gives_no_rows() {
        let page = FakePage::displaying(YearMonth::new(2025, 7));
        let rows = extract_disclosures(
            &page,
            &fake_selectors(),
            "https://example.com/tr/bildirim-sorgu",
            "XK100",
            date(2025, 7, 18),
            date(2025, 7, 21),
        )
        .await
        .expect("extraction should succeed");
        assert!(rows.is_empty());
    }

    #[test]
    fn index_option_selector_embeds_name() {
        let selectors = QuerySelectors::default();
        assert_eq!(
            selectors.index_option("XK100"),
            ".query-filters .index-select li[data-label=\"XK100\"]"
        );
    }
}
