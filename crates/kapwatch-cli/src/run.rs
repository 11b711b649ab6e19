//! Orchestration of a single report run: window, fetch, render, deliver.

use std::time::Instant;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use thirtyfour::{DesiredCapabilities, WebDriver};

use kapwatch_browser::{extract_disclosures, QuerySelectors, WebDriverPage};
use kapwatch_core::types::ReportRow;
use kapwatch_core::{load_app_config, AppConfig, BusinessCalendar};
use kapwatch_kap::{normalize_disclosures, DisclosureQuery, KapClient};
use kapwatch_report::{build_message, render_report, report_subject, send_message};

pub async fn report(
    via_browser: bool,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let started = Instant::now();
    let config = load_app_config().context("loading configuration")?;

    let calendar = BusinessCalendar::new(config.holidays.iter().copied());
    let (from, to) = resolve_window(&calendar, Local::now().date_naive(), from, to);
    tracing::info!(%from, %to, index = %config.index_name, via_browser, "starting report run");

    let rows = if via_browser {
        fetch_via_browser(&config, from, to)
            .await
            .context("browser extraction")?
    } else {
        fetch_via_api(&config, from, to).await.context("API query")?
    };
    tracing::info!(rows = rows.len(), "disclosures collected");

    let html = render_report(&config.index_name, from, to, &rows);
    if dry_run {
        println!("{html}");
        return Ok(());
    }

    let subject = report_subject(from, to);
    let message = build_message(&config, &subject, &html)?;
    send_message(&config, message).await.context("SMTP delivery")?;
    tracing::info!(
        rows = rows.len(),
        elapsed_secs = started.elapsed().as_secs(),
        "report sent"
    );
    Ok(())
}

/// Applies CLI overrides on top of the calendar-computed window.
fn resolve_window(
    calendar: &BusinessCalendar,
    today: NaiveDate,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> (NaiveDate, NaiveDate) {
    let (auto_from, auto_to) = calendar.report_window(today);
    (from.unwrap_or(auto_from), to.unwrap_or(auto_to))
}

async fn fetch_via_api(
    config: &AppConfig,
    from: NaiveDate,
    to: NaiveDate,
) -> anyhow::Result<Vec<ReportRow>> {
    let client = KapClient::with_base_url(
        config.request_timeout_secs,
        &config.user_agent,
        &config.kap_base_url,
    )?;
    let query = DisclosureQuery::daily(&from.to_string(), &to.to_string(), &config.index_oid);
    let records = client.query_disclosures(&query).await?;
    Ok(normalize_disclosures(&records))
}

async fn fetch_via_browser(
    config: &AppConfig,
    from: NaiveDate,
    to: NaiveDate,
) -> anyhow::Result<Vec<ReportRow>> {
    let caps = DesiredCapabilities::chrome();
    let driver = WebDriver::new(&config.webdriver_url, caps)
        .await
        .context("starting WebDriver session")?;
    let page = WebDriverPage::new(driver);

    let result = extract_disclosures(
        &page,
        &QuerySelectors::default(),
        &config.query_page_url,
        &config.index_name,
        from,
        to,
    )
    .await;

    // Close the session even when extraction failed.
    if let Err(quit_err) = page.quit().await {
        tracing::warn!(error = %quit_err, "failed to close WebDriver session");
    }

    Ok(result?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn window_defaults_to_calendar() {
        let calendar = BusinessCalendar::default();
        let (from, to) = resolve_window(&calendar, date(2025, 7, 22), None, None);
        assert_eq!(from, date(2025, 7, 21));
        assert_eq!(to, date(2025, 7, 22));
    }

    #[test]
    fn explicit_overrides_win() {
        let calendar = BusinessCalendar::default();
        let (from, to) = resolve_window(
            &calendar,
            date(2025, 7, 22),
            Some(date(2025, 7, 1)),
            Some(date(2025, 7, 15)),
        );
        assert_eq!(from, date(2025, 7, 1));
        assert_eq!(to, date(2025, 7, 15));
    }

    #[test]
    fn partial_override_keeps_other_endpoint() {
        let calendar = BusinessCalendar::default();
        let (from, to) =
            resolve_window(&calendar, date(2025, 7, 22), Some(date(2025, 7, 18)), None);
        assert_eq!(from, date(2025, 7, 18));
        assert_eq!(to, date(2025, 7, 22));
    }
}
