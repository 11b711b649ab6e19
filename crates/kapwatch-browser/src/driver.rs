//! The seam between extraction logic and the actual browser session.
//!
//! [`PageDriver`] is the minimal surface the extraction code needs: navigate,
//! click, read text, check presence, and bulk-read a table. Production uses
//! [`WebDriverPage`] over `thirtyfour`; tests script a fake.

use std::time::Duration;

use async_trait::async_trait;
use thirtyfour::{By, WebDriver};
use tokio::time::Instant;

use crate::error::BrowserError;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Minimal driving surface over a browser page, keyed by CSS selectors.
#[async_trait]
pub trait PageDriver: Send + Sync {
    async fn goto(&self, url: &str) -> Result<(), BrowserError>;

    /// Clicks the first element matching `selector`.
    async fn click(&self, selector: &str) -> Result<(), BrowserError>;

    /// Returns the visible text of the first element matching `selector`.
    async fn text(&self, selector: &str) -> Result<String, BrowserError>;

    async fn is_present(&self, selector: &str) -> Result<bool, BrowserError>;

    /// Reads a table as the cell texts of every row matching `row_selector`.
    async fn table_rows(
        &self,
        row_selector: &str,
        cell_selector: &str,
    ) -> Result<Vec<Vec<String>>, BrowserError>;
}

/// Polls for `selector` until it appears or `timeout` elapses.
///
/// # Errors
///
/// Returns [`BrowserError::ElementTimeout`] if the element never shows up.
pub async fn wait_for<D>(page: &D, selector: &str, timeout: Duration) -> Result<(), BrowserError>
where
    D: PageDriver + ?Sized,
{
    let deadline = Instant::now() + timeout;
    loop {
        if page.is_present(selector).await? {
            return Ok(());
        }
        if Instant::now() >= deadline {
            #[allow(clippy::cast_possible_truncation)]
            let waited_ms = timeout.as_millis() as u64;
            return Err(BrowserError::ElementTimeout {
                selector: selector.to_string(),
                waited_ms,
            });
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

/// [`PageDriver`] implementation over a live `thirtyfour` WebDriver session.
pub struct WebDriverPage {
    driver: WebDriver,
}

impl WebDriverPage {
    #[must_use]
    pub fn new(driver: WebDriver) -> Self {
        Self { driver }
    }

    /// Ends the WebDriver session, closing the browser window.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::WebDriver`] if the session refuses to close.
    pub async fn quit(self) -> Result<(), BrowserError> {
        self.driver.quit().await?;
        Ok(())
    }
}

#[async_trait]
impl PageDriver for WebDriverPage {
    async fn goto(&self, url: &str) -> Result<(), BrowserError> {
        self.driver.goto(url).await?;
        Ok(())
    }

    async fn click(&self, selector: &str) -> Result<(), BrowserError> {
        self.driver.find(By::Css(selector)).await?.click().await?;
        Ok(())
    }

    async fn text(&self, selector: &str) -> Result<String, BrowserError> {
        let text = self.driver.find(By::Css(selector)).await?.text().await?;
        Ok(text)
    }

    async fn is_present(&self, selector: &str) -> Result<bool, BrowserError> {
        let found = self.driver.find_all(By::Css(selector)).await?;
        Ok(!found.is_empty())
    }

    async fn table_rows(
        &self,
        row_selector: &str,
        cell_selector: &str,
    ) -> Result<Vec<Vec<String>>, BrowserError> {
        let mut rows = Vec::new();
        for row in self.driver.find_all(By::Css(row_selector)).await? {
            let mut cells = Vec::new();
            for cell in row.find_all(By::Css(cell_selector)).await? {
                cells.push(cell.text().await?);
            }
            rows.push(cells);
        }
        Ok(rows)
    }
}
