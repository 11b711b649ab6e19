use thiserror::Error;

/// Errors raised while driving the disclosure query page.
#[derive(Debug, Error)]
pub enum BrowserError {
    /// Failure in the underlying WebDriver session.
    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    /// An expected element did not appear within the polling deadline.
    #[error("element '{selector}' not present after {waited_ms}ms")]
    ElementTimeout { selector: String, waited_ms: u64 },

    /// The date-picker header could not be parsed into a month and year.
    #[error("unrecognised date-picker month header: '{0}'")]
    MalformedMonthHeader(String),

    /// A navigation click did not change the displayed month.
    #[error("date-picker widget stuck on '{header}'")]
    WidgetStuck { header: String },

    /// The target month is further away than the navigation budget allows.
    #[error("date-picker navigation needs {needed} steps, budget is {budget}")]
    StepBudgetExceeded { needed: usize, budget: usize },
}
