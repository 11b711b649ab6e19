//! Browser-automation extraction of disclosures from the platform's web UI.
//!
//! The interactive query page is driven through a [`driver::PageDriver`]
//! abstraction: production code wraps a `thirtyfour` WebDriver session, tests
//! use a scripted fake. The only nontrivial interaction is the third-party
//! date-picker widget, handled by the planner/executor in [`picker`].

pub mod driver;
pub mod error;
pub mod extract;
pub mod picker;

pub use driver::{PageDriver, WebDriverPage};
pub use error::BrowserError;
pub use extract::{extract_disclosures, QuerySelectors};
pub use picker::{plan_selection, select_date, PickerSelectors, PickerStep, YearMonth};

#[cfg(test)]
pub(crate) mod testutil;
