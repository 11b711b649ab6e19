//! Planner and executor for the platform's third-party date-picker widget.
//!
//! The widget shows a single month with prev/next controls and a header like
//! `"Temmuz 2025"`. Selecting a date is planned as a pure sequence of
//! [`PickerStep`]s from the displayed month to the target month, then executed
//! through [`crate::driver::PageDriver`] with two guards: the header must
//! change after every navigation click (stuck-widget detection), and plans
//! beyond [`MAX_MONTH_STEPS`] months are rejected outright.

use std::time::Duration;

use chrono::{Datelike, NaiveDate};

use crate::driver::{wait_for, PageDriver};
use crate::error::BrowserError;

/// Hard cap on prev/next clicks in a single selection.
pub const MAX_MONTH_STEPS: usize = 120;

const OPEN_TIMEOUT: Duration = Duration::from_secs(10);

/// Month names as the widget renders them in its header.
pub(crate) const TURKISH_MONTHS: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

/// A calendar month, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
}

impl YearMonth {
    #[must_use]
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month));
        Self { year, month }
    }

    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// Signed number of months from `other` to `self`.
    #[must_use]
    pub fn months_since(self, other: YearMonth) -> i32 {
        (self.year - other.year) * 12 + (self.month as i32 - other.month as i32)
    }

    #[must_use]
    pub fn succ(self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    #[must_use]
    pub fn pred(self) -> Self {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", TURKISH_MONTHS[(self.month - 1) as usize], self.year)
    }
}

/// One interaction with the date-picker widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerStep {
    /// Open the widget by clicking its input field.
    Open,
    /// Click the previous-month control.
    PrevMonth,
    /// Click the next-month control.
    NextMonth,
    /// Click the day cell for this day of month.
    SelectDay(u32),
}

/// Computes the step sequence that selects `target` starting from a widget
/// displaying `displayed`.
///
/// The plan is always `Open`, then `|months_since|` clicks in a single
/// direction (never a mix of prev and next), then `SelectDay`.
#[must_use]
pub fn plan_selection(displayed: YearMonth, target: NaiveDate) -> Vec<PickerStep> {
    let delta = YearMonth::from_date(target).months_since(displayed);
    let mut steps = Vec::with_capacity(delta.unsigned_abs() as usize + 2);
    steps.push(PickerStep::Open);
    let nav = if delta < 0 {
        PickerStep::PrevMonth
    } else {
        PickerStep::NextMonth
    };
    for _ in 0..delta.unsigned_abs() {
        steps.push(nav);
    }
    steps.push(PickerStep::SelectDay(target.day()));
    steps
}

/// Parses a widget header like `"Temmuz 2025"` into a [`YearMonth`].
///
/// # Errors
///
/// Returns [`BrowserError::MalformedMonthHeader`] on any other shape.
pub fn parse_month_header(header: &str) -> Result<YearMonth, BrowserError> {
    let malformed = || BrowserError::MalformedMonthHeader(header.to_string());

    let mut parts = header.split_whitespace();
    let (Some(month_name), Some(year_str), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed());
    };

    let month_lower = month_name.to_lowercase();
    let month = TURKISH_MONTHS
        .iter()
        .position(|m| m.to_lowercase() == month_lower)
        .ok_or_else(malformed)?;
    let year: i32 = year_str.parse().map_err(|_| malformed())?;

    #[allow(clippy::cast_possible_truncation)]
    let month = month as u32 + 1;
    Ok(YearMonth::new(year, month))
}

/// CSS selectors for one date-picker instance on the query page.
#[derive(Debug, Clone)]
pub struct PickerSelectors {
    /// Input field that opens the widget when clicked.
    pub input: String,
    /// Header element showing the displayed month.
    pub header: String,
    pub prev: String,
    pub next: String,
    /// Container whose day cells carry an ISO-date `aria-label`.
    pub calendar: String,
}

impl PickerSelectors {
    #[must_use]
    pub fn day_button(&self, date: NaiveDate) -> String {
        format!(
            "{} [aria-label=\"{}\"]",
            self.calendar,
            date.format("%Y-%m-%d")
        )
    }
}

/// Drives the widget to select `target`.
///
/// Opens the picker, plans navigation from the displayed month, executes the
/// plan re-reading the header after every click, and finally clicks the day
/// cell.
///
/// # Errors
///
/// - [`BrowserError::StepBudgetExceeded`] if the target month is more than
///   [`MAX_MONTH_STEPS`] months away.
/// - [`BrowserError::WidgetStuck`] if a navigation click does not change the
///   displayed month, or the plan ends on the wrong month.
/// - [`BrowserError::MalformedMonthHeader`] if the header cannot be parsed.
/// - [`BrowserError::ElementTimeout`] if the widget does not open.
pub async fn select_date<D>(
    page: &D,
    selectors: &PickerSelectors,
    target: NaiveDate,
) -> Result<(), BrowserError>
where
    D: PageDriver + ?Sized,
{
    // The plan depends on the displayed month, so opening precedes planning.
    page.click(&selectors.input).await?;
    wait_for(page, &selectors.header, OPEN_TIMEOUT).await?;

    let mut displayed = parse_month_header(&page.text(&selectors.header).await?)?;
    let plan = plan_selection(displayed, target);

    let nav_steps = plan.len() - 2;
    if nav_steps > MAX_MONTH_STEPS {
        return Err(BrowserError::StepBudgetExceeded {
            needed: nav_steps,
            budget: MAX_MONTH_STEPS,
        });
    }
    tracing::debug!(%displayed, target = %target, nav_steps, "driving date-picker");

    for step in &plan {
        match step {
            PickerStep::Open => {} // performed above
            PickerStep::PrevMonth | PickerStep::NextMonth => {
                let control = if *step == PickerStep::PrevMonth {
                    &selectors.prev
                } else {
                    &selectors.next
                };
                page.click(control).await?;
                let now = parse_month_header(&page.text(&selectors.header).await?)?;
                if now == displayed {
                    return Err(BrowserError::WidgetStuck {
                        header: now.to_string(),
                    });
                }
                displayed = now;
            }
            PickerStep::SelectDay(_) => {
                if displayed != YearMonth::from_date(target) {
                    return Err(BrowserError::WidgetStuck {
                        header: displayed.to_string(),
                    });
                }
                page.click(&selectors.day_button(target)).await?;
            }
        }
    }
    Ok(())
}
