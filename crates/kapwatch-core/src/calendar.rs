//! Business-day calendar for computing the reporting window.
//!
//! The report always covers (previous business day, current business day).
//! Weekends are never business days; additional market holidays come from
//! configuration. A run that fires on a non-business day reports on the most
//! recent completed window instead of failing.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// A weekend-plus-holidays calendar over [`NaiveDate`]s.
#[derive(Debug, Clone, Default)]
pub struct BusinessCalendar {
    holidays: BTreeSet<NaiveDate>,
}

impl BusinessCalendar {
    pub fn new<I>(holidays: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        Self {
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Returns `true` if `date` is neither a weekend nor a configured holiday.
    #[must_use]
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !self.holidays.contains(&date)
    }

    /// Returns the closest business day strictly before `date`.
    ///
    /// Terminates for any input: the holiday set is finite, so the scan can
    /// skip at most the holidays plus interleaved weekends.
    #[must_use]
    pub fn previous_business_day(&self, date: NaiveDate) -> NaiveDate {
        let mut cur = date - Days::new(1);
        while !self.is_business_day(cur) {
            cur = cur - Days::new(1);
        }
        cur
    }

    /// Returns the closest business day strictly after `date`.
    #[must_use]
    pub fn next_business_day(&self, date: NaiveDate) -> NaiveDate {
        let mut cur = date + Days::new(1);
        while !self.is_business_day(cur) {
            cur = cur + Days::new(1);
        }
        cur
    }

    /// Computes the `(from, to)` reporting window for a run on `today`.
    ///
    /// `to` is `today` when it is a business day, otherwise the most recent
    /// business day before it; `from` is the business day before `to`. Both
    /// endpoints are business days and `from < to` always holds.
    #[must_use]
    pub fn report_window(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let to = if self.is_business_day(today) {
            today
        } else {
            self.previous_business_day(today)
        };
        (self.previous_business_day(to), to)
    }
}
