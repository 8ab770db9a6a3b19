use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::month::YearMonth;
use crate::errors::{BudgetError, Result};

/// An inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Builds a window, rejecting ranges whose start falls after the end.
    ///
    /// Both endpoints are counted, so `start == end` is a valid
    /// single-day window.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(BudgetError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// A window covering exactly one day.
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Walks the calendar months touched by this window, yielding the
    /// intersection with each month in order, without skipping.
    pub fn month_slices(&self) -> MonthSlices {
        MonthSlices {
            window: *self,
            next: Some(YearMonth::from_date(self.start)),
        }
    }
}

/// The intersection of a query window with one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSlice {
    pub month: YearMonth,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl MonthSlice {
    /// Inclusive number of days covered by this slice.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// True when the slice spans the month's first through last day.
    pub fn is_full_month(&self) -> bool {
        self.start == self.month.first_day() && self.end == self.month.last_day()
    }
}

/// Iterator over the month slices of a [`DateWindow`].
pub struct MonthSlices {
    window: DateWindow,
    next: Option<YearMonth>,
}

impl Iterator for MonthSlices {
    type Item = MonthSlice;

    fn next(&mut self) -> Option<MonthSlice> {
        let month = self.next.take()?;
        let slice = MonthSlice {
            month,
            start: self.window.start.max(month.first_day()),
            end: self.window.end.min(month.last_day()),
        };
        if month.last_day() < self.window.end {
            self.next = Some(month.next());
        }
        Some(slice)
    }
}
