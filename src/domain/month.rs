use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{BudgetError, Result};

/// A calendar month within a specific year.
///
/// Budgets are keyed by this type rather than by formatted strings, so
/// lookups never depend on a particular text representation. The month
/// number is validated at construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(BudgetError::ParseYearMonth(format!("{year:04}{month:02}")));
        }
        Ok(Self { year, month })
    }

    /// Returns the month containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First calendar day of this month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    /// Last calendar day of this month.
    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day() - Duration::days(1)
    }

    /// Number of calendar days in this month, leap-year aware.
    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// The month immediately after this one.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl FromStr for YearMonth {
    type Err = BudgetError;

    /// Parses the compact `YYYYMM` form used by upstream budget data,
    /// e.g. `202303`.
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || BudgetError::ParseYearMonth(s.to_string());
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let year = s[..4].parse::<i32>().map_err(|_| malformed())?;
        let month = s[4..].parse::<u32>().map_err(|_| malformed())?;
        if !(1..=12).contains(&month) {
            return Err(malformed());
        }
        Ok(Self { year, month })
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(s: &str) -> YearMonth {
        s.parse().expect("valid year-month")
    }

    #[test]
    fn parses_compact_form() {
        let march = ym("202303");
        assert_eq!(march.year(), 2023);
        assert_eq!(march.month(), 3);
    }

    #[test]
    fn rejects_malformed_identifiers() {
        for input in ["2023-3", "20233", "2023041", "abc123", "202300", "202313", ""] {
            let err = input.parse::<YearMonth>().expect_err("should reject");
            assert!(matches!(err, BudgetError::ParseYearMonth(_)), "{input}");
        }
    }

    #[test]
    fn new_rejects_month_out_of_range() {
        assert!(YearMonth::new(2023, 0).is_err());
        assert!(YearMonth::new(2023, 13).is_err());
        assert!(YearMonth::new(2023, 12).is_ok());
    }

    #[test]
    fn day_counts_are_leap_year_aware() {
        assert_eq!(ym("202302").days_in_month(), 28);
        assert_eq!(ym("202402").days_in_month(), 29);
        assert_eq!(ym("202304").days_in_month(), 30);
        assert_eq!(ym("202303").days_in_month(), 31);
    }

    #[test]
    fn month_bounds() {
        let march = ym("202303");
        assert_eq!(march.first_day(), NaiveDate::from_ymd_opt(2023, 3, 1).unwrap());
        assert_eq!(march.last_day(), NaiveDate::from_ymd_opt(2023, 3, 31).unwrap());
    }

    #[test]
    fn next_carries_into_new_year() {
        assert_eq!(ym("202312").next(), ym("202401"));
        assert_eq!(ym("202303").next(), ym("202304"));
    }

    #[test]
    fn display_round_trips() {
        for input in ["202303", "199912", "202401"] {
            assert_eq!(ym(input).to_string(), input);
        }
    }

    #[test]
    fn orders_chronologically() {
        assert!(ym("202312") < ym("202401"));
        assert!(ym("202303") < ym("202304"));
    }
}
