use chrono::NaiveDate;
use thiserror::Error;

/// Error type that captures budget allocation failures.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("Invalid window: start {start} is after end {end}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },
    #[error("Invalid year-month: {0}")]
    ParseYearMonth(String),
    #[error("Budget source error: {0}")]
    Source(String),
}

pub type Result<T> = std::result::Result<T, BudgetError>;
