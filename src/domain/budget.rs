use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::month::YearMonth;
use crate::errors::Result;

/// A single month's budget allotment.
///
/// Entries are caller-owned and read-only; the amount is expected to be
/// non-negative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlyBudget {
    pub month: YearMonth,
    pub amount: Decimal,
}

impl MonthlyBudget {
    pub fn new(month: YearMonth, amount: Decimal) -> Self {
        Self { month, amount }
    }

    /// Builds an entry from the compact `YYYYMM` identifier used by
    /// upstream budget data.
    pub fn parse(year_month: &str, amount: Decimal) -> Result<Self> {
        Ok(Self {
            month: year_month.parse()?,
            amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::errors::BudgetError;

    #[test]
    fn parse_accepts_compact_identifier() {
        let budget = MonthlyBudget::parse("202303", dec!(31000)).expect("valid entry");
        assert_eq!(budget.month, YearMonth::new(2023, 3).unwrap());
        assert_eq!(budget.amount, dec!(31000));
    }

    #[test]
    fn parse_rejects_malformed_identifier() {
        let err = MonthlyBudget::parse("2023/03", dec!(100)).expect_err("should reject");
        assert!(matches!(err, BudgetError::ParseYearMonth(_)));
    }
}
