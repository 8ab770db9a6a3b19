//! Date-range allocation over monthly budget allotments.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{DateWindow, MonthSlice, MonthlyBudget, YearMonth};
use crate::errors::Result;
use crate::source::BudgetSource;

/// Decimal places of the smallest currency unit.
const CENT_SCALE: u32 = 2;

/// Stateless allocation routines over caller-supplied budget snapshots.
pub struct BudgetAllocator;

impl BudgetAllocator {
    /// Fetches the full budget collection from `source` and returns the
    /// total allotted to `window`.
    pub fn query(source: &dyn BudgetSource, window: DateWindow) -> Result<Decimal> {
        let budgets = source.all_budgets()?;
        Ok(Self::allocate(&budgets, window))
    }

    /// Returns the portion of `budgets` that falls inside `window`.
    ///
    /// Months without an entry contribute zero. A slice covering an
    /// entire calendar month contributes its full amount without
    /// division; partial slices are prorated by day count and rounded
    /// half away from zero to the cent. If the same month appears more
    /// than once, the last entry wins.
    pub fn allocate(budgets: &[MonthlyBudget], window: DateWindow) -> Decimal {
        let by_month: BTreeMap<YearMonth, Decimal> = budgets
            .iter()
            .map(|budget| (budget.month, budget.amount))
            .collect();

        let mut total = Decimal::ZERO;
        for slice in window.month_slices() {
            match by_month.get(&slice.month) {
                Some(amount) => {
                    let contribution = Self::contribution(&slice, *amount);
                    tracing::debug!(
                        "{} contributes {} over {} day(s)",
                        slice.month,
                        contribution,
                        slice.days()
                    );
                    total += contribution;
                }
                None => tracing::trace!("{} has no budget entry", slice.month),
            }
        }
        total
    }

    fn contribution(slice: &MonthSlice, amount: Decimal) -> Decimal {
        if slice.is_full_month() {
            return amount;
        }
        let prorated =
            amount * Decimal::from(slice.days()) / Decimal::from(slice.month.days_in_month());
        prorated.round_dp_with_strategy(CENT_SCALE, RoundingStrategy::MidpointAwayFromZero)
    }
}
