use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::period::YearMonth;

/// The allocation for one whole calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRecord {
    pub period: YearMonth,
    pub amount: Decimal,
}

impl BudgetRecord {
    pub fn new(period: YearMonth, amount: Decimal) -> Self {
        Self { period, amount }
    }
}

/// The slice of one month's allocation that falls inside a queried range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyPortion {
    pub period: YearMonth,
    pub days_in_period: u32,
    pub days_in_month: u32,
    /// The whole month's allocation the portion was cut from.
    pub allocation: Decimal,
    pub amount: Decimal,
}
