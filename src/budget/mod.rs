//! Value types describing monthly allocations and the ranges queried against them.

pub mod period;
pub mod range;
pub mod record;

pub use period::YearMonth;
pub use range::{DateRange, Months};
pub use record::{BudgetRecord, MonthlyPortion};
