#![doc(test(attr(deny(warnings))))]

//! Budget Query computes prorated budget totals for arbitrary date ranges from a
//! set of monthly allocations supplied by a pluggable [`source::BudgetSource`].

pub mod budget;
pub mod config;
pub mod core;
pub mod errors;
pub mod source;
pub mod utils;

pub use budget::{BudgetRecord, DateRange, MonthlyPortion, YearMonth};
pub use config::{DuplicatePolicy, QueryConfig};
pub use crate::core::services::BudgetQueryEngine;
pub use errors::{BudgetError, Result};
pub use source::{BudgetSource, InMemoryBudgetSource};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Query tracing initialized.");
    });
}
