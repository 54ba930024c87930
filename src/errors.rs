use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for budget lookups and queries.
#[derive(Error, Debug)]
pub enum BudgetError {
    #[error("Budget source failed: {0}")]
    Source(String),
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, BudgetError>;

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        BudgetError::Config(err.to_string())
    }
}
