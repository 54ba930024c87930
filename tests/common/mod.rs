#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use budget_query::{BudgetError, BudgetRecord, BudgetSource, Result, YearMonth};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Records how many times the engine asked for data.
pub struct StubSource {
    records: Vec<BudgetRecord>,
    calls: AtomicUsize,
}

impl StubSource {
    pub fn new(entries: &[(&str, Decimal)]) -> Self {
        let records = entries
            .iter()
            .map(|(key, amount)| BudgetRecord::new(period(key), *amount))
            .collect();
        Self {
            records,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl BudgetSource for StubSource {
    fn get_all(&self) -> Result<Vec<BudgetRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.clone())
    }
}

/// Always fails, standing in for an unreachable store.
pub struct FailingSource;

impl BudgetSource for FailingSource {
    fn get_all(&self) -> Result<Vec<BudgetRecord>> {
        Err(BudgetError::Source("connection refused".into()))
    }
}

pub fn period(key: &str) -> YearMonth {
    YearMonth::parse(key).expect("valid period key")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Largest gap allowed between results that differ only in the last decimal digit.
pub fn last_digit_tolerance() -> Decimal {
    Decimal::new(1, 20)
}

pub fn assert_close(actual: Decimal, expected: Decimal) {
    let gap = (actual - expected).abs();
    assert!(
        gap <= last_digit_tolerance(),
        "{} differs from {} by {}",
        actual,
        expected,
        gap
    );
}
