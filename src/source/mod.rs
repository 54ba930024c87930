use std::sync::Arc;

use crate::{budget::BudgetRecord, errors::Result};

/// Supplies the full, unordered set of monthly budget records.
///
/// Implementations report their own failures as [`crate::BudgetError::Source`].
pub trait BudgetSource: Send + Sync {
    fn get_all(&self) -> Result<Vec<BudgetRecord>>;
}

impl<T: BudgetSource + ?Sized> BudgetSource for &T {
    fn get_all(&self) -> Result<Vec<BudgetRecord>> {
        (**self).get_all()
    }
}

impl<T: BudgetSource + ?Sized> BudgetSource for Box<T> {
    fn get_all(&self) -> Result<Vec<BudgetRecord>> {
        (**self).get_all()
    }
}

impl<T: BudgetSource + ?Sized> BudgetSource for Arc<T> {
    fn get_all(&self) -> Result<Vec<BudgetRecord>> {
        (**self).get_all()
    }
}

/// A source backed by records already held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBudgetSource {
    records: Vec<BudgetRecord>,
}

impl InMemoryBudgetSource {
    pub fn new(records: Vec<BudgetRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: BudgetRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[BudgetRecord] {
        &self.records
    }
}

impl FromIterator<BudgetRecord> for InMemoryBudgetSource {
    fn from_iter<I: IntoIterator<Item = BudgetRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl BudgetSource for InMemoryBudgetSource {
    fn get_all(&self) -> Result<Vec<BudgetRecord>> {
        Ok(self.records.clone())
    }
}
