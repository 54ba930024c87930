//! Prorates monthly allocations over arbitrary inclusive date ranges.

use std::collections::{hash_map::Entry, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::{
    budget::{BudgetRecord, DateRange, MonthlyPortion, YearMonth},
    config::{DuplicatePolicy, QueryConfig},
    errors::{BudgetError, Result},
    source::BudgetSource,
};

/// Answers "how much budget falls between these two dates" against a [`BudgetSource`].
///
/// Each month's amount is spread evenly over its days; only the days inside the
/// queried range count. The source is read once per query and never cached.
#[derive(Debug, Clone)]
pub struct BudgetQueryEngine<S> {
    source: S,
    config: QueryConfig,
}

impl<S: BudgetSource> BudgetQueryEngine<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, QueryConfig::default())
    }

    pub fn with_config(source: S, config: QueryConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Total prorated budget for the inclusive range `[start, end]`.
    ///
    /// Returns zero without touching the source when `start` is after `end`.
    pub fn query(&self, start: NaiveDate, end: NaiveDate) -> Result<Decimal> {
        self.query_range(DateRange::new(start, end))
    }

    pub fn query_range(&self, range: DateRange) -> Result<Decimal> {
        let portions = self.breakdown_range(range)?;
        let total = sum_over_common_denominator(&portions)
            .or_else(|| {
                portions
                    .iter()
                    .try_fold(Decimal::ZERO, |acc, portion| acc.checked_add(portion.amount))
            })
            .ok_or_else(|| {
                BudgetError::Overflow(format!(
                    "total for {}..={} exceeds decimal range",
                    range.start, range.end
                ))
            })?;
        debug!(start = %range.start, end = %range.end, %total, "budget query finished");
        Ok(total)
    }

    /// Per-month contributions that [`Self::query`] sums, in calendar order.
    /// Months without a record are omitted.
    pub fn breakdown(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<MonthlyPortion>> {
        self.breakdown_range(DateRange::new(start, end))
    }

    pub fn breakdown_range(&self, range: DateRange) -> Result<Vec<MonthlyPortion>> {
        if range.is_inverted() {
            debug!(start = %range.start, end = %range.end, "inverted range contains no days");
            return Ok(Vec::new());
        }

        let records = self.source.get_all()?;
        debug!(
            start = %range.start,
            end = %range.end,
            records = records.len(),
            "budget query started"
        );
        let amounts = self.index(&records)?;

        let mut portions = Vec::new();
        for period in range.months() {
            let Some(amount) = amounts.get(&period) else {
                continue;
            };
            let days_in_month = period.days_in_month();
            let days_in_period = range.days_within(period);
            let prorated = prorate(*amount, days_in_period, days_in_month)?;
            debug!(
                %period,
                days_in_period,
                days_in_month,
                amount = %prorated,
                "month contribution"
            );
            portions.push(MonthlyPortion {
                period,
                days_in_period,
                days_in_month,
                allocation: *amount,
                amount: prorated,
            });
        }
        Ok(portions)
    }

    fn index(&self, records: &[BudgetRecord]) -> Result<HashMap<YearMonth, Decimal>> {
        let mut amounts: HashMap<YearMonth, Decimal> = HashMap::with_capacity(records.len());
        for record in records {
            match amounts.entry(record.period) {
                Entry::Vacant(slot) => {
                    slot.insert(record.amount);
                }
                Entry::Occupied(mut slot) => {
                    warn!(
                        period = %record.period,
                        policy = ?self.config.duplicate_policy,
                        "duplicate budget records for period"
                    );
                    if self.config.duplicate_policy == DuplicatePolicy::Sum {
                        let summed = slot.get().checked_add(record.amount).ok_or_else(|| {
                            BudgetError::Overflow(format!(
                                "summed allocation for {} exceeds decimal range",
                                record.period
                            ))
                        })?;
                        slot.insert(summed);
                    }
                }
            }
        }
        Ok(amounts)
    }
}

/// lcm(28, 29, 30, 31): every month length divides it.
const COMMON_DENOMINATOR: u32 = 377_580;

/// Adds every portion as `allocation * days * (COMMON_DENOMINATOR / days_in_month)`
/// and divides once. `None` when the numerator leaves the decimal range.
fn sum_over_common_denominator(portions: &[MonthlyPortion]) -> Option<Decimal> {
    let numerator = portions.iter().try_fold(Decimal::ZERO, |acc, portion| {
        let weight = portion.days_in_period * (COMMON_DENOMINATOR / portion.days_in_month);
        portion
            .allocation
            .checked_mul(Decimal::from(weight))
            .and_then(|scaled| acc.checked_add(scaled))
    })?;
    numerator.checked_div(Decimal::from(COMMON_DENOMINATOR))
}

/// `amount * days / days_in_month`. Divides first when the product overflows.
fn prorate(amount: Decimal, days: u32, days_in_month: u32) -> Result<Decimal> {
    let days_dec = Decimal::from(days);
    let month_dec = Decimal::from(days_in_month);
    amount
        .checked_mul(days_dec)
        .and_then(|scaled| scaled.checked_div(month_dec))
        .or_else(|| {
            amount
                .checked_div(month_dec)
                .and_then(|daily| daily.checked_mul(days_dec))
        })
        .ok_or_else(|| {
            BudgetError::Overflow(format!(
                "prorating {} over {}/{} days exceeds decimal range",
                amount, days, days_in_month
            ))
        })
}
