use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::period::YearMonth;

/// An inclusive span of calendar days. A range whose start falls after its end
/// contains no days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn single_day(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Every calendar month touched by the range, in order. Empty when inverted.
    pub fn months(&self) -> Months {
        Months {
            next: YearMonth::from_date(self.start),
            last: YearMonth::from_date(self.end),
            done: self.is_inverted(),
        }
    }

    /// Inclusive count of range days that fall inside `month`.
    pub fn days_within(&self, month: YearMonth) -> u32 {
        if self.is_inverted() {
            return 0;
        }
        let first = YearMonth::from_date(self.start);
        let last = YearMonth::from_date(self.end);
        if month < first || month > last {
            return 0;
        }
        let from = if month == first { self.start.day() } else { 1 };
        let to = if month == last {
            self.end.day()
        } else {
            month.days_in_month()
        };
        to - from + 1
    }
}

/// Iterator over the months of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct Months {
    next: YearMonth,
    last: YearMonth,
    done: bool,
}

impl Iterator for Months {
    type Item = YearMonth;

    fn next(&mut self) -> Option<YearMonth> {
        if self.done {
            return None;
        }
        let current = self.next;
        if current == self.last {
            self.done = true;
        } else {
            self.next = current.next();
        }
        Some(current)
    }
}
