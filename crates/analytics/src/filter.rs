use core_types::{Period, Record, Table};
use serde::Serialize;
use std::collections::BTreeSet;

/// Returns exactly the rows of `table` that fall in `period`, in their original order.
///
/// No match is not an error: the result is simply empty.
pub fn filter_period<R: Record + Clone>(table: &Table<R>, period: Period) -> Table<R> {
    table
        .iter()
        .filter(|row| row.in_period(period))
        .cloned()
        .collect()
}

/// The selectable years and quarters, each sorted ascending.
///
/// Years and quarters are collected independently, so not every
/// (year, quarter) combination is guaranteed to have rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Vocabulary {
    pub years: Vec<i32>,
    pub quarters: Vec<u8>,
}

impl Vocabulary {
    pub fn from_table<R: Record>(table: &Table<R>) -> Self {
        let years: BTreeSet<i32> = table.iter().map(R::year).collect();
        let quarters: BTreeSet<u8> = table.iter().map(R::quarter).collect();
        Self {
            years: years.into_iter().collect(),
            quarters: quarters.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty() || self.quarters.is_empty()
    }

    /// The first entry of each selector, which is what an untouched UI shows.
    pub fn default_period(&self) -> Option<Period> {
        Some(Period {
            year: *self.years.first()?,
            quarter: *self.quarters.first()?,
        })
    }

    /// Fills whichever half of the selection is missing from the defaults.
    pub fn resolve(&self, year: Option<i32>, quarter: Option<u8>) -> Option<Period> {
        let year = year.or_else(|| self.years.first().copied())?;
        let quarter = quarter.or_else(|| self.quarters.first().copied())?;
        Some(Period { year, quarter })
    }
}
