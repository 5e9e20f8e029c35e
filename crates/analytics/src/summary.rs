use crate::error::AnalyticsError;
use core_types::{Table, TransactionRecord, UserDeviceRecord};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The three headline numbers shown above every chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub total_transaction_count: u64,
    pub total_transaction_amount: Decimal,
    pub unique_device_brand_count: usize,
}

impl SummaryMetrics {
    /// Creates zeroed-out metrics, which is also the answer for empty input.
    pub fn new() -> Self {
        Self {
            total_transaction_count: 0,
            total_transaction_amount: Decimal::ZERO,
            unique_device_brand_count: 0,
        }
    }
}

impl Default for SummaryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the summary metrics over already-filtered tables.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(transactions = transactions.len(), user_devices = user_devices.len())
)]
pub fn summarize(
    transactions: &Table<TransactionRecord>,
    user_devices: &Table<UserDeviceRecord>,
) -> Result<SummaryMetrics, AnalyticsError> {
    let mut metrics = SummaryMetrics::new();

    accumulate_transactions(transactions, &mut metrics)?;
    count_brands(user_devices, &mut metrics);

    Ok(metrics)
}

fn accumulate_transactions(
    transactions: &Table<TransactionRecord>,
    metrics: &mut SummaryMetrics,
) -> Result<(), AnalyticsError> {
    for row in transactions {
        metrics.total_transaction_count = metrics
            .total_transaction_count
            .checked_add(row.count)
            .ok_or_else(|| overflow("count"))?;
        metrics.total_transaction_amount = metrics
            .total_transaction_amount
            .checked_add(row.amount)
            .ok_or_else(|| overflow("amount"))?;
    }
    Ok(())
}

fn count_brands(user_devices: &Table<UserDeviceRecord>, metrics: &mut SummaryMetrics) {
    // A blank brand is a missing value and is not counted.
    let brands: HashSet<&str> = user_devices
        .iter()
        .map(|r| r.brand.as_str())
        .filter(|brand| !brand.is_empty())
        .collect();
    metrics.unique_device_brand_count = brands.len();
}

fn overflow(measure: &str) -> AnalyticsError {
    AnalyticsError::Overflow {
        measure: measure.to_string(),
        key: "all transactions".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn txn(state: &str, count: u64, amount: Decimal) -> TransactionRecord {
        TransactionRecord {
            year: 2023,
            quarter: 1,
            state: state.to_string(),
            count,
            amount,
        }
    }

    fn user(brand: &str, count: u64) -> UserDeviceRecord {
        UserDeviceRecord {
            year: 2023,
            quarter: 1,
            brand: brand.to_string(),
            count,
        }
    }

    #[test]
    fn test_summary_totals() {
        let transactions = Table::new(vec![
            txn("A", 100, dec!(500.0)),
            txn("B", 50, dec!(1200.0)),
            txn("A", 10, dec!(300.0)),
        ]);
        let users = Table::new(vec![user("X", 5), user("Y", 9), user("X", 3)]);
        let metrics = summarize(&transactions, &users).unwrap();
        assert_eq!(metrics.total_transaction_count, 160);
        assert_eq!(metrics.total_transaction_amount, dec!(2000.0));
        assert_eq!(metrics.unique_device_brand_count, 2);
    }

    #[test]
    fn test_summary_zero_case() {
        let metrics = summarize(&Table::default(), &Table::default()).unwrap();
        assert_eq!(metrics, SummaryMetrics::new());
        assert_eq!(metrics.total_transaction_count, 0);
        assert!(metrics.total_transaction_amount.is_zero());
        assert_eq!(metrics.unique_device_brand_count, 0);
    }

    #[test]
    fn test_brand_count_is_case_sensitive() {
        let users = Table::new(vec![user("Apple", 1), user("apple", 1)]);
        let metrics = summarize(&Table::default(), &users).unwrap();
        assert_eq!(metrics.unique_device_brand_count, 2);
    }

    #[test]
    fn test_blank_cells_in_summary() {
        // A row whose amount was blank still contributes its count.
        let transactions = Table::new(vec![txn("A", 100, Decimal::ZERO), txn("B", 50, dec!(10.0))]);
        let users = Table::new(vec![user("", 5), user("X", 3)]);
        let metrics = summarize(&transactions, &users).unwrap();
        assert_eq!(metrics.total_transaction_count, 150);
        assert_eq!(metrics.total_transaction_amount, dec!(10.0));
        assert_eq!(metrics.unique_device_brand_count, 1);
    }

    #[test]
    fn test_count_overflow_is_an_error() {
        let transactions = Table::new(vec![txn("A", u64::MAX, dec!(1)), txn("B", 1, dec!(1))]);
        let err = summarize(&transactions, &Table::default()).unwrap_err();
        assert!(matches!(err, AnalyticsError::Overflow { .. }));
    }
}
