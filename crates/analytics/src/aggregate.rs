use crate::error::AnalyticsError;
use core_types::{Dimension, MeasureField, Record, SortOrder, Table};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parameters for one group-and-sum pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateSpec {
    pub dimension: Dimension,
    pub measure: MeasureField,
    pub order: SortOrder,
    pub limit: usize,
}

/// One group's reduced measure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTotal {
    pub key: String,
    pub value: Decimal,
}

/// Groups `table` by `spec.dimension`, sums `spec.measure` within each group,
/// then sorts and truncates.
///
/// * Ascending keeps the `limit` largest groups, smallest first.
/// * Descending keeps the `limit` largest groups, largest first.
///
/// Groups are formed in key order and the sort is stable, so tied values
/// come out in key order. Rows with an empty key belong to no group.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(dimension = %spec.dimension, measure = %spec.measure, rows = table.len())
)]
pub fn aggregate<R: Record>(
    table: &Table<R>,
    spec: &AggregateSpec,
) -> Result<Vec<GroupTotal>, AnalyticsError> {
    if !R::DIMENSIONS.contains(&spec.dimension) {
        return Err(AnalyticsError::UnsupportedDimension(spec.dimension));
    }
    if !R::MEASURES.contains(&spec.measure) {
        return Err(AnalyticsError::UnsupportedMeasure(spec.measure));
    }

    let mut totals = group_sums(table, spec.dimension, spec.measure)?
        .into_iter()
        .collect::<Vec<_>>();

    match spec.order {
        SortOrder::Ascending => {
            totals.sort_by(|a, b| a.1.cmp(&b.1));
            let excess = totals.len().saturating_sub(spec.limit);
            totals.drain(..excess);
        }
        SortOrder::Descending => {
            totals.sort_by(|a, b| b.1.cmp(&a.1));
            totals.truncate(spec.limit);
        }
    }

    Ok(totals
        .into_iter()
        .map(|(key, value)| GroupTotal {
            key: key.to_string(),
            value,
        })
        .collect())
}

/// Sums `measure` per distinct `dimension` value.
fn group_sums<'a, R: Record>(
    table: &'a Table<R>,
    dimension: Dimension,
    measure: MeasureField,
) -> Result<BTreeMap<&'a str, Decimal>, AnalyticsError> {
    let mut sums: BTreeMap<&str, Decimal> = BTreeMap::new();
    let mut unkeyed = 0usize;

    for row in table {
        let key = row
            .dimension(dimension)
            .ok_or(AnalyticsError::UnsupportedDimension(dimension))?;
        if key.is_empty() {
            unkeyed += 1;
            continue;
        }
        let value = row
            .measure(measure)
            .ok_or(AnalyticsError::UnsupportedMeasure(measure))?;

        let sum = sums.entry(key).or_insert(Decimal::ZERO);
        *sum = sum
            .checked_add(value)
            .ok_or_else(|| AnalyticsError::Overflow {
                measure: measure.to_string(),
                key: key.to_string(),
            })?;
    }

    if unkeyed > 0 {
        tracing::debug!(unkeyed, "Rows without a {dimension} were left out.");
    }
    Ok(sums)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{TransactionRecord, UserDeviceRecord};
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

    fn by_state(order: SortOrder, limit: usize) -> AggregateSpec {
        AggregateSpec {
            dimension: Dimension::State,
            measure: MeasureField::Amount,
            order,
            limit,
        }
    }

    fn by_brand(limit: usize) -> AggregateSpec {
        AggregateSpec {
            dimension: Dimension::Brand,
            measure: MeasureField::Count,
            order: SortOrder::Descending,
            limit,
        }
    }

    fn pairs(totals: &[GroupTotal]) -> Vec<(&str, Decimal)> {
        totals.iter().map(|t| (t.key.as_str(), t.value)).collect()
    }

    #[test]
    fn test_states_ascending_example() {
        let table = Table::new(vec![
            txn("A", 100, dec!(500.0)),
            txn("B", 50, dec!(1200.0)),
            txn("A", 10, dec!(300.0)),
        ]);
        let out = aggregate(&table, &by_state(SortOrder::Ascending, 10)).unwrap();
        assert_eq!(pairs(&out), vec![("A", dec!(800.0)), ("B", dec!(1200.0))]);
    }

    #[test]
    fn test_brands_descending_example() {
        let table = Table::new(vec![user("X", 5), user("Y", 9), user("X", 3)]);
        let out = aggregate(&table, &by_brand(10)).unwrap();
        assert_eq!(pairs(&out), vec![("Y", dec!(9)), ("X", dec!(8))]);
    }

    #[test]
    fn test_ascending_truncation_keeps_largest_tail() {
        let table: Table<TransactionRecord> = (1..=12)
            .map(|i| txn(&format!("S{i:02}"), 1, Decimal::from(i * 10)))
            .collect();
        let out = aggregate(&table, &by_state(SortOrder::Ascending, 3)).unwrap();
        assert_eq!(
            pairs(&out),
            vec![("S10", dec!(100)), ("S11", dec!(110)), ("S12", dec!(120))]
        );
    }

    #[test]
    fn test_descending_truncation_keeps_head() {
        let table: Table<UserDeviceRecord> =
            (1..=12).map(|i| user(&format!("B{i:02}"), i)).collect();
        let out = aggregate(&table, &by_brand(3)).unwrap();
        assert_eq!(
            pairs(&out),
            vec![("B12", dec!(12)), ("B11", dec!(11)), ("B10", dec!(10))]
        );
    }

    #[test]
    fn test_length_is_min_of_limit_and_groups() {
        let table = Table::new(vec![
            txn("A", 1, dec!(1)),
            txn("B", 1, dec!(2)),
            txn("A", 1, dec!(3)),
        ]);
        for limit in 0..5 {
            let out = aggregate(&table, &by_state(SortOrder::Ascending, limit)).unwrap();
            assert_eq!(out.len(), limit.min(2), "limit {limit}");
            let out = aggregate(&table, &by_state(SortOrder::Descending, limit)).unwrap();
            assert_eq!(out.len(), limit.min(2), "limit {limit}");
        }
    }

    #[test]
    fn test_ordering_invariants() {
        let table = Table::new(vec![
            txn("A", 1, dec!(7)),
            txn("B", 1, dec!(3)),
            txn("C", 1, dec!(9)),
            txn("D", 1, dec!(3)),
            txn("E", 1, dec!(1)),
        ]);
        let asc = aggregate(&table, &by_state(SortOrder::Ascending, 10)).unwrap();
        assert!(asc.windows(2).all(|w| w[0].value <= w[1].value));
        let desc = aggregate(&table, &by_state(SortOrder::Descending, 10)).unwrap();
        assert!(desc.windows(2).all(|w| w[0].value >= w[1].value));
    }

    #[test]
    fn test_sum_law_per_group() {
        let table = Table::new(vec![
            txn("A", 1, dec!(1.10)),
            txn("B", 1, dec!(2.20)),
            txn("A", 1, dec!(3.30)),
            txn("C", 1, dec!(0)),
            txn("B", 1, dec!(4.40)),
        ]);
        let out = aggregate(&table, &by_state(SortOrder::Descending, 10)).unwrap();
        for total in &out {
            let expected: Decimal = table
                .iter()
                .filter(|r| r.state == total.key)
                .map(|r| r.amount)
                .sum();
            assert_eq!(total.value, expected, "group {}", total.key);
        }
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_count_measure_on_transactions() {
        let table = Table::new(vec![txn("A", 4, dec!(1)), txn("A", 6, dec!(1))]);
        let spec = AggregateSpec {
            measure: MeasureField::Count,
            ..by_state(SortOrder::Descending, 10)
        };
        let out = aggregate(&table, &spec).unwrap();
        assert_eq!(pairs(&out), vec![("A", dec!(10))]);
    }

    #[test]
    fn test_empty_keys_form_no_group() {
        let users = Table::new(vec![user("", 5), user("X", 3)]);
        let out = aggregate(&users, &by_brand(10)).unwrap();
        assert_eq!(pairs(&out), vec![("X", dec!(3))]);

        let table = Table::new(vec![txn("", 1, dec!(900)), txn("A", 1, dec!(1))]);
        let out = aggregate(&table, &by_state(SortOrder::Ascending, 10)).unwrap();
        assert_eq!(pairs(&out), vec![("A", dec!(1))]);
    }

    #[test]
    fn test_empty_table_gives_empty_output() {
        let table = Table::<TransactionRecord>::default();
        assert!(aggregate(&table, &by_state(SortOrder::Ascending, 10)).unwrap().is_empty());
    }

    #[test]
    fn test_unsupported_dimension_and_measure() {
        let table = Table::new(vec![user("X", 1)]);
        let err = aggregate(&table, &by_state(SortOrder::Ascending, 10)).unwrap_err();
        assert_eq!(err, AnalyticsError::UnsupportedDimension(Dimension::State));

        let spec = AggregateSpec {
            measure: MeasureField::Amount,
            ..by_brand(10)
        };
        let err = aggregate(&table, &spec).unwrap_err();
        assert_eq!(err, AnalyticsError::UnsupportedMeasure(MeasureField::Amount));
    }

    #[test]
    fn test_unsupported_dimension_on_empty_table_still_errors() {
        let table = Table::<UserDeviceRecord>::default();
        assert!(aggregate(&table, &by_state(SortOrder::Ascending, 10)).is_err());
    }

    #[test]
    fn test_overflow_is_an_error() {
        let table = Table::new(vec![txn("A", 1, Decimal::MAX), txn("A", 1, Decimal::MAX)]);
        let err = aggregate(&table, &by_state(SortOrder::Ascending, 10)).unwrap_err();
        assert!(matches!(err, AnalyticsError::Overflow { .. }));
    }
}
