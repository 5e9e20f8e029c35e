use crate::enums::{Dimension, MeasureField};
use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A row that belongs to a (year, quarter) period and exposes named
/// categorical and numeric fields for generic filtering and aggregation.
pub trait Record {
    /// Dimensions this record can be grouped by.
    const DIMENSIONS: &'static [Dimension];
    /// Measures this record can be summed over.
    const MEASURES: &'static [MeasureField];

    fn year(&self) -> i32;
    fn quarter(&self) -> u8;

    /// Returns `None` when the record does not carry `dimension`.
    /// An empty string is a missing value, not a group of its own.
    fn dimension(&self, dimension: Dimension) -> Option<&str>;

    /// Returns `None` when the record does not carry `measure`.
    fn measure(&self, measure: MeasureField) -> Option<Decimal>;

    fn in_period(&self, period: Period) -> bool {
        self.year() == period.year && self.quarter() == period.quarter
    }
}

/// A (year, quarter) selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub quarter: u8,
}

impl Period {
    /// Builds a period from user input, rejecting quarters outside 1..=4.
    pub fn new(year: i32, quarter: u8) -> Result<Self, CoreError> {
        if !(1..=4).contains(&quarter) {
            return Err(CoreError::InvalidInput(
                "quarter".to_string(),
                format!("{quarter} is not between 1 and 4"),
            ));
        }
        Ok(Self { year, quarter })
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Q{}", self.year, self.quarter)
    }
}

/// State-level transaction aggregate. One row per (year, quarter, state).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub year: i32,
    pub quarter: u8,
    pub state: String,
    pub count: u64,
    pub amount: Decimal,
}

/// District-level transaction aggregate. One row per (year, quarter, district).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictTransactionRecord {
    pub year: i32,
    pub quarter: u8,
    pub district: String,
    pub count: u64,
    pub amount: Decimal,
}

/// Registered users per device brand. One row per (year, quarter, brand).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDeviceRecord {
    pub year: i32,
    pub quarter: u8,
    pub brand: String,
    pub count: u64,
}

impl Record for TransactionRecord {
    const DIMENSIONS: &'static [Dimension] = &[Dimension::State];
    const MEASURES: &'static [MeasureField] = &[MeasureField::Count, MeasureField::Amount];

    fn year(&self) -> i32 {
        self.year
    }

    fn quarter(&self) -> u8 {
        self.quarter
    }

    fn dimension(&self, dimension: Dimension) -> Option<&str> {
        match dimension {
            Dimension::State => Some(&self.state),
            _ => None,
        }
    }

    fn measure(&self, measure: MeasureField) -> Option<Decimal> {
        match measure {
            MeasureField::Count => Some(Decimal::from(self.count)),
            MeasureField::Amount => Some(self.amount),
        }
    }
}

impl Record for DistrictTransactionRecord {
    const DIMENSIONS: &'static [Dimension] = &[Dimension::District];
    const MEASURES: &'static [MeasureField] = &[MeasureField::Count, MeasureField::Amount];

    fn year(&self) -> i32 {
        self.year
    }

    fn quarter(&self) -> u8 {
        self.quarter
    }

    fn dimension(&self, dimension: Dimension) -> Option<&str> {
        match dimension {
            Dimension::District => Some(&self.district),
            _ => None,
        }
    }

    fn measure(&self, measure: MeasureField) -> Option<Decimal> {
        match measure {
            MeasureField::Count => Some(Decimal::from(self.count)),
            MeasureField::Amount => Some(self.amount),
        }
    }
}

impl Record for UserDeviceRecord {
    const DIMENSIONS: &'static [Dimension] = &[Dimension::Brand];
    const MEASURES: &'static [MeasureField] = &[MeasureField::Count];

    fn year(&self) -> i32 {
        self.year
    }

    fn quarter(&self) -> u8 {
        self.quarter
    }

    fn dimension(&self, dimension: Dimension) -> Option<&str> {
        match dimension {
            Dimension::Brand => Some(&self.brand),
            _ => None,
        }
    }

    fn measure(&self, measure: MeasureField) -> Option<Decimal> {
        match measure {
            MeasureField::Count => Some(Decimal::from(self.count)),
            MeasureField::Amount => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn txn() -> TransactionRecord {
        TransactionRecord {
            year: 2023,
            quarter: 1,
            state: "karnataka".into(),
            count: 100,
            amount: dec!(500.25),
        }
    }

    #[test]
    fn test_period_rejects_out_of_range_quarter() {
        assert!(Period::new(2023, 0).is_err());
        assert!(Period::new(2023, 5).is_err());
        assert_eq!(
            Period::new(2023, 4).unwrap(),
            Period {
                year: 2023,
                quarter: 4
            }
        );
    }

    #[test]
    fn test_period_display() {
        assert_eq!(Period::new(2022, 3).unwrap().to_string(), "2022 Q3");
    }

    #[test]
    fn test_transaction_fields() {
        let r = txn();
        assert_eq!(r.dimension(Dimension::State), Some("karnataka"));
        assert_eq!(r.dimension(Dimension::Brand), None);
        assert_eq!(r.measure(MeasureField::Amount), Some(dec!(500.25)));
        assert_eq!(r.measure(MeasureField::Count), Some(dec!(100)));
    }

    #[test]
    fn test_user_device_has_no_amount() {
        let r = UserDeviceRecord {
            year: 2023,
            quarter: 1,
            brand: "Xiaomi".into(),
            count: 7,
        };
        assert_eq!(r.measure(MeasureField::Amount), None);
        assert!(!UserDeviceRecord::MEASURES.contains(&MeasureField::Amount));
    }

    #[test]
    fn test_in_period() {
        let r = txn();
        assert!(r.in_period(Period::new(2023, 1).unwrap()));
        assert!(!r.in_period(Period::new(2023, 2).unwrap()));
        assert!(!r.in_period(Period::new(2024, 1).unwrap()));
    }
}
