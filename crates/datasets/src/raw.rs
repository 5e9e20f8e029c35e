use crate::deserializers::{parse_amount, parse_count, parse_quarter, parse_year};
use core_types::{DistrictTransactionRecord, TableKind, TransactionRecord, UserDeviceRecord};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// A row as it appears on disk, before numeric fields are parsed.
pub trait SourceRow: DeserializeOwned {
    type Record;

    const TABLE: TableKind;

    /// Header names that must be present in the file.
    const REQUIRED: &'static [&'static str];

    fn normalize(self) -> Result<Self::Record, String>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTransactionRow {
    pub year: String,
    pub quarter: String,
    pub state: String,
    pub count: String,
    pub amount: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDistrictRow {
    pub year: String,
    pub quarter: String,
    pub district: String,
    pub count: String,
    pub amount: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawUserDeviceRow {
    pub year: String,
    pub quarter: String,
    pub brand: String,
    pub count: String,
}

impl SourceRow for RawTransactionRow {
    type Record = TransactionRecord;

    const TABLE: TableKind = TableKind::Transactions;
    const REQUIRED: &'static [&'static str] = &["year", "quarter", "state", "count", "amount"];

    fn normalize(self) -> Result<TransactionRecord, String> {
        Ok(TransactionRecord {
            year: parse_year(&self.year)?,
            quarter: parse_quarter(&self.quarter)?,
            state: self.state,
            count: parse_count(&self.count)?,
            amount: parse_amount(&self.amount)?,
        })
    }
}

impl SourceRow for RawDistrictRow {
    type Record = DistrictTransactionRecord;

    const TABLE: TableKind = TableKind::Districts;
    const REQUIRED: &'static [&'static str] = &["year", "quarter", "district", "count", "amount"];

    fn normalize(self) -> Result<DistrictTransactionRecord, String> {
        Ok(DistrictTransactionRecord {
            year: parse_year(&self.year)?,
            quarter: parse_quarter(&self.quarter)?,
            district: self.district,
            count: parse_count(&self.count)?,
            amount: parse_amount(&self.amount)?,
        })
    }
}

impl SourceRow for RawUserDeviceRow {
    type Record = UserDeviceRecord;

    const TABLE: TableKind = TableKind::UserDevices;
    const REQUIRED: &'static [&'static str] = &["year", "quarter", "brand", "count"];

    fn normalize(self) -> Result<UserDeviceRecord, String> {
        Ok(UserDeviceRecord {
            year: parse_year(&self.year)?,
            quarter: parse_quarter(&self.quarter)?,
            brand: self.brand,
            count: parse_count(&self.count)?,
        })
    }
}
