use core_types::{DistrictTransactionRecord, Table, TransactionRecord, UserDeviceRecord};

/// The three tables loaded at startup.
///
/// Built once and never mutated afterwards. Callers share it behind an `Arc`
/// and pass it into every render.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    transactions: Table<TransactionRecord>,
    districts: Table<DistrictTransactionRecord>,
    user_devices: Table<UserDeviceRecord>,
}

impl Datasets {
    pub fn new(
        transactions: Table<TransactionRecord>,
        districts: Table<DistrictTransactionRecord>,
        user_devices: Table<UserDeviceRecord>,
    ) -> Self {
        Self {
            transactions,
            districts,
            user_devices,
        }
    }

    pub fn transactions(&self) -> &Table<TransactionRecord> {
        &self.transactions
    }

    pub fn districts(&self) -> &Table<DistrictTransactionRecord> {
        &self.districts
    }

    pub fn user_devices(&self) -> &Table<UserDeviceRecord> {
        &self.user_devices
    }
}
