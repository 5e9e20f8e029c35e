use core_types::{Dimension, MeasureField};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Records in this table cannot be grouped by '{0}'")]
    UnsupportedDimension(Dimension),

    #[error("Records in this table have no '{0}' measure")]
    UnsupportedMeasure(MeasureField),

    #[error("Calculation error: the sum of '{measure}' overflowed for '{key}'")]
    Overflow { measure: String, key: String },
}
