//! # Pulse Core Types
//!
//! The shared vocabulary of the workspace: the three record shapes loaded from disk,
//! the `Table` container they live in, and the small enums that name dimensions,
//! measures, sort orders, chart kinds and dashboard views.
//!
//! This crate has no knowledge of files, configuration or rendering.

pub mod enums;
pub mod error;
pub mod records;
pub mod table;

// Re-export the core types to provide a clean public API.
pub use enums::{ChartKind, Dimension, MeasureField, SortOrder, TableKind, ViewVariant};
pub use error::CoreError;
pub use records::{DistrictTransactionRecord, Period, Record, TransactionRecord, UserDeviceRecord};
pub use table::Table;
