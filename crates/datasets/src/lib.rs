//! # Pulse Datasets Crate
//!
//! Reads the three delimiter-separated source files into immutable in-memory tables.
//! It is the only crate that touches the filesystem for data.
//!
//! ## Public API
//!
//! - `load_datasets`: reads every table named in `DatasetSettings` and returns a `Datasets` handle.
//! - `read_table`: the reader-level parser, usable on any `Read` source.
//! - `Datasets`: the immutable handle holding the three tables.
//! - `DatasetError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod deserializers;
pub mod error;
pub mod loader;
pub mod raw;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use error::DatasetError;
pub use loader::{LoadReport, LoadedTable, RowWarning, load_datasets, load_table, read_table};
pub use raw::{RawDistrictRow, RawTransactionRow, RawUserDeviceRow, SourceRow};
pub use store::Datasets;
