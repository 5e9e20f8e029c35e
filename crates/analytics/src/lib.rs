//! # Pulse Analytics Engine
//!
//! The filter-and-reduce core of the dashboard.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** This crate has no knowledge of files, configuration or rendering.
//!   It depends only on `core-types`.
//! - **Stateless calculation:** Every function takes tables by reference and returns
//!   new values. Inputs are never mutated.
//!
//! ## Public API
//!
//! - `filter_period`: restricts a table to one (year, quarter).
//! - `Vocabulary`: the selectable years and quarters of a table.
//! - `aggregate`: group-by, sum, sort and top-N truncation driven by an `AggregateSpec`.
//! - `summarize`: the three headline `SummaryMetrics`.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod aggregate;
pub mod error;
pub mod filter;
pub mod summary;

// Re-export the key components to create a clean, public-facing API.
pub use aggregate::{AggregateSpec, GroupTotal, aggregate};
pub use error::AnalyticsError;
pub use filter::{Vocabulary, filter_period};
pub use summary::{SummaryMetrics, summarize};
