use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Analytics error: {0}")]
    Analytics(#[from] analytics::AnalyticsError),

    #[error("Invalid selection: {0}")]
    InvalidSelection(#[from] core_types::CoreError),

    #[error("No year/quarter periods are available in the transaction dataset.")]
    NoPeriods,
}
