use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dashboard::DashboardError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Dashboard error: {0}")]
    Dashboard(#[from] DashboardError),
    #[error("Bad query string: {0}")]
    BadQuery(#[from] QueryRejection),
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Dashboard(DashboardError::NoPeriods) => (
                StatusCode::NOT_FOUND,
                DashboardError::NoPeriods.to_string(),
            ),
            AppError::Dashboard(DashboardError::InvalidSelection(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            AppError::Dashboard(err) => {
                tracing::error!(error = ?err, "Dashboard render error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred while rendering the dashboard".to_string(),
                )
            }
            AppError::BadQuery(rejection) => (rejection.status(), rejection.body_text()),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
