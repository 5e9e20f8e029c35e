use crate::{AppState, error::AppError};
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::Uri,
};
use core_types::ViewVariant;
use dashboard::{DashboardFrame, Vocabulary};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub year: Option<i32>,
    pub quarter: Option<u8>,
    pub view: Option<ViewVariant>,
}

#[derive(Debug, Serialize)]
pub struct ViewInfo {
    pub variant: ViewVariant,
    pub label: &'static str,
}

/// # GET /api/periods
/// The years and quarters the selectors offer.
pub async fn get_periods(State(state): State<Arc<AppState>>) -> Json<Vocabulary> {
    Json(state.dashboard.vocabulary().clone())
}

/// # GET /api/views
pub async fn get_views() -> Json<Vec<ViewInfo>> {
    let views = ViewVariant::ALL
        .into_iter()
        .map(|variant| ViewInfo {
            variant,
            label: variant.label(),
        })
        .collect();
    Json(views)
}

/// # GET /api/dashboard?year=&quarter=&view=
/// Renders one frame. Omitted parameters fall back to the first available
/// year/quarter and the configured default view.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> Result<Json<DashboardFrame>, AppError> {
    let Query(query) = query?;
    let selection = state
        .dashboard
        .select(query.year, query.quarter, query.view)?;
    let frame = state.dashboard.render(&selection)?;
    Ok(Json(frame))
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
