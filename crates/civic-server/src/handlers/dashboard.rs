//! Dashboard JSON handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{AppError, AppState, HealthResponse};
use civic_core::{MunicipalDashboard, OutlookDashboard};

/// GET /api/health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        source: state.source.name(),
    })
}

/// GET /api/municipal - Budget, revenue, indicators and annotated sustainability rows
pub async fn get_municipal(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MunicipalDashboard>, AppError> {
    let dashboard = MunicipalDashboard::load(
        state.source.as_ref(),
        &state.engine,
        state.dashboard.dashboard.title.as_str(),
    )
    .await
    .map_err(AppError::upstream)?;
    Ok(Json(dashboard))
}

/// GET /api/outlook - Annotated outlook rows and their charts
pub async fn get_outlook(
    State(state): State<Arc<AppState>>,
) -> Result<Json<OutlookDashboard>, AppError> {
    let dashboard = OutlookDashboard::load(
        state.source.as_ref(),
        &state.engine,
        state.dashboard.dashboard.outlook_title.as_str(),
    )
    .await
    .map_err(AppError::upstream)?;
    Ok(Json(dashboard))
}
