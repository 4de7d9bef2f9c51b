//! HTML dashboard pages

use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::{render, AppError, AppState};
use civic_core::{MunicipalDashboard, OutlookDashboard};

/// GET / - Municipal dashboard
pub async fn municipal_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let dashboard = MunicipalDashboard::load(
        state.source.as_ref(),
        &state.engine,
        state.dashboard.dashboard.title.as_str(),
    )
    .await
    .map_err(AppError::upstream)?;
    Ok(Html(render::municipal_page(&dashboard)))
}

/// GET /outlook - Climate and fiscal outlook
pub async fn outlook_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let dashboard = OutlookDashboard::load(
        state.source.as_ref(),
        &state.engine,
        state.dashboard.dashboard.outlook_title.as_str(),
    )
    .await
    .map_err(AppError::upstream)?;
    Ok(Html(render::outlook_page(&dashboard)))
}
