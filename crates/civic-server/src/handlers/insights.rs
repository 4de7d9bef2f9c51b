//! Ad hoc classification handlers
//!
//! Rows posted here are validated, classified with the server's thresholds
//! and returned with their insight column, in the order they were sent.

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::{AppError, AppState, MAX_CLASSIFY_ROWS};
use civic_core::models::MetricRow;
use civic_core::{Annotated, OutlookRecord, SustainabilityRecord};

fn check_rows<R: MetricRow>(rows: &[R]) -> Result<(), AppError> {
    if rows.len() > MAX_CLASSIFY_ROWS {
        return Err(AppError::bad_request(&format!(
            "Too many rows (max {})",
            MAX_CLASSIFY_ROWS
        )));
    }
    for row in rows {
        row.validate()?;
    }
    Ok(())
}

/// POST /api/insights/sustainability
pub async fn classify_sustainability(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Vec<SustainabilityRecord>>, JsonRejection>,
) -> Result<Json<Vec<Annotated<SustainabilityRecord>>>, AppError> {
    let Json(rows) = body?;
    check_rows(&rows)?;
    Ok(Json(state.engine.annotate_sustainability(&rows)))
}

/// POST /api/insights/outlook
pub async fn classify_outlook(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Vec<OutlookRecord>>, JsonRejection>,
) -> Result<Json<Vec<Annotated<OutlookRecord>>>, AppError> {
    let Json(rows) = body?;
    check_rows(&rows)?;
    Ok(Json(state.engine.annotate_outlook(&rows)))
}
