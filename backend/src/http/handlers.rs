//! HTTP handlers for the REST API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{debug, warn};

use super::dto::{HealthResponse, NatalChartRequest, NatalChartResponse};
use super::error::AppError;
use super::state::AppState;
use crate::services::calculate_natal_chart as compute_chart;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Liveness probe.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

// =============================================================================
// Natal Chart
// =============================================================================

/// POST /api/natal-chart/calculate
///
/// Compute Sun sign, Moon sign and ascendant for the given birth data.
pub async fn calculate_natal_chart(
    State(state): State<AppState>,
    payload: Result<Json<NatalChartRequest>, JsonRejection>,
) -> HandlerResult<NatalChartResponse> {
    let Json(input) = payload?;
    debug!(
        birth_date = %input.birth_date,
        birth_time = ?input.birth_time,
        tz_offset_hours = input.tz_offset_hours,
        "Calculating natal chart"
    );

    let ephemeris = state.ephemeris.clone();
    let chart = tokio::task::spawn_blocking(move || compute_chart(&ephemeris, &input))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?
        .map_err(|e| {
            warn!(code = e.code(), "Natal chart request failed: {}", e);
            AppError::from(e)
        })?;

    Ok(Json(chart))
}
