//! Health check handlers.

use axum::Json;
use axum::extract::State;

use quisin_core::error::AppError;

use crate::dto::response::{ApiResponse, HealthResponse, ReadinessResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/health
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// GET /api/health/ready
pub async fn ready(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ReadinessResponse>>, ApiError> {
    match state.db.health_check().await {
        Ok(true) => Ok(Json(ApiResponse::ok(ReadinessResponse {
            status: "ok".to_string(),
            database: "connected".to_string(),
        }))),
        Ok(false) | Err(_) => Err(AppError::service_unavailable("Database is unreachable").into()),
    }
}
