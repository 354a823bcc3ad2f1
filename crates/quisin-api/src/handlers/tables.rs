//! Table registry handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use quisin_entity::table::{Table, TableOverview};

use crate::dto::request::{CreateTableRequest, UpdateTableRequest, UpdateTableStatusRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{RestaurantAdmin, ValidatedJson};
use crate::state::AppState;

/// GET /api/admin/tables
pub async fn list_tables(
    State(state): State<AppState>,
    admin: RestaurantAdmin,
) -> Result<Json<ApiResponse<Vec<TableOverview>>>, ApiError> {
    let tables = state.table_service.list(admin.restaurant_id()).await?;
    Ok(Json(ApiResponse::ok(tables)))
}

/// POST /api/admin/tables
pub async fn create_table(
    State(state): State<AppState>,
    admin: RestaurantAdmin,
    ValidatedJson(req): ValidatedJson<CreateTableRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Table>>), ApiError> {
    let table = state
        .table_service
        .create(admin.restaurant_id(), req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(table))))
}

/// GET /api/admin/tables/{id}
pub async fn get_table(
    State(state): State<AppState>,
    admin: RestaurantAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TableOverview>>, ApiError> {
    let table = state.table_service.get(admin.restaurant_id(), id).await?;
    Ok(Json(ApiResponse::ok(table)))
}

/// PUT /api/admin/tables/{id}
pub async fn update_table(
    State(state): State<AppState>,
    admin: RestaurantAdmin,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateTableRequest>,
) -> Result<Json<ApiResponse<Table>>, ApiError> {
    let table = state
        .table_service
        .update(admin.restaurant_id(), id, req.into())
        .await?;
    Ok(Json(ApiResponse::ok(table)))
}

/// PUT /api/admin/tables/{id}/status
pub async fn update_table_status(
    State(state): State<AppState>,
    admin: RestaurantAdmin,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateTableStatusRequest>,
) -> Result<Json<ApiResponse<Table>>, ApiError> {
    let table = state
        .table_service
        .update_status(admin.restaurant_id(), id, req.status)
        .await?;
    Ok(Json(ApiResponse::ok(table)))
}
