//! Reservation handlers.
//!
//! Writes go through the booking service so that every create, update, and
//! reactivation passes admission. The `/admission` endpoint exposes the
//! same check as a dry run and returns the decision verbatim.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use quisin_core::types::pagination::PageResponse;
use quisin_entity::reservation::{Reservation, ReservationDetail};
use quisin_service::reservation::AdmissionDecision;

use crate::dto::request::{
    AdmissionCheckRequest, CreateReservationRequest, ReservationListQuery,
    UpdateReservationRequest, UpdateReservationStatusRequest,
};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{PaginationParams, RestaurantAdmin, ValidatedJson};
use crate::state::AppState;

/// GET /api/admin/reservations
pub async fn list_reservations(
    State(state): State<AppState>,
    admin: RestaurantAdmin,
    pagination: Result<Query<PaginationParams>, QueryRejection>,
    query: Result<Query<ReservationListQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<PageResponse<ReservationDetail>>>, ApiError> {
    let Query(pagination) = pagination?;
    let Query(query) = query?;
    let page = state
        .reservation_service
        .list(
            admin.restaurant_id(),
            &query.into(),
            pagination.into_page_request(),
        )
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// POST /api/admin/reservations
pub async fn create_reservation(
    State(state): State<AppState>,
    admin: RestaurantAdmin,
    ValidatedJson(req): ValidatedJson<CreateReservationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Reservation>>), ApiError> {
    let reservation = state
        .booking_service
        .create(admin.restaurant_id(), &req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(reservation))))
}

/// GET /api/admin/reservations/{id}
pub async fn get_reservation(
    State(state): State<AppState>,
    admin: RestaurantAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ReservationDetail>>, ApiError> {
    let reservation = state
        .reservation_service
        .get(admin.restaurant_id(), id)
        .await?;
    Ok(Json(ApiResponse::ok(reservation)))
}

/// PUT /api/admin/reservations/{id}
pub async fn update_reservation(
    State(state): State<AppState>,
    admin: RestaurantAdmin,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateReservationRequest>,
) -> Result<Json<ApiResponse<Reservation>>, ApiError> {
    let reservation = state
        .booking_service
        .update(admin.restaurant_id(), id, &req.into())
        .await?;
    Ok(Json(ApiResponse::ok(reservation)))
}

/// PUT /api/admin/reservations/{id}/status
pub async fn update_reservation_status(
    State(state): State<AppState>,
    admin: RestaurantAdmin,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateReservationStatusRequest>,
) -> Result<Json<ApiResponse<Reservation>>, ApiError> {
    let reservation = state
        .booking_service
        .update_status(admin.restaurant_id(), id, req.status)
        .await?;
    Ok(Json(ApiResponse::ok(reservation)))
}

/// POST /api/admin/reservations/admission
pub async fn check_admission(
    State(state): State<AppState>,
    admin: RestaurantAdmin,
    ValidatedJson(req): ValidatedJson<AdmissionCheckRequest>,
) -> Result<Json<AdmissionDecision>, ApiError> {
    let request = req.into_admission(admin.restaurant_id());
    let decision = state.booking_service.check(&request).await?;
    Ok(Json(decision))
}
