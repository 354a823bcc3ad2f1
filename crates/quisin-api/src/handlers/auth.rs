//! Auth handlers: login, superadmin bootstrap, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use quisin_entity::user::UserProfile;
use quisin_service::auth::LoginResult;

use crate::dto::request::{LoginRequest, RegisterSuperadminRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResult>>, ApiError> {
    let result = state.auth_service.login(&req.email, &req.password).await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// POST /api/auth/register-superadmin
pub async fn register_superadmin(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterSuperadminRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserProfile>>), ApiError> {
    let profile = state.auth_service.register_superadmin(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(profile))))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserProfile>>, ApiError> {
    let profile = state.auth_service.me(&auth).await?;
    Ok(Json(ApiResponse::ok(profile)))
}
