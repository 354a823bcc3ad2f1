//! Bearer-token extractors.
//!
//! [`AuthUser`] only proves who the caller is. [`RestaurantAdmin`] also
//! requires the `admin` role and resolves the restaurant the caller runs.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use quisin_core::error::AppError;
use quisin_entity::restaurant::Restaurant;
use quisin_entity::user::UserRole;
use quisin_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = state.jwt_decoder.decode(token)?;

        Ok(AuthUser(RequestContext::new(
            claims.user_id(),
            claims.role,
            claims.email,
        )))
    }
}

/// An authenticated restaurant admin together with their restaurant.
#[derive(Debug, Clone)]
pub struct RestaurantAdmin {
    pub user: RequestContext,
    pub restaurant: Restaurant,
}

impl RestaurantAdmin {
    /// Shorthand for `self.restaurant.id`.
    pub fn restaurant_id(&self) -> uuid::Uuid {
        self.restaurant.id
    }
}

impl FromRequestParts<AppState> for RestaurantAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(user) = AuthUser::from_request_parts(parts, state).await?;
        state
            .rbac_enforcer
            .require_any_role(user.role, &[UserRole::Admin])?;

        let restaurant = state.restaurant_service.resolve_for_admin(&user).await?;
        Ok(Self { user, restaurant })
    }
}

fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))
}
