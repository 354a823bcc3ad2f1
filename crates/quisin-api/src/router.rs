//! Route definitions for the Quisin HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.

use axum::Router;
use axum::routing::{get, post, put};

use crate::handlers;
use crate::state::AppState;

/// Build the API router and attach `state`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(restaurant_routes())
        .merge(table_routes())
        .merge(reservation_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Liveness and readiness probes
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/ready", get(handlers::health::ready))
}

/// Login, superadmin bootstrap, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route(
            "/auth/register-superadmin",
            post(handlers::auth::register_superadmin),
        )
        .route("/auth/me", get(handlers::auth::me))
}

fn restaurant_routes() -> Router<AppState> {
    Router::new().route(
        "/admin/restaurant",
        get(handlers::restaurant::get_restaurant),
    )
}

/// Table registry
fn table_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/tables",
            get(handlers::tables::list_tables).post(handlers::tables::create_table),
        )
        .route(
            "/admin/tables/{id}",
            get(handlers::tables::get_table).put(handlers::tables::update_table),
        )
        .route(
            "/admin/tables/{id}/status",
            put(handlers::tables::update_table_status),
        )
}

/// Reservation book and admission check
fn reservation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/reservations",
            get(handlers::reservations::list_reservations)
                .post(handlers::reservations::create_reservation),
        )
        .route(
            "/admin/reservations/admission",
            post(handlers::reservations::check_admission),
        )
        .route(
            "/admin/reservations/{id}",
            get(handlers::reservations::get_reservation)
                .put(handlers::reservations::update_reservation),
        )
        .route(
            "/admin/reservations/{id}/status",
            put(handlers::reservations::update_reservation_status),
        )
}
