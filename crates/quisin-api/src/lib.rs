//! # quisin-api
//!
//! HTTP API layer for Quisin built on Axum.
//!
//! Provides the REST endpoints for authentication, the restaurant admin's
//! table registry and reservation book, and the admission boundary check,
//! together with middleware, extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
