//! Request handlers, one module per resource.

pub mod auth;
pub mod health;
pub mod reservations;
pub mod restaurant;
pub mod tables;
