//! # quisin-entity
//!
//! Domain entity models for the Quisin restaurant backend. Every struct in
//! this crate represents a database table row or a domain value object. All
//! entities derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and
//! database entities additionally derive `sqlx::FromRow`.

pub mod reservation;
pub mod restaurant;
pub mod table;
pub mod user;
