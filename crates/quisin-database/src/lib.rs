//! # quisin-database
//!
//! PostgreSQL connection management, migrations, and concrete repository
//! implementations for all Quisin entities.

pub mod connection;
mod error;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{
    ReservationRepository, ReservationTransaction, RestaurantRepository, TableRepository,
    UserRepository,
};
