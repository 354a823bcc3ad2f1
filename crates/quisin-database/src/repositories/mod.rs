//! Repository implementations for all Quisin entities.

pub mod reservation;
pub mod restaurant;
pub mod table;
pub mod user;

pub use reservation::{ReservationRepository, ReservationTransaction};
pub use restaurant::RestaurantRepository;
pub use table::TableRepository;
pub use user::UserRepository;
