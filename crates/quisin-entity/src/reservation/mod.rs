//! Reservation domain entities (the reservation ledger).

pub mod model;
pub mod status;
pub mod window;

pub use model::{
    CreateReservation, Reservation, ReservationDetail, ReservationFilter, UpdateReservation,
};
pub use status::ReservationStatus;
pub use window::TimeWindow;
