//! Reservation admission and the reservation ledger.
//!
//! [`AdmissionChecker`] decides whether a proposed booking may be admitted.
//! It reads through the [`TableRegistry`] and [`ReservationLedger`] seams,
//! which have a PostgreSQL implementation and an in-memory one.

pub mod admission;
pub mod booking;
pub mod ledger;
pub mod memory;
pub mod postgres;
pub mod service;

#[cfg(test)]
mod test_support;

pub use admission::{
    AdmissionChecker, AdmissionDecision, AdmissionPolicy, AdmissionRequest, Rejection,
};
pub use booking::{BookingService, NewReservation, ReservationChanges};
pub use ledger::{AdmissionScope, ReservationLedger, ReservationStore, TableRegistry};
pub use memory::MemoryReservationStore;
pub use service::ReservationService;
