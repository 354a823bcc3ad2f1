//! # quisin-service
//!
//! Business logic service layer for Quisin. Each service orchestrates
//! repositories and auth primitives to implement application-level use
//! cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod context;
pub mod reservation;
pub mod restaurant;
pub mod table;

pub use auth::AuthService;
pub use context::RequestContext;
pub use reservation::{
    AdmissionChecker, AdmissionDecision, AdmissionRequest, BookingService,
    MemoryReservationStore, Rejection, ReservationService, ReservationStore,
};
pub use restaurant::RestaurantService;
pub use table::TableService;
