//! Restaurant scope resolution.

pub mod service;

pub use service::RestaurantService;
