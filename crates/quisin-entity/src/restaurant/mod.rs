//! Restaurant domain entities.

pub mod model;

pub use model::Restaurant;
