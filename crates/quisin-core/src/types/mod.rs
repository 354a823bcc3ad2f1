//! Core type definitions used across the Quisin workspace.

pub mod pagination;

pub use pagination::{PageRequest, PageResponse};
