//! Table registry management.

pub mod service;

pub use service::{NewTable, TableChanges, TableService};
