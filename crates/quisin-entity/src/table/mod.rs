//! Dining table entities (the table registry).

pub mod model;
pub mod status;

pub use model::{CreateTable, Table, TableOverview, UpdateTable};
pub use status::TableStatus;
