//! Dining table entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::TableStatus;

/// A physical table owned by a restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Table {
    /// Unique table identifier.
    pub id: Uuid,
    /// Owning restaurant.
    pub restaurant_id: Uuid,
    /// Number shown on the floor plan, unique per restaurant.
    pub table_number: i32,
    /// Maximum party size. Always positive.
    pub seating_capacity: i32,
    /// Free-form placement hint ("window", "terrace").
    pub location_description: Option<String>,
    pub status: TableStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Table {
    /// Whether a party of `guests` fits at this table.
    pub fn seats(&self, guests: i32) -> bool {
        guests <= self.seating_capacity
    }
}

/// A table together with its count of confirmed reservations.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TableOverview {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub table: Table,
    pub active_reservations: i64,
}

/// Data required to register a new table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTable {
    pub restaurant_id: Uuid,
    pub table_number: i32,
    pub seating_capacity: i32,
    pub location_description: Option<String>,
    pub status: TableStatus,
}

/// Data for changing a table's number, capacity, or placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTable {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub table_number: i32,
    pub seating_capacity: i32,
    pub location_description: Option<String>,
}
