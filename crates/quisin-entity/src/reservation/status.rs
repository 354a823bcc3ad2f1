//! Reservation status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a reservation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "reservation_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    /// Booked and expected.
    #[default]
    Confirmed,
    /// Called off before seating.
    Cancelled,
    /// Guests are seated.
    Arrived,
    /// Guests have left.
    Completed,
    /// Guests never showed up.
    NoShow,
}

impl ReservationStatus {
    /// Statuses that hold the table for conflict purposes.
    pub const OCCUPYING: [ReservationStatus; 2] = [Self::Confirmed, Self::Arrived];

    /// Whether a reservation in this status blocks its time slot.
    pub fn occupies_table(&self) -> bool {
        Self::OCCUPYING.contains(self)
    }

    /// Return the status as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Arrived => "arrived",
            Self::Completed => "completed",
            Self::NoShow => "no_show",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = quisin_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            "arrived" => Ok(Self::Arrived),
            "completed" => Ok(Self::Completed),
            "no_show" => Ok(Self::NoShow),
            _ => Err(quisin_core::AppError::validation(format!(
                "Invalid status: '{s}'. Expected one of: confirmed, cancelled, arrived, completed, no_show"
            ))),
        }
    }
}
