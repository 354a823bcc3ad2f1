//! Reservation entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::ReservationStatus;

/// A booking of one table for one party at one time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    /// Unique reservation identifier.
    pub id: Uuid,
    /// Owning restaurant. Always equal to the table's restaurant.
    pub restaurant_id: Uuid,
    pub table_id: Uuid,
    pub customer_id: Uuid,
    /// Seating time.
    pub reservation_date: DateTime<Utc>,
    /// Party size, never above the table capacity at admission time.
    pub number_of_guests: i32,
    pub status: ReservationStatus,
    pub special_requests: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A reservation joined with its table number and customer contact.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReservationDetail {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub reservation: Reservation,
    pub table_number: i32,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
}

/// Data required to insert an admitted reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReservation {
    pub restaurant_id: Uuid,
    pub table_id: Uuid,
    pub customer_id: Uuid,
    pub reservation_date: DateTime<Utc>,
    pub number_of_guests: i32,
    pub special_requests: Option<String>,
    pub status: ReservationStatus,
}

/// Replacement values for an existing reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateReservation {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub table_id: Uuid,
    pub reservation_date: DateTime<Utc>,
    pub number_of_guests: i32,
    pub special_requests: Option<String>,
    pub status: ReservationStatus,
}

/// Optional filters for listing reservations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationFilter {
    pub status: Option<ReservationStatus>,
    /// Calendar day (UTC) of the seating time.
    pub date: Option<NaiveDate>,
    /// Case-insensitive match on customer name, phone, or email.
    pub search: Option<String>,
}

impl ReservationFilter {
    /// The search term as a SQL `ILIKE` pattern, if a non-blank one is set.
    pub fn search_pattern(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                let escaped = s
                    .replace('\\', "\\\\")
                    .replace('%', "\\%")
                    .replace('_', "\\_");
                format!("%{escaped}%")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_pattern_escapes_wildcards() {
        let filter = ReservationFilter {
            search: Some(" 50%_off ".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.search_pattern().as_deref(), Some("%50\\%\\_off%"));
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let filter = ReservationFilter {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(filter.search_pattern().is_none());
    }
}
