//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use quisin_entity::reservation::{ReservationFilter, ReservationStatus};
use quisin_entity::table::TableStatus;
use quisin_service::auth::RegisterSuperadmin;
use quisin_service::reservation::{AdmissionRequest, NewReservation, ReservationChanges};
use quisin_service::table::{NewTable, TableChanges};

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Superadmin bootstrap request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterSuperadminRequest {
    #[validate(length(min = 1, max = 100, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    pub password: String,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
}

impl From<RegisterSuperadminRequest> for RegisterSuperadmin {
    fn from(req: RegisterSuperadminRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password: req.password,
            phone: req.phone,
        }
    }
}

/// Create table request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTableRequest {
    #[validate(range(min = 1, message = "Table number must be a positive integer"))]
    pub table_number: i32,
    #[validate(range(min = 1, message = "Seating capacity must be a positive integer"))]
    pub seating_capacity: i32,
    #[validate(length(max = 255))]
    pub location_description: Option<String>,
    pub status: Option<TableStatus>,
}

impl From<CreateTableRequest> for NewTable {
    fn from(req: CreateTableRequest) -> Self {
        Self {
            table_number: req.table_number,
            seating_capacity: req.seating_capacity,
            location_description: req.location_description,
            status: req.status,
        }
    }
}

/// Update table request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateTableRequest {
    #[validate(range(min = 1, message = "Table number must be a positive integer"))]
    pub table_number: i32,
    #[validate(range(min = 1, message = "Seating capacity must be a positive integer"))]
    pub seating_capacity: i32,
    #[validate(length(max = 255))]
    pub location_description: Option<String>,
}

impl From<UpdateTableRequest> for TableChanges {
    fn from(req: UpdateTableRequest) -> Self {
        Self {
            table_number: req.table_number,
            seating_capacity: req.seating_capacity,
            location_description: req.location_description,
        }
    }
}

/// Table status change body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateTableStatusRequest {
    pub status: TableStatus,
}

/// Query string of the reservation list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationListQuery {
    pub status: Option<ReservationStatus>,
    /// `YYYY-MM-DD`, matched against the UTC date of the reservation.
    pub date: Option<chrono::NaiveDate>,
    pub search: Option<String>,
}

impl From<ReservationListQuery> for ReservationFilter {
    fn from(query: ReservationListQuery) -> Self {
        Self {
            status: query.status,
            date: query.date,
            search: query
                .search
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

/// Create reservation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReservationRequest {
    pub customer_id: Uuid,
    pub table_id: Uuid,
    pub reservation_date: DateTime<Utc>,
    #[validate(range(min = 1, message = "Number of guests must be a positive integer"))]
    pub number_of_guests: i32,
    #[validate(length(max = 1000))]
    pub special_requests: Option<String>,
    pub status: Option<ReservationStatus>,
}

impl From<CreateReservationRequest> for NewReservation {
    fn from(req: CreateReservationRequest) -> Self {
        Self {
            customer_id: req.customer_id,
            table_id: req.table_id,
            reservation_date: req.reservation_date,
            number_of_guests: req.number_of_guests,
            special_requests: req.special_requests,
            status: req.status,
        }
    }
}

/// Update reservation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateReservationRequest {
    pub table_id: Uuid,
    pub reservation_date: DateTime<Utc>,
    #[validate(range(min = 1, message = "Number of guests must be a positive integer"))]
    pub number_of_guests: i32,
    #[validate(length(max = 1000))]
    pub special_requests: Option<String>,
    pub status: ReservationStatus,
}

impl From<UpdateReservationRequest> for ReservationChanges {
    fn from(req: UpdateReservationRequest) -> Self {
        Self {
            table_id: req.table_id,
            reservation_date: req.reservation_date,
            number_of_guests: req.number_of_guests,
            special_requests: req.special_requests,
            status: req.status,
        }
    }
}

/// Reservation status change body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateReservationStatusRequest {
    pub status: ReservationStatus,
}

/// Dry-run admission check body.
///
/// Party size is not range-validated here: the checker itself reports a
/// non-positive count.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AdmissionCheckRequest {
    pub table_id: Uuid,
    pub reservation_date: DateTime<Utc>,
    pub number_of_guests: i32,
    pub exclude_reservation_id: Option<Uuid>,
}

impl AdmissionCheckRequest {
    /// Scope the request to `restaurant_id`.
    pub fn into_admission(self, restaurant_id: Uuid) -> AdmissionRequest {
        AdmissionRequest {
            restaurant_id,
            table_id: self.table_id,
            reservation_date: self.reservation_date,
            number_of_guests: self.number_of_guests,
            exclude_reservation_id: self.exclude_reservation_id,
        }
    }
}
