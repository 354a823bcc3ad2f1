//! The admission decision for a proposed reservation.

use chrono::{DateTime, Duration, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Value, json};
use uuid::Uuid;

use quisin_core::config::reservation::ReservationConfig;
use quisin_core::error::{AppError, ErrorKind};
use quisin_core::result::AppResult;
use quisin_entity::reservation::{ReservationStatus, TimeWindow};
use quisin_entity::table::TableStatus;

use super::ledger::{ReservationLedger, TableRegistry};

/// Tunables of the admission rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmissionPolicy {
    /// Half-width of the symmetric exclusion window.
    pub window_half_width: Duration,
    /// Reject tables whose status is not `active`.
    pub require_active_table: bool,
}

impl AdmissionPolicy {
    /// Build the policy from configuration.
    pub fn from_config(config: &ReservationConfig) -> Self {
        Self {
            window_half_width: Duration::minutes(i64::from(config.conflict_window_minutes)),
            require_active_table: config.require_active_table,
        }
    }
}

impl Default for AdmissionPolicy {
    fn default() -> Self {
        Self::from_config(&ReservationConfig::default())
    }
}

/// A proposed reservation to evaluate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionRequest {
    pub restaurant_id: Uuid,
    pub table_id: Uuid,
    pub reservation_date: DateTime<Utc>,
    pub number_of_guests: i32,
    /// Set when re-evaluating an existing reservation so it does not
    /// conflict with itself.
    pub exclude_reservation_id: Option<Uuid>,
}

/// Why a reservation was not admitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The referenced table does not exist in the restaurant.
    NotFound { resource: &'static str, id: Uuid },
    /// The party is larger than the table.
    CapacityExceeded { capacity: i32, requested: i32 },
    /// Another occupying reservation sits inside the exclusion window.
    SlotConflict {
        conflicting_reservation_ids: Vec<Uuid>,
        window: TimeWindow,
    },
    /// The table is inactive or under maintenance.
    TableUnavailable { status: TableStatus },
}

impl Rejection {
    /// Stable machine-readable reason.
    pub fn reason_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
            Self::SlotConflict { .. } => "SLOT_CONFLICT",
            Self::TableUnavailable { .. } => "TABLE_UNAVAILABLE",
        }
    }

    /// Human-readable message for API clients.
    pub fn message(&self) -> String {
        match self {
            Self::NotFound { resource, .. } => {
                let mut name = resource.to_string();
                if let Some(first) = name.get_mut(0..1) {
                    first.make_ascii_uppercase();
                }
                format!("{name} not found")
            }
            Self::CapacityExceeded {
                capacity,
                requested,
            } => format!("Table capacity ({capacity}) is less than requested guests ({requested})"),
            Self::SlotConflict { .. } => "Table is already reserved for this time slot".to_string(),
            Self::TableUnavailable { status } => {
                format!("Table is not available for reservations (status: {status})")
            }
        }
    }

    /// Structured facts behind the rejection.
    pub fn details(&self) -> Value {
        match self {
            Self::NotFound { resource, id } => json!({ "resource": resource, "id": id }),
            Self::CapacityExceeded {
                capacity,
                requested,
            } => json!({ "capacity": capacity, "requested": requested }),
            Self::SlotConflict {
                conflicting_reservation_ids,
                window,
            } => json!({
                "conflicting_reservation_ids": conflicting_reservation_ids,
                "window_start": window.start,
                "window_end": window.end,
            }),
            Self::TableUnavailable { status } => json!({ "status": status }),
        }
    }
}

impl From<Rejection> for AppError {
    fn from(rejection: Rejection) -> Self {
        let kind = match rejection {
            Rejection::NotFound { .. } => ErrorKind::NotFound,
            _ => ErrorKind::BusinessRule,
        };
        let mut details = rejection.details();
        if let Value::Object(map) = &mut details {
            map.insert("reason".to_string(), json!(rejection.reason_code()));
        }
        AppError::new(kind, rejection.message()).with_details(details)
    }
}

/// Outcome of [`AdmissionChecker::evaluate`].
///
/// Serializes to `{"decision":"ADMIT"}` or
/// `{"decision":"REJECT","reason":...,"details":{...}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdmissionDecision {
    Admit,
    Reject(Rejection),
}

impl AdmissionDecision {
    /// `Ok(())` on admit, the rejection as an [`AppError`] otherwise.
    pub fn into_result(self) -> AppResult<()> {
        match self {
            Self::Admit => Ok(()),
            Self::Reject(rejection) => Err(rejection.into()),
        }
    }
}

impl Serialize for AdmissionDecision {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Admit => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("decision", "ADMIT")?;
                map.end()
            }
            Self::Reject(rejection) => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("decision", "REJECT")?;
                map.serialize_entry("reason", rejection.reason_code())?;
                map.serialize_entry("details", &rejection.details())?;
                map.end()
            }
        }
    }
}

/// Decides whether a proposed reservation may be admitted.
///
/// Checks run in order: table exists in the restaurant, party fits the
/// table, table is active (only when the policy requires it), and no
/// `confirmed`/`arrived` reservation on the table lies within the
/// inclusive exclusion window. Has no side effects.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdmissionChecker {
    policy: AdmissionPolicy,
}

impl AdmissionChecker {
    /// Creates a checker with the given policy.
    pub fn new(policy: AdmissionPolicy) -> Self {
        Self { policy }
    }

    /// The policy in force.
    pub fn policy(&self) -> &AdmissionPolicy {
        &self.policy
    }

    /// Evaluate `request` against the tables and reservations in `source`.
    ///
    /// Rejections are returned as `Ok(AdmissionDecision::Reject(..))`.
    /// `Err` is reserved for malformed input and storage failures.
    pub async fn evaluate<S>(
        &self,
        source: &mut S,
        request: &AdmissionRequest,
    ) -> AppResult<AdmissionDecision>
    where
        S: TableRegistry + ReservationLedger + ?Sized,
    {
        if request.number_of_guests <= 0 {
            return Err(AppError::validation(
                "Number of guests must be a positive integer",
            ));
        }

        let Some(table) = source
            .get_by_id(request.table_id, request.restaurant_id)
            .await?
        else {
            return Ok(AdmissionDecision::Reject(Rejection::NotFound {
                resource: "table",
                id: request.table_id,
            }));
        };

        if !table.seats(request.number_of_guests) {
            return Ok(AdmissionDecision::Reject(Rejection::CapacityExceeded {
                capacity: table.seating_capacity,
                requested: request.number_of_guests,
            }));
        }

        if self.policy.require_active_table && table.status != TableStatus::Active {
            return Ok(AdmissionDecision::Reject(Rejection::TableUnavailable {
                status: table.status,
            }));
        }

        let window = TimeWindow::around(request.reservation_date, self.policy.window_half_width);
        let conflicts = source
            .find_overlapping(
                table.id,
                window,
                &ReservationStatus::OCCUPYING,
                request.exclude_reservation_id,
            )
            .await?;

        if !conflicts.is_empty() {
            return Ok(AdmissionDecision::Reject(Rejection::SlotConflict {
                conflicting_reservation_ids: conflicts.iter().map(|r| r.id).collect(),
                window,
            }));
        }

        Ok(AdmissionDecision::Admit)
    }
}
