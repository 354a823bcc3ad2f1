//! Reservation write flows: create, update, and status transitions.
//!
//! Every flow runs admission and the write inside one [`AdmissionScope`].
//! A `Contention` failure of the scope is retried once after a backoff.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use quisin_core::config::reservation::ReservationConfig;
use quisin_core::error::AppError;
use quisin_core::result::AppResult;
use quisin_entity::reservation::{
    CreateReservation, Reservation, ReservationStatus, UpdateReservation,
};

use super::admission::{AdmissionChecker, AdmissionDecision, AdmissionPolicy, AdmissionRequest};
use super::ledger::{AdmissionScope, ReservationLedger, ReservationStore};

/// Input for booking a table.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub customer_id: Uuid,
    pub table_id: Uuid,
    pub reservation_date: DateTime<Utc>,
    pub number_of_guests: i32,
    pub special_requests: Option<String>,
    /// Defaults to `confirmed`.
    pub status: Option<ReservationStatus>,
}

/// Replacement values for an existing reservation.
#[derive(Debug, Clone)]
pub struct ReservationChanges {
    pub table_id: Uuid,
    pub reservation_date: DateTime<Utc>,
    pub number_of_guests: i32,
    pub special_requests: Option<String>,
    pub status: ReservationStatus,
}

/// Admits and persists reservations.
#[derive(Clone)]
pub struct BookingService {
    store: Arc<dyn ReservationStore>,
    checker: AdmissionChecker,
    retry_backoff: Duration,
}

impl std::fmt::Debug for BookingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingService")
            .field("checker", &self.checker)
            .field("retry_backoff", &self.retry_backoff)
            .finish_non_exhaustive()
    }
}

impl BookingService {
    /// Creates a booking service over `store`.
    pub fn new(store: Arc<dyn ReservationStore>, config: &ReservationConfig) -> Self {
        Self {
            store,
            checker: AdmissionChecker::new(AdmissionPolicy::from_config(config)),
            retry_backoff: config.retry_backoff(),
        }
    }

    /// Evaluate admission without writing anything.
    pub async fn check(&self, request: &AdmissionRequest) -> AppResult<AdmissionDecision> {
        self.with_retry("check", || async {
            let mut scope = self.store.begin().await?;
            self.checker.evaluate(scope.as_mut(), request).await
        })
        .await
    }

    /// Book a table. The new reservation is `confirmed` unless stated.
    pub async fn create(&self, restaurant_id: Uuid, input: &NewReservation) -> AppResult<Reservation> {
        let reservation = self
            .with_retry("create", || self.try_create(restaurant_id, input))
            .await?;

        info!(
            restaurant_id = %restaurant_id,
            reservation_id = %reservation.id,
            table_id = %reservation.table_id,
            reservation_date = %reservation.reservation_date,
            guests = reservation.number_of_guests,
            "Reservation created"
        );
        Ok(reservation)
    }

    /// Replace the table, time, party size, requests, and status of a
    /// reservation. Admission excludes the reservation itself.
    pub async fn update(
        &self,
        restaurant_id: Uuid,
        reservation_id: Uuid,
        changes: &ReservationChanges,
    ) -> AppResult<Reservation> {
        let reservation = self
            .with_retry("update", || self.try_update(restaurant_id, reservation_id, changes))
            .await?;

        info!(
            restaurant_id = %restaurant_id,
            reservation_id = %reservation.id,
            table_id = %reservation.table_id,
            status = %reservation.status,
            "Reservation updated"
        );
        Ok(reservation)
    }

    /// Move a reservation to `status`.
    ///
    /// Moving from a non-occupying status into `confirmed` or `arrived`
    /// re-runs admission for the reservation's current table and time.
    pub async fn update_status(
        &self,
        restaurant_id: Uuid,
        reservation_id: Uuid,
        status: ReservationStatus,
    ) -> AppResult<Reservation> {
        let reservation = self
            .with_retry("update_status", || {
                self.try_update_status(restaurant_id, reservation_id, status)
            })
            .await?;

        info!(
            reservation_id = %reservation.id,
            status = %reservation.status,
            "Reservation status updated"
        );
        Ok(reservation)
    }

    async fn try_create(&self, restaurant_id: Uuid, input: &NewReservation) -> AppResult<Reservation> {
        let mut scope = self.store.begin().await?;

        let request = AdmissionRequest {
            restaurant_id,
            table_id: input.table_id,
            reservation_date: input.reservation_date,
            number_of_guests: input.number_of_guests,
            exclude_reservation_id: None,
        };
        self.admit(scope.as_mut(), &request).await?;

        let reservation = scope
            .insert(&CreateReservation {
                restaurant_id,
                table_id: input.table_id,
                customer_id: input.customer_id,
                reservation_date: input.reservation_date,
                number_of_guests: input.number_of_guests,
                special_requests: input.special_requests.clone(),
                status: input.status.unwrap_or_default(),
            })
            .await?;

        scope.commit().await?;
        Ok(reservation)
    }

    async fn try_update(
        &self,
        restaurant_id: Uuid,
        reservation_id: Uuid,
        changes: &ReservationChanges,
    ) -> AppResult<Reservation> {
        let mut scope = self.store.begin().await?;

        scope
            .find_by_id(reservation_id, restaurant_id)
            .await?
            .ok_or_else(|| AppError::not_found("Reservation not found"))?;

        let request = AdmissionRequest {
            restaurant_id,
            table_id: changes.table_id,
            reservation_date: changes.reservation_date,
            number_of_guests: changes.number_of_guests,
            exclude_reservation_id: Some(reservation_id),
        };
        self.admit(scope.as_mut(), &request).await?;

        let reservation = scope
            .update(&UpdateReservation {
                id: reservation_id,
                restaurant_id,
                table_id: changes.table_id,
                reservation_date: changes.reservation_date,
                number_of_guests: changes.number_of_guests,
                special_requests: changes.special_requests.clone(),
                status: changes.status,
            })
            .await?;

        scope.commit().await?;
        Ok(reservation)
    }

    async fn try_update_status(
        &self,
        restaurant_id: Uuid,
        reservation_id: Uuid,
        status: ReservationStatus,
    ) -> AppResult<Reservation> {
        let mut scope = self.store.begin().await?;

        let current = scope
            .find_by_id(reservation_id, restaurant_id)
            .await?
            .ok_or_else(|| AppError::not_found("Reservation not found"))?;

        if status.occupies_table() && !current.status.occupies_table() {
            let request = AdmissionRequest {
                restaurant_id,
                table_id: current.table_id,
                reservation_date: current.reservation_date,
                number_of_guests: current.number_of_guests,
                exclude_reservation_id: Some(reservation_id),
            };
            self.admit(scope.as_mut(), &request).await?;
        }

        let reservation = scope
            .update_status(reservation_id, restaurant_id, status)
            .await?;

        scope.commit().await?;
        Ok(reservation)
    }

    async fn admit(&self, scope: &mut dyn AdmissionScope, request: &AdmissionRequest) -> AppResult<()> {
        let decision = self.checker.evaluate(scope, request).await?;
        if let AdmissionDecision::Reject(rejection) = &decision {
            warn!(
                restaurant_id = %request.restaurant_id,
                table_id = %request.table_id,
                reservation_date = %request.reservation_date,
                guests = request.number_of_guests,
                reason = rejection.reason_code(),
                "Reservation rejected"
            );
        }
        decision.into_result()
    }

    async fn with_retry<T, F, Fut>(&self, operation: &'static str, mut attempt: F) -> AppResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        match attempt().await {
            Err(err) if err.is_retryable() => {
                warn!(
                    operation,
                    error = %err,
                    backoff_ms = whole_millis(self.retry_backoff),
                    "Reservation transaction contended, retrying once"
                );
                tokio::time::sleep(self.retry_backoff).await;
                attempt().await
            }
            result => result,
        }
    }
}

/// Milliseconds in `duration`, saturating at `u64::MAX`.
fn whole_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
