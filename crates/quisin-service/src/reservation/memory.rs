//! In-memory reservation store for single-node setups and tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::debug;
use uuid::Uuid;

use quisin_core::error::AppError;
use quisin_core::result::AppResult;
use quisin_entity::reservation::{
    CreateReservation, Reservation, ReservationStatus, TimeWindow, UpdateReservation,
};
use quisin_entity::table::Table;

use super::ledger::{AdmissionScope, ReservationLedger, ReservationStore, TableRegistry};

#[derive(Debug, Clone, Default)]
struct MemoryState {
    tables: HashMap<Uuid, Table>,
    reservations: HashMap<Uuid, Reservation>,
}

/// Reservation store backed by a Tokio mutex.
///
/// A scope holds the lock from `begin` until it is committed or dropped,
/// so scopes are fully serialized. Writes go to a staged copy that
/// replaces the shared state on commit.
#[derive(Debug, Clone, Default)]
pub struct MemoryReservationStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryReservationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a table.
    pub async fn add_table(&self, table: Table) {
        self.state.lock().await.tables.insert(table.id, table);
    }

    /// Seed a reservation without running admission.
    pub async fn add_reservation(&self, reservation: Reservation) {
        self.state
            .lock()
            .await
            .reservations
            .insert(reservation.id, reservation);
    }

    /// Snapshot of all committed reservations, ordered by seating time.
    pub async fn reservations(&self) -> Vec<Reservation> {
        let state = self.state.lock().await;
        let mut all: Vec<Reservation> = state.reservations.values().cloned().collect();
        all.sort_by_key(|r| r.reservation_date);
        all
    }
}

#[async_trait]
impl ReservationStore for MemoryReservationStore {
    async fn begin(&self) -> AppResult<Box<dyn AdmissionScope>> {
        let guard = Arc::clone(&self.state).lock_owned().await;
        let staged = guard.clone();
        Ok(Box::new(MemoryScope { guard, staged }))
    }
}

struct MemoryScope {
    guard: OwnedMutexGuard<MemoryState>,
    staged: MemoryState,
}

impl MemoryScope {
    fn reservation_mut(&mut self, id: Uuid, restaurant_id: Uuid) -> AppResult<&mut Reservation> {
        self.staged
            .reservations
            .get_mut(&id)
            .filter(|r| r.restaurant_id == restaurant_id)
            .ok_or_else(|| AppError::not_found("Reservation not found"))
    }
}

#[async_trait]
impl TableRegistry for MemoryScope {
    async fn get_by_id(&mut self, table_id: Uuid, restaurant_id: Uuid) -> AppResult<Option<Table>> {
        Ok(self
            .staged
            .tables
            .get(&table_id)
            .filter(|t| t.restaurant_id == restaurant_id)
            .cloned())
    }
}

#[async_trait]
impl ReservationLedger for MemoryScope {
    async fn find_overlapping(
        &mut self,
        table_id: Uuid,
        window: TimeWindow,
        statuses: &[ReservationStatus],
        exclude_id: Option<Uuid>,
    ) -> AppResult<Vec<Reservation>> {
        let mut found: Vec<Reservation> = self
            .staged
            .reservations
            .values()
            .filter(|r| r.table_id == table_id)
            .filter(|r| statuses.contains(&r.status))
            .filter(|r| window.contains(r.reservation_date))
            .filter(|r| Some(r.id) != exclude_id)
            .cloned()
            .collect();
        found.sort_by_key(|r| r.reservation_date);
        Ok(found)
    }

    async fn find_by_id(&mut self, id: Uuid, restaurant_id: Uuid) -> AppResult<Option<Reservation>> {
        Ok(self
            .staged
            .reservations
            .get(&id)
            .filter(|r| r.restaurant_id == restaurant_id)
            .cloned())
    }

    async fn insert(&mut self, data: &CreateReservation) -> AppResult<Reservation> {
        let now = Utc::now();
        let reservation = Reservation {
            id: Uuid::new_v4(),
            restaurant_id: data.restaurant_id,
            table_id: data.table_id,
            customer_id: data.customer_id,
            reservation_date: data.reservation_date,
            number_of_guests: data.number_of_guests,
            status: data.status,
            special_requests: data.special_requests.clone(),
            created_at: now,
            updated_at: now,
        };
        self.staged
            .reservations
            .insert(reservation.id, reservation.clone());
        debug!(reservation_id = %reservation.id, "Reservation staged in memory");
        Ok(reservation)
    }

    async fn update(&mut self, data: &UpdateReservation) -> AppResult<Reservation> {
        let reservation = self.reservation_mut(data.id, data.restaurant_id)?;
        reservation.table_id = data.table_id;
        reservation.reservation_date = data.reservation_date;
        reservation.number_of_guests = data.number_of_guests;
        reservation.special_requests = data.special_requests.clone();
        reservation.status = data.status;
        reservation.updated_at = Utc::now();
        Ok(reservation.clone())
    }

    async fn update_status(
        &mut self,
        id: Uuid,
        restaurant_id: Uuid,
        status: ReservationStatus,
    ) -> AppResult<Reservation> {
        let reservation = self.reservation_mut(id, restaurant_id)?;
        reservation.status = status;
        reservation.updated_at = Utc::now();
        Ok(reservation.clone())
    }
}

#[async_trait]
impl AdmissionScope for MemoryScope {
    async fn commit(self: Box<Self>) -> AppResult<()> {
        let MemoryScope { mut guard, staged } = *self;
        *guard = staged;
        Ok(())
    }
}
