//! Seams between the admission logic and reservation storage.

use async_trait::async_trait;
use uuid::Uuid;

use quisin_core::result::AppResult;
use quisin_entity::reservation::{
    CreateReservation, Reservation, ReservationStatus, TimeWindow, UpdateReservation,
};
use quisin_entity::table::Table;

/// Read access to the tables of each restaurant.
#[async_trait]
pub trait TableRegistry: Send {
    /// The table with `table_id` if it belongs to `restaurant_id`.
    async fn get_by_id(&mut self, table_id: Uuid, restaurant_id: Uuid) -> AppResult<Option<Table>>;
}

/// Append/update store of reservation records.
#[async_trait]
pub trait ReservationLedger: Send {
    /// Reservations on `table_id` with a status in `statuses`, seated inside
    /// `window` (inclusive), excluding `exclude_id`.
    async fn find_overlapping(
        &mut self,
        table_id: Uuid,
        window: TimeWindow,
        statuses: &[ReservationStatus],
        exclude_id: Option<Uuid>,
    ) -> AppResult<Vec<Reservation>>;

    /// The reservation with `id` if it belongs to `restaurant_id`.
    async fn find_by_id(&mut self, id: Uuid, restaurant_id: Uuid) -> AppResult<Option<Reservation>>;

    /// Persist a new reservation.
    async fn insert(&mut self, data: &CreateReservation) -> AppResult<Reservation>;

    /// Replace table, time, party size, requests, and status.
    async fn update(&mut self, data: &UpdateReservation) -> AppResult<Reservation>;

    /// Change only the status.
    async fn update_status(
        &mut self,
        id: Uuid,
        restaurant_id: Uuid,
        status: ReservationStatus,
    ) -> AppResult<Reservation>;
}

/// A unit of work over both stores.
///
/// Reads and writes made through one scope are atomic with respect to
/// other scopes touching the same table. Dropping a scope without calling
/// [`commit`](AdmissionScope::commit) discards its writes.
#[async_trait]
pub trait AdmissionScope: TableRegistry + ReservationLedger {
    /// Make every write of this scope visible.
    async fn commit(self: Box<Self>) -> AppResult<()>;
}

/// Opens admission scopes.
#[async_trait]
pub trait ReservationStore: Send + Sync + 'static {
    /// Start a new unit of work.
    async fn begin(&self) -> AppResult<Box<dyn AdmissionScope>>;
}
