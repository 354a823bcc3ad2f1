//! PostgreSQL binding of the admission seams.
//!
//! The table lookup locks the table row (`FOR UPDATE`), so the overlap
//! query and the write that follow cannot race another admission on the
//! same table.

use async_trait::async_trait;
use uuid::Uuid;

use quisin_core::result::AppResult;
use quisin_database::repositories::{ReservationRepository, ReservationTransaction};
use quisin_entity::reservation::{
    CreateReservation, Reservation, ReservationStatus, TimeWindow, UpdateReservation,
};
use quisin_entity::table::Table;

use super::ledger::{AdmissionScope, ReservationLedger, ReservationStore, TableRegistry};

#[async_trait]
impl TableRegistry for ReservationTransaction {
    async fn get_by_id(&mut self, table_id: Uuid, restaurant_id: Uuid) -> AppResult<Option<Table>> {
        self.lock_table(table_id, restaurant_id).await
    }
}

#[async_trait]
impl ReservationLedger for ReservationTransaction {
    async fn find_overlapping(
        &mut self,
        table_id: Uuid,
        window: TimeWindow,
        statuses: &[ReservationStatus],
        exclude_id: Option<Uuid>,
    ) -> AppResult<Vec<Reservation>> {
        ReservationTransaction::find_overlapping(self, table_id, window, statuses, exclude_id).await
    }

    async fn find_by_id(&mut self, id: Uuid, restaurant_id: Uuid) -> AppResult<Option<Reservation>> {
        ReservationTransaction::find_by_id(self, id, restaurant_id).await
    }

    async fn insert(&mut self, data: &CreateReservation) -> AppResult<Reservation> {
        ReservationTransaction::insert(self, data).await
    }

    async fn update(&mut self, data: &UpdateReservation) -> AppResult<Reservation> {
        ReservationTransaction::update(self, data).await
    }

    async fn update_status(
        &mut self,
        id: Uuid,
        restaurant_id: Uuid,
        status: ReservationStatus,
    ) -> AppResult<Reservation> {
        ReservationTransaction::update_status(self, id, restaurant_id, status).await
    }
}

#[async_trait]
impl AdmissionScope for ReservationTransaction {
    async fn commit(self: Box<Self>) -> AppResult<()> {
        ReservationTransaction::commit(*self).await
    }
}

#[async_trait]
impl ReservationStore for ReservationRepository {
    async fn begin(&self) -> AppResult<Box<dyn AdmissionScope>> {
        let tx = ReservationRepository::begin(self).await?;
        Ok(Box::new(tx))
    }
}
