//! Read side of the reservation ledger.

use std::sync::Arc;

use uuid::Uuid;

use quisin_core::error::AppError;
use quisin_core::types::pagination::{PageRequest, PageResponse};
use quisin_database::repositories::ReservationRepository;
use quisin_entity::reservation::{ReservationDetail, ReservationFilter};

/// Lists and fetches reservations with table and customer context.
#[derive(Debug, Clone)]
pub struct ReservationService {
    reservation_repo: Arc<ReservationRepository>,
}

impl ReservationService {
    /// Creates a new reservation query service.
    pub fn new(reservation_repo: Arc<ReservationRepository>) -> Self {
        Self { reservation_repo }
    }

    /// Reservations of the restaurant matching `filter`, newest first.
    pub async fn list(
        &self,
        restaurant_id: Uuid,
        filter: &ReservationFilter,
        page: PageRequest,
    ) -> Result<PageResponse<ReservationDetail>, AppError> {
        self.reservation_repo
            .list(restaurant_id, filter, page)
            .await
    }

    /// A single reservation of the restaurant.
    pub async fn get(
        &self,
        restaurant_id: Uuid,
        reservation_id: Uuid,
    ) -> Result<ReservationDetail, AppError> {
        self.reservation_repo
            .find_detail(reservation_id, restaurant_id)
            .await?
            .ok_or_else(|| AppError::not_found("Reservation not found"))
    }
}
