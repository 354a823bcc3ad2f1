//! Reservation ledger repository and its admission transaction.

use sqlx::{PgPool, Postgres, Transaction};
use tracing::debug;
use uuid::Uuid;

use quisin_core::error::AppError;
use quisin_core::result::AppResult;
use quisin_core::types::pagination::{PageRequest, PageResponse};
use quisin_entity::reservation::{
    CreateReservation, Reservation, ReservationDetail, ReservationFilter, ReservationStatus,
    TimeWindow, UpdateReservation,
};
use quisin_entity::table::Table;

use crate::error::{db_error, violated_constraint};

const CUSTOMER_FK_CONSTRAINT: &str = "reservations_customer_id_fkey";

const DETAIL_SELECT: &str = "SELECT r.*, t.table_number, \
     NULLIF(TRIM(CONCAT(u.first_name, ' ', u.last_name)), '') AS customer_name, \
     u.phone AS customer_phone, u.email AS customer_email \
     FROM reservations r \
     JOIN tables t ON t.id = r.table_id \
     LEFT JOIN users u ON u.id = r.customer_id";

const FILTER_CLAUSE: &str = "WHERE r.restaurant_id = $1 \
     AND ($2::text IS NULL OR r.status::text = $2) \
     AND ($3::date IS NULL OR (r.reservation_date AT TIME ZONE 'UTC')::date = $3) \
     AND ($4::text IS NULL \
          OR CONCAT(u.first_name, ' ', u.last_name) ILIKE $4 \
          OR u.phone ILIKE $4 \
          OR u.email ILIKE $4)";

/// Read side of the reservation ledger, and the entry point for
/// admission transactions.
#[derive(Debug, Clone)]
pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    /// Create a new reservation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a transaction in which table lookup, overlap query, and write
    /// happen atomically.
    pub async fn begin(&self) -> AppResult<ReservationTransaction> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin reservation transaction"))?;
        Ok(ReservationTransaction { tx })
    }

    /// A reservation with its table number and customer contact.
    pub async fn find_detail(
        &self,
        id: Uuid,
        restaurant_id: Uuid,
    ) -> AppResult<Option<ReservationDetail>> {
        sqlx::query_as::<_, ReservationDetail>(&format!(
            "{DETAIL_SELECT} WHERE r.id = $1 AND r.restaurant_id = $2"
        ))
        .bind(id)
        .bind(restaurant_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find reservation"))
    }

    /// Reservations of a restaurant matching `filter`, newest first.
    pub async fn list(
        &self,
        restaurant_id: Uuid,
        filter: &ReservationFilter,
        page: PageRequest,
    ) -> AppResult<PageResponse<ReservationDetail>> {
        let status = filter.status.map(|s| s.as_str());
        let pattern = filter.search_pattern();

        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM reservations r \
             LEFT JOIN users u ON u.id = r.customer_id {FILTER_CLAUSE}"
        ))
        .bind(restaurant_id)
        .bind(status)
        .bind(filter.date)
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to count reservations"))?;

        let items = sqlx::query_as::<_, ReservationDetail>(&format!(
            "{DETAIL_SELECT} {FILTER_CLAUSE} \
             ORDER BY r.reservation_date DESC LIMIT $5 OFFSET $6"
        ))
        .bind(restaurant_id)
        .bind(status)
        .bind(filter.date)
        .bind(&pattern)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list reservations"))?;

        Ok(PageResponse::new(items, page, total as u64))
    }
}

/// An open transaction over the table registry and reservation ledger.
///
/// Reading a table through [`lock_table`](Self::lock_table) takes a row
/// lock that is held until commit or drop, so admissions against the same
/// table serialize while different tables proceed in parallel. Dropping
/// without [`commit`](Self::commit) rolls back.
pub struct ReservationTransaction {
    tx: Transaction<'static, Postgres>,
}

impl ReservationTransaction {
    /// Fetch a table scoped to its restaurant, locking the row.
    pub async fn lock_table(
        &mut self,
        table_id: Uuid,
        restaurant_id: Uuid,
    ) -> AppResult<Option<Table>> {
        sqlx::query_as::<_, Table>(
            "SELECT * FROM tables WHERE id = $1 AND restaurant_id = $2 FOR UPDATE",
        )
        .bind(table_id)
        .bind(restaurant_id)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(db_error("Failed to lock table"))
    }

    /// Reservations on `table_id` in one of `statuses` whose seating time
    /// lies inside `window` (inclusive), other than `exclude_id`.
    pub async fn find_overlapping(
        &mut self,
        table_id: Uuid,
        window: TimeWindow,
        statuses: &[ReservationStatus],
        exclude_id: Option<Uuid>,
    ) -> AppResult<Vec<Reservation>> {
        let statuses: Vec<String> = statuses.iter().map(ToString::to_string).collect();
        sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations \
             WHERE table_id = $1 \
               AND status::text = ANY($2) \
               AND reservation_date BETWEEN $3 AND $4 \
               AND ($5::uuid IS NULL OR id <> $5) \
             ORDER BY reservation_date",
        )
        .bind(table_id)
        .bind(&statuses)
        .bind(window.start)
        .bind(window.end)
        .bind(exclude_id)
        .fetch_all(&mut *self.tx)
        .await
        .map_err(db_error("Failed to query overlapping reservations"))
    }

    /// Fetch a reservation scoped to its restaurant, locking the row.
    pub async fn find_by_id(
        &mut self,
        id: Uuid,
        restaurant_id: Uuid,
    ) -> AppResult<Option<Reservation>> {
        sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations WHERE id = $1 AND restaurant_id = $2 FOR UPDATE",
        )
        .bind(id)
        .bind(restaurant_id)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(db_error("Failed to find reservation"))
    }

    /// Insert an admitted reservation.
    pub async fn insert(&mut self, data: &CreateReservation) -> AppResult<Reservation> {
        let reservation = sqlx::query_as::<_, Reservation>(
            "INSERT INTO reservations \
             (restaurant_id, table_id, customer_id, reservation_date, number_of_guests, special_requests, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(data.restaurant_id)
        .bind(data.table_id)
        .bind(data.customer_id)
        .bind(data.reservation_date)
        .bind(data.number_of_guests)
        .bind(&data.special_requests)
        .bind(data.status)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(|e| {
            if violated_constraint(&e) == Some(CUSTOMER_FK_CONSTRAINT) {
                AppError::not_found("Customer not found")
            } else {
                db_error("Failed to insert reservation")(e)
            }
        })?;

        debug!(reservation_id = %reservation.id, "Reservation row inserted");
        Ok(reservation)
    }

    /// Overwrite table, time, party size, requests, and status.
    pub async fn update(&mut self, data: &UpdateReservation) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>(
            "UPDATE reservations \
             SET table_id = $3, reservation_date = $4, number_of_guests = $5, \
                 special_requests = $6, status = $7, updated_at = NOW() \
             WHERE id = $1 AND restaurant_id = $2 \
             RETURNING *",
        )
        .bind(data.id)
        .bind(data.restaurant_id)
        .bind(data.table_id)
        .bind(data.reservation_date)
        .bind(data.number_of_guests)
        .bind(&data.special_requests)
        .bind(data.status)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(db_error("Failed to update reservation"))?
        .ok_or_else(|| AppError::not_found("Reservation not found"))
    }

    /// Change only the status of a reservation.
    pub async fn update_status(
        &mut self,
        id: Uuid,
        restaurant_id: Uuid,
        status: ReservationStatus,
    ) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>(
            "UPDATE reservations SET status = $3, updated_at = NOW() \
             WHERE id = $1 AND restaurant_id = $2 \
             RETURNING *",
        )
        .bind(id)
        .bind(restaurant_id)
        .bind(status)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(db_error("Failed to update reservation status"))?
        .ok_or_else(|| AppError::not_found("Reservation not found"))
    }

    /// Commit all writes made through this transaction.
    pub async fn commit(self) -> AppResult<()> {
        self.tx
            .commit()
            .await
            .map_err(db_error("Failed to commit reservation transaction"))
    }
}
