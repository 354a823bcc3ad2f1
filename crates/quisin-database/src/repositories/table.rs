//! Table registry repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use quisin_core::error::AppError;
use quisin_core::result::AppResult;
use quisin_entity::table::{CreateTable, Table, TableOverview, TableStatus, UpdateTable};

use crate::error::{db_error, violated_constraint};

const UNIQUE_NUMBER_CONSTRAINT: &str = "tables_restaurant_number_key";

const OVERVIEW_SELECT: &str = "SELECT t.*, COUNT(r.id) AS active_reservations \
     FROM tables t \
     LEFT JOIN reservations r ON r.table_id = t.id AND r.status = 'confirmed'";

/// Repository for the dining tables of each restaurant.
#[derive(Debug, Clone)]
pub struct TableRepository {
    pool: PgPool,
}

impl TableRepository {
    /// Create a new table repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a table scoped to its restaurant.
    pub async fn find_by_id(&self, id: Uuid, restaurant_id: Uuid) -> AppResult<Option<Table>> {
        sqlx::query_as::<_, Table>("SELECT * FROM tables WHERE id = $1 AND restaurant_id = $2")
            .bind(id)
            .bind(restaurant_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find table"))
    }

    /// All tables of a restaurant with their confirmed-reservation counts,
    /// ordered by table number.
    pub async fn list_overview(&self, restaurant_id: Uuid) -> AppResult<Vec<TableOverview>> {
        sqlx::query_as::<_, TableOverview>(&format!(
            "{OVERVIEW_SELECT} WHERE t.restaurant_id = $1 GROUP BY t.id ORDER BY t.table_number ASC"
        ))
        .bind(restaurant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list tables"))
    }

    /// A single table with its confirmed-reservation count.
    pub async fn find_overview(
        &self,
        id: Uuid,
        restaurant_id: Uuid,
    ) -> AppResult<Option<TableOverview>> {
        sqlx::query_as::<_, TableOverview>(&format!(
            "{OVERVIEW_SELECT} WHERE t.restaurant_id = $1 AND t.id = $2 GROUP BY t.id"
        ))
        .bind(restaurant_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find table"))
    }

    /// Register a new table.
    pub async fn create(&self, data: &CreateTable) -> AppResult<Table> {
        sqlx::query_as::<_, Table>(
            "INSERT INTO tables (restaurant_id, table_number, seating_capacity, location_description, status) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(data.restaurant_id)
        .bind(data.table_number)
        .bind(data.seating_capacity)
        .bind(&data.location_description)
        .bind(data.status)
        .fetch_one(&self.pool)
        .await
        .map_err(duplicate_number_or("Failed to create table"))
    }

    /// Change a table's number, capacity, and placement.
    pub async fn update(&self, data: &UpdateTable) -> AppResult<Table> {
        sqlx::query_as::<_, Table>(
            "UPDATE tables \
             SET table_number = $3, seating_capacity = $4, location_description = $5, updated_at = NOW() \
             WHERE id = $1 AND restaurant_id = $2 \
             RETURNING *",
        )
        .bind(data.id)
        .bind(data.restaurant_id)
        .bind(data.table_number)
        .bind(data.seating_capacity)
        .bind(&data.location_description)
        .fetch_optional(&self.pool)
        .await
        .map_err(duplicate_number_or("Failed to update table"))?
        .ok_or_else(|| AppError::not_found("Table not found"))
    }

    /// Change a table's operational status.
    pub async fn update_status(
        &self,
        id: Uuid,
        restaurant_id: Uuid,
        status: TableStatus,
    ) -> AppResult<Table> {
        sqlx::query_as::<_, Table>(
            "UPDATE tables SET status = $3, updated_at = NOW() \
             WHERE id = $1 AND restaurant_id = $2 \
             RETURNING *",
        )
        .bind(id)
        .bind(restaurant_id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update table status"))?
        .ok_or_else(|| AppError::not_found("Table not found"))
    }
}

fn duplicate_number_or(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| {
        if violated_constraint(&e) == Some(UNIQUE_NUMBER_CONSTRAINT) {
            AppError::conflict("Table number already exists")
        } else {
            db_error(context)(e)
        }
    }
}
