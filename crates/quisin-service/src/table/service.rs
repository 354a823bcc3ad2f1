//! Table registry write side: register, renumber, resize, and retire tables.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use quisin_core::error::AppError;
use quisin_database::repositories::TableRepository;
use quisin_entity::table::{CreateTable, Table, TableOverview, TableStatus, UpdateTable};

/// Input for registering a table.
#[derive(Debug, Clone)]
pub struct NewTable {
    pub table_number: i32,
    pub seating_capacity: i32,
    pub location_description: Option<String>,
    /// Defaults to `active`.
    pub status: Option<TableStatus>,
}

/// Input for changing a table's number, capacity, or placement.
#[derive(Debug, Clone)]
pub struct TableChanges {
    pub table_number: i32,
    pub seating_capacity: i32,
    pub location_description: Option<String>,
}

/// Manages the tables of a restaurant.
#[derive(Debug, Clone)]
pub struct TableService {
    table_repo: Arc<TableRepository>,
}

impl TableService {
    /// Creates a new table service.
    pub fn new(table_repo: Arc<TableRepository>) -> Self {
        Self { table_repo }
    }

    /// All tables of the restaurant with confirmed-reservation counts.
    pub async fn list(&self, restaurant_id: Uuid) -> Result<Vec<TableOverview>, AppError> {
        self.table_repo.list_overview(restaurant_id).await
    }

    /// One table of the restaurant.
    pub async fn get(&self, restaurant_id: Uuid, table_id: Uuid) -> Result<TableOverview, AppError> {
        self.table_repo
            .find_overview(table_id, restaurant_id)
            .await?
            .ok_or_else(|| AppError::not_found("Table not found"))
    }

    /// Register a new table. Duplicate numbers are a `Conflict`.
    pub async fn create(&self, restaurant_id: Uuid, input: NewTable) -> Result<Table, AppError> {
        validate_shape(input.table_number, input.seating_capacity)?;

        let table = self
            .table_repo
            .create(&CreateTable {
                restaurant_id,
                table_number: input.table_number,
                seating_capacity: input.seating_capacity,
                location_description: input.location_description,
                status: input.status.unwrap_or_default(),
            })
            .await?;

        info!(
            restaurant_id = %restaurant_id,
            table_id = %table.id,
            table_number = table.table_number,
            "Table created"
        );
        Ok(table)
    }

    /// Change a table's number, capacity, or placement.
    ///
    /// Existing reservations are not re-validated against a reduced
    /// capacity.
    pub async fn update(
        &self,
        restaurant_id: Uuid,
        table_id: Uuid,
        changes: TableChanges,
    ) -> Result<Table, AppError> {
        validate_shape(changes.table_number, changes.seating_capacity)?;

        let table = self
            .table_repo
            .update(&UpdateTable {
                id: table_id,
                restaurant_id,
                table_number: changes.table_number,
                seating_capacity: changes.seating_capacity,
                location_description: changes.location_description,
            })
            .await?;

        info!(restaurant_id = %restaurant_id, table_id = %table.id, "Table updated");
        Ok(table)
    }

    /// Change a table's operational status.
    pub async fn update_status(
        &self,
        restaurant_id: Uuid,
        table_id: Uuid,
        status: TableStatus,
    ) -> Result<Table, AppError> {
        let table = self
            .table_repo
            .update_status(table_id, restaurant_id, status)
            .await?;

        info!(table_id = %table.id, status = %status, "Table status updated");
        Ok(table)
    }
}

fn validate_shape(table_number: i32, seating_capacity: i32) -> Result<(), AppError> {
    if table_number <= 0 {
        return Err(AppError::validation("Table number must be a positive integer"));
    }
    if seating_capacity <= 0 {
        return Err(AppError::validation(
            "Seating capacity must be a positive integer",
        ));
    }
    Ok(())
}
