//! Table registry listing.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use uuid::Uuid;

use quisin_core::config::AppConfig;
use quisin_core::error::AppError;
use quisin_database::repositories::TableRepository;
use quisin_entity::table::TableOverview;
use quisin_service::TableService;

use crate::output::{self, OutputFormat};

/// Arguments for table commands
#[derive(Debug, Args)]
pub struct TablesArgs {
    #[command(subcommand)]
    pub command: TablesCommand,
}

/// Table subcommands
#[derive(Debug, Subcommand)]
pub enum TablesCommand {
    /// List the tables of a restaurant
    List {
        /// Restaurant ID
        #[arg(long)]
        restaurant: Uuid,
    },
}

/// Table display row
#[derive(Debug, Serialize, Tabled)]
struct TableRow {
    number: i32,
    capacity: i32,
    status: String,
    location: String,
    active_reservations: i64,
    id: String,
}

impl From<&TableOverview> for TableRow {
    fn from(overview: &TableOverview) -> Self {
        let table = &overview.table;
        Self {
            number: table.table_number,
            capacity: table.seating_capacity,
            status: table.status.to_string(),
            location: table.location_description.clone().unwrap_or_default(),
            active_reservations: overview.active_reservations,
            id: table.id.to_string(),
        }
    }
}

/// Execute table commands
pub async fn execute(
    args: &TablesArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        TablesCommand::List { restaurant } => {
            let db = super::connect(config).await?;
            let service = TableService::new(Arc::new(TableRepository::new(db.pool().clone())));

            let rows: Vec<TableRow> = service
                .list(*restaurant)
                .await?
                .iter()
                .map(TableRow::from)
                .collect();

            output::print_list(&rows, format);
            db.close().await;
        }
    }

    Ok(())
}
