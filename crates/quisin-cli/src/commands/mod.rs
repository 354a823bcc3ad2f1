//! CLI command definitions and dispatch.

pub mod migrate;
pub mod restaurant;
pub mod serve;
pub mod superadmin;
pub mod tables;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use quisin_core::config::AppConfig;
use quisin_core::error::AppError;
use quisin_database::DatabasePool;

use crate::output::OutputFormat;

/// Quisin: restaurant reservation backend
#[derive(Debug, Parser)]
#[command(name = "quisin", version, about, long_about = None)]
pub struct Cli {
    /// Path to a configuration file. Without it, `config/default.toml`
    /// plus the `QUISIN_ENV` overlay are used.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the Quisin server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Platform operator account
    Superadmin(superadmin::SuperadminArgs),
    /// Restaurants and their admins
    Restaurant(restaurant::RestaurantArgs),
    /// Table registry
    Tables(tables::TablesArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = self.load_config()?;

        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::Superadmin(args) => superadmin::execute(args, &config, self.format).await,
            Commands::Restaurant(args) => restaurant::execute(args, &config, self.format).await,
            Commands::Tables(args) => tables::execute(args, &config, self.format).await,
        }
    }

    fn load_config(&self) -> Result<AppConfig, AppError> {
        match &self.config {
            Some(path) => AppConfig::from_file(path),
            None => {
                let env =
                    std::env::var("QUISIN_ENV").unwrap_or_else(|_| "development".to_string());
                AppConfig::load(&env)
            }
        }
    }
}

/// Helper: connect to the configured database
pub async fn connect(config: &AppConfig) -> Result<DatabasePool, AppError> {
    DatabasePool::connect(&config.database).await
}

/// Helper: prompt for a password twice
pub fn prompt_password(prompt: &str) -> Result<String, AppError> {
    dialoguer::Password::new()
        .with_prompt(prompt)
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}
