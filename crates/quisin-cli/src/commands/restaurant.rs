//! Restaurant onboarding.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use quisin_auth::{PasswordHasher, PasswordValidator};
use quisin_core::config::AppConfig;
use quisin_core::error::AppError;
use quisin_database::repositories::RestaurantRepository;
use quisin_entity::user::{CreateUser, UserRole};

use crate::output::{self, OutputFormat};

/// Arguments for restaurant commands
#[derive(Debug, Args)]
pub struct RestaurantArgs {
    #[command(subcommand)]
    pub command: RestaurantCommand,
}

/// Restaurant subcommands
#[derive(Debug, Subcommand)]
pub enum RestaurantCommand {
    /// Register a restaurant together with a new admin account
    Create {
        /// Restaurant name
        #[arg(long)]
        name: String,
        #[arg(long)]
        admin_email: String,
        #[arg(long)]
        admin_first_name: String,
        #[arg(long)]
        admin_last_name: String,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct RestaurantRow {
    id: String,
    name: String,
    admin_id: String,
    admin_email: String,
}

/// Execute restaurant commands
pub async fn execute(
    args: &RestaurantArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        RestaurantCommand::Create {
            name,
            admin_email,
            admin_first_name,
            admin_last_name,
        } => {
            let name = name.trim();
            if name.is_empty() {
                return Err(AppError::validation("Restaurant name is required"));
            }

            let password = super::prompt_password("Admin password")?;
            PasswordValidator::new(&config.auth).validate(&password)?;
            let password_hash = PasswordHasher::new().hash_password(&password)?;

            let db = super::connect(config).await?;
            let (restaurant, admin) = RestaurantRepository::new(db.pool().clone())
                .create_with_admin(
                    name,
                    &CreateUser {
                        first_name: admin_first_name.trim().to_string(),
                        last_name: admin_last_name.trim().to_string(),
                        email: admin_email.trim().to_lowercase(),
                        phone: None,
                        password_hash,
                        role: UserRole::Admin,
                    },
                )
                .await?;

            info!(restaurant_id = %restaurant.id, admin_id = %admin.id, "Restaurant onboarded");

            output::print_item(
                &RestaurantRow {
                    id: restaurant.id.to_string(),
                    name: restaurant.name,
                    admin_id: admin.id.to_string(),
                    admin_email: admin.email,
                },
                format,
            );
            output::print_success("Restaurant created");
            db.close().await;
        }
    }

    Ok(())
}
