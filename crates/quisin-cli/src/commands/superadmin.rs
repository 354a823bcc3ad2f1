//! Platform operator bootstrap.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use quisin_auth::{JwtEncoder, PasswordHasher, PasswordValidator};
use quisin_core::config::AppConfig;
use quisin_core::error::AppError;
use quisin_database::repositories::UserRepository;
use quisin_entity::user::UserProfile;
use quisin_service::auth::{AuthService, RegisterSuperadmin};

use crate::output::{self, OutputFormat};

/// Arguments for superadmin commands
#[derive(Debug, Args)]
pub struct SuperadminArgs {
    #[command(subcommand)]
    pub command: SuperadminCommand,
}

/// Superadmin subcommands
#[derive(Debug, Subcommand)]
pub enum SuperadminCommand {
    /// Create the superadmin account (only while none exists)
    Create {
        #[arg(long)]
        email: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        phone: Option<String>,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    role: String,
}

impl From<&UserProfile> for UserRow {
    fn from(user: &UserProfile) -> Self {
        Self {
            id: user.id.to_string(),
            name: format!("{} {}", user.first_name, user.last_name),
            email: user.email.clone(),
            role: user.role.to_string(),
        }
    }
}

/// Execute superadmin commands
pub async fn execute(
    args: &SuperadminArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        SuperadminCommand::Create {
            email,
            first_name,
            last_name,
            phone,
        } => {
            let password = super::prompt_password("Password")?;

            let db = super::connect(config).await?;
            let auth_service = AuthService::new(
                Arc::new(UserRepository::new(db.pool().clone())),
                Arc::new(PasswordHasher::new()),
                Arc::new(PasswordValidator::new(&config.auth)),
                Arc::new(JwtEncoder::new(&config.auth)),
            );

            let profile = auth_service
                .register_superadmin(RegisterSuperadmin {
                    first_name: first_name.clone(),
                    last_name: last_name.clone(),
                    email: email.clone(),
                    password,
                    phone: phone.clone(),
                })
                .await?;

            output::print_item(&UserRow::from(&profile), format);
            output::print_success("Superadmin created");
            db.close().await;
        }
    }

    Ok(())
}
