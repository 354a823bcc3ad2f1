//! Start the Quisin server.

use clap::Args;

use quisin_core::config::AppConfig;
use quisin_core::error::AppError;
use quisin_database::migration::run_migrations;

use crate::output;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Run database migrations on startup
    #[arg(long)]
    pub auto_migrate: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    println!("Starting Quisin server...");
    output::print_kv("Host", &config.server.host);
    output::print_kv("Port", &config.server.port.to_string());

    let db = super::connect(&config).await?;

    if args.auto_migrate {
        println!("Running database migrations...");
        run_migrations(db.pool()).await?;
        output::print_success("Migrations applied successfully.");
    }

    quisin_api::run_server(config, db).await
}
