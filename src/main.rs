//! # Employee API Main Entry Point
//!
//! This is the main entry point for the Employee API service.

use clap::{Parser, Subcommand};
use employee_api::{config::ConfigLoader, db, server::run_server, telemetry};
use migration::{Migrator, MigratorTrait};

#[derive(Parser)]
#[command(name = "employee-api", version, about = "Employee CRUD HTTP service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP server (default)
    Serve,
    /// Apply pending database migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration from layered env files and variables
    let config = ConfigLoader::new().load()?;
    telemetry::init_tracing(&config)?;

    // Log the loaded configuration (no secrets in current schema)
    if let Ok(redacted_json) = config.redacted_json() {
        tracing::info!(profile = %config.profile, "Configuration: {}", redacted_json);
    }

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => run_server(config).await,
        Command::Migrate => {
            let pool = db::init_pool(&config).await?;
            Migrator::up(&pool, None).await?;
            tracing::info!("Migrations applied");
            Ok(())
        }
    }
}
