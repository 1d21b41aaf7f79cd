//! Apply or revert the Northwind schema migrations.
//!
//! Connects with the same `DATABASE_URL` / `DB_*` settings as the server.
//!
//! ```bash
//! cargo run --bin migrate -- up
//! cargo run --bin migrate -- down --num 1
//! cargo run --bin migrate -- status
//! ```

use clap::{Parser, Subcommand};
use northwind_api::{Config, data_source, migration::Migrator};
use sea_orm_migration::MigratorTrait;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "migrate", about = "Manage Northwind schema migrations")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Apply pending migrations (all of them by default)
    Up {
        #[arg(short, long)]
        num: Option<u32>,
    },
    /// Roll back applied migrations
    Down {
        #[arg(short, long, default_value_t = 1)]
        num: u32,
    },
    /// List every migration and whether it is applied
    Status,
    /// Drop all tables, then apply every migration
    Fresh,
    /// Roll back every migration, then apply them again
    Refresh,
    /// Roll back every migration
    Reset,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("northwind_api=info,sea_orm_migration=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    let db = match data_source::connect(&config.database).await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!(error = %err, "Error during data source initialization");
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command.unwrap_or(Command::Up { num: None }) {
        Command::Up { num } => Migrator::up(&db, num).await,
        Command::Down { num } => Migrator::down(&db, Some(num)).await,
        Command::Status => Migrator::status(&db).await,
        Command::Fresh => Migrator::fresh(&db).await,
        Command::Refresh => Migrator::refresh(&db).await,
        Command::Reset => Migrator::reset(&db).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Migration failed");
            ExitCode::FAILURE
        }
    }
}
