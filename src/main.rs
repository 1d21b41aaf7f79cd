//! Northwind Customers API server.
//!
//! ```bash
//! DB_HOST=localhost DB_PASSWORD=secret cargo run
//! ```
//!
//! - **API**: <http://localhost:3000/customers>
//! - **Documentation**: <http://localhost:3000/api-docs>

use northwind_api::{Config, data_source, openapi};
use std::process::ExitCode;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("northwind_api=info,tower_http=info")),
        )
        .init();

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
    tracing::info!("Connected to the database");

    let app = northwind_api::app(&db, config.port);
    let listener = match TcpListener::bind(("0.0.0.0", config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(error = %err, port = config.port, "Cannot bind listener");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Server is running at http://localhost:{}", config.port);
    tracing::info!(
        "Docs available at http://localhost:{}{}",
        config.port,
        openapi::DOCS_PATH
    );

    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %err, "Server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "Cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
