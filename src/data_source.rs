//! The process-wide connection pool.
//!
//! [`connect`] is called once from `main`; the returned `DatabaseConnection` is a
//! cheap pool handle that the router clones into every request.

use crate::config::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;

/// Open the pool and make sure the server answers.
///
/// # Errors
///
/// Returns the driver error when the database is unreachable or refuses the
/// credentials. Callers treat this as fatal; nothing here retries.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url());
    options
        .max_connections(config.max_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(config.logging);

    tracing::info!(url = %config.redacted_url(), "Connecting to the database");
    let db = Database::connect(options).await?;
    db.ping().await?;
    Ok(db)
}
