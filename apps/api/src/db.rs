use std::time::Duration;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates a PostgreSQL connection pool without opening a connection.
/// Connections are established on first use, so the service can start
/// while the database is down and report it through the health check.
pub fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    info!("Configuring PostgreSQL pool (max {max_connections} connections)...");

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy(database_url)?;

    info!("PostgreSQL connection pool configured");
    Ok(pool)
}
