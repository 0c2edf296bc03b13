use crate::{DbError, Result};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Open a connection pool to the hosted Postgres database
pub async fn connect_pool(url: &str, max_connections: u32) -> Result<PgPool> {
    if url.trim().is_empty() {
        return Err(DbError::Initialization {
            message: "database url is empty".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect(url)
        .await?;

    Ok(pool)
}

/// Apply the embedded schema migrations
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration {
            message: format!("Migration failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(())
}
