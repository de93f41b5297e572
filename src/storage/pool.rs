//! SQLite connection pool bootstrap.

use crate::infra::config::DatabaseConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Instant;

/// Opens a pool for `config`, creating the database file if missing.
///
/// In-memory databases are private to a single connection, so their pool is
/// pinned to one connection that is never reaped; the data lives as long as
/// the pool.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let started_at = Instant::now();
    let in_memory = config.is_in_memory();
    tracing::info!(event = "db_open", status = "start", in_memory);

    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .busy_timeout(config.busy_timeout);

    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections)
    };

    match pool_options.connect_with(options).await {
        Ok(pool) => {
            tracing::info!(
                event = "db_open",
                status = "ok",
                in_memory,
                duration_ms = started_at.elapsed().as_millis() as u64
            );
            Ok(pool)
        }
        Err(err) => {
            tracing::error!(
                event = "db_open",
                status = "error",
                in_memory,
                duration_ms = started_at.elapsed().as_millis() as u64,
                error = %err
            );
            Err(err)
        }
    }
}
