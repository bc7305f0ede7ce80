//! Database setup and initialization.
//!
//! This module provides the `setup_database()` function for initializing
//! the `SQLite` database with the car schema. Entry points call this with
//! the configured database path and table name.

use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;

use crate::repositories::CarQueries;

/// Sets up the `SQLite` database connection and ensures the schema exists.
///
/// This function:
/// 1. Creates the parent directory and database file if missing
/// 2. Opens a connection pool
/// 3. Creates the car table if it doesn't exist
///
/// # Errors
///
/// Returns an error if:
/// - `table` is not a valid identifier
/// - The database file cannot be opened or created
/// - Schema creation fails
///
/// # Example
///
/// ```rust,no_run
/// use carshop_db::setup_database;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = setup_database(Path::new("/var/lib/carshop/carshop.db"), "car").await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(db_path: &Path, table: &str) -> Result<SqlitePool> {
    let queries = CarQueries::new(table)?;

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePoolOptions::new()
        .connect_with(
            SqliteConnectOptions::new()
                .filename(db_path)
                .create_if_missing(true),
        )
        .await?;

    create_schema(&pool, &queries).await?;

    tracing::info!(
        database_path = %db_path.display(),
        table = queries.table(),
        "Database ready"
    );

    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// The pool is pinned to a single connection that never expires, so every
/// query sees the same in-memory database.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database(table: &str) -> Result<SqlitePool> {
    let queries = CarQueries::new(table)?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    create_schema(&pool, &queries).await?;
    Ok(pool)
}

/// Creates the car table. Safe to call multiple times.
async fn create_schema(pool: &SqlitePool, queries: &CarQueries) -> Result<()> {
    sqlx::query(&queries.create_table().sql)
        .execute(pool)
        .await?;
    Ok(())
}
