//! Composition utilities for building `AppCore` with `SQLite` backends.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` repositories. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use carshop_core::{AppCore, Repos, RepositoryError};

use crate::repositories::{CarQueries, SqliteCarRepository};

/// Factory for creating repository instances with `SQLite` backends.
///
/// This struct provides composition utilities only, no domain logic.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// Returns a `Repos` struct from `carshop-core` containing
    /// trait-object-wrapped repositories.
    pub fn build_repos(pool: SqlitePool, table: &str) -> Result<Repos, RepositoryError> {
        Ok(Repos::new(Self::car_repository(pool, table)?))
    }

    /// Build a complete `AppCore` instance from a pool.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let repos = CoreFactory::build_repos(pool, table)?;
    /// let core = AppCore::new(repos);
    /// ```
    pub fn build_app_core(pool: SqlitePool, table: &str) -> Result<AppCore, RepositoryError> {
        Ok(AppCore::new(Self::build_repos(pool, table)?))
    }

    /// Create a car repository for `table` from a pool.
    pub fn car_repository(
        pool: SqlitePool,
        table: &str,
    ) -> Result<Arc<SqliteCarRepository>, RepositoryError> {
        Ok(Arc::new(SqliteCarRepository::new(
            pool,
            CarQueries::new(table)?,
        )))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema
/// already applied to the default table.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database(crate::repositories::DEFAULT_TABLE).await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a car repository using this test database.
    pub fn car_repository(&self) -> SqliteCarRepository {
        SqliteCarRepository::new(self.pool.clone(), CarQueries::default())
    }

    /// Build an `AppCore` backed by this test database.
    pub fn app_core(&self) -> AppCore {
        AppCore::new(Repos::new(Arc::new(self.car_repository())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carshop_core::{CarPatch, CarRepository};

    #[tokio::test]
    async fn test_build_repos_rejects_invalid_table() {
        let db = TestDb::new().await.unwrap();
        assert!(CoreFactory::build_repos(db.pool().clone(), "bad name").is_err());
    }

    #[tokio::test]
    async fn test_app_core_uses_test_database() {
        let db = TestDb::new().await.unwrap();
        let core = db.app_core();

        let patch = CarPatch {
            model: Some("Hatchback".to_string()),
            ..Default::default()
        };
        let car = core.cars().add(patch).await.unwrap();

        let stored = db.car_repository().get_by_id(car.id).await.unwrap();
        assert_eq!(stored, Some(car));
    }
}
