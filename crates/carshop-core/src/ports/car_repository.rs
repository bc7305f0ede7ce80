//! Car repository trait definition.
//!
//! This port defines the interface for car persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Car, CarPatch, NewCar};

/// Repository for car persistence operations.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - CRUD-only: list, get, insert, update, delete
/// - Mutations report rows affected instead of failing on zero rows
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// List all cars in the repository.
    async fn list(&self) -> Result<Vec<Car>, RepositoryError>;

    /// Get a car by its database ID, `None` if no row matches.
    async fn get_by_id(&self, id: i64) -> Result<Option<Car>, RepositoryError>;

    /// Insert a new car.
    ///
    /// Returns the persisted car with its store-assigned ID.
    async fn insert(&self, car: &NewCar) -> Result<Car, RepositoryError>;

    /// Overwrite every non-id column of the row addressed by `car.id`.
    async fn update(&self, car: &Car) -> Result<u64, RepositoryError>;

    /// Overwrite only the columns supplied in `patch` for the row `id`.
    ///
    /// `patch.id` is ignored; callers pass the target explicitly.
    async fn update_fields(&self, id: i64, patch: &CarPatch) -> Result<u64, RepositoryError>;

    /// Delete a car by its database ID.
    async fn delete(&self, id: i64) -> Result<u64, RepositoryError>;
}
