//! Car service - orchestrates car CRUD operations.

use std::sync::Arc;

use tracing::info;

use crate::domain::{Car, CarPatch};
use crate::ports::{CarRepository, CoreError};

/// Service for car operations.
///
/// Thin facade over the injected `CarRepository`. The only logic it owns
/// is deciding how a decoded `CarPatch` is projected for each operation.
pub struct CarService {
    repo: Arc<dyn CarRepository>,
}

impl CarService {
    /// Create a new car service with the given repository.
    pub fn new(repo: Arc<dyn CarRepository>) -> Self {
        Self { repo }
    }

    /// List all cars.
    pub async fn list(&self) -> Result<Vec<Car>, CoreError> {
        self.repo.list().await.map_err(CoreError::from)
    }

    /// Get a car by ID as a zero- or one-element list.
    pub async fn get(&self, id: i64) -> Result<Vec<Car>, CoreError> {
        let car = self.repo.get_by_id(id).await?;
        Ok(car.into_iter().collect())
    }

    /// Insert a car built from `patch`. Omitted fields are stored as zero values.
    pub async fn add(&self, patch: CarPatch) -> Result<Car, CoreError> {
        let car = self.repo.insert(&patch.into_new_car()).await?;
        info!(id = car.id, "Car added");
        Ok(car)
    }

    /// Full-replace update of the row addressed by `patch.id`.
    ///
    /// Every field omitted from `patch` is written back as its zero value.
    pub async fn replace(&self, patch: CarPatch) -> Result<u64, CoreError> {
        let id = patch.require_id()?;
        let rows_affected = self.repo.update(&patch.into_car(id)).await?;
        info!(id, rows_affected, "Car replaced");
        Ok(rows_affected)
    }

    /// Partial update: only the fields present in `patch` are written.
    pub async fn patch(&self, id: i64, patch: &CarPatch) -> Result<u64, CoreError> {
        if !patch.has_changes() {
            return Err(CoreError::Validation(
                "At least one field must be supplied".to_string(),
            ));
        }
        let rows_affected = self.repo.update_fields(id, patch).await?;
        info!(id, rows_affected, "Car patched");
        Ok(rows_affected)
    }

    /// Delete the row addressed by `patch.id`.
    pub async fn delete(&self, patch: &CarPatch) -> Result<u64, CoreError> {
        let id = patch.require_id()?;
        let rows_affected = self.repo.delete(id).await?;
        info!(id, rows_affected, "Car deleted");
        Ok(rows_affected)
    }
}
