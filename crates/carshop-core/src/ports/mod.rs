//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Traits are minimal and CRUD-focused for repositories

pub mod car_repository;

use std::sync::Arc;
use thiserror::Error;

use crate::domain::DecodeError;

pub use car_repository::CarRepository;
#[cfg(test)]
pub use car_repository::MockCarRepository;

/// Container for all repository trait objects.
///
/// Lets adapters wire repositories without coupling to concrete
/// implementations. Lives in `carshop-core` so services can accept it
/// without depending on `carshop-db`.
#[derive(Clone)]
pub struct Repos {
    /// Car repository for CRUD operations on the inventory.
    pub cars: Arc<dyn CarRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(cars: Arc<dyn CarRepository>) -> Self {
        Self { cars }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The store rejected a statement (connectivity loss, bad SQL, ...).
    #[error("Statement error: {0}")]
    Statement(String),

    /// A returned row did not have the expected column shape or types.
    #[error("Row mapping error: {0}")]
    RowMapping(String),

    /// A constraint was violated (e.g., NOT NULL, unique constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters map it to their own error types (HTTP status codes, exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Client payload could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),
}
