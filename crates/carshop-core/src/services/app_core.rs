//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters (CLI, Web)
//! receive an `AppCore` instance and use it to access all functionality.

use crate::ports::Repos;

use super::CarService;

/// The core application facade.
///
/// `AppCore` provides access to all core services. It's constructed at the
/// adapter's composition root (bootstrap.rs) with concrete repositories.
///
/// # Example
///
/// ```ignore
/// let repos = CoreFactory::build_repos(pool, "car")?;
/// let core = AppCore::new(repos);
///
/// let cars = core.cars().list().await?;
/// ```
pub struct AppCore {
    cars: CarService,
}

impl AppCore {
    /// Create a new `AppCore` with the given repositories.
    pub fn new(repos: Repos) -> Self {
        Self {
            cars: CarService::new(repos.cars),
        }
    }

    /// Access the car service.
    pub const fn cars(&self) -> &CarService {
        &self.cars
    }
}
