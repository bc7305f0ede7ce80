#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{Car, CarPatch, DecodeError, NewCar};
pub use ports::{CarRepository, CoreError, Repos, RepositoryError};
pub use services::{AppCore, CarService};

// Only referenced through `#[cfg_attr(test, mockall::automock)]` and tokio tests
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio as _;
