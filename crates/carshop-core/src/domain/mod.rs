//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, etc.).
//!
//! # Structure
//!
//! - `car` - Persisted and insertable car records (`Car`, `NewCar`)
//! - `patch` - Partial update decoding (`CarPatch`, `DecodeError`)

mod car;
mod patch;

pub use car::{Car, NewCar};
pub use patch::{CarPatch, DecodeError};
