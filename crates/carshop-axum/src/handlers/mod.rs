//! HTTP handlers.

pub mod cars;
