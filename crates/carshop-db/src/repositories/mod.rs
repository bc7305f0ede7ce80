//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

pub mod queries;
mod row_mappers;
mod sqlite_car_repository;

pub use queries::{CarQueries, DEFAULT_TABLE, SqlParam, Statement};
pub use sqlite_car_repository::SqliteCarRepository;
