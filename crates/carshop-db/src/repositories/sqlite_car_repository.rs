//! `SQLite` implementation of the `CarRepository` trait.

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;
use sqlx::{Sqlite, SqlitePool};
use tracing::debug;

use carshop_core::{Car, CarPatch, CarRepository, NewCar, RepositoryError};

use super::queries::{CarQueries, SqlParam, Statement};
use super::row_mappers::{row_to_car, row_to_id};

/// `SQLite` implementation of the `CarRepository` trait.
///
/// Holds the connection pool and the statement builder for one table.
/// Each method acquires a pooled connection for its own duration; the
/// handle returns to the pool when dropped, on success and on error alike.
pub struct SqliteCarRepository {
    pool: SqlitePool,
    queries: CarQueries,
}

impl SqliteCarRepository {
    /// Create a new `SQLite` car repository.
    pub const fn new(pool: SqlitePool, queries: CarQueries) -> Self {
        Self { pool, queries }
    }

    async fn acquire(&self) -> Result<PoolConnection<Sqlite>, RepositoryError> {
        self.pool.acquire().await.map_err(statement_error)
    }
}

/// Turn a built statement into an executable `sqlx` query with all parameters bound.
fn prepare(statement: &Statement) -> Query<'_, Sqlite, SqliteArguments<'_>> {
    debug!(sql = %statement.sql, params = statement.params.len(), "Executing statement");

    statement
        .params
        .iter()
        .fold(sqlx::query(&statement.sql), |query, param| match param {
            SqlParam::Integer(value) => query.bind(*value),
            SqlParam::Text(value) => query.bind(value.as_str()),
        })
}

/// Map a driver error onto the repository taxonomy.
fn statement_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db_err)
            if !matches!(db_err.kind(), sqlx::error::ErrorKind::Other) =>
        {
            RepositoryError::Constraint(db_err.message().to_string())
        }
        _ => RepositoryError::Statement(err.to_string()),
    }
}

#[async_trait]
impl CarRepository for SqliteCarRepository {
    async fn list(&self) -> Result<Vec<Car>, RepositoryError> {
        let statement = self.queries.list_all();
        let mut conn = self.acquire().await?;

        let rows = prepare(&statement)
            .fetch_all(&mut *conn)
            .await
            .map_err(statement_error)?;

        rows.iter().map(row_to_car).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Car>, RepositoryError> {
        let statement = self.queries.get_by_id(id);
        let mut conn = self.acquire().await?;

        let row = prepare(&statement)
            .fetch_optional(&mut *conn)
            .await
            .map_err(statement_error)?;

        row.as_ref().map(row_to_car).transpose()
    }

    async fn insert(&self, car: &NewCar) -> Result<Car, RepositoryError> {
        let statement = self.queries.insert(car);
        let mut conn = self.acquire().await?;

        let row = prepare(&statement)
            .fetch_one(&mut *conn)
            .await
            .map_err(statement_error)?;

        Ok(car.clone().with_id(row_to_id(&row)?))
    }

    async fn update(&self, car: &Car) -> Result<u64, RepositoryError> {
        let statement = self.queries.update(car);
        let mut conn = self.acquire().await?;

        let result = prepare(&statement)
            .execute(&mut *conn)
            .await
            .map_err(statement_error)?;

        Ok(result.rows_affected())
    }

    async fn update_fields(&self, id: i64, patch: &CarPatch) -> Result<u64, RepositoryError> {
        let Some(statement) = self.queries.update_fields(id, patch) else {
            debug!(id, "Patch has no fields, nothing to write");
            return Ok(0);
        };
        let mut conn = self.acquire().await?;

        let result = prepare(&statement)
            .execute(&mut *conn)
            .await
            .map_err(statement_error)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, RepositoryError> {
        let statement = self.queries.delete(id);
        let mut conn = self.acquire().await?;

        let result = prepare(&statement)
            .execute(&mut *conn)
            .await
            .map_err(statement_error)?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;
    use crate::repositories::queries::DEFAULT_TABLE;

    async fn repo() -> SqliteCarRepository {
        let pool = setup_test_database(DEFAULT_TABLE).await.unwrap();
        SqliteCarRepository::new(pool, CarQueries::new(DEFAULT_TABLE).unwrap())
    }

    fn sedan() -> NewCar {
        NewCar {
            status: "available".to_string(),
            model: "Sedan".to_string(),
            age: 3,
            race: 1,
            fuel_type: "petrol".to_string(),
            price: 15000,
            description: "clean".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_then_get_round_trips() {
        let repo = repo().await;
        let inserted = repo.insert(&sedan()).await.unwrap();
        assert!(inserted.id > 0);

        let fetched = repo.get_by_id(inserted.id).await.unwrap();
        assert_eq!(fetched, Some(sedan().with_id(inserted.id)));
    }

    #[tokio::test]
    async fn test_list_returns_all_rows() {
        let repo = repo().await;
        assert!(repo.list().await.unwrap().is_empty());

        repo.insert(&sedan()).await.unwrap();
        repo.insert(&NewCar::default()).await.unwrap();

        let cars = repo.list().await.unwrap();
        assert_eq!(cars.len(), 2);
        assert_eq!(cars[0].model, "Sedan");
        assert_eq!(cars[1], Car { id: cars[1].id, ..Default::default() });
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let repo = repo().await;
        assert_eq!(repo.get_by_id(12345).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_is_full_replace() {
        let repo = repo().await;
        let car = repo.insert(&sedan()).await.unwrap();

        let replacement = Car {
            id: car.id,
            status: "sold".to_string(),
            ..Default::default()
        };
        assert_eq!(repo.update(&replacement).await.unwrap(), 1);

        let stored = repo.get_by_id(car.id).await.unwrap().unwrap();
        assert_eq!(stored, replacement);
    }

    #[tokio::test]
    async fn test_update_missing_row_affects_nothing() {
        let repo = repo().await;
        let ghost = Car {
            id: 999,
            ..Default::default()
        };
        assert_eq!(repo.update(&ghost).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_fields_keeps_other_columns() {
        let repo = repo().await;
        let car = repo.insert(&sedan()).await.unwrap();

        let patch = CarPatch {
            status: Some("sold".to_string()),
            ..Default::default()
        };
        assert_eq!(repo.update_fields(car.id, &patch).await.unwrap(), 1);

        let stored = repo.get_by_id(car.id).await.unwrap().unwrap();
        assert_eq!(stored.status, "sold");
        assert_eq!(stored.model, "Sedan");
        assert_eq!(stored.price, 15000);
    }

    #[tokio::test]
    async fn test_update_fields_without_changes_writes_nothing() {
        let repo = repo().await;
        let car = repo.insert(&sedan()).await.unwrap();
        assert_eq!(
            repo.update_fields(car.id, &CarPatch::default()).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = repo().await;
        let car = repo.insert(&sedan()).await.unwrap();

        assert_eq!(repo.delete(car.id).await.unwrap(), 1);
        assert_eq!(repo.delete(car.id).await.unwrap(), 0);
        assert_eq!(repo.get_by_id(car.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_missing_table_is_a_statement_error() {
        let pool = setup_test_database(DEFAULT_TABLE).await.unwrap();
        let repo = SqliteCarRepository::new(pool, CarQueries::new("no_such_table").unwrap());

        assert!(matches!(
            repo.list().await,
            Err(RepositoryError::Statement(_))
        ));
    }
}
