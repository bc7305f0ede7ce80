//! Row mapping helpers for `SQLite` queries.
//!
//! Rows are read positionally in [`CAR_SELECT_COLUMNS`] order. Parameters
//! are produced in the placeholder order of the matching statement; zero
//! values are written literally, never as NULL.
//!
//! [`CAR_SELECT_COLUMNS`]: super::queries::CAR_SELECT_COLUMNS

use carshop_core::{Car, CarPatch, NewCar, RepositoryError};
use sqlx::sqlite::SqliteRow;
use sqlx::{Decode, Row, Sqlite, Type};

use super::queries::SqlParam;

/// Parse a database row into a `Car`.
///
/// NULL `description` / `price` become `""` / `0`.
pub fn row_to_car(row: &SqliteRow) -> Result<Car, RepositoryError> {
    let description: Option<String> = column(row, 6)?;
    let price: Option<i64> = column(row, 7)?;

    Ok(Car {
        id: column(row, 0)?,
        status: column(row, 1)?,
        model: column(row, 2)?,
        age: column(row, 3)?,
        race: column(row, 4)?,
        fuel_type: column(row, 5)?,
        description: description.unwrap_or_default(),
        price: price.unwrap_or_default(),
    })
}

/// Read the store-assigned id from an `INSERT ... RETURNING id` row.
pub fn row_to_id(row: &SqliteRow) -> Result<i64, RepositoryError> {
    column(row, 0)
}

fn column<'r, T>(row: &'r SqliteRow, index: usize) -> Result<T, RepositoryError>
where
    T: Decode<'r, Sqlite> + Type<Sqlite>,
{
    row.try_get(index)
        .map_err(|e| RepositoryError::RowMapping(e.to_string()))
}

/// Parameters for an insert: status, model, age, race, fuel_type, price, description.
pub fn insert_params(car: &NewCar) -> Vec<SqlParam> {
    vec![
        SqlParam::Text(car.status.clone()),
        SqlParam::Text(car.model.clone()),
        SqlParam::Integer(i64::from(car.age)),
        SqlParam::Integer(i64::from(car.race)),
        SqlParam::Text(car.fuel_type.clone()),
        SqlParam::Integer(car.price),
        SqlParam::Text(car.description.clone()),
    ]
}

/// Parameters for a full-replace update: the insert fields, then the id.
pub fn update_params(car: &Car) -> Vec<SqlParam> {
    let mut params = insert_params(&car.to_new_car());
    params.push(SqlParam::Integer(car.id));
    params
}

/// Column/value pairs for the fields supplied in `patch`, in column order.
pub fn patch_assignments(patch: &CarPatch) -> Vec<(&'static str, SqlParam)> {
    [
        ("status", patch.status.clone().map(SqlParam::Text)),
        ("model", patch.model.clone().map(SqlParam::Text)),
        ("age", patch.age.map(|v| SqlParam::Integer(i64::from(v)))),
        ("race", patch.race.map(|v| SqlParam::Integer(i64::from(v)))),
        ("fuel_type", patch.fuel_type.clone().map(SqlParam::Text)),
        ("price", patch.price.map(SqlParam::Integer)),
        ("description", patch.description.clone().map(SqlParam::Text)),
    ]
    .into_iter()
    .filter_map(|(column, value)| value.map(|v| (column, v)))
    .collect()
}
