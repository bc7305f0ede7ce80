//! Statement builder for car queries.
//!
//! Every operation produces a [`Statement`]: SQL text containing only the
//! validated table name, fixed column names and `?` placeholders, plus the
//! ordered parameter values to bind.

use carshop_core::{Car, CarPatch, NewCar, RepositoryError};

use super::row_mappers::{insert_params, patch_assignments, update_params};

/// Table name used when none is configured.
pub const DEFAULT_TABLE: &str = "car";

/// Column list in the order `row_to_car` reads them.
pub const CAR_SELECT_COLUMNS: &str = "id, status, model, age, race, fuel_type, description, price";

/// Columns written by an insert, in `insert_params` order.
const CAR_INSERT_COLUMNS: &str = "status, model, age, race, fuel_type, price, description";

/// A single bound statement parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    Integer(i64),
    Text(String),
}

/// SQL text plus the parameters to bind, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl Statement {
    fn new(sql: String, params: Vec<SqlParam>) -> Self {
        Self { sql, params }
    }
}

/// Builds the statements for one car table.
#[derive(Debug, Clone)]
pub struct CarQueries {
    table: String,
}

impl Default for CarQueries {
    fn default() -> Self {
        Self {
            table: DEFAULT_TABLE.to_string(),
        }
    }
}

impl CarQueries {
    /// Create a builder for `table`.
    ///
    /// The name is the only identifier ever formatted into SQL text, so it
    /// must match `[A-Za-z_][A-Za-z0-9_]*`.
    pub fn new(table: impl Into<String>) -> Result<Self, RepositoryError> {
        let table = table.into();
        let mut chars = table.chars();
        let valid = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

        if !valid {
            return Err(RepositoryError::Statement(format!(
                "Invalid table name '{table}'"
            )));
        }
        Ok(Self { table })
    }

    /// The table these statements target.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// DDL for the car table. Safe to run repeatedly.
    ///
    /// Column order matches [`CAR_SELECT_COLUMNS`].
    pub fn create_table(&self) -> Statement {
        Statement::new(
            format!(
                r"CREATE TABLE IF NOT EXISTS {} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                status TEXT NOT NULL,
                model TEXT NOT NULL,
                age INTEGER NOT NULL,
                race INTEGER NOT NULL,
                fuel_type TEXT NOT NULL,
                description TEXT,
                price INTEGER
            )",
                self.table
            ),
            Vec::new(),
        )
    }

    /// `SELECT` every row.
    pub fn list_all(&self) -> Statement {
        Statement::new(
            format!("SELECT {CAR_SELECT_COLUMNS} FROM {}", self.table),
            Vec::new(),
        )
    }

    /// `SELECT` the row with `id`. The id is bound, never interpolated.
    pub fn get_by_id(&self, id: i64) -> Statement {
        Statement::new(
            format!("SELECT {CAR_SELECT_COLUMNS} FROM {} WHERE id = ?", self.table),
            vec![SqlParam::Integer(id)],
        )
    }

    /// `INSERT` every non-id field, returning the assigned id.
    pub fn insert(&self, car: &NewCar) -> Statement {
        Statement::new(
            format!(
                "INSERT INTO {} ({CAR_INSERT_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING id",
                self.table
            ),
            insert_params(car),
        )
    }

    /// Full-replace `UPDATE`: all seven non-id columns are overwritten.
    pub fn update(&self, car: &Car) -> Statement {
        Statement::new(
            format!(
                "UPDATE {} SET status = ?, model = ?, age = ?, race = ?, fuel_type = ?, price = ?, description = ? WHERE id = ?",
                self.table
            ),
            update_params(car),
        )
    }

    /// Partial `UPDATE` touching only the fields supplied in `patch`.
    ///
    /// Returns `None` when the patch carries no non-id field.
    pub fn update_fields(&self, id: i64, patch: &CarPatch) -> Option<Statement> {
        let assignments = patch_assignments(patch);
        if assignments.is_empty() {
            return None;
        }

        let set_clause = assignments
            .iter()
            .map(|(column, _)| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(", ");

        let mut params: Vec<SqlParam> = assignments.into_iter().map(|(_, value)| value).collect();
        params.push(SqlParam::Integer(id));

        Some(Statement::new(
            format!("UPDATE {} SET {set_clause} WHERE id = ?", self.table),
            params,
        ))
    }

    /// `DELETE` the row with `id`.
    pub fn delete(&self, id: i64) -> Statement {
        Statement::new(
            format!("DELETE FROM {} WHERE id = ?", self.table),
            vec![SqlParam::Integer(id)],
        )
    }
}
