//! Partial update decoding.
//!
//! Client payloads may carry any subset of the recognized car fields.
//! `CarPatch` keeps one `Option` per field so "omitted" and "supplied"
//! stay distinguishable all the way to the statement builder:
//!
//! - `None` = key absent, or present with JSON `null`
//! - `Some(value)` = key present with a usable value
//!
//! Zero-filling only happens when a caller explicitly projects the patch
//! into a full record (`into_new_car` / `into_car`).

use serde_json::{Map, Value};
use thiserror::Error;

use super::car::{Car, NewCar};

/// Errors raised while decoding a client payload into a `CarPatch`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The body is not valid JSON.
    #[error("Malformed JSON: {0}")]
    Malformed(String),

    /// The body is valid JSON but not an object.
    #[error("Expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// A recognized key holds a value of the wrong JSON type.
    #[error("Field '{field}' must be a {expected}, got {found}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// A numeric value does not fit the target integer width.
    #[error("Field '{field}' is out of range: {value}")]
    OutOfRange { field: &'static str, value: String },

    /// The operation targets a record but no `id` was supplied.
    #[error("Field 'id' is required")]
    MissingId,
}

/// A partially-specified car decoded from client JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarPatch {
    pub id: Option<i64>,
    pub status: Option<String>,
    pub model: Option<String>,
    pub age: Option<i32>,
    pub race: Option<i32>,
    pub fuel_type: Option<String>,
    pub price: Option<i64>,
    pub description: Option<String>,
}

impl CarPatch {
    /// Parse raw request bytes into a patch.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| DecodeError::Malformed(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Decode an already-parsed JSON value.
    ///
    /// Unrecognized keys are ignored.
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let Value::Object(map) = value else {
            return Err(DecodeError::NotAnObject(json_kind(value)));
        };

        Ok(Self {
            id: integer(map, "id")?,
            status: string(map, "status")?,
            model: string(map, "model")?,
            age: integer(map, "age")?,
            race: integer(map, "race")?,
            fuel_type: string(map, "fuel_type")?,
            price: integer(map, "price")?,
            description: string(map, "description")?,
        })
    }

    /// The target ID, or `DecodeError::MissingId`.
    pub fn require_id(&self) -> Result<i64, DecodeError> {
        self.id.ok_or(DecodeError::MissingId)
    }

    /// Whether at least one non-id field was supplied.
    pub const fn has_changes(&self) -> bool {
        self.status.is_some()
            || self.model.is_some()
            || self.age.is_some()
            || self.race.is_some()
            || self.fuel_type.is_some()
            || self.price.is_some()
            || self.description.is_some()
    }

    /// Project into an insert record. Omitted fields become zero values; `id` is ignored.
    #[must_use]
    pub fn into_new_car(self) -> NewCar {
        NewCar {
            status: self.status.unwrap_or_default(),
            model: self.model.unwrap_or_default(),
            age: self.age.unwrap_or_default(),
            race: self.race.unwrap_or_default(),
            fuel_type: self.fuel_type.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        }
    }

    /// Project into a full-replace record for `id`.
    ///
    /// Every omitted field is zero-filled and will overwrite stored data.
    #[must_use]
    pub fn into_car(self, id: i64) -> Car {
        self.into_new_car().with_id(id)
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn present<'a>(map: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    map.get(field).filter(|v| !v.is_null())
}

fn string(map: &Map<String, Value>, field: &'static str) -> Result<Option<String>, DecodeError> {
    let Some(value) = present(map, field) else {
        return Ok(None);
    };
    match value {
        Value::String(s) => Ok(Some(s.clone())),
        other => Err(DecodeError::TypeMismatch {
            field,
            expected: "string",
            found: json_kind(other),
        }),
    }
}

/// Decode a JSON number into the target integer width.
///
/// Fractional values truncate toward zero.
fn integer<T>(map: &Map<String, Value>, field: &'static str) -> Result<Option<T>, DecodeError>
where
    T: TryFrom<i64>,
{
    let Some(value) = present(map, field) else {
        return Ok(None);
    };
    let Value::Number(number) = value else {
        return Err(DecodeError::TypeMismatch {
            field,
            expected: "number",
            found: json_kind(value),
        });
    };

    let out_of_range = || DecodeError::OutOfRange {
        field,
        value: number.to_string(),
    };

    let wide = match number.as_i64() {
        Some(v) => v,
        None => number
            .as_f64()
            .and_then(truncate_float)
            .ok_or_else(out_of_range)?,
    };

    T::try_from(wide).map(Some).map_err(|_| out_of_range())
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn truncate_float(float: f64) -> Option<i64> {
    (float.is_finite() && float >= i64::MIN as f64 && float < i64::MAX as f64)
        .then(|| float.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_subset_sets_only_supplied_fields() {
        let patch = CarPatch::from_value(&json!({"model": "Coupe", "age": 4})).unwrap();
        assert_eq!(
            patch,
            CarPatch {
                model: Some("Coupe".to_string()),
                age: Some(4),
                ..Default::default()
            }
        );
        assert!(patch.has_changes());
    }

    #[test]
    fn test_full_payload() {
        let patch = CarPatch::from_slice(
            br#"{"id":9,"status":"available","model":"Sedan","age":3,"race":1,
                "fuel_type":"petrol","price":15000,"description":"clean"}"#,
        )
        .unwrap();
        assert_eq!(patch.require_id(), Ok(9));
        let car = patch.into_car(9);
        assert_eq!(car.fuel_type, "petrol");
        assert_eq!(car.price, 15000);
        assert_eq!(car.description, "clean");
    }

    #[test]
    fn test_null_is_treated_as_absent() {
        let patch = CarPatch::from_value(&json!({"price": null, "description": null})).unwrap();
        assert_eq!(patch, CarPatch::default());
        assert!(!patch.has_changes());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let patch = CarPatch::from_value(&json!({"colour": "red", "status": "sold"})).unwrap();
        assert_eq!(patch.status.as_deref(), Some("sold"));
        assert!(patch.model.is_none());
    }

    #[test]
    fn test_omitted_fields_zero_fill_on_projection() {
        let car = CarPatch::from_value(&json!({"id": 5, "status": "sold"}))
            .unwrap()
            .into_car(5);
        assert_eq!(car.status, "sold");
        assert_eq!(car.model, "");
        assert_eq!(car.fuel_type, "");
        assert_eq!(car.description, "");
        assert_eq!((car.age, car.race, car.price), (0, 0, 0));
    }

    #[test]
    fn test_insert_projection_ignores_id() {
        let new_car = CarPatch::from_value(&json!({"id": 77, "model": "Van"}))
            .unwrap()
            .into_new_car();
        assert_eq!(
            new_car,
            NewCar {
                model: "Van".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_fractional_numbers_truncate() {
        let patch = CarPatch::from_value(&json!({"age": 3.9, "price": 1.5e4})).unwrap();
        assert_eq!(patch.age, Some(3));
        assert_eq!(patch.price, Some(15000));
    }

    #[test]
    fn test_type_mismatch_is_an_error() {
        let err = CarPatch::from_value(&json!({"age": "three"})).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TypeMismatch {
                field: "age",
                expected: "number",
                found: "string"
            }
        );

        let err = CarPatch::from_value(&json!({"model": 12})).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::TypeMismatch { field: "model", .. }
        ));
    }

    #[test]
    fn test_out_of_range_for_narrow_field() {
        let err = CarPatch::from_value(&json!({"race": 5_000_000_000_i64})).unwrap_err();
        assert!(matches!(err, DecodeError::OutOfRange { field: "race", .. }));

        let err = CarPatch::from_value(&json!({"price": 1e30})).unwrap_err();
        assert!(matches!(err, DecodeError::OutOfRange { field: "price", .. }));
    }

    #[test]
    fn test_malformed_and_non_object_bodies() {
        assert!(matches!(
            CarPatch::from_slice(b"{\"id\": 1,"),
            Err(DecodeError::Malformed(_))
        ));
        assert_eq!(
            CarPatch::from_slice(b"[1, 2]"),
            Err(DecodeError::NotAnObject("array"))
        );
    }

    #[test]
    fn test_require_id_when_missing() {
        let patch = CarPatch::from_value(&json!({"status": "sold"})).unwrap();
        assert_eq!(patch.require_id(), Err(DecodeError::MissingId));
    }
}
