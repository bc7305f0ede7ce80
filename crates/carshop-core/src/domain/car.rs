//! Car domain types.
//!
//! These types represent vehicle records in the inventory, independent of
//! any infrastructure concerns (database, HTTP, etc.).
//!
//! The model has no notion of "null": storage columns that may hold NULL
//! (`price`, `description`) surface here as their zero value.

use serde::{Deserialize, Serialize};

/// A car that exists in the inventory with a database ID.
///
/// `Default` yields the zero record, which is what the partial update
/// decoder falls back to for every field a client omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Database ID, assigned by the store on creation and never changed.
    pub id: i64,
    /// Free-form status label (e.g. "available", "sold").
    pub status: String,
    /// Free-form model name.
    pub model: String,
    /// Age in years. No range is enforced.
    pub age: i32,
    /// Opaque numeric classification code.
    pub race: i32,
    /// Free-form fuel type (e.g. "petrol", "diesel").
    pub fuel_type: String,
    /// Price; stored nullable, NULL reads back as 0.
    pub price: i64,
    /// Description; stored nullable, NULL reads back as "".
    pub description: String,
}

/// A car to be inserted into the inventory (no ID yet).
///
/// After insertion, the repository returns a `Car` with the assigned ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCar {
    pub status: String,
    pub model: String,
    pub age: i32,
    pub race: i32,
    pub fuel_type: String,
    pub price: i64,
    pub description: String,
}

impl NewCar {
    /// Attach a store-assigned ID, producing the persisted record.
    #[must_use]
    pub fn with_id(self, id: i64) -> Car {
        Car {
            id,
            status: self.status,
            model: self.model,
            age: self.age,
            race: self.race,
            fuel_type: self.fuel_type,
            price: self.price,
            description: self.description,
        }
    }
}

impl Car {
    /// Convert this car to a `NewCar` (drops the ID).
    #[must_use]
    pub fn to_new_car(&self) -> NewCar {
        NewCar {
            status: self.status.clone(),
            model: self.model.clone(),
            age: self.age,
            race: self.race,
            fuel_type: self.fuel_type.clone(),
            price: self.price,
            description: self.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewCar {
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

    #[test]
    fn test_with_id_keeps_fields() {
        let car = sample().with_id(42);
        assert_eq!(car.id, 42);
        assert_eq!(car.model, "Sedan");
        assert_eq!(car.price, 15000);
        assert_eq!(car.to_new_car(), sample());
    }

    #[test]
    fn test_default_is_zero_record() {
        let car = Car::default();
        assert_eq!(car.id, 0);
        assert!(car.status.is_empty());
        assert!(car.description.is_empty());
        assert_eq!(car.price, 0);
    }

    #[test]
    fn test_serializes_with_wire_field_names() {
        let json = serde_json::to_value(sample().with_id(1)).unwrap();
        assert_eq!(json["fuel_type"], "petrol");
        assert_eq!(json["race"], 1);
        assert_eq!(json["id"], 1);
    }
}
