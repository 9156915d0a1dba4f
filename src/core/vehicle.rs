//! Vehicle business logic - Handles fleet vehicle operations.

use crate::{
    entities::{Vehicle, vehicle},
    errors::{Error, Result},
};
use sea_orm::{Condition, QueryOrder, Set, prelude::*};

/// Adds a vehicle to the fleet, performing input validation.
///
/// Brand, model, and license plate must be non-empty; the plate is trimmed
/// and stored uppercase so lookups are insensitive to how it was typed.
pub async fn create_vehicle(
    db: &DatabaseConnection,
    brand: String,
    model: String,
    license_plate: String,
    year: Option<i32>,
) -> Result<vehicle::Model> {
    for (field, value) in [
        ("brand", &brand),
        ("model", &model),
        ("license plate", &license_plate),
    ] {
        if value.trim().is_empty() {
            return Err(Error::Config {
                message: format!("Vehicle {field} cannot be empty"),
            });
        }
    }

    let new_vehicle = vehicle::ActiveModel {
        brand: Set(brand.trim().to_string()),
        model: Set(model.trim().to_string()),
        license_plate: Set(license_plate.trim().to_uppercase()),
        year: Set(year),
        ..Default::default()
    };

    Ok(new_vehicle.insert(db).await?)
}

/// Retrieves a vehicle by its unique ID.
pub async fn get_vehicle_by_id(
    db: &DatabaseConnection,
    vehicle_id: i64,
) -> Result<Option<vehicle::Model>> {
    Vehicle::find_by_id(vehicle_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a vehicle by license plate, the natural key operators look up by.
pub async fn get_vehicle_by_plate(
    db: &DatabaseConnection,
    license_plate: &str,
) -> Result<Option<vehicle::Model>> {
    Vehicle::find()
        .filter(vehicle::Column::LicensePlate.eq(license_plate.trim().to_uppercase()))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the whole fleet, ordered by brand then model.
pub async fn get_all_vehicles(db: &DatabaseConnection) -> Result<Vec<vehicle::Model>> {
    Vehicle::find()
        .order_by_asc(vehicle::Column::Brand)
        .order_by_asc(vehicle::Column::Model)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Searches vehicles by substring over brand, model, and license plate.
pub async fn search_vehicles(db: &DatabaseConnection, query: &str) -> Result<Vec<vehicle::Model>> {
    Vehicle::find()
        .filter(
            Condition::any()
                .add(vehicle::Column::Brand.contains(query))
                .add(vehicle::Column::Model.contains(query))
                .add(vehicle::Column::LicensePlate.contains(query)),
        )
        .order_by_asc(vehicle::Column::LicensePlate)
        .all(db)
        .await
        .map_err(Into::into)
}
