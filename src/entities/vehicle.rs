//! Vehicle entity - Represents a vehicle in the rental fleet.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Vehicle database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    /// Unique identifier for the vehicle
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Manufacturer (e.g., "Toyota")
    pub brand: String,
    /// Model name (e.g., "Corolla")
    pub model: String,
    /// License plate, unique across the fleet
    #[sea_orm(unique)]
    pub license_plate: String,
    /// Manufacturing year, if known
    pub year: Option<i32>,
}

/// Defines relationships between Vehicle and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One vehicle is rented out under many contracts over time
    #[sea_orm(has_many = "super::contract::Entity")]
    Contracts,
}

impl Related<super::contract::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contracts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
