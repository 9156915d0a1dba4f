//! Contract entity - Represents a rental agreement between a client and a vehicle.
//!
//! The `billing_cycle` is stored as a plain string and parsed where it is
//! used, so a row with an unrecognized cycle still loads and can be reported
//! as a per-contract error instead of failing the whole query. At most one
//! active contract may exist per client and per vehicle; that invariant is
//! enforced by [`crate::core::contract::create_contract`].

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Contract database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contracts")]
pub struct Model {
    /// Unique identifier for the contract
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the client renting the vehicle
    pub client_id: i64,
    /// ID of the vehicle being rented
    pub vehicle_id: i64,
    /// Date the rental agreement takes effect
    pub start_date: Date,
    /// Amount charged per billing period
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub amount: Decimal,
    /// Billing recurrence: `"weekly"`, `"biweekly"`, or `"monthly"`
    pub billing_cycle: String,
    /// Whether the contract is currently in force and eligible for billing
    pub active: bool,
}

/// Defines relationships between Contract and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each contract belongs to one client
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id"
    )]
    Client,
    /// Each contract covers one vehicle
    #[sea_orm(
        belongs_to = "super::vehicle::Entity",
        from = "Column::VehicleId",
        to = "super::vehicle::Column::Id"
    )]
    Vehicle,
    /// One contract accumulates many invoices over time
    #[sea_orm(has_many = "super::invoice::Entity")]
    Invoices,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl Related<super::invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invoices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
