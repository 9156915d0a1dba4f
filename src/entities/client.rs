//! Client entity - Represents a person renting vehicles from the fleet.
//!
//! Each client has personal details and contact information. The `uid` is an
//! externally-visible token, distinct from the numeric primary key, and the
//! document number and email are unique across clients.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Client database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    /// Unique identifier for the client
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Externally-visible unique token
    #[sea_orm(unique)]
    pub uid: Uuid,
    /// Given name(s)
    pub first_name: String,
    /// Family name(s)
    pub last_name: String,
    /// National ID or passport number
    #[sea_orm(unique)]
    pub document_number: String,
    /// Contact phone number, if provided
    pub phone: Option<String>,
    /// Contact email address
    #[sea_orm(unique)]
    pub email: String,
}

/// Defines relationships between Client and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One client signs many contracts over time
    #[sea_orm(has_many = "super::contract::Entity")]
    Contracts,
}

impl Related<super::contract::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contracts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
