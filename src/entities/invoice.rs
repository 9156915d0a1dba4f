//! Invoice entity - Represents one billing charge against a contract.
//!
//! `period_key` identifies the billing interval an invoice covers and is the
//! idempotence key for generated invoices; it is `None` for invoices an
//! operator creates directly. A unique index on (`contract_id`, `period_key`)
//! is created alongside the tables (see [`crate::config::database`]) so a
//! concurrent duplicate create is rejected by the store instead of racing.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Invoice database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "invoices")]
pub struct Model {
    /// Unique identifier for the invoice
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Externally-visible unique token
    #[sea_orm(unique)]
    pub uid: Uuid,
    /// ID of the contract this invoice charges
    pub contract_id: i64,
    /// Date the invoice was issued
    pub issue_date: Date,
    /// Date payment is due, always seven days after `issue_date`
    pub due_date: Date,
    /// Amount charged, copied from the contract at generation time
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub amount: Decimal,
    /// Payment state: `"pending"`, `"paid"`, or `"overdue"`
    pub payment_status: String,
    /// Billing period covered, e.g. `"2025-W01"`; None for manual invoices
    pub period_key: Option<String>,
}

/// Defines relationships between Invoice and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each invoice belongs to one contract
    #[sea_orm(
        belongs_to = "super::contract::Entity",
        from = "Column::ContractId",
        to = "super::contract::Column::Id"
    )]
    Contract,
}

impl Related<super::contract::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contract.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
