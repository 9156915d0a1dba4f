//! Database configuration module for `FleetDesk`.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Table creation uses `Schema::create_table_from_entity` so the database schema
//! always matches the entity definitions without hand-written SQL. On top of the
//! entity-derived tables it adds a unique index on invoice
//! (`contract_id`, `period_key`), which is what makes concurrent invoice
//! generation safe: a duplicate create for the same period is rejected by the
//! store instead of producing a second invoice.

use crate::entities::{Client, Contract, Invoice, Vehicle, invoice};
use crate::errors::Result;
use sea_orm::sea_query::Index;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Name of the unique index guarding one invoice per (contract, period).
const INVOICE_PERIOD_INDEX: &str = "idx_invoices_contract_period";

/// Gets the database URL from environment variable or returns default `SQLite` path.
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/fleetdesk.sqlite".to_string())
}

/// Establishes a connection to the `SQLite` database using the `DATABASE_URL`
/// environment variable, falling back to a default local `SQLite` file if no
/// environment variable is set.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates all database tables from the entity definitions, plus the unique
/// invoice period index.
///
/// Statements are issued with `IF NOT EXISTS` so this is safe to run on every
/// startup against an existing database.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut client_table = schema.create_table_from_entity(Client);
    client_table.if_not_exists();
    let mut vehicle_table = schema.create_table_from_entity(Vehicle);
    vehicle_table.if_not_exists();
    let mut contract_table = schema.create_table_from_entity(Contract);
    contract_table.if_not_exists();
    let mut invoice_table = schema.create_table_from_entity(Invoice);
    invoice_table.if_not_exists();

    db.execute(builder.build(&client_table)).await?;
    db.execute(builder.build(&vehicle_table)).await?;
    db.execute(builder.build(&contract_table)).await?;
    db.execute(builder.build(&invoice_table)).await?;

    // One invoice per (contract, period). NULL period keys (manual invoices)
    // are exempt under SQLite's unique-index NULL semantics.
    let period_index = Index::create()
        .name(INVOICE_PERIOD_INDEX)
        .table(invoice::Entity)
        .col(invoice::Column::ContractId)
        .col(invoice::Column::PeriodKey)
        .unique()
        .if_not_exists()
        .to_owned();
    db.execute(builder.build(&period_index)).await?;

    Ok(())
}
