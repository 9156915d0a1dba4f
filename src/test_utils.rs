//! Shared test utilities for `FleetDesk`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.
#![allow(clippy::unwrap_used)]

use crate::{
    core::{billing::BillingCycle, client, contract, invoice::PaymentStatus, vehicle},
    entities,
    errors::Result,
};
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, Set, prelude::*};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test client keyed by document number.
///
/// The email is derived from the document number so repeated calls with
/// distinct documents never collide on the unique email column.
pub async fn create_test_client(
    db: &DatabaseConnection,
    document_number: &str,
) -> Result<entities::client::Model> {
    client::create_client(
        db,
        "Ada".to_string(),
        "Lovelace".to_string(),
        document_number.to_string(),
        None,
        format!("{}@example.com", document_number.to_lowercase()),
    )
    .await
}

/// Creates a test vehicle keyed by license plate.
pub async fn create_test_vehicle(
    db: &DatabaseConnection,
    license_plate: &str,
) -> Result<entities::vehicle::Model> {
    vehicle::create_vehicle(
        db,
        "Toyota".to_string(),
        "Corolla".to_string(),
        license_plate.to_string(),
        Some(2020),
    )
    .await
}

/// Creates a test contract with sensible defaults.
///
/// # Defaults
/// * `billing_cycle`: weekly
/// * `amount`: 100
/// * `start_date`: 2024-01-01
pub async fn create_test_contract(
    db: &DatabaseConnection,
    client_id: i64,
    vehicle_id: i64,
) -> Result<entities::contract::Model> {
    create_custom_contract(db, client_id, vehicle_id, BillingCycle::Weekly, Decimal::from(100))
        .await
}

/// Creates a test contract with a specific cycle and amount.
pub async fn create_custom_contract(
    db: &DatabaseConnection,
    client_id: i64,
    vehicle_id: i64,
    billing_cycle: BillingCycle,
    amount: Decimal,
) -> Result<entities::contract::Model> {
    contract::create_contract(
        db,
        client_id,
        vehicle_id,
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        amount,
        billing_cycle,
    )
    .await
}

/// Inserts a contract with an arbitrary raw billing-cycle string, bypassing
/// validation. Simulates legacy rows carrying values the current code does
/// not recognize.
pub async fn create_contract_with_raw_cycle(
    db: &DatabaseConnection,
    client_id: i64,
    vehicle_id: i64,
    raw_cycle: &str,
) -> Result<entities::contract::Model> {
    let model = entities::contract::ActiveModel {
        client_id: Set(client_id),
        vehicle_id: Set(vehicle_id),
        start_date: Set(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
        amount: Set(Decimal::from(100)),
        billing_cycle: Set(raw_cycle.to_string()),
        active: Set(true),
        ..Default::default()
    };
    Ok(model.insert(db).await?)
}

/// Inserts an invoice directly, with an optional period key.
///
/// Bypasses the generator so tests can stage arbitrary invoice states.
pub async fn create_test_invoice(
    db: &DatabaseConnection,
    contract_id: i64,
    period_key: Option<&str>,
) -> Result<entities::invoice::Model> {
    let issue_date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
    let model = entities::invoice::ActiveModel {
        uid: Set(Uuid::new_v4()),
        contract_id: Set(contract_id),
        issue_date: Set(issue_date),
        due_date: Set(issue_date + Duration::days(7)),
        amount: Set(Decimal::from(100)),
        payment_status: Set(PaymentStatus::Pending.as_str().to_string()),
        period_key: Set(period_key.map(ToString::to_string)),
        ..Default::default()
    };
    Ok(model.insert(db).await?)
}

/// Sets up a complete test environment with a client, a vehicle, and an
/// active weekly contract between them. Returns (db, contract).
pub async fn setup_with_contract() -> Result<(DatabaseConnection, entities::contract::Model)> {
    let db = setup_test_db().await?;
    let client = create_test_client(&db, "D-001").await?;
    let vehicle = create_test_vehicle(&db, "TST-001").await?;
    let contract = create_test_contract(&db, client.id, vehicle.id).await?;
    Ok((db, contract))
}
