//! Contract business logic - Handles rental contract operations.
//!
//! A contract binds one client to one vehicle for a per-period amount under a
//! billing cycle. Creation enforces the fleet's exclusivity rule: a client
//! holds at most one active contract, and a vehicle is bound to at most one
//! active contract, at any time.

use crate::{
    core::billing::BillingCycle,
    entities::{Client, Contract, Vehicle, contract},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{QueryOrder, Set, prelude::*};

/// Creates a new active contract after validating its parts.
///
/// Validation covers: a positive per-period amount, an existing client and
/// vehicle, and the single-active-contract rule on both the client and the
/// vehicle. The billing cycle is taken as the enum, so an unsupported cycle
/// cannot enter the store through this path.
pub async fn create_contract(
    db: &DatabaseConnection,
    client_id: i64,
    vehicle_id: i64,
    start_date: NaiveDate,
    amount: Decimal,
    billing_cycle: BillingCycle,
) -> Result<contract::Model> {
    if amount <= Decimal::ZERO {
        return Err(Error::InvalidAmount { amount });
    }

    Client::find_by_id(client_id)
        .one(db)
        .await?
        .ok_or(Error::ClientNotFound { id: client_id })?;
    Vehicle::find_by_id(vehicle_id)
        .one(db)
        .await?
        .ok_or(Error::VehicleNotFound { id: vehicle_id })?;

    let client_active = Contract::find()
        .filter(contract::Column::ClientId.eq(client_id))
        .filter(contract::Column::Active.eq(true))
        .one(db)
        .await?;
    if client_active.is_some() {
        return Err(Error::ClientHasActiveContract { client_id });
    }

    let vehicle_active = Contract::find()
        .filter(contract::Column::VehicleId.eq(vehicle_id))
        .filter(contract::Column::Active.eq(true))
        .one(db)
        .await?;
    if vehicle_active.is_some() {
        return Err(Error::VehicleHasActiveContract { vehicle_id });
    }

    let new_contract = contract::ActiveModel {
        client_id: Set(client_id),
        vehicle_id: Set(vehicle_id),
        start_date: Set(start_date),
        amount: Set(amount),
        billing_cycle: Set(billing_cycle.as_str().to_string()),
        active: Set(true),
        ..Default::default()
    };

    Ok(new_contract.insert(db).await?)
}

/// Retrieves a contract by its unique ID.
pub async fn get_contract_by_id(
    db: &DatabaseConnection,
    contract_id: i64,
) -> Result<Option<contract::Model>> {
    Contract::find_by_id(contract_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all contracts currently in force, the population the billing
/// generator operates on.
pub async fn get_active_contracts(db: &DatabaseConnection) -> Result<Vec<contract::Model>> {
    Contract::find()
        .filter(contract::Column::Active.eq(true))
        .order_by_asc(contract::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves every contract a client has held, newest first.
pub async fn get_contracts_for_client(
    db: &DatabaseConnection,
    client_id: i64,
) -> Result<Vec<contract::Model>> {
    Contract::find()
        .filter(contract::Column::ClientId.eq(client_id))
        .order_by_desc(contract::Column::StartDate)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Takes a contract out of force.
///
/// The contract and its invoices are kept for history; it simply stops being
/// eligible for billing, and frees its client and vehicle for a new contract.
pub async fn terminate_contract(
    db: &DatabaseConnection,
    contract_id: i64,
) -> Result<contract::Model> {
    let existing = Contract::find_by_id(contract_id)
        .one(db)
        .await?
        .ok_or(Error::ContractNotFound { id: contract_id })?;

    let mut active_model: contract::ActiveModel = existing.into();
    active_model.active = Set(false);
    Ok(active_model.update(db).await?)
}
