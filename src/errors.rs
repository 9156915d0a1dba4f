//! Unified error type for all back-office operations.
//!
//! Per-entity "not found" and conflict conditions get their own variants so
//! callers can react to them individually; infrastructure failures are
//! wrapped from their source error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration or input validation failure
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong
        message: String,
    },

    /// Any error surfaced by the persistence layer
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// No client with the given ID exists
    #[error("Client {id} not found")]
    ClientNotFound {
        /// Primary key that was looked up
        id: i64,
    },

    /// No vehicle with the given ID exists
    #[error("Vehicle {id} not found")]
    VehicleNotFound {
        /// Primary key that was looked up
        id: i64,
    },

    /// No contract with the given ID exists
    #[error("Contract {id} not found")]
    ContractNotFound {
        /// Primary key that was looked up
        id: i64,
    },

    /// No invoice with the given identifier exists
    #[error("Invoice {id} not found")]
    InvoiceNotFound {
        /// Primary key or external token that was looked up
        id: String,
    },

    /// The client already holds an active contract
    #[error("Client {client_id} already has an active contract")]
    ClientHasActiveContract {
        /// Client whose existing contract blocked the operation
        client_id: i64,
    },

    /// The vehicle is already bound to an active contract
    #[error("Vehicle {vehicle_id} already has an active contract")]
    VehicleHasActiveContract {
        /// Vehicle whose existing contract blocked the operation
        vehicle_id: i64,
    },

    /// A contract carries a billing cycle this code does not recognize
    #[error("Unsupported billing cycle: {value}")]
    UnsupportedBillingCycle {
        /// The raw stored value
        value: String,
    },

    /// A monetary amount outside the accepted range
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// A payment status string this code does not recognize
    #[error("Invalid payment status: {value}")]
    InvalidPaymentStatus {
        /// The raw stored value
        value: String,
    },

    /// I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or malformed environment variable
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
