//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod client;
pub mod contract;
pub mod invoice;
pub mod vehicle;

// Re-export specific types to avoid conflicts
pub use client::{Column as ClientColumn, Entity as Client, Model as ClientModel};
pub use contract::{Column as ContractColumn, Entity as Contract, Model as ContractModel};
pub use invoice::{Column as InvoiceColumn, Entity as Invoice, Model as InvoiceModel};
pub use vehicle::{Column as VehicleColumn, Entity as Vehicle, Model as VehicleModel};
