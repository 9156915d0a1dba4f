//! Core business logic - framework-agnostic fleet back-office operations.
//!
//! Each submodule owns the operations for one part of the domain. Everything
//! here is plain async functions over a database connection; the binary and
//! any future front-ends are thin layers on top.

/// Billing-cycle invoice generation
pub mod billing;
/// Client management
pub mod client;
/// Rental contract management
pub mod contract;
/// Invoice management and payment status tracking
pub mod invoice;
/// Static form-descriptor registry for entity editing surfaces
pub mod schema;
/// Fleet vehicle management
pub mod vehicle;
