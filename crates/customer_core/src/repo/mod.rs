//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the data access contract for customer records.
//! - Keep backing-store details out of service and caller code.
//!
//! # Invariants
//! - At most one record per `CustomerId`; a repeated add replaces it.
//! - Lookups of unknown ids return `None`, never an error.

pub mod customer_repo;
