//! Customer domain model.
//!
//! # Responsibility
//! - Define the record shape shared by every repository backend.
//!
//! # Invariants
//! - Repositories store and return records; they never edit fields.

pub mod customer;
