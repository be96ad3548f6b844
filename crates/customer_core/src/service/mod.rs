//! Core use-case services.
//!
//! # Responsibility
//! - Expose customer use cases over any repository implementation.

pub mod customer_service;
