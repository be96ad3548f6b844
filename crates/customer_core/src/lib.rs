//! Core data access for customer records.
//! This crate owns the customer model and the repository contract callers
//! program against.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, flush_logging, init_logging, LoggingConfig};
pub use model::customer::{Customer, CustomerId};
pub use repo::customer_repo::{CustomerRepository, InMemoryCustomerRepository};
pub use service::customer_service::CustomerService;
