//! CLI demo entry point.
//!
//! # Responsibility
//! - Exercise the customer repository API end to end with fixed data.
//! - Keep output deterministic for quick local sanity checks.

use customer_core::{
    default_log_level, flush_logging, init_logging, Customer, CustomerService,
    InMemoryCustomerRepository,
};

const LOG_DIR_ENV: &str = "CUSTOMER_LOG_DIR";

fn main() {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let mut service = CustomerService::new(InMemoryCustomerRepository::new());
    service.add_customer(Customer::new(1, "Alice", "alice@example.com"));
    service.add_customer(Customer::new(2, "Bob", "bob@example.com"));

    match service.get_customer(1) {
        Some(customer) => println!("{customer}"),
        None => println!("None"),
    }

    for customer in service.list_customers() {
        println!("{customer}");
    }

    flush_logging();
}
