//! Customer use-case service.
//!
//! # Invariants
//! - Service APIs never bypass the repository contract.
//! - Service layer remains storage-agnostic.

use crate::model::customer::{Customer, CustomerId};
use crate::repo::customer_repo::CustomerRepository;

/// Use-case wrapper for customer data access.
pub struct CustomerService<R: CustomerRepository> {
    repo: R,
}

impl<R: CustomerRepository> CustomerService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Stores a customer, replacing any record with the same id.
    pub fn add_customer(&mut self, customer: Customer) {
        self.repo.add(customer)
    }

    pub fn get_customer(&self, customer_id: CustomerId) -> Option<Customer> {
        self.repo.get_by_id(customer_id)
    }

    /// Lists every stored customer in first-add order.
    pub fn list_customers(&self) -> Vec<Customer> {
        self.repo.list_all()
    }

    /// Returns the wrapped repository.
    pub fn into_inner(self) -> R {
        self.repo
    }
}
