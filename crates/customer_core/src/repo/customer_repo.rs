//! Customer repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide add / point lookup / full listing over customer records.
//! - Keep listing order deterministic across backends that support it.
//!
//! # Invariants
//! - `add` is last-write-wins and never fails.
//! - `list_all` yields each stored id once, in order of its first add.

use crate::model::customer::{Customer, CustomerId};
use log::debug;
use std::collections::HashMap;

/// Repository interface for customer records.
///
/// Read paths return owned copies so storage-backed implementations can
/// satisfy the same contract.
pub trait CustomerRepository {
    fn add(&mut self, customer: Customer);
    fn get_by_id(&self, customer_id: CustomerId) -> Option<Customer>;
    fn list_all(&self) -> Vec<Customer>;

    /// Number of distinct ids currently stored.
    fn len(&self) -> usize {
        self.list_all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Transient repository scoped to the lifetime of the value.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustomerRepository {
    slots: Vec<Customer>,
    index: HashMap<CustomerId, usize>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CustomerRepository for InMemoryCustomerRepository {
    fn add(&mut self, customer: Customer) {
        let customer_id = customer.customer_id;
        let replaced = match self.index.get(&customer_id) {
            Some(&slot) => {
                // Overwrite keeps the position of the first add.
                self.slots[slot] = customer;
                true
            }
            None => {
                self.index.insert(customer_id, self.slots.len());
                self.slots.push(customer);
                false
            }
        };

        debug!(
            "event=customer_add module=repo status=ok customer_id={} replaced={}",
            customer_id, replaced
        );
    }

    fn get_by_id(&self, customer_id: CustomerId) -> Option<Customer> {
        self.index
            .get(&customer_id)
            .and_then(|&slot| self.slots.get(slot))
            .cloned()
    }

    fn list_all(&self) -> Vec<Customer> {
        self.slots.clone()
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
