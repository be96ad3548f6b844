//! Customer record.
//!
//! # Invariants
//! - `customer_id` is the primary key inside one repository instance.
//! - `name` and `email` are free-form; no format checks are applied.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Primary key of a customer within one repository.
pub type CustomerId = i64;

/// Identity plus descriptive fields for one customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub name: String,
    /// Stored as given, including empty or malformed addresses.
    pub email: String,
}

impl Customer {
    pub fn new(
        customer_id: CustomerId,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            customer_id,
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Display for Customer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Customer(id={}, name='{}', email='{}')",
            self.customer_id, self.name, self.email
        )
    }
}
