use std::fmt;

use serde::{Deserialize, Serialize};

use super::email::Email;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(u64);

impl CustomerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read-only view of a customer record owned by the account subsystem.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    id: CustomerId,
    email: Email,
}

impl Customer {
    pub fn new(id: CustomerId, email: Email) -> Self {
        Self { id, email }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}
