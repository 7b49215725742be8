use serde::{Deserialize, Serialize};

use super::customer::CustomerId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub sku: String,
    pub qty: u32,
}

impl CartItem {
    pub fn new(sku: impl Into<String>, qty: u32) -> Self {
        Self {
            sku: sku.into(),
            qty,
        }
    }
}

/// A customer's active, not yet purchased selection of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    customer_id: CustomerId,
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new(customer_id: CustomerId, items: Vec<CartItem>) -> Self {
        Self { customer_id, items }
    }

    pub fn empty(customer_id: CustomerId) -> Self {
        Self::new(customer_id, Vec::new())
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }
}
