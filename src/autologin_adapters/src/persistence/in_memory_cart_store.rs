use std::sync::Arc;

use autologin_core::{Cart, CartItem, CartService, CartServiceError, CustomerId};
use dashmap::DashMap;

#[derive(Default, Clone)]
pub struct InMemoryCartStore {
    carts: Arc<DashMap<CustomerId, Vec<CartItem>>>,
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self {
            carts: Arc::new(DashMap::new()),
        }
    }

    /// Open an (empty) active cart for the customer if none exists.
    pub fn open_cart(&self, customer_id: CustomerId) {
        self.carts.entry(customer_id).or_default();
    }

    pub fn add_item(&self, customer_id: CustomerId, item: CartItem) {
        self.carts.entry(customer_id).or_default().push(item);
    }
}

#[async_trait::async_trait]
impl CartService for InMemoryCartStore {
    async fn get_cart_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Cart, CartServiceError> {
        self.carts
            .get(&customer_id)
            .map(|items| Cart::new(customer_id, items.clone()))
            .ok_or(CartServiceError::CartNotFound(customer_id))
    }
}
