pub mod in_memory_cart_store;
pub mod in_memory_customer_store;
pub mod in_memory_session_store;

pub use in_memory_cart_store::InMemoryCartStore;
pub use in_memory_customer_store::{CustomerStoreError, InMemoryCustomerStore};
pub use in_memory_session_store::{InMemorySessionStore, SessionData, SessionHandle, SessionId};
