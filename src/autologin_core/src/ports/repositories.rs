use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    cart::Cart,
    customer::{Customer, CustomerId},
    reset_token::ResetToken,
};

// CustomerDirectory port trait and errors
#[derive(Debug, Error)]
pub enum CustomerDirectoryError {
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// One page of customers matching a search, plus the total number of matches.
#[derive(Debug, Clone, Default)]
pub struct CustomerSearchResults {
    /// Total matches, independent of the page size used for the query
    pub total_count: usize,
    pub items: Vec<Customer>,
}

#[async_trait]
pub trait CustomerDirectory: Send + Sync {
    /// Find customers whose stored reset token equals `token`.
    ///
    /// At most `page_size` customers are returned in `items`, but `total_count` must
    /// always report every match.
    async fn find_by_reset_token(
        &self,
        token: &ResetToken,
        page_size: usize,
    ) -> Result<CustomerSearchResults, CustomerDirectoryError>;
}

// CartService port trait and errors
#[derive(Debug, Error)]
pub enum CartServiceError {
    #[error("No active cart for customer {0}")]
    CartNotFound(CustomerId),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for CartServiceError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::CartNotFound(a), Self::CartNotFound(b)) => a == b,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

#[async_trait]
pub trait CartService: Send + Sync {
    async fn get_cart_for_customer(&self, customer_id: CustomerId)
    -> Result<Cart, CartServiceError>;
}

// SessionStore port trait and errors
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Session not found")]
    SessionNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// The current request's session.
///
/// Implementations are request-scoped handles: every method acts on the session the
/// request belongs to.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// The reset token remembered for this session, if any.
    async fn reset_token(&self) -> Result<Option<ResetToken>, SessionStoreError>;
    /// Remember the reset token the customer arrived with.
    async fn set_reset_token(&self, token: &ResetToken) -> Result<(), SessionStoreError>;
    async fn clear_reset_token(&self) -> Result<(), SessionStoreError>;
    /// Start the session, creating it if it does not exist yet.
    async fn start(&self) -> Result<(), SessionStoreError>;
    async fn set_authenticated_customer(&self, customer: &Customer)
    -> Result<(), SessionStoreError>;
}
