//! Hand-written port mocks shared by the use case tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use autologin_core::{
    AccountService, AccountServiceError, Cart, CartService, CartServiceError, Customer,
    CustomerDirectory, CustomerDirectoryError, CustomerId, CustomerSearchResults, Email, Notice,
    NotificationSink, Password, ResetToken, SessionStore, SessionStoreError,
};
use secrecy::ExposeSecret;
use tokio::sync::Mutex;

pub fn customer(id: u64, email: &str) -> Customer {
    Customer::new(CustomerId::new(id), Email::try_from(email).unwrap())
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResetCall {
    pub email: String,
    pub token: String,
    pub password: String,
}

#[derive(Clone, Default)]
pub struct MockAccountService {
    pub reset_error: Option<AccountServiceError>,
    pub token_invalid: bool,
    pub calls: Arc<Mutex<Vec<ResetCall>>>,
}

#[async_trait]
impl AccountService for MockAccountService {
    async fn validate_reset_token(&self, _token: &ResetToken) -> Result<(), AccountServiceError> {
        if self.token_invalid {
            Err(AccountServiceError::TokenExpired)
        } else {
            Ok(())
        }
    }

    async fn reset_password(
        &self,
        email: &Email,
        token: &ResetToken,
        new_password: Password,
    ) -> Result<(), AccountServiceError> {
        self.calls.lock().await.push(ResetCall {
            email: email.as_ref().expose_secret().clone(),
            token: token.to_string(),
            password: new_password.as_ref().expose_secret().clone(),
        });
        match &self.reset_error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

/// Directory holding `(token, customer)` pairs; several customers may share a token.
#[derive(Clone, Default)]
pub struct MockCustomerDirectory {
    pub records: Vec<(ResetToken, Customer)>,
    pub fail: bool,
    pub page_sizes: Arc<Mutex<Vec<usize>>>,
}

impl MockCustomerDirectory {
    pub fn with(records: Vec<(&str, Customer)>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|(token, customer)| (ResetToken::new(token), customer))
                .collect(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl CustomerDirectory for MockCustomerDirectory {
    async fn find_by_reset_token(
        &self,
        token: &ResetToken,
        page_size: usize,
    ) -> Result<CustomerSearchResults, CustomerDirectoryError> {
        self.page_sizes.lock().await.push(page_size);
        if self.fail {
            return Err(CustomerDirectoryError::UnexpectedError(
                "directory offline".to_string(),
            ));
        }
        let matches: Vec<Customer> = self
            .records
            .iter()
            .filter(|(t, _)| t == token)
            .map(|(_, c)| c.clone())
            .collect();
        Ok(CustomerSearchResults {
            total_count: matches.len(),
            items: matches.into_iter().take(page_size).collect(),
        })
    }
}

#[derive(Debug, Default)]
pub struct SessionState {
    pub reset_token: Option<ResetToken>,
    pub started: bool,
    pub customer: Option<CustomerId>,
    pub calls: Vec<&'static str>,
}

#[derive(Clone, Default)]
pub struct MockSession {
    pub state: Arc<Mutex<SessionState>>,
}

impl MockSession {
    pub async fn with_reset_token(token: &str) -> Self {
        let session = Self::default();
        session.state.lock().await.reset_token = Some(ResetToken::new(token));
        session
    }
}

#[async_trait]
impl SessionStore for MockSession {
    async fn reset_token(&self) -> Result<Option<ResetToken>, SessionStoreError> {
        Ok(self.state.lock().await.reset_token.clone())
    }

    async fn set_reset_token(&self, token: &ResetToken) -> Result<(), SessionStoreError> {
        let mut state = self.state.lock().await;
        state.calls.push("set_reset_token");
        state.reset_token = Some(token.clone());
        Ok(())
    }

    async fn clear_reset_token(&self) -> Result<(), SessionStoreError> {
        let mut state = self.state.lock().await;
        state.calls.push("clear_reset_token");
        state.reset_token = None;
        Ok(())
    }

    async fn start(&self) -> Result<(), SessionStoreError> {
        let mut state = self.state.lock().await;
        state.calls.push("start");
        state.started = true;
        Ok(())
    }

    async fn set_authenticated_customer(
        &self,
        customer: &Customer,
    ) -> Result<(), SessionStoreError> {
        let mut state = self.state.lock().await;
        state.calls.push("set_authenticated_customer");
        state.customer = Some(customer.id());
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockCartService {
    pub carts: HashMap<CustomerId, Cart>,
    pub fail: bool,
}

impl MockCartService {
    pub fn with_cart(cart: Cart) -> Self {
        let mut carts = HashMap::new();
        carts.insert(cart.customer_id(), cart);
        Self { carts, fail: false }
    }
}

#[async_trait]
impl CartService for MockCartService {
    async fn get_cart_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Cart, CartServiceError> {
        if self.fail {
            return Err(CartServiceError::UnexpectedError("quote failure".to_string()));
        }
        self.carts
            .get(&customer_id)
            .cloned()
            .ok_or(CartServiceError::CartNotFound(customer_id))
    }
}

#[derive(Clone, Default)]
pub struct MockNotifications {
    pub notices: Arc<Mutex<Vec<Notice>>>,
}

impl MockNotifications {
    pub async fn snapshot(&self) -> Vec<Notice> {
        self.notices.lock().await.clone()
    }
}

#[async_trait]
impl NotificationSink for MockNotifications {
    async fn add_error(&self, message: &str) {
        self.notices.lock().await.push(Notice::error(message));
    }

    async fn add_success(&self, message: &str) {
        self.notices.lock().await.push(Notice::success(message));
    }
}
