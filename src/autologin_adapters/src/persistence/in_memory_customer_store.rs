use std::collections::HashMap;
use std::sync::Arc;

use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use autologin_core::{
    AccountService, AccountServiceError, Customer, CustomerDirectory, CustomerDirectoryError,
    CustomerId, CustomerSearchResults, Email, Password, ResetToken,
};
use chrono::{DateTime, Duration, Utc};
use secrecy::ExposeSecret;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::credentials::PasswordPolicy;

#[derive(Debug, Error, PartialEq)]
pub enum CustomerStoreError {
    #[error("Customer already exists")]
    CustomerAlreadyExists,
    #[error("Customer not found")]
    CustomerNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

#[derive(Debug, Clone)]
struct CustomerRecord {
    customer: Customer,
    password_hash: String,
    reset_token: Option<ResetToken>,
    reset_token_created_at: Option<DateTime<Utc>>,
}

/// Customer records kept in memory.
///
/// Serves both as the customer directory and as the account service that owns password
/// hashes and reset tokens.
#[derive(Clone)]
pub struct InMemoryCustomerStore {
    records: Arc<RwLock<HashMap<CustomerId, CustomerRecord>>>,
    policy: PasswordPolicy,
    reset_token_ttl: Duration,
}

impl InMemoryCustomerStore {
    pub fn new(policy: PasswordPolicy, reset_token_ttl: Duration) -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            policy,
            reset_token_ttl,
        }
    }

    pub async fn add_customer(
        &self,
        customer: Customer,
        password: &Password,
    ) -> Result<(), CustomerStoreError> {
        let password_hash = hash_password(password)?;
        let mut records = self.records.write().await;

        if records.contains_key(&customer.id())
            || records.values().any(|r| r.customer.email() == customer.email())
        {
            return Err(CustomerStoreError::CustomerAlreadyExists);
        }

        records.insert(
            customer.id(),
            CustomerRecord {
                customer,
                password_hash,
                reset_token: None,
                reset_token_created_at: None,
            },
        );
        Ok(())
    }

    /// Store `token` as the customer's reset token, issued now.
    pub async fn issue_reset_token(
        &self,
        customer_id: CustomerId,
        token: ResetToken,
    ) -> Result<(), CustomerStoreError> {
        self.issue_reset_token_at(customer_id, token, Utc::now())
            .await
    }

    pub async fn issue_reset_token_at(
        &self,
        customer_id: CustomerId,
        token: ResetToken,
        created_at: DateTime<Utc>,
    ) -> Result<(), CustomerStoreError> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(&customer_id)
            .ok_or(CustomerStoreError::CustomerNotFound)?;

        record.reset_token = Some(token);
        record.reset_token_created_at = Some(created_at);
        Ok(())
    }

    pub async fn verify_password(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<bool, CustomerStoreError> {
        let records = self.records.read().await;
        let record = records
            .values()
            .find(|r| r.customer.email() == email)
            .ok_or(CustomerStoreError::CustomerNotFound)?;

        verify_password(password, &record.password_hash)
    }

    fn is_expired(&self, record: &CustomerRecord) -> bool {
        match record.reset_token_created_at {
            Some(created_at) => Utc::now() - created_at > self.reset_token_ttl,
            None => true,
        }
    }
}

#[async_trait::async_trait]
impl CustomerDirectory for InMemoryCustomerStore {
    async fn find_by_reset_token(
        &self,
        token: &ResetToken,
        page_size: usize,
    ) -> Result<CustomerSearchResults, CustomerDirectoryError> {
        let records = self.records.read().await;
        let mut matches: Vec<&CustomerRecord> = records
            .values()
            .filter(|r| r.reset_token.as_ref() == Some(token))
            .collect();
        matches.sort_by_key(|r| r.customer.id());

        Ok(CustomerSearchResults {
            total_count: matches.len(),
            items: matches
                .into_iter()
                .take(page_size)
                .map(|r| r.customer.clone())
                .collect(),
        })
    }
}

#[async_trait::async_trait]
impl AccountService for InMemoryCustomerStore {
    async fn validate_reset_token(&self, token: &ResetToken) -> Result<(), AccountServiceError> {
        if token.as_str().is_empty() {
            return Err(AccountServiceError::invalid_input(
                "\"resetPasswordLinkToken\" is required. Enter and try again.",
            ));
        }

        let records = self.records.read().await;
        let mut matches = records
            .values()
            .filter(|r| r.reset_token.as_ref() == Some(token));

        let record = matches.next().ok_or(AccountServiceError::TokenMismatch)?;
        if matches.next().is_some() || self.is_expired(record) {
            return Err(AccountServiceError::TokenExpired);
        }
        Ok(())
    }

    #[tracing::instrument(name = "InMemoryCustomerStore::reset_password", skip_all)]
    async fn reset_password(
        &self,
        email: &Email,
        token: &ResetToken,
        new_password: Password,
    ) -> Result<(), AccountServiceError> {
        let mut records = self.records.write().await;
        let record = records
            .values_mut()
            .find(|r| r.customer.email() == email)
            .ok_or_else(|| {
                AccountServiceError::UnexpectedError("No such entity with email".to_string())
            })?;

        if record.reset_token.as_ref() != Some(token) {
            return Err(AccountServiceError::TokenMismatch);
        }
        if self.is_expired(record) {
            return Err(AccountServiceError::TokenExpired);
        }
        self.policy.check(&new_password)?;

        record.password_hash = hash_password(&new_password)
            .map_err(|e| AccountServiceError::UnexpectedError(e.to_string()))?;
        record.reset_token = None;
        record.reset_token_created_at = None;
        Ok(())
    }
}

fn hash_password(password: &Password) -> Result<String, CustomerStoreError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| CustomerStoreError::UnexpectedError(format!("Failed to hash password: {e}")))
}

fn verify_password(password: &Password, hash: &str) -> Result<bool, CustomerStoreError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| CustomerStoreError::UnexpectedError(format!("Invalid password hash: {e}")))?;

    match Argon2::default().verify_password(
        password.as_ref().expose_secret().as_bytes(),
        &parsed_hash,
    ) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(CustomerStoreError::UnexpectedError(e.to_string())),
    }
}
