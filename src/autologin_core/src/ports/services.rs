use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{email::Email, password::Password, reset_token::ResetToken};

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub message: String,
}

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccountServiceError {
    /// Input rejected by validation. `errors` holds the individual field failures.
    #[error("{message}")]
    InvalidInput {
        message: String,
        errors: Vec<FieldError>,
    },
    #[error("The password token is mismatched")]
    TokenMismatch,
    #[error("The password token is expired")]
    TokenExpired,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl AccountServiceError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            errors: Vec::new(),
        }
    }
}

/// Port trait for the account-management service
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Check that `token` is a live reset token for some customer.
    async fn validate_reset_token(&self, token: &ResetToken) -> Result<(), AccountServiceError>;

    /// Replace the customer's password. The token is re-validated and consumed.
    async fn reset_password(
        &self,
        email: &Email,
        token: &ResetToken,
        new_password: Password,
    ) -> Result<(), AccountServiceError>;
}

/// Port trait for user-visible flash messages
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn add_error(&self, message: &str);
    async fn add_success(&self, message: &str);
}

/// Extra credential checks run before a password change is handed to the account service.
pub trait CredentialsValidator: Send + Sync {
    fn check_password_different_from_email(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<(), AccountServiceError>;
}

/// Accepts every password.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCredentialsValidator;

impl CredentialsValidator for NoopCredentialsValidator {
    fn check_password_different_from_email(
        &self,
        _email: &Email,
        _password: &Password,
    ) -> Result<(), AccountServiceError> {
        Ok(())
    }
}
