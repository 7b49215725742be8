use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PasswordError {
    #[error("Password must not be empty")]
    Empty,
}

/// A new password submitted by a customer.
///
/// The only rule enforced here is that it contains at least one character; length is counted
/// in characters rather than bytes. Strength policy belongs to the account service.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    /// Number of characters (not bytes) in the password.
    pub fn char_count(&self) -> usize {
        self.0.expose_secret().chars().count()
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = PasswordError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().chars().count() == 0 {
            return Err(PasswordError::Empty);
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
