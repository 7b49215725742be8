use autologin_core::{AccountServiceError, CredentialsValidator, Email, Password};
use secrecy::ExposeSecret;

const PASSWORD_EQUALS_EMAIL: &str =
    "The password can't be the same as the email address. Create a new password and try again.";

/// Rejects a new password that is the customer's email address, ignoring case.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailDifferentCredentialsValidator;

impl CredentialsValidator for EmailDifferentCredentialsValidator {
    fn check_password_different_from_email(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<(), AccountServiceError> {
        let email = email.as_ref().expose_secret();
        let password = password.as_ref().expose_secret();

        if email.to_lowercase() == password.to_lowercase() {
            return Err(AccountServiceError::invalid_input(PASSWORD_EQUALS_EMAIL));
        }
        Ok(())
    }
}
