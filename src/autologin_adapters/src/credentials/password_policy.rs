use autologin_core::{AccountServiceError, FieldError, Password};
use secrecy::ExposeSecret;

const MULTIPLE_FAILURES: &str = "One or more input exceptions have occurred.";

/// Strength rules applied by the account service when a password is replaced.
#[derive(Debug, Clone, Copy)]
pub struct PasswordPolicy {
    pub minimum_length: usize,
    /// How many of lower case, upper case, digits and special characters must appear
    pub required_character_classes: usize,
}

impl PasswordPolicy {
    pub fn new(minimum_length: usize, required_character_classes: usize) -> Self {
        Self {
            minimum_length,
            required_character_classes,
        }
    }

    /// Check `password` against every rule.
    ///
    /// A single violation is reported as the top-level message. Several violations are
    /// grouped under a generic message with one field error each.
    pub fn check(&self, password: &Password) -> Result<(), AccountServiceError> {
        let raw = password.as_ref().expose_secret();
        let mut violations = Vec::new();

        if raw.starts_with(' ') || raw.ends_with(' ') {
            violations.push(
                "The password can't begin or end with a space. Verify the password and try again."
                    .to_string(),
            );
        }
        if password.char_count() < self.minimum_length {
            violations.push(format!(
                "The password needs at least {} characters. Create a new password and try again.",
                self.minimum_length
            ));
        }
        if character_classes(raw) < self.required_character_classes {
            violations.push(format!(
                "Minimum of different classes of characters in password is {}. Classes of characters: Lower Case, Upper Case, Digits, Special Characters.",
                self.required_character_classes
            ));
        }

        match violations.len() {
            0 => Ok(()),
            1 => Err(AccountServiceError::invalid_input(violations.remove(0))),
            _ => Err(AccountServiceError::InvalidInput {
                message: MULTIPLE_FAILURES.to_string(),
                errors: violations.into_iter().map(FieldError::new).collect(),
            }),
        }
    }
}

fn character_classes(raw: &str) -> usize {
    let lower = raw.chars().any(|c| c.is_lowercase());
    let upper = raw.chars().any(|c| c.is_uppercase());
    let digit = raw.chars().any(|c| c.is_numeric());
    let special = raw.chars().any(|c| !c.is_alphanumeric());

    [lower, upper, digit, special].into_iter().filter(|&b| b).count()
}
