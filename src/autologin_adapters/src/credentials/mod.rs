pub mod email_different_validator;
pub mod password_policy;

pub use email_different_validator::EmailDifferentCredentialsValidator;
pub use password_policy::PasswordPolicy;
