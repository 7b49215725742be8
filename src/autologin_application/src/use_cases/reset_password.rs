use std::sync::Arc;

use autologin_core::{
    AccountService, AccountServiceError, CartService, CartServiceError, CredentialsValidator,
    Customer, CustomerDirectory, CustomerDirectoryError, FieldError, NoopCredentialsValidator,
    NotificationSink, Password, RedirectTarget, ResetToken, SessionStore, SessionStoreError,
};
use secrecy::{ExposeSecret, Secret};

use crate::messages;

/// Field the customer directory is searched on
const RESET_TOKEN_FIELD: &str = "rp_token";

/// Data submitted to complete a password reset
#[derive(Debug)]
pub struct ResetPasswordRequest {
    /// Token from the query string
    pub token: ResetToken,
    pub password: Secret<String>,
    pub password_confirmation: Secret<String>,
}

/// Error types for the reset password use case
#[derive(Debug, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("{}", messages::PASSWORD_MISMATCH)]
    PasswordMismatch,
    #[error("{}", messages::EMPTY_PASSWORD)]
    EmptyPassword,
    /// More than one customer holds the token
    #[error("{}", messages::RESET_TOKEN_EXPIRED)]
    TokenAmbiguous,
    #[error("No such entity with {field} = {value}")]
    CustomerNotFound { field: &'static str, value: String },
    #[error("{message}")]
    InvalidInput {
        message: String,
        errors: Vec<FieldError>,
    },
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ResetPasswordError {
    /// Messages shown to the customer for this failure, in display order.
    pub fn user_messages(&self) -> Vec<String> {
        match self {
            Self::PasswordMismatch | Self::EmptyPassword => vec![self.to_string()],
            Self::InvalidInput { message, errors } => std::iter::once(message.clone())
                .chain(errors.iter().map(|e| e.message.clone()))
                .collect(),
            Self::TokenAmbiguous | Self::CustomerNotFound { .. } | Self::Unexpected(_) => {
                vec![messages::SAVE_FAILED.to_string()]
            }
        }
    }
}

impl From<AccountServiceError> for ResetPasswordError {
    fn from(error: AccountServiceError) -> Self {
        match error {
            AccountServiceError::InvalidInput { message, errors } => {
                Self::InvalidInput { message, errors }
            }
            other => Self::Unexpected(other.to_string()),
        }
    }
}

impl From<CustomerDirectoryError> for ResetPasswordError {
    fn from(error: CustomerDirectoryError) -> Self {
        Self::Unexpected(error.to_string())
    }
}

impl From<SessionStoreError> for ResetPasswordError {
    fn from(error: SessionStoreError) -> Self {
        Self::Unexpected(error.to_string())
    }
}

impl From<CartServiceError> for ResetPasswordError {
    fn from(error: CartServiceError) -> Self {
        Self::Unexpected(error.to_string())
    }
}

/// Optional collaborators of the reset password use case
#[derive(Clone, Default)]
pub struct ResetPasswordConfig {
    /// Extra credential checks; an inert validator is used when unset
    pub credentials_validator: Option<Arc<dyn CredentialsValidator>>,
}

/// Reset password use case - completes a password reset and logs the customer in
///
/// The session and notification sink are scoped to the request being handled.
pub struct ResetPasswordUseCase<A, D, S, C, N>
where
    A: AccountService,
    D: CustomerDirectory,
    S: SessionStore,
    C: CartService,
    N: NotificationSink,
{
    account_service: A,
    customer_directory: D,
    session: S,
    cart_service: C,
    notifications: N,
    credentials_validator: Arc<dyn CredentialsValidator>,
}

impl<A, D, S, C, N> ResetPasswordUseCase<A, D, S, C, N>
where
    A: AccountService,
    D: CustomerDirectory,
    S: SessionStore,
    C: CartService,
    N: NotificationSink,
{
    pub fn new(
        account_service: A,
        customer_directory: D,
        session: S,
        cart_service: C,
        notifications: N,
        config: ResetPasswordConfig,
    ) -> Self {
        Self {
            account_service,
            customer_directory,
            session,
            cart_service,
            notifications,
            credentials_validator: config
                .credentials_validator
                .unwrap_or_else(|| Arc::new(NoopCredentialsValidator)),
        }
    }

    /// Execute the reset password use case
    ///
    /// Never fails: every error is reported to the customer through the notification sink
    /// and turned into a redirect back to the create-password form.
    #[tracing::instrument(name = "ResetPasswordUseCase::execute", skip_all)]
    pub async fn execute(&self, request: ResetPasswordRequest) -> RedirectTarget {
        let ResetPasswordRequest {
            token,
            password,
            password_confirmation,
        } = request;

        let password = match validate_new_password(password, &password_confirmation) {
            Ok(password) => password,
            Err(e) => {
                tracing::debug!(error = %e, "Rejected new password input");
                self.report(&e).await;
                return RedirectTarget::create_password(&token);
            }
        };

        match self.apply(&token, password).await {
            Ok(target) => target,
            Err(e) => {
                match &e {
                    ResetPasswordError::InvalidInput { .. } => {
                        tracing::info!(error = %e, "Password reset rejected by validation")
                    }
                    ResetPasswordError::TokenAmbiguous => {
                        tracing::error!("Reset token is shared by more than one customer")
                    }
                    _ => tracing::warn!(error = %e, "Password reset failed"),
                }
                self.report(&e).await;
                RedirectTarget::create_password(&token)
            }
        }
    }

    /// Resolve the single customer holding `token`.
    #[tracing::instrument(name = "ResetPasswordUseCase::match_customer_by_token", skip_all)]
    pub async fn match_customer_by_token(
        &self,
        token: &ResetToken,
    ) -> Result<Customer, ResetPasswordError> {
        let found = self.customer_directory.find_by_reset_token(token, 1).await?;

        if found.total_count > 1 {
            return Err(ResetPasswordError::TokenAmbiguous);
        }
        if found.total_count == 0 {
            return Err(ResetPasswordError::CustomerNotFound {
                field: RESET_TOKEN_FIELD,
                value: token.to_string(),
            });
        }

        found.items.into_iter().next().ok_or_else(|| {
            ResetPasswordError::Unexpected("Directory reported a match but returned none".into())
        })
    }

    async fn apply(
        &self,
        token: &ResetToken,
        password: Password,
    ) -> Result<RedirectTarget, ResetPasswordError> {
        let customer = self.match_customer_by_token(token).await?;

        // Token validity is reported ahead of credential checks
        self.account_service.validate_reset_token(token).await?;
        self.credentials_validator
            .check_password_different_from_email(customer.email(), &password)?;
        self.account_service
            .reset_password(customer.email(), token, password)
            .await?;

        self.session.clear_reset_token().await?;
        self.session.start().await?;
        self.session.set_authenticated_customer(&customer).await?;
        tracing::info!(customer_id = %customer.id(), "Customer logged in after password reset");

        let target = match self.cart_service.get_cart_for_customer(customer.id()).await {
            Ok(cart) if cart.has_items() => RedirectTarget::Cart,
            Ok(_) | Err(CartServiceError::CartNotFound(_)) => RedirectTarget::Dashboard,
            Err(e) => return Err(e.into()),
        };

        self.notifications
            .add_success(messages::PASSWORD_UPDATED)
            .await;
        Ok(target)
    }

    async fn report(&self, error: &ResetPasswordError) {
        for message in error.user_messages() {
            self.notifications.add_error(&message).await;
        }
    }
}

/// Mismatch is plain string inequality; emptiness is counted in characters.
fn validate_new_password(
    password: Secret<String>,
    confirmation: &Secret<String>,
) -> Result<Password, ResetPasswordError> {
    if password.expose_secret() != confirmation.expose_secret() {
        return Err(ResetPasswordError::PasswordMismatch);
    }
    Password::try_from(password).map_err(|_| ResetPasswordError::EmptyPassword)
}
