use autologin_core::{
    AccountService, AccountServiceError, NotificationSink, RedirectTarget, ResetToken,
    SessionStore, SessionStoreError,
};

use crate::messages;

/// Outcome of opening the create-password page
#[derive(Debug, PartialEq)]
pub enum CreatePasswordOutcome {
    /// The token is live; show the form for it
    ShowForm(ResetToken),
    Redirect(RedirectTarget),
}

/// Error types for create password use case
#[derive(Debug, thiserror::Error)]
pub enum CreatePasswordError {
    #[error("Account service error: {0}")]
    AccountServiceError(#[from] AccountServiceError),
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
}

/// Create password use case - validates the reset link the customer followed
///
/// A token from the link is remembered in the session; when the link carries no token
/// the one already in the session is used.
pub struct CreatePasswordUseCase<A, S, N>
where
    A: AccountService,
    S: SessionStore,
    N: NotificationSink,
{
    account_service: A,
    session: S,
    notifications: N,
}

impl<A, S, N> CreatePasswordUseCase<A, S, N>
where
    A: AccountService,
    S: SessionStore,
    N: NotificationSink,
{
    pub fn new(account_service: A, session: S, notifications: N) -> Self {
        Self {
            account_service,
            session,
            notifications,
        }
    }

    #[tracing::instrument(name = "CreatePasswordUseCase::execute", skip_all)]
    pub async fn execute(&self, token: ResetToken) -> CreatePasswordOutcome {
        match self.open(token).await {
            Ok(token) => CreatePasswordOutcome::ShowForm(token),
            Err(e) => {
                tracing::info!(error = %e, "Reset link rejected");
                self.notifications
                    .add_error(messages::RESET_LINK_EXPIRED)
                    .await;
                CreatePasswordOutcome::Redirect(RedirectTarget::ForgotPassword)
            }
        }
    }

    async fn open(&self, token: ResetToken) -> Result<ResetToken, CreatePasswordError> {
        let is_direct_link = !token.as_str().is_empty();
        let token = if is_direct_link {
            token
        } else {
            self.session.reset_token().await?.unwrap_or_default()
        };

        self.account_service.validate_reset_token(&token).await?;

        if is_direct_link {
            self.session.set_reset_token(&token).await?;
        }
        Ok(token)
    }
}
