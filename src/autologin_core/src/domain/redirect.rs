use super::reset_token::ResetToken;

/// Where the customer is sent once a reset request has been handled.
///
/// Targets are symbolic; the adapter layer maps them to concrete paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectTarget {
    /// Back to the create-password form, with the submitted token re-attached
    CreatePassword { token: ResetToken },
    /// The forgot-password form, used when a reset link is no longer valid
    ForgotPassword,
    /// The cart page
    Cart,
    /// The account dashboard (default landing page)
    Dashboard,
}

impl RedirectTarget {
    pub fn create_password(token: &ResetToken) -> Self {
        Self::CreatePassword {
            token: token.clone(),
        }
    }
}
