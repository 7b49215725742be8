//! Framework-agnostic reset password handler.
//!
//! Completes a password reset, logs the customer in and redirects to the cart or the
//! account dashboard.

use autologin_application::{ResetPasswordRequest, ResetPasswordUseCase};
use autologin_core::{
    AccountService, CartService, CustomerDirectory, ResponseBuilder, ResponseHelpers,
};

use crate::config::AutologinSettings;
use crate::handlers::session_cookie::create_session_cookie;
use crate::persistence::SessionHandle;

/// Framework-agnostic reset password handler.
///
/// # Type Parameters
/// * `A` - Account service applying the new password
/// * `D` - Customer directory resolving the reset token
/// * `C` - Cart service deciding the landing page
/// * `B` - Response builder for the framework being used
///
/// # Arguments
/// * `session` - The request's session; also receives the flash messages
/// * `request` - Token and submitted passwords
/// * `settings` - Route paths, session cookie and account settings
/// * `builder` - HTTP response builder
///
/// # Returns
/// A `302 Found` response. Failures never escape: they become flash messages and a
/// redirect back to the create-password form.
pub async fn handle_reset_password<A, D, C, B>(
    account_service: A,
    customer_directory: D,
    cart_service: C,
    session: SessionHandle,
    request: ResetPasswordRequest,
    settings: &AutologinSettings,
    builder: B,
) -> B::Response
where
    A: AccountService,
    D: CustomerDirectory,
    C: CartService,
    B: ResponseBuilder,
{
    let use_case = ResetPasswordUseCase::new(
        account_service,
        customer_directory,
        session.clone(),
        cart_service,
        session.clone(),
        settings.account.reset_password_config(),
    );
    let target = use_case.execute(request).await;

    // The session id may have been regenerated on login
    let cookie = create_session_cookie(session.id().await, &settings.session);

    builder
        .cookie(&cookie.to_string())
        .found(&settings.routes.location(&target))
}
