//! Framework-agnostic create password handler.
//!
//! Entry point of the reset link sent to the customer.

use autologin_application::{CreatePasswordOutcome, CreatePasswordUseCase};
use autologin_core::{AccountService, ResetToken, ResponseBuilder, ResponseHelpers};

use crate::config::AutologinSettings;
use crate::handlers::session_cookie::create_session_cookie;
use crate::persistence::SessionHandle;

/// Validates the reset link. A live token is remembered in the session and echoed back
/// as JSON; an expired one redirects to the forgot-password page.
pub async fn handle_create_password<A, B>(
    account_service: A,
    session: SessionHandle,
    token: ResetToken,
    settings: &AutologinSettings,
    builder: B,
) -> B::Response
where
    A: AccountService,
    B: ResponseBuilder,
{
    let use_case = CreatePasswordUseCase::new(account_service, session.clone(), session.clone());
    let outcome = use_case.execute(token).await;

    let cookie = create_session_cookie(session.id().await, &settings.session);
    let builder = builder.cookie(&cookie.to_string());

    match outcome {
        CreatePasswordOutcome::ShowForm(token) => builder.ok_json(serde_json::json!({
            "token": token.as_str(),
        })),
        CreatePasswordOutcome::Redirect(target) => builder.found(&settings.routes.location(&target)),
    }
}
