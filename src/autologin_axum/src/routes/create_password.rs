//! Axum-specific create password route.

use autologin_adapters::handlers;
use autologin_core::{AccountService, ResetToken};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Response;
use axum_extra::extract::CookieJar;

use crate::adapters::response_builder;
use crate::routes::reset_password_post::{TokenQuery, token_or_empty};
use crate::state::AppState;

/// Axum create password route, the target of the reset link.
#[tracing::instrument(name = "Create Password", skip_all)]
pub async fn create_password<A, D, C>(
    State(state): State<AppState<A, D, C>>,
    query: Result<Query<TokenQuery>, QueryRejection>,
    jar: CookieJar,
) -> Response
where
    A: AccountService + Clone + 'static,
    D: Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
{
    let query = token_or_empty(query);
    let session = state.session(&jar);

    handlers::handle_create_password(
        state.account_service.clone(),
        session,
        ResetToken::from(query.token),
        &state.settings,
        response_builder(),
    )
    .await
}
