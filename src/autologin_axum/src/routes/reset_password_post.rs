//! Axum-specific reset password route.

use autologin_adapters::handlers;
use autologin_application::ResetPasswordRequest;
use autologin_core::{AccountService, CartService, CustomerDirectory, ResetToken};
use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Form, Query, State};
use axum::response::Response;
use axum_extra::extract::CookieJar;
use secrecy::Secret;
use serde::Deserialize;

use crate::adapters::response_builder;
use crate::state::AppState;

/// Query string of the reset form submission.
#[derive(Debug, Default, Deserialize)]
pub struct TokenQuery {
    #[serde(default)]
    pub token: String,
}

/// Submitted reset form. Missing fields are read as empty strings.
#[derive(Debug, Deserialize)]
pub struct ResetPasswordForm {
    #[serde(default = "empty_secret")]
    pub password: Secret<String>,
    #[serde(default = "empty_secret")]
    pub password_confirmation: Secret<String>,
}

impl Default for ResetPasswordForm {
    fn default() -> Self {
        Self {
            password: empty_secret(),
            password_confirmation: empty_secret(),
        }
    }
}

fn empty_secret() -> Secret<String> {
    Secret::new(String::new())
}

/// The query's token, or an empty one when the query string cannot be read.
pub(crate) fn token_or_empty(
    query: Result<Query<TokenQuery>, QueryRejection>,
) -> TokenQuery {
    query.map(|Query(query)| query).unwrap_or_else(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable query string, using an empty token");
        TokenQuery::default()
    })
}

/// Axum reset password route.
///
/// Always answers with a redirect; the outcome is reported through flash messages. A
/// body or query string that cannot be decoded is read as empty fields.
#[tracing::instrument(name = "Reset Password", skip_all)]
pub async fn reset_password_post<A, D, C>(
    State(state): State<AppState<A, D, C>>,
    query: Result<Query<TokenQuery>, QueryRejection>,
    jar: CookieJar,
    form: Result<Form<ResetPasswordForm>, FormRejection>,
) -> Response
where
    A: AccountService + Clone + 'static,
    D: CustomerDirectory + Clone + 'static,
    C: CartService + Clone + 'static,
{
    let query = token_or_empty(query);
    let form = form.map(|Form(form)| form).unwrap_or_else(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable reset form, using empty fields");
        ResetPasswordForm::default()
    });

    let session = state.session(&jar);
    let request = ResetPasswordRequest {
        token: ResetToken::from(query.token),
        password: form.password,
        password_confirmation: form.password_confirmation,
    };

    handlers::handle_reset_password(
        state.account_service.clone(),
        state.customer_directory.clone(),
        state.cart_service.clone(),
        session,
        request,
        &state.settings,
        response_builder(),
    )
    .await
}
