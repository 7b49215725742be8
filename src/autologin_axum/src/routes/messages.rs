//! Axum-specific flash messages route.

use autologin_adapters::handlers;
use axum::extract::State;
use axum::response::Response;
use axum_extra::extract::CookieJar;

use crate::adapters::response_builder;
use crate::state::AppState;

#[tracing::instrument(name = "Messages", skip_all)]
pub async fn messages<A, D, C>(State(state): State<AppState<A, D, C>>, jar: CookieJar) -> Response
where
    A: Clone + Send + Sync + 'static,
    D: Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
{
    handlers::handle_messages(&state.sessions, state.session_id(&jar), response_builder())
}
