//! Framework-agnostic flash messages handler.

use autologin_core::{ResponseBuilder, ResponseHelpers};

use crate::persistence::{InMemorySessionStore, SessionId};

/// Drain the session's flash messages and return them as JSON.
///
/// Requests without a session get an empty list.
pub fn handle_messages<B>(
    sessions: &InMemorySessionStore,
    session_id: Option<SessionId>,
    builder: B,
) -> B::Response
where
    B: ResponseBuilder,
{
    let messages = session_id
        .map(|id| sessions.take_notices(&id))
        .unwrap_or_default();

    builder.ok_json(serde_json::json!({ "messages": messages }))
}
