use std::sync::Arc;

use autologin_adapters::config::AutologinSettings;
use autologin_adapters::persistence::{InMemorySessionStore, SessionHandle, SessionId};
use axum_extra::extract::CookieJar;

/// State shared by the password reset routes.
///
/// Stores implement Clone via an internal `Arc`, so cloning the state per request is cheap.
pub struct AppState<A, D, C> {
    pub account_service: A,
    pub customer_directory: D,
    pub cart_service: C,
    pub sessions: InMemorySessionStore,
    pub settings: Arc<AutologinSettings>,
}

impl<A, D, C> AppState<A, D, C> {
    pub fn new(
        account_service: A,
        customer_directory: D,
        cart_service: C,
        sessions: InMemorySessionStore,
        settings: AutologinSettings,
    ) -> Self {
        Self {
            account_service,
            customer_directory,
            cart_service,
            sessions,
            settings: Arc::new(settings),
        }
    }

    /// The session id carried by the request's cookie, if it is a valid one.
    pub fn session_id(&self, jar: &CookieJar) -> Option<SessionId> {
        jar.get(&self.settings.session.cookie_name)
            .and_then(|cookie| SessionId::parse(cookie.value()))
    }

    /// The request's session, or a fresh one when the cookie is missing or invalid.
    pub fn session(&self, jar: &CookieJar) -> SessionHandle {
        let id = self.session_id(jar).unwrap_or_else(SessionId::generate);
        self.sessions.handle(id)
    }
}

impl<A: Clone, D: Clone, C: Clone> Clone for AppState<A, D, C> {
    fn clone(&self) -> Self {
        Self {
            account_service: self.account_service.clone(),
            customer_directory: self.customer_directory.clone(),
            cart_service: self.cart_service.clone(),
            sessions: self.sessions.clone(),
            settings: self.settings.clone(),
        }
    }
}
