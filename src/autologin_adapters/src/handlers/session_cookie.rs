use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::config::SessionSettings;
use crate::persistence::SessionId;

// Create the cookie carrying the session id
pub fn create_session_cookie(id: SessionId, settings: &SessionSettings) -> Cookie<'static> {
    Cookie::build((settings.cookie_name.clone(), id.to_string()))
        .path("/")
        .http_only(true)
        .secure(settings.secure_cookie)
        .same_site(SameSite::Lax)
        .build()
}
