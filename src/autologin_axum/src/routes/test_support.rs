use autologin_adapters::config::AutologinSettings;
use autologin_adapters::persistence::{
    InMemoryCartStore, InMemoryCustomerStore, InMemorySessionStore, SessionId,
};
use autologin_core::{Customer, CustomerId, Email, Password, ResetToken};
use axum::response::Response;
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::Cookie;
use secrecy::Secret;

use crate::state::AppState;

pub const TOKEN: &str = "reset-me";

pub type TestState = AppState<InMemoryCustomerStore, InMemoryCustomerStore, InMemoryCartStore>;

pub async fn state() -> TestState {
    let settings = AutologinSettings::default();
    let customers = InMemoryCustomerStore::new(
        settings.account.password_policy(),
        settings.account.reset_token_ttl(),
    );
    customers
        .add_customer(
            Customer::new(CustomerId::new(1), Email::try_from("sam@example.com").unwrap()),
            &Password::try_from(Secret::new("Old-Pass-123".to_string())).unwrap(),
        )
        .await
        .unwrap();
    customers
        .issue_reset_token(CustomerId::new(1), ResetToken::new(TOKEN))
        .await
        .unwrap();

    AppState::new(
        customers.clone(),
        customers,
        InMemoryCartStore::new(),
        InMemorySessionStore::new(),
        settings,
    )
}

pub fn cookie_jar(state: &TestState, id: SessionId) -> CookieJar {
    CookieJar::new().add(Cookie::new(
        state.settings.session.cookie_name.clone(),
        id.to_string(),
    ))
}

pub fn location(resp: &Response) -> Option<&str> {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
}
