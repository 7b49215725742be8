use std::time::Duration;

use autologin_adapters::config::{AutologinSettings, defaults};
use autologin_adapters::persistence::{
    InMemoryCartStore, InMemoryCustomerStore, InMemorySessionStore,
};
use autologin_core::{CartItem, Customer, CustomerId, Email, Password, ResetToken};
use autologin_service::{AutologinService, tracing::init_tracing};
use color_eyre::eyre::Result;
use secrecy::Secret;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = AutologinSettings::load()?;

    let customers = InMemoryCustomerStore::new(
        settings.account.password_policy(),
        settings.account.reset_token_ttl(),
    );
    let carts = InMemoryCartStore::new();
    seed_demo_data(&customers, &carts).await?;

    let sessions = InMemorySessionStore::with_idle_ttl(settings.session.idle_ttl());
    sessions.spawn_eviction(Duration::from_secs(
        defaults::SESSION_EVICTION_PERIOD_IN_SECONDS,
    ));

    let service = AutologinService::new(
        customers.clone(),
        customers,
        carts,
        sessions,
        settings.clone(),
    );

    let listener = tokio::net::TcpListener::bind(&settings.application.address).await?;
    service.run_standalone(listener).await?;

    Ok(())
}

/// One customer with a pending reset token and a filled cart, so the flow can be tried
/// out by hand.
async fn seed_demo_data(customers: &InMemoryCustomerStore, carts: &InMemoryCartStore) -> Result<()> {
    let id = CustomerId::new(1);
    let email = Email::try_from("roni_cost@example.com")?;
    let password = Password::try_from(Secret::new("roni_cost3@example.com".to_string()))?;
    customers
        .add_customer(Customer::new(id, email), &password)
        .await?;

    let token = ResetToken::new(uuid::Uuid::new_v4().simple().to_string());
    customers.issue_reset_token(id, token.clone()).await?;
    carts.add_item(id, CartItem::new("24-MB01", 1));

    tracing::info!(customer_id = %id, token = %token, "Seeded demo customer");
    Ok(())
}
