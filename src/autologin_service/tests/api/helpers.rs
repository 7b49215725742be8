use autologin_adapters::config::{AutologinSettings, test};
use autologin_adapters::persistence::{
    InMemoryCartStore, InMemoryCustomerStore, InMemorySessionStore,
};
use autologin_core::{CartItem, Customer, CustomerId, Email, Password, ResetToken};
use autologin_service::AutologinService;
use reqwest::redirect::Policy;
use secrecy::Secret;
use serde::Deserialize;

pub const EMAIL: &str = "veronica@example.com";
pub const TOKEN: &str = "0b9e4f1c7a";

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub customers: InMemoryCustomerStore,
    pub carts: InMemoryCartStore,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct Message {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
struct Messages {
    messages: Vec<Message>,
}

impl TestApp {
    pub async fn new() -> Self {
        let mut settings = AutologinSettings::default();
        settings.application.address = test::APP_ADDRESS.to_string();
        // Plain http on loopback
        settings.session.secure_cookie = false;

        let customers = InMemoryCustomerStore::new(
            settings.account.password_policy(),
            settings.account.reset_token_ttl(),
        );
        customers
            .add_customer(
                Customer::new(CustomerId::new(1), Email::try_from(EMAIL).unwrap()),
                &Password::try_from(Secret::new("Original-Pass-1".to_string())).unwrap(),
            )
            .await
            .unwrap();
        customers
            .issue_reset_token(CustomerId::new(1), ResetToken::new(TOKEN))
            .await
            .unwrap();
        let carts = InMemoryCartStore::new();

        let listener = tokio::net::TcpListener::bind(&settings.application.address)
            .await
            .expect("Failed to bind address");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let service = AutologinService::new(
            customers.clone(),
            customers.clone(),
            carts.clone(),
            InMemorySessionStore::new(),
            settings,
        );
        tokio::spawn(service.run_standalone(listener));

        let http_client = reqwest::Client::builder()
            .redirect(Policy::none())
            .cookie_store(true)
            .build()
            .unwrap();

        Self {
            address,
            http_client,
            customers,
            carts,
        }
    }

    pub fn add_cart_item(&self, sku: &str) {
        self.carts.add_item(CustomerId::new(1), CartItem::new(sku, 1));
    }

    pub async fn get_create_password(&self, token: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}/customer/account/createpassword", &self.address))
            .query(&[("token", token)])
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_reset_password(
        &self,
        token: &str,
        password: &str,
        confirmation: &str,
    ) -> reqwest::Response {
        self.http_client
            .post(format!(
                "{}/customer/account/resetpasswordpost",
                &self.address
            ))
            .query(&[("token", token)])
            .form(&[
                ("password", password),
                ("password_confirmation", confirmation),
            ])
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_reset_password_without_body(&self, token: &str) -> reqwest::Response {
        self.http_client
            .post(format!(
                "{}/customer/account/resetpasswordpost",
                &self.address
            ))
            .query(&[("token", token)])
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_messages(&self) -> Vec<Message> {
        self.http_client
            .get(format!("{}/customer/section/messages", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
            .json::<Messages>()
            .await
            .expect("Could not deserialize response body")
            .messages
    }

    pub async fn password_is(&self, password: &str) -> bool {
        self.customers
            .verify_password(
                &Email::try_from(EMAIL).unwrap(),
                &Password::try_from(Secret::new(password.to_string())).unwrap(),
            )
            .await
            .unwrap()
    }
}

pub fn location(response: &reqwest::Response) -> &str {
    response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

pub fn error(text: &str) -> Message {
    Message {
        kind: "error".to_string(),
        text: text.to_string(),
    }
}

pub fn success(text: &str) -> Message {
    Message {
        kind: "success".to_string(),
        text: text.to_string(),
    }
}
