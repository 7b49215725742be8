use std::sync::Arc;

use autologin_application::ResetPasswordConfig;
use autologin_core::{CredentialsValidator, RedirectTarget};
use chrono::Duration;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use super::constants::{defaults, env};
use crate::credentials::{EmailDifferentCredentialsValidator, PasswordPolicy};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutologinSettings {
    pub application: ApplicationSettings,
    pub session: SessionSettings,
    pub routes: RouteSettings,
    pub account: AccountSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationSettings {
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSettings {
    pub cookie_name: String,
    pub secure_cookie: bool,
    pub idle_ttl_in_minutes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteSettings {
    pub reset_password_post: String,
    pub create_password: String,
    pub forgot_password: String,
    pub cart: String,
    pub dashboard: String,
    pub messages: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSettings {
    pub reset_token_ttl_in_minutes: i64,
    pub minimum_password_length: usize,
    pub required_character_classes: usize,
    pub check_password_different_from_email: bool,
}

impl AutologinSettings {
    /// Load settings: built-in defaults, then `config/default.json` if present, then
    /// `AUTOLOGIN__*` environment variables (a `.env` file is read first).
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::with_name(env::SETTINGS_FILE).required(false))
            .add_source(
                Environment::with_prefix(env::SETTINGS_ENV_PREFIX)
                    .prefix_separator(env::SETTINGS_ENV_SEPARATOR)
                    .separator(env::SETTINGS_ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

impl Default for AutologinSettings {
    fn default() -> Self {
        Self {
            application: ApplicationSettings {
                address: defaults::APP_ADDRESS.to_string(),
            },
            session: SessionSettings {
                cookie_name: defaults::SESSION_COOKIE_NAME.to_string(),
                secure_cookie: true,
                idle_ttl_in_minutes: defaults::SESSION_IDLE_TTL_IN_MINUTES,
            },
            routes: RouteSettings {
                reset_password_post: defaults::routes::RESET_PASSWORD_POST.to_string(),
                create_password: defaults::routes::CREATE_PASSWORD.to_string(),
                forgot_password: defaults::routes::FORGOT_PASSWORD.to_string(),
                cart: defaults::routes::CART.to_string(),
                dashboard: defaults::routes::DASHBOARD.to_string(),
                messages: defaults::routes::MESSAGES.to_string(),
            },
            account: AccountSettings {
                reset_token_ttl_in_minutes: defaults::account::RESET_TOKEN_TTL_IN_MINUTES,
                minimum_password_length: defaults::account::MINIMUM_PASSWORD_LENGTH,
                required_character_classes: defaults::account::REQUIRED_CHARACTER_CLASSES,
                check_password_different_from_email: true,
            },
        }
    }
}

impl SessionSettings {
    pub fn idle_ttl(&self) -> Duration {
        Duration::minutes(self.idle_ttl_in_minutes)
    }
}

impl AccountSettings {
    pub fn password_policy(&self) -> PasswordPolicy {
        PasswordPolicy::new(
            self.minimum_password_length,
            self.required_character_classes,
        )
    }

    pub fn reset_token_ttl(&self) -> Duration {
        Duration::minutes(self.reset_token_ttl_in_minutes)
    }

    pub fn reset_password_config(&self) -> ResetPasswordConfig {
        ResetPasswordConfig {
            credentials_validator: self
                .check_password_different_from_email
                .then(|| {
                    Arc::new(EmailDifferentCredentialsValidator) as Arc<dyn CredentialsValidator>
                }),
        }
    }
}

impl RouteSettings {
    /// The `Location` a redirect target resolves to.
    pub fn location(&self, target: &RedirectTarget) -> String {
        match target {
            RedirectTarget::CreatePassword { token } => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("token", token.as_str())
                    .finish();
                format!("{}?{}", self.create_password, query)
            }
            RedirectTarget::ForgotPassword => self.forgot_password.clone(),
            RedirectTarget::Cart => self.cart.clone(),
            RedirectTarget::Dashboard => self.dashboard.clone(),
        }
    }
}
