pub mod env {
    /// Prefix of environment variables overriding settings, e.g. `AUTOLOGIN__SESSION__COOKIE_NAME`
    pub const SETTINGS_ENV_PREFIX: &str = "AUTOLOGIN";
    pub const SETTINGS_ENV_SEPARATOR: &str = "__";
    pub const SETTINGS_FILE: &str = "config/default";
}

pub mod defaults {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub const SESSION_COOKIE_NAME: &str = "autologin_session";
    pub const SESSION_IDLE_TTL_IN_MINUTES: i64 = 60;
    pub const SESSION_EVICTION_PERIOD_IN_SECONDS: u64 = 60;

    pub mod routes {
        pub const RESET_PASSWORD_POST: &str = "/customer/account/resetpasswordpost";
        pub const CREATE_PASSWORD: &str = "/customer/account/createpassword";
        pub const FORGOT_PASSWORD: &str = "/customer/account/forgotpassword";
        pub const CART: &str = "/checkout/cart";
        pub const DASHBOARD: &str = "/customer/account";
        pub const MESSAGES: &str = "/customer/section/messages";
    }

    pub mod account {
        pub const RESET_TOKEN_TTL_IN_MINUTES: i64 = 120;
        pub const MINIMUM_PASSWORD_LENGTH: usize = 8;
        pub const REQUIRED_CHARACTER_CLASSES: usize = 3;
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
