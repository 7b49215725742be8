pub mod create_password;
pub mod reset_password;
