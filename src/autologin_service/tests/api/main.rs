mod create_password;
mod helpers;
mod reset_password;
