pub mod cart;
pub mod customer;
pub mod email;
pub mod notice;
pub mod password;
pub mod redirect;
pub mod reset_token;
