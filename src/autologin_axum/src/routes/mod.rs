//! Axum-specific route handlers.
//!
//! These routes use Axum's extractors to get data from requests, resolve the session from
//! its cookie, call the framework-agnostic handlers and return the built responses.

pub mod create_password;
pub mod messages;
pub mod reset_password_post;

pub use create_password::create_password;
pub use messages::messages;
pub use reset_password_post::reset_password_post;

#[cfg(test)]
mod test_support;
