//! Framework-agnostic request handlers.
//!
//! These handlers sequence the application use cases and build the HTTP response through
//! the `ResponseBuilder` trait. Framework-specific routes extract data from requests,
//! resolve the session, call these handlers and return the built response.

pub mod create_password;
pub mod messages;
pub mod reset_password;
pub mod session_cookie;

pub use create_password::handle_create_password;
pub use messages::handle_messages;
pub use reset_password::handle_reset_password;
pub use session_cookie::create_session_cookie;

#[cfg(test)]
mod test_support;
