//! Axum integration for the password reset flow.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  autologin_core: ResponseBuilder trait   │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  autologin_axum: Axum implementations    │
//! │  - AxumResponseBuilder                   │
//! │  - AppState shared by the routes         │
//! │  - Axum route handlers                   │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use autologin_axum::{AppState, routes};
//!
//! let app = Router::new()
//!     .route(
//!         "/customer/account/resetpasswordpost",
//!         post(routes::reset_password_post::<Store, Store, Carts>),
//!     )
//!     .with_state(state);
//! ```

pub mod adapters;
pub mod routes;
pub mod state;

pub use adapters::{AxumResponseBuilder, response_builder};
pub use state::AppState;
