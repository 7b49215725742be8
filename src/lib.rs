//! # Autologin - Password Reset With Automatic Login
//!
//! This is a facade crate that re-exports the public APIs of the password reset
//! components. Use this crate to get access to everything in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `ResetToken`, `Customer`, `Cart`, etc.
//! - **Ports**: `AccountService`, `CustomerDirectory`, `CartService`, `SessionStore`, ...
//! - **Use cases**: `ResetPasswordUseCase`, `CreatePasswordUseCase`
//! - **Adapters**: in-memory stores, settings and framework-agnostic handlers
//! - **Service**: `AutologinService` - The main entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use autologin_core::*;
}

pub use autologin_core::{
    Cart, CartItem, Customer, CustomerId, Email, Notice, NoticeKind, Password, RedirectTarget,
    ResetToken,
};

// ============================================================================
// Ports
// ============================================================================

pub use autologin_core::{
    AccountService, AccountServiceError, CartService, CartServiceError, CredentialsValidator,
    CustomerDirectory, CustomerDirectoryError, NotificationSink, SessionStore, SessionStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use autologin_application::*;
}

pub use autologin_application::{
    CreatePasswordUseCase, ResetPasswordConfig, ResetPasswordRequest, ResetPasswordUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Framework-agnostic handlers
    pub mod handlers {
        pub use autologin_adapters::handlers::*;
    }

    /// In-memory stores
    pub mod persistence {
        pub use autologin_adapters::persistence::*;
    }

    /// Password rules and credential checks
    pub mod credentials {
        pub use autologin_adapters::credentials::*;
    }

    /// Configuration
    pub mod config {
        pub use autologin_adapters::config::*;
    }

    /// Axum routes and response builder
    pub mod axum {
        pub use autologin_axum::*;
    }
}

pub use autologin_adapters::{
    config::AutologinSettings,
    persistence::{InMemoryCartStore, InMemoryCustomerStore, InMemorySessionStore},
};

// ============================================================================
// Service (Main Entry Point)
// ============================================================================

pub use autologin_service::AutologinService;

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the ports
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
