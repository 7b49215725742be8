//! Zero-cost HTTP response abstraction.
//!
//! Web frameworks implement [`ResponseBuilder`] on a newtype wrapper of their own builder
//! type, so the framework-agnostic handlers can produce redirects and JSON bodies without
//! depending on any particular framework.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  autologin_core: ResponseBuilder trait   │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  autologin_axum: AxumResponseBuilder     │
//! │  impl ResponseBuilder for ... { }        │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  Handlers build responses through the    │
//! │  trait (generic over framework)          │
//! └──────────────────────────────────────────┘
//! ```

/// Trait for building HTTP responses.
///
/// This follows the builder pattern, allowing method chaining:
/// ```ignore
/// builder
///     .status(302)
///     .header("location", "/checkout/cart")
///     .cookie("PHPSESSID=abc; HttpOnly; Path=/")
///     .build()
/// ```
pub trait ResponseBuilder: Sized {
    /// The final response type produced by this builder
    type Response;

    /// Set the HTTP status code
    fn status(self, code: u16) -> Self;

    /// Add an HTTP header
    fn header(self, name: &str, value: &str) -> Self;

    /// Add a Set-Cookie header
    ///
    /// The cookie_value should be a complete cookie string like:
    /// `"session=abc; HttpOnly; Secure; SameSite=Lax; Path=/"`
    fn cookie(self, cookie_value: &str) -> Self {
        self.header("set-cookie", cookie_value)
    }

    /// Set a JSON body with Content-Type header
    fn json_body(self, body: serde_json::Value) -> Self;

    /// Build the final response
    fn build(self) -> Self::Response;
}

/// Helper methods for creating common responses.
///
/// Automatically implemented for all types that implement `ResponseBuilder`.
pub trait ResponseHelpers: ResponseBuilder {
    /// Create a 302 Found redirect
    fn found(self, location: &str) -> Self::Response {
        self.status(302).header("location", location).build()
    }

    /// Create a 200 OK JSON response
    fn ok_json(self, body: serde_json::Value) -> Self::Response {
        self.status(200).json_body(body).build()
    }
}

// Blanket implementation for all ResponseBuilder types
impl<T: ResponseBuilder> ResponseHelpers for T {}
