pub mod domain;
pub mod http_abstraction;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    cart::{Cart, CartItem},
    customer::{Customer, CustomerId},
    email::{Email, EmailError},
    notice::{Notice, NoticeKind},
    password::{Password, PasswordError},
    redirect::RedirectTarget,
    reset_token::ResetToken,
};

pub use ports::{
    repositories::{
        CartService, CartServiceError, CustomerDirectory, CustomerDirectoryError,
        CustomerSearchResults, SessionStore, SessionStoreError,
    },
    services::{
        AccountService, AccountServiceError, CredentialsValidator, FieldError, NoopCredentialsValidator,
        NotificationSink,
    },
};

pub use http_abstraction::{ResponseBuilder, ResponseHelpers};
