use autologin_adapters::config::AutologinSettings;
use autologin_adapters::persistence::InMemorySessionStore;
use autologin_axum::AppState;
use autologin_axum::routes::{create_password, messages, reset_password_post};
use autologin_core::{AccountService, CartService, CustomerDirectory};
use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Service exposing the password reset routes
pub struct AutologinService {
    router: Router,
}

impl AutologinService {
    /// Create the service from its collaborators.
    ///
    /// # Arguments
    /// * `account_service` - Validates reset tokens and applies new passwords
    /// * `customer_directory` - Resolves reset tokens to customers
    /// * `cart_service` - Tells whether a customer's cart holds items
    /// * `sessions` - Session storage shared by every route
    /// * `settings` - Route paths, session cookie and account settings
    pub fn new<A, D, C>(
        account_service: A,
        customer_directory: D,
        cart_service: C,
        sessions: InMemorySessionStore,
        settings: AutologinSettings,
    ) -> Self
    where
        A: AccountService + Clone + 'static,
        D: CustomerDirectory + Clone + 'static,
        C: CartService + Clone + 'static,
    {
        let routes = settings.routes.clone();
        let state = AppState::new(
            account_service,
            customer_directory,
            cart_service,
            sessions,
            settings,
        );

        let router = Router::new()
            .route(
                &routes.reset_password_post,
                post(reset_password_post::<A, D, C>),
            )
            .route(&routes.create_password, get(create_password::<A, D, C>))
            .route(&routes.messages, get(messages::<A, D, C>))
            .with_state(state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the service into a router that can be mounted on another router
    pub fn into_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Run the service as a standalone server on `listener`
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.into_router();

        tracing::info!("Autologin service listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}
