//! Extend API relay.
//!
//! A thin HTTP proxy that forwards authenticated requests to the Extend
//! card-management API and relays the unwrapped responses.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Upstream Client**: reqwest, one shared connection pool
//! - **Authentication**: caller's bearer token forwarded verbatim, no local sessions
//! - **Format**: JSON requests/responses, upstream envelopes unwrapped
//!
//! Handlers are stateless. The only shared value is the [`ExtendClient`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use services::forwarder::ExtendClient;

/// Build the HTTP router.
///
/// | Method | Path | Handler |
/// |---|---|---|
/// | POST | /signin | sign-in relay |
/// | GET | /virtualcards | card list relay |
/// | GET | /virtualcards/{id}/transactions | card transactions relay |
/// | GET | /transactions/{id} | transaction detail relay |
/// | GET | /api/health | liveness |
/// | GET | /swagger/doc.json | OpenAPI document |
/// | GET | /swagger/ | Swagger UI |
pub fn app(client: ExtendClient) -> Router {
    // Routes that forward the caller's bearer token
    let authenticated_routes = Router::new()
        .route(
            "/virtualcards",
            get(handlers::virtual_cards::list_virtual_cards),
        )
        .route(
            "/virtualcards/{id}/transactions",
            get(handlers::virtual_cards::list_virtual_card_transactions),
        )
        .route(
            "/transactions/{id}",
            get(handlers::transactions::get_transaction),
        )
        .route_layer(axum_middleware::from_fn(middleware::auth::bearer_token));

    Router::new()
        .route("/signin", post(handlers::sign_in::sign_in))
        .route("/api/health", get(handlers::health::health_check))
        .merge(authenticated_routes)
        .merge(handlers::docs::swagger_ui())
        .layer(TraceLayer::new_for_http())
        .with_state(client)
}
