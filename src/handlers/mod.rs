//! HTTP request handlers (route handlers).
//!
//! Each relay handler is an async function that:
//! 1. Receives HTTP request data (JSON body, path params, bearer token)
//! 2. Builds the outbound request and runs the relay pipeline
//! 3. Returns the unwrapped payload or a bare status code

/// OpenAPI document and Swagger UI
pub mod docs;
/// Liveness endpoint
pub mod health;
/// Sign-in relay
pub mod sign_in;
/// Transaction detail relay
pub mod transactions;
/// Virtual card and card transaction relays
pub mod virtual_cards;
