//! HTTP middleware components.
//!
//! Middleware are functions that run before route handlers.

/// Bearer token extraction for relayed routes
pub mod auth;
