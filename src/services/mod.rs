//! Relay services.
//!
//! Services hold the forwarding pipeline separated from HTTP handlers:
//! URL construction, the outbound client, and response translation.

pub mod forwarder;
pub mod relay;
pub mod translator;
pub mod urls;
