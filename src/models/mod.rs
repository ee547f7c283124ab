//! Request, envelope and payload types exchanged with callers and the upstream API.
//!
//! All values are request-scoped: decoded from one request, forwarded, and dropped.

/// Upstream envelope unwrapping
pub mod envelope;
/// Sign-in credentials and session token
pub mod sign_in;
/// Card transactions
pub mod transaction;
/// Virtual cards
pub mod virtual_card;
