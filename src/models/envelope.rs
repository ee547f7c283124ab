//! Upstream response envelopes.

use serde::{Serialize, de::DeserializeOwned};

/// A JSON shape returned by the upstream API that wraps the value callers
/// actually receive.
///
/// List endpoints nest their items under a named field; single-entity
/// endpoints return the value bare and unwrap to themselves.
pub trait Envelope: DeserializeOwned {
    /// The value relayed to the caller.
    type Payload: Serialize;

    fn into_payload(self) -> Self::Payload;
}
