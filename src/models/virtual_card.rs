//! Virtual card payloads and the upstream card-list envelope.

use super::envelope::Envelope;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A virtual card as relayed to callers.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "vc_123",
///   "displayName": "Team travel"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VirtualCard {
    pub id: String,
    pub display_name: String,
}

/// Upstream response of `GET /virtualcards`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualCardsEnvelope {
    pub virtual_cards: Vec<VirtualCard>,
}

impl Envelope for VirtualCardsEnvelope {
    type Payload = Vec<VirtualCard>;

    fn into_payload(self) -> Self::Payload {
        self.virtual_cards
    }
}
