//! Transaction payloads and the upstream transaction-list envelope.
//!
//! This module defines:
//! - `Transaction`: a single card transaction as relayed to callers
//! - `TransactionsEnvelope`: the upstream wrapper around a transaction list

use super::envelope::Envelope;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A card transaction.
///
/// Identity is `id`. Every other upstream field is dropped.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "txn_123",
///   "merchantName": "Coffee Shop"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub merchant_name: String,
}

/// Upstream response of `GET /virtualcards/{id}/transactions`.
///
/// ```json
/// { "transactions": [ { "id": "txn_123", "merchantName": "Coffee Shop" } ] }
/// ```
#[derive(Debug, Deserialize)]
pub struct TransactionsEnvelope {
    pub transactions: Vec<Transaction>,
}

impl Envelope for TransactionsEnvelope {
    type Payload = Vec<Transaction>;

    fn into_payload(self) -> Self::Payload {
        self.transactions
    }
}

/// `GET /transactions/{id}` returns the transaction bare, so it is its own payload.
impl Envelope for Transaction {
    type Payload = Transaction;

    fn into_payload(self) -> Self::Payload {
        self
    }
}
