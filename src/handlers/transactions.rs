//! Transaction HTTP handlers.
//!
//! - GET /transactions/{id} - Get transaction details

use crate::{
    error::AppError,
    middleware::auth::BearerToken,
    models::transaction::Transaction,
    services::{
        forwarder::{ExtendClient, Outbound},
        relay::relay,
    },
};
use axum::{
    Extension,
    extract::{Path, State},
    response::Response,
};

/// Get transaction by ID.
///
/// The upstream already returns the transaction bare, so the body is
/// relayed as `{"id": ..., "merchantName": ...}` with other fields dropped.
#[utoipa::path(
    get,
    path = "/transactions/{id}",
    tag = "transactions",
    params(
        ("Authorization" = String, Header, description = "Bearer token issued by /signin"),
        ("id" = String, Path, description = "Transaction ID")
    ),
    responses(
        (status = 200, description = "Transaction details", body = Transaction),
        (status = "default", description = "Upstream status passed through, empty body")
    )
)]
pub async fn get_transaction(
    State(client): State<ExtendClient>,
    Extension(token): Extension<BearerToken>,
    Path(transaction_id): Path<String>,
) -> Result<Response, AppError> {
    let outbound =
        Outbound::get(client.urls().transaction(&transaction_id)).with_bearer(token.as_deref());

    relay::<Transaction>(&client, outbound).await
}
