//! Virtual card HTTP handlers.
//!
//! This module implements the card-related relay endpoints:
//! - GET /virtualcards - List the caller's virtual cards
//! - GET /virtualcards/{id}/transactions - List transactions of one card

use crate::{
    error::AppError,
    middleware::auth::BearerToken,
    models::{
        transaction::{Transaction, TransactionsEnvelope},
        virtual_card::{VirtualCard, VirtualCardsEnvelope},
    },
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

/// List virtual cards.
///
/// # Response (200)
///
/// The upstream `virtualCards` list, unwrapped and in upstream order:
///
/// ```json
/// [
///   { "id": "vc_1", "displayName": "Team travel" },
///   { "id": "vc_2", "displayName": "Software" }
/// ]
/// ```
///
/// Any other upstream status is passed through with an empty body.
#[utoipa::path(
    get,
    path = "/virtualcards",
    tag = "virtual cards",
    params(("Authorization" = String, Header, description = "Bearer token issued by /signin")),
    responses(
        (status = 200, description = "Virtual cards of the user", body = [VirtualCard]),
        (status = "default", description = "Upstream status passed through, empty body")
    )
)]
pub async fn list_virtual_cards(
    State(client): State<ExtendClient>,
    Extension(token): Extension<BearerToken>,
) -> Result<Response, AppError> {
    let outbound = Outbound::get(client.urls().virtual_cards()).with_bearer(token.as_deref());

    relay::<VirtualCardsEnvelope>(&client, outbound).await
}

/// List transactions of a virtual card.
///
/// # Response (200)
///
/// ```json
/// [
///   { "id": "txn_1", "merchantName": "Coffee Shop" }
/// ]
/// ```
#[utoipa::path(
    get,
    path = "/virtualcards/{id}/transactions",
    tag = "virtual cards",
    params(
        ("Authorization" = String, Header, description = "Bearer token issued by /signin"),
        ("id" = String, Path, description = "Virtual card ID")
    ),
    responses(
        (status = 200, description = "Transactions of the card", body = [Transaction]),
        (status = "default", description = "Upstream status passed through, empty body")
    )
)]
pub async fn list_virtual_card_transactions(
    State(client): State<ExtendClient>,
    Extension(token): Extension<BearerToken>,
    Path(card_id): Path<String>,
) -> Result<Response, AppError> {
    let outbound = Outbound::get(client.urls().virtual_card_transactions(&card_id))
        .with_bearer(token.as_deref());

    relay::<TransactionsEnvelope>(&client, outbound).await
}
