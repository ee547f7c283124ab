//! Sign-in HTTP handler.
//!
//! - POST /signin - Exchange credentials for an upstream session token

use crate::{
    error::AppError,
    models::sign_in::{SignInRequest, SignInResponse},
    services::{
        forwarder::{ExtendClient, Outbound},
        relay::relay,
    },
};
use axum::{body::Bytes, extract::State, response::Response};

/// Sign in with email and password.
///
/// # Request Body
///
/// ```json
/// {
///   "email": "jane@example.com",
///   "password": "hunter2"
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: `{"token": "..."}` as issued upstream
/// - **Error (400)**: Body is not a JSON credentials object
/// - **Error (any)**: Upstream status passed through, empty body
///
/// The body is taken as raw bytes rather than `Json<_>` so a malformed body
/// maps to a bare 400 like every other error.
#[utoipa::path(
    post,
    path = "/signin",
    tag = "auth",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Session token issued upstream", body = SignInResponse),
        (status = 400, description = "Malformed body"),
        (status = "default", description = "Upstream status passed through, empty body")
    )
)]
pub async fn sign_in(
    State(client): State<ExtendClient>,
    body: Bytes,
) -> Result<Response, AppError> {
    // A JSON `null` body forwards empty credentials
    let credentials = serde_json::from_slice::<Option<SignInRequest>>(&body)
        .map_err(|e| AppError::InvalidRequest(format!("Malformed sign-in body: {}", e)))?
        .unwrap_or_default();

    tracing::debug!(email = %credentials.email, "Forwarding sign-in");

    // Re-encode so only the known fields go upstream
    let payload = serde_json::to_vec(&credentials).map_err(AppError::Encode)?;

    relay::<SignInResponse>(&client, Outbound::post_json(client.urls().sign_in(), payload)).await
}
