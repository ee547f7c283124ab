//! The forwarding pipeline shared by every relay route.

use crate::error::AppError;
use crate::models::envelope::Envelope;
use crate::services::forwarder::{ExtendClient, Outbound};
use crate::services::translator;
use axum::response::Response;

/// Forward `outbound` and unwrap the answer as envelope `E`.
///
/// # Process
///
/// 1. Send the request upstream (no retries)
/// 2. Pass a non-200 status through with no body
/// 3. Decode the 200 body as `E`, unwrap it, and re-encode it as JSON
pub async fn relay<E: Envelope>(
    client: &ExtendClient,
    outbound: Outbound<'_>,
) -> Result<Response, AppError> {
    let upstream = client.forward(outbound).await?;
    translator::translate::<E>(upstream)
}
