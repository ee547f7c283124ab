//! Upstream answer → caller response.
//!
//! Non-200 statuses pass through with no body. A 200 body is decoded as the
//! route's envelope, unwrapped, and re-encoded as JSON.

use crate::error::AppError;
use crate::models::envelope::Envelope;
use crate::services::forwarder::{JSON_CONTENT_TYPE, UpstreamResponse};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

pub fn translate<E: Envelope>(upstream: UpstreamResponse) -> Result<Response, AppError> {
    if upstream.status != StatusCode::OK {
        return Err(AppError::UpstreamStatus(upstream.status));
    }

    let envelope: E = serde_json::from_slice(&upstream.body).map_err(AppError::UpstreamProtocol)?;
    let body = serde_json::to_vec(&envelope.into_payload()).map_err(AppError::Encode)?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)],
        body,
    )
        .into_response())
}
