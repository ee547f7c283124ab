//! Error types and HTTP error response handling.
//!
//! This module defines all relay errors and how they are converted into
//! HTTP responses. No error detail ever crosses the inbound boundary: every
//! variant renders as a bare status code with an empty body, and the detail
//! is logged instead.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Inbound Errors**: the caller sent something we cannot forward
/// - **Transport Errors**: the upstream API could not be reached or read
/// - **Upstream Errors**: the upstream answered, but not with a usable payload
/// - **Encoding Errors**: the unwrapped payload could not be re-encoded
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Inbound request body could not be decoded.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Sending the outbound request failed (DNS, connect, timeout).
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("Upstream transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Upstream answered with anything other than 200.
    ///
    /// The status is passed through to the caller unchanged.
    #[error("Upstream returned status {0}")]
    UpstreamStatus(StatusCode),

    /// Upstream answered 200 but its body could not be read.
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("Failed to read upstream body: {0}")]
    UpstreamBody(#[source] reqwest::Error),

    /// Upstream answered 200 with a body that is not the expected envelope.
    ///
    /// Returns HTTP 502 Bad Gateway.
    #[error("Unexpected upstream payload: {0}")]
    UpstreamProtocol(#[source] serde_json::Error),

    /// The unwrapped payload could not be serialized.
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("Failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),
}

impl AppError {
    /// Status code the caller sees for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamStatus(status) => *status,
            AppError::UpstreamProtocol(_) => StatusCode::BAD_GATEWAY,
            AppError::Transport(_) | AppError::UpstreamBody(_) | AppError::Encode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Convert AppError into an HTTP response.
///
/// # Status Code Mapping
///
/// - `InvalidRequest` → 400 Bad Request
/// - `UpstreamStatus(s)` → `s`
/// - `UpstreamProtocol` → 502 Bad Gateway
/// - `Transport`, `UpstreamBody`, `Encode` → 500 Internal Server Error
///
/// The body is always empty.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::InvalidRequest(_) => tracing::debug!(%status, error = %self, "Rejected request"),
            AppError::UpstreamStatus(_) => tracing::info!(%status, "Passing upstream status through"),
            AppError::UpstreamProtocol(_) => tracing::warn!(%status, error = %self, "Upstream protocol error"),
            _ => tracing::error!(%status, error = %self, "Request failed"),
        }

        status.into_response()
    }
}
