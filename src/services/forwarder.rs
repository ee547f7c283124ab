//! Outbound requests to the card-management API.
//!
//! Every request carries `Content-Type: application/json` and the versioned
//! `Accept` media type. Authenticated requests add `Authorization: Bearer <token>`.
//! There are no retries.

use crate::error::AppError;
use crate::services::urls::UpstreamUrls;
use axum::body::Bytes;
use axum::http::{Method, StatusCode};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::time::Duration;
use url::Url;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Upstream API version this relay targets.
pub const EXTEND_API_VERSION: &str = "application/vnd.paywithextend.v2021-03-12+json";

/// One request to send upstream.
pub struct Outbound<'a> {
    pub method: Method,
    pub url: Url,
    pub body: Option<Vec<u8>>,
    pub bearer: Option<&'a str>,
}

impl<'a> Outbound<'a> {
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
            body: None,
            bearer: None,
        }
    }

    /// POST with an already-encoded JSON body.
    pub fn post_json(url: Url, body: Vec<u8>) -> Self {
        Self {
            method: Method::POST,
            url,
            body: Some(body),
            bearer: None,
        }
    }

    pub fn with_bearer(mut self, token: Option<&'a str>) -> Self {
        self.bearer = token;
        self
    }
}

/// Status and raw body of an upstream answer.
///
/// The body is only read for 200 answers; for any other status it is empty.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// HTTP client for the card-management API.
///
/// Cheap to clone: `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct ExtendClient {
    http: reqwest::Client,
    urls: UpstreamUrls,
}

impl ExtendClient {
    /// Build a client for the given base URL.
    ///
    /// # Timeout
    ///
    /// `timeout` bounds each whole request, connect through body read.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            urls: UpstreamUrls::new(base),
        })
    }

    pub fn urls(&self) -> &UpstreamUrls {
        &self.urls
    }

    /// Send one request upstream.
    ///
    /// # Errors
    ///
    /// - `Transport` if the request could not be built or sent (DNS, connect, timeout)
    /// - `UpstreamBody` if a 200 answer's body could not be read
    ///
    /// A non-200 status is not an error here; it is returned for the
    /// translator to pass through.
    #[tracing::instrument(skip_all, fields(method = %outbound.method, url = %outbound.url))]
    pub async fn forward(&self, outbound: Outbound<'_>) -> Result<UpstreamResponse, AppError> {
        let mut request = self
            .http
            .request(outbound.method, outbound.url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(ACCEPT, EXTEND_API_VERSION);

        if let Some(token) = outbound.bearer {
            request = request.bearer_auth(token);
        }
        if let Some(body) = outbound.body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(AppError::Transport)?;
        let status = response.status();

        if status != StatusCode::OK {
            tracing::debug!(%status, "Upstream returned non-success status");
            return Ok(UpstreamResponse {
                status,
                body: Bytes::new(),
            });
        }

        let body = response.bytes().await.map_err(AppError::UpstreamBody)?;
        tracing::debug!(bytes = body.len(), "Upstream responded");

        Ok(UpstreamResponse { status, body })
    }
}
