//! Bearer token extraction middleware.
//!
//! The relay does not authenticate anyone itself. This middleware reads the
//! caller's `Authorization` header once, normalizes it to a bare token, and
//! injects it into the request so handlers can forward it upstream.

use axum::{
    extract::Request,
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use std::fmt;

const BEARER_SCHEME: &str = "bearer";

/// Token presented by the caller, without any scheme prefix.
///
/// `None` when the header is missing, empty, or not valid UTF-8. The request
/// is then forwarded without `Authorization` and the upstream decides.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BearerToken(Option<String>);

impl BearerToken {
    /// Read the token from request headers.
    ///
    /// Accepted forms:
    /// ```text
    /// Authorization: Bearer abc123xyz
    /// Authorization: abc123xyz
    /// ```
    /// One leading `Bearer` scheme is stripped, case-insensitively, so the
    /// outbound header is never double-prefixed.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let token = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(normalize);

        Self(token)
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(_) => f.write_str("BearerToken(<redacted>)"),
            None => f.write_str("BearerToken(None)"),
        }
    }
}

fn normalize(raw: &str) -> Option<String> {
    let raw = raw.trim();

    if raw.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }

    let token = match raw.split_once(char::is_whitespace) {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case(BEARER_SCHEME) => rest.trim_start(),
        _ => raw,
    };

    (!token.is_empty()).then(|| token.to_string())
}

/// Bearer token middleware function.
///
/// # Flow
///
/// 1. Extract the `Authorization` header, if any
/// 2. Normalize it to a bare token
/// 3. Inject `BearerToken` into request extensions
/// 4. Call the next handler
///
/// Never rejects a request; a missing token is the upstream's call to make.
pub async fn bearer_token(mut request: Request, next: Next) -> Response {
    let token = BearerToken::from_headers(request.headers());
    tracing::trace!(present = token.as_deref().is_some(), "Bearer token extracted");

    // Route handlers can now extract this using Extension<BearerToken>
    request.extensions_mut().insert(token);

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn token_for(value: &str) -> Option<String> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        BearerToken::from_headers(&headers).0
    }

    #[test]
    fn strips_a_single_bearer_prefix() {
        assert_eq!(token_for("Bearer jwt_token").as_deref(), Some("jwt_token"));
        assert_eq!(token_for("bearer   jwt_token ").as_deref(), Some("jwt_token"));
        assert_eq!(
            token_for("Bearer Bearer jwt_token").as_deref(),
            Some("Bearer jwt_token")
        );
    }

    #[test]
    fn bare_token_is_used_verbatim() {
        assert_eq!(token_for("jwt_token").as_deref(), Some("jwt_token"));
        assert_eq!(token_for("Bearer_ish").as_deref(), Some("Bearer_ish"));
    }

    #[test]
    fn empty_values_mean_no_token() {
        assert_eq!(token_for(""), None);
        assert_eq!(token_for("   "), None);
        assert_eq!(token_for("Bearer"), None);
        assert_eq!(token_for("Bearer   "), None);
    }

    #[test]
    fn missing_header_means_no_token() {
        assert_eq!(BearerToken::from_headers(&HeaderMap::new()), BearerToken(None));
    }

    #[test]
    fn debug_redacts_token() {
        let token = BearerToken(Some("secret".to_string()));
        assert!(!format!("{:?}", token).contains("secret"));
    }
}
