//! Sign-in request and response types.

use super::envelope::Envelope;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Credentials posted to `/signin`.
///
/// Forwarded once as the upstream sign-in body and never stored. Missing
/// fields decode as empty strings; the upstream decides whether they are valid.
///
/// # JSON Example
///
/// ```json
/// {
///   "email": "jane@example.com",
///   "password": "hunter2"
/// }
/// ```
#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SignInRequest {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,
}

impl fmt::Debug for SignInRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Session token issued by the upstream sign-in call.
///
/// The relay keeps no session state; callers present `token` back as a
/// bearer credential.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SignInResponse {
    pub token: String,
}

impl fmt::Debug for SignInResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInResponse")
            .field("token", &"<redacted>")
            .finish()
    }
}

impl Envelope for SignInResponse {
    type Payload = SignInResponse;

    fn into_payload(self) -> Self::Payload {
        self
    }
}
