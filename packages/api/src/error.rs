//! Errors returned by [`crate::ApiClient`].

use thiserror::Error;

/// Why an API call did not produce the expected body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (DNS, connection refused, CORS, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered 2xx but the body was not the expected JSON.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// HTTP 401: missing or expired token, or wrong login credentials.
    #[error("unauthorized")]
    Unauthorized,

    /// Any other non-2xx answer. `message` is the server's `msg` field when present.
    #[error("server returned {status}: {}", message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
