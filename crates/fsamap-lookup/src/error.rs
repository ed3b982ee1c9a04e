use thiserror::Error;

/// Errors returned by the postal-code lookup client.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The lookup endpoint answered with a non-2xx status.
    #[error("lookup for {postal} returned HTTP {status}")]
    UnexpectedStatus { status: u16, postal: String },

    /// The response body was not valid JSON.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid lookup base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl LookupError {
    /// Returns `true` for failures worth retrying after the fixed delay.
    ///
    /// **Transient:** timeouts, connection failures, HTTP 5xx and 429.
    ///
    /// **Permanent:** any other status, a malformed body, or a bad base URL;
    /// repeating the same request would fail the same way.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(e) => {
                e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
            }
            Self::UnexpectedStatus { status, .. } => *status == 429 || (500..600).contains(status),
            Self::Deserialize { .. } | Self::InvalidBaseUrl { .. } => false,
        }
    }
}
