//! Error handling for passage

use thiserror::Error;

use crate::http::response::RawEnvelope;

/// Main error type for gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {}: {}", .0.code, .0.msg)]
    Api(RawEnvelope),

    #[error("unauthenticated (code {0})")]
    Unauthenticated(i32),

    #[error("malformed response envelope: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl GatewayError {
    /// Envelope view of a failure, for callers that surface backend
    /// envelopes directly. Failures that never produced an envelope are
    /// mapped onto the synthesized internal one.
    pub fn to_envelope(&self) -> RawEnvelope {
        match self {
            GatewayError::Api(envelope) => envelope.clone(),
            GatewayError::Unauthenticated(code) => RawEnvelope {
                code: *code,
                msg: String::new(),
                data: None,
            },
            _ => RawEnvelope::internal(),
        }
    }

    /// True when the underlying transport failure was a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, GatewayError::Http(err) if err.is_timeout())
    }
}

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;
