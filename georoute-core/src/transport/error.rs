use serde_json::Value;
use thiserror::Error;

/// Transport-level errors encountered while issuing HTTP requests.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TransportError {
    /// The server returned a non-success HTTP status.
    #[error("request to {url} failed with status {status}")]
    Http {
        /// Fully qualified request URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Reason phrase for the status, when known.
        status_text: Option<String>,
        /// Response body, when it decoded as JSON.
        body: Option<Value>,
    },
    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out")]
    Timeout {
        /// Fully qualified request URL.
        url: String,
    },
    /// The request failed before a response was received.
    #[error("network error contacting {url}: {message}")]
    Network {
        /// Fully qualified request URL.
        url: String,
        /// Description reported by the HTTP stack.
        message: String,
    },
    /// A success response could not be decoded as JSON.
    #[error("failed to decode response from {url}: {message}")]
    Decode {
        /// Fully qualified request URL.
        url: String,
        /// Description reported by the decoder.
        message: String,
    },
}

impl TransportError {
    /// HTTP status code, for errors that carry one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Timeout { .. } | Self::Network { .. } | Self::Decode { .. } => None,
        }
    }
}
