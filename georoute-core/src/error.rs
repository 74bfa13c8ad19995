//! The error surfaced by every adapter operation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A provider diagnostic explaining why a request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiHint {
    /// Human-readable explanation.
    pub message: String,
    /// Provider-specific detail, e.g. an exception class name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Index of the input point that triggered the hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_index: Option<usize>,
}

/// Failure of a routing operation.
///
/// Transport failures, non-2xx responses, malformed payloads, and rejected
/// inputs all surface in this one shape. The HTTP fields are empty when the
/// request never reached the provider.
///
/// # Examples
///
/// ```
/// use georoute_core::{ApiHint, RoutingApiError};
///
/// let err = RoutingApiError::new("request failed with status 400")
///     .with_status(400, Some("Bad Request".to_owned()))
///     .with_error_message(Some("Point 0 is out of bounds".to_owned()))
///     .with_hints(vec![ApiHint {
///         message: "Point 0 is out of bounds".to_owned(),
///         details: None,
///         point_index: Some(0),
///     }]);
/// assert_eq!(err.status, Some(400));
/// assert_eq!(err.hints.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
#[non_exhaustive]
pub struct RoutingApiError {
    /// Transport-level description of the failure.
    pub message: String,
    /// HTTP status code, when a response was received.
    pub status: Option<u16>,
    /// HTTP reason phrase, when a response was received.
    pub status_text: Option<String>,
    /// Error message reported by the provider in the response body.
    pub error_message: Option<String>,
    /// Provider diagnostics; empty when the provider sent none.
    pub hints: Vec<ApiHint>,
}

impl RoutingApiError {
    /// Create an error carrying only a description.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            status_text: None,
            error_message: None,
            hints: Vec::new(),
        }
    }

    /// Attach the HTTP status and reason phrase.
    #[must_use]
    pub fn with_status(mut self, status: u16, status_text: Option<String>) -> Self {
        self.status = Some(status);
        self.status_text = status_text;
        self
    }

    /// Attach the provider's own error message.
    #[must_use]
    pub fn with_error_message(mut self, error_message: Option<String>) -> Self {
        self.error_message = error_message;
        self
    }

    /// Attach the provider's diagnostic hints.
    #[must_use]
    pub fn with_hints(mut self, hints: Vec<ApiHint>) -> Self {
        self.hints = hints;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn display_uses_transport_message() {
        let err = RoutingApiError::new("network error contacting https://example.test")
            .with_error_message(Some("ignored in display".to_owned()));
        assert_eq!(err.to_string(), "network error contacting https://example.test");
    }

    #[rstest]
    fn hints_deserialise_without_optional_fields() {
        let hint: ApiHint =
            serde_json::from_str(r#"{"message": "Cannot find point 1"}"#).expect("valid hint");
        assert_eq!(hint.message, "Cannot find point 1");
        assert!(hint.details.is_none());
        assert!(hint.point_index.is_none());
    }
}
