//! Mapping of transport and decoding failures onto [`RoutingApiError`].

use georoute_core::{RoutingApiError, TransportError};
use serde::Deserialize;
use serde_json::Value;

use crate::wire::ErrorBody;

/// Convert a transport failure into the caller-facing error.
///
/// HTTP failures keep their status, reason phrase, and the `message` and
/// `hints` of a GraphHopper error body. A body that does not look like one is
/// ignored rather than treated as a second failure.
///
/// # Examples
///
/// ```
/// use georoute_core::TransportError;
/// use georoute_graphhopper::map_transport_error;
/// use serde_json::json;
///
/// let err = map_transport_error(TransportError::Http {
///     url: "https://graphhopper.com/api/1/route".to_owned(),
///     status: 400,
///     status_text: Some("Bad Request".to_owned()),
///     body: Some(json!({"message": "Point 1 is out of bounds", "hints": []})),
/// });
/// assert_eq!(err.status, Some(400));
/// assert_eq!(err.error_message.as_deref(), Some("Point 1 is out of bounds"));
/// ```
#[must_use]
pub fn map_transport_error(err: TransportError) -> RoutingApiError {
    let message = err.to_string();
    match err {
        TransportError::Http {
            status,
            status_text,
            body,
            ..
        } => {
            let body = body.as_ref().map(error_body).unwrap_or_default();
            RoutingApiError::new(message)
                .with_status(status, status_text)
                .with_error_message(body.message)
                .with_hints(body.hints)
        }
        _ => RoutingApiError::new(message),
    }
}

fn error_body(raw: &Value) -> ErrorBody {
    ErrorBody::deserialize(raw).unwrap_or_default()
}

/// Error for a success response whose body has an unexpected shape.
pub(crate) fn malformed_response(err: &serde_json::Error) -> RoutingApiError {
    RoutingApiError::new(format!("malformed response: {err}"))
}
