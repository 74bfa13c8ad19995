//! The HTTP capability adapters issue their requests through.
//!
//! Adapters never talk to an HTTP stack directly. They build an
//! [`HttpRequest`] and hand it to an [`HttpTransport`], which owns the base
//! URL, headers, timeout, and retry policy. Swapping the transport lets
//! adapters run against in-memory fakes in tests.

mod error;
mod request;

use async_trait::async_trait;
use serde_json::Value;

pub use error::TransportError;
pub use request::{HttpMethod, HttpRequest};

/// Perform HTTP requests relative to a provider base URL.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use georoute_core::{HttpRequest, HttpTransport, TransportError};
/// use serde_json::{Value, json};
///
/// struct Echo;
///
/// #[async_trait]
/// impl HttpTransport for Echo {
///     async fn perform(&self, request: &HttpRequest) -> Result<Value, TransportError> {
///         Ok(json!({ "endpoint": request.endpoint }))
///     }
/// }
///
/// let request = HttpRequest::get("/isochrone").with_query("profile", "car");
/// assert_eq!(Echo.describe(&request), "GET /isochrone?profile=car");
/// ```
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send `request` and return the decoded JSON body of a successful
    /// response.
    async fn perform(&self, request: &HttpRequest) -> Result<Value, TransportError>;

    /// Describe `request` without sending it.
    ///
    /// The default rendering uses the endpoint path; transports that know
    /// their base URL should override this to show the full URL.
    fn describe(&self, request: &HttpRequest) -> String {
        request.to_string()
    }
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for std::sync::Arc<T> {
    async fn perform(&self, request: &HttpRequest) -> Result<Value, TransportError> {
        (**self).perform(request).await
    }

    fn describe(&self, request: &HttpRequest) -> String {
        (**self).describe(request)
    }
}
