//! reqwest-backed [`HttpTransport`] shared by every provider adapter.

use async_trait::async_trait;
use georoute_core::{HttpMethod, HttpRequest, HttpTransport, TransportError};
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response};
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::config::ClientConfig;
use crate::retry::RetryPolicy;

/// Errors raised while building an [`HttpClient`].
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// A configured header name or value is not valid HTTP.
    #[error("invalid header {name:?}")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },
    /// The underlying HTTP client failed to build.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Shared HTTP client scoped to one provider base URL.
///
/// Applies the configured user agent, headers, and timeout to every request,
/// and retries HTTP 429 responses with exponential delay when
/// [`ClientConfig::retry_over_query_limit`] is set.
///
/// # Example
///
/// ```no_run
/// use georoute_core::{HttpRequest, HttpTransport};
/// use georoute_http::{ClientConfig, HttpClient};
///
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let client = HttpClient::new(ClientConfig::new("http://localhost:8989"))?;
/// let request = HttpRequest::get("/isochrone").with_query("point", "52.5,13.4");
/// println!("{}", client.describe(&request));
/// let body = client.perform(&request).await?;
/// # let _ = body;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
    retry: RetryPolicy,
}

impl HttpClient {
    /// Build a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured header is invalid or the HTTP client
    /// fails to build.
    pub fn new(config: ClientConfig) -> Result<Self, ClientBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(header_map(&config.headers)?)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ClientBuildError::HttpClient)?;
        let retry = RetryPolicy::new(config.retry_over_query_limit, config.max_retries);
        Ok(Self {
            client,
            config,
            retry,
        })
    }

    /// The configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the absolute URL for `request`, including its query string.
    ///
    /// The endpoint is appended to the base URL textually so base paths such
    /// as `/api/1` survive.
    fn request_url(&self, request: &HttpRequest) -> Result<Url, TransportError> {
        let raw = format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            request.endpoint
        );
        let mut url = Url::parse(&raw).map_err(|err| TransportError::Network {
            url: raw.clone(),
            message: format!("invalid request URL: {err}"),
        })?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }
        Ok(url)
    }

    async fn send_once(&self, request: &HttpRequest, url: &Url) -> Result<Value, TransportError> {
        let builder = match request.method {
            HttpMethod::Get => self.client.get(url.clone()),
            HttpMethod::Post => {
                let post = self.client.post(url.clone());
                match &request.body {
                    Some(body) => post.json(body),
                    None => post,
                }
            }
        };
        let response = builder
            .send()
            .await
            .map_err(|err| convert_reqwest_error(&err, url.as_str()))?;
        if !response.status().is_success() {
            return Err(convert_error_response(response, url.as_str()).await);
        }
        response
            .json::<Value>()
            .await
            .map_err(|err| TransportError::Decode {
                url: url.to_string(),
                message: err.to_string(),
            })
    }
}

#[async_trait]
impl HttpTransport for HttpClient {
    async fn perform(&self, request: &HttpRequest) -> Result<Value, TransportError> {
        let url = self.request_url(request)?;
        let mut retries = 0_u32;
        loop {
            debug!("{} {url} (retry {retries})", request.method);
            match self.send_once(request, &url).await {
                Err(err) if self.retry.should_retry(err.status(), retries) => {
                    let delay = RetryPolicy::delay(retries);
                    warn!(
                        "{url} is over its query limit; retrying in {}ms ({} of {})",
                        delay.as_millis(),
                        retries + 1,
                        self.config.max_retries
                    );
                    tokio::time::sleep(delay).await;
                    retries += 1;
                }
                outcome => return outcome,
            }
        }
    }

    fn describe(&self, request: &HttpRequest) -> String {
        let target = self
            .request_url(request)
            .map_or_else(|_| request.path_and_query(), String::from);
        match &request.body {
            Some(body) => format!("{} {target}\n{body}", request.method),
            None => format!("{} {target}", request.method),
        }
    }
}

fn header_map(headers: &[(String, String)]) -> Result<HeaderMap, ClientBuildError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let invalid = || ClientBuildError::InvalidHeader { name: name.clone() };
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
        let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
        map.append(header_name, header_value);
    }
    Ok(map)
}

/// Convert a reqwest error to a `TransportError`.
fn convert_reqwest_error(error: &reqwest::Error, url: &str) -> TransportError {
    if error.is_timeout() {
        return TransportError::Timeout {
            url: url.to_owned(),
        };
    }
    TransportError::Network {
        url: url.to_owned(),
        message: error.to_string(),
    }
}

/// Convert a non-success response, keeping its JSON body for the adapter.
async fn convert_error_response(response: Response, url: &str) -> TransportError {
    let status = response.status();
    let body = response
        .text()
        .await
        .ok()
        .and_then(|text| serde_json::from_str::<Value>(&text).ok());
    TransportError::Http {
        url: url.to_owned(),
        status: status.as_u16(),
        status_text: status.canonical_reason().map(str::to_owned),
        body,
    }
}
