//! Construction settings for [`GraphHopper`](crate::GraphHopper).

use std::time::Duration;

use georoute_http::{ClientBuildError, ClientConfig, DEFAULT_MAX_RETRIES};
use thiserror::Error;

/// Base URL of the hosted GraphHopper API.
pub const DEFAULT_BASE_URL: &str = "https://graphhopper.com/api/1";

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = "georoute-graphhopper/0.1";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors raised while constructing an adapter.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Neither an API key nor a self-hosted base URL was supplied.
    #[error("an API key is required when using the hosted GraphHopper API")]
    MissingApiKey,
    /// The HTTP client could not be built from the configuration.
    #[error(transparent)]
    HttpClient(#[from] ClientBuildError),
}

/// Connection settings for a GraphHopper instance.
///
/// The hosted API needs an API key; a self-hosted instance needs only its
/// base URL.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use georoute_graphhopper::GraphHopperConfig;
///
/// let config = GraphHopperConfig::new()
///     .with_base_url("http://localhost:8989")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.effective_base_url(), "http://localhost:8989");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphHopperConfig {
    /// API key appended as the `key` query parameter.
    pub api_key: Option<String>,
    /// Base URL; the hosted API when absent.
    pub base_url: Option<String>,
    /// User agent; [`DEFAULT_USER_AGENT`] when absent.
    pub user_agent: Option<String>,
    /// Extra headers sent with every request.
    pub headers: Vec<(String, String)>,
    /// Request timeout; ten seconds when absent.
    pub timeout: Option<Duration>,
    /// Whether HTTP 429 responses are retried with backoff.
    pub retry_over_query_limit: bool,
    /// Retry budget for 429 responses.
    pub max_retries: Option<u32>,
}

impl GraphHopperConfig {
    /// Empty configuration targeting the hosted API.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Target a self-hosted instance.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Add a header sent with every request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Retry HTTP 429 responses up to `max_retries` times.
    #[must_use]
    pub const fn with_retry_over_query_limit(mut self, max_retries: u32) -> Self {
        self.retry_over_query_limit = true;
        self.max_retries = Some(max_retries);
        self
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Reject configurations that cannot reach any instance.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingApiKey`] when neither a base URL nor an
    /// API key is set.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.base_url.is_none() && self.api_key.is_none() {
            return Err(BuildError::MissingApiKey);
        }
        Ok(())
    }

    /// Settings for the shared HTTP client.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.effective_base_url().to_owned(),
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
            headers: self.headers.clone(),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            retry_over_query_limit: self.retry_over_query_limit,
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
        }
    }
}
