//! Connection settings for [`HttpClient`](crate::HttpClient).

use std::time::Duration;

/// User agent sent when the adapter does not name its own.
pub const DEFAULT_CLIENT_USER_AGENT: &str = "georoute/0.1";

/// Default request timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Default number of retries after a query-limit response.
pub const DEFAULT_MAX_RETRIES: u32 = 10;

/// Configuration for [`HttpClient`](crate::HttpClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every endpoint is appended to (e.g.,
    /// `"https://graphhopper.com/api/1"`).
    pub base_url: String,
    /// User agent string for requests.
    pub user_agent: String,
    /// Extra headers sent with every request.
    pub headers: Vec<(String, String)>,
    /// Request timeout duration, also used as the connect timeout.
    pub timeout: Duration,
    /// Whether HTTP 429 responses are retried.
    pub retry_over_query_limit: bool,
    /// Maximum number of retries after a 429 response.
    pub max_retries: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8989".to_owned(),
            user_agent: DEFAULT_CLIENT_USER_AGENT.to_owned(),
            headers: Vec::new(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            retry_over_query_limit: false,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a header sent with every request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Retry HTTP 429 responses up to `max_retries` times.
    #[must_use]
    pub const fn with_retry_over_query_limit(mut self, max_retries: u32) -> Self {
        self.retry_over_query_limit = true;
        self.max_retries = max_retries;
        self
    }
}
