//! Connection settings shared by every command and the adapter seam.

use std::sync::Arc;
use std::time::Duration;

use georoute_core::HttpTransport;
use georoute_graphhopper::{BuildError, GraphHopper, GraphHopperConfig};
use georoute_http::HttpClient;
use log::debug;

use crate::CliError;

/// Adapter type every command runs against.
pub(crate) type SharedAdapter = GraphHopper<Arc<dyn HttpTransport>>;

/// Connection settings after configuration layering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Connection {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
    pub(crate) timeout_ms: Option<u64>,
    pub(crate) retry_over_query_limit: bool,
    pub(crate) max_retries: Option<u32>,
}

impl Connection {
    /// Build the adapter configuration, rejecting a hosted target without a
    /// key. `env` names the API key variable for the calling command.
    pub(crate) fn into_graphhopper_config(
        self,
        env: &'static str,
    ) -> Result<GraphHopperConfig, CliError> {
        let config = GraphHopperConfig {
            api_key: self.api_key,
            base_url: self.base_url,
            timeout: self.timeout_ms.map(Duration::from_millis),
            retry_over_query_limit: self.retry_over_query_limit,
            max_retries: self.max_retries,
            ..GraphHopperConfig::default()
        };
        match config.validate() {
            Ok(()) => Ok(config),
            Err(BuildError::MissingApiKey) => Err(CliError::MissingCredentials { env }),
            Err(other) => Err(other.into()),
        }
    }
}

/// Builds the adapter for the current invocation.
pub(crate) trait AdapterFactory {
    fn build(&self, config: GraphHopperConfig) -> Result<SharedAdapter, CliError>;
}

/// Factory backed by the shared HTTP client.
pub(crate) struct HttpAdapterFactory;

impl AdapterFactory for HttpAdapterFactory {
    fn build(&self, config: GraphHopperConfig) -> Result<SharedAdapter, CliError> {
        debug!("using GraphHopper at {}", config.effective_base_url());
        let transport: Arc<dyn HttpTransport> = Arc::new(HttpClient::new(config.client_config())?);
        Ok(GraphHopper::with_transport(config, transport)?)
    }
}
