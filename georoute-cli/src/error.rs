//! Error types emitted by the georoute CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use georoute_core::RoutingApiError;
use georoute_graphhopper::BuildError;
use georoute_http::ClientBuildError;
use thiserror::Error;

/// Errors emitted by the georoute CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// Too few waypoints were supplied for the command.
    #[error("{command} needs at least {required} --point values, got {given}")]
    TooFewPoints {
        command: &'static str,
        required: usize,
        given: usize,
    },
    /// Two mutually exclusive options were both set after merging.
    #[error("--{first} and --{second} cannot be combined")]
    ConflictingArguments {
        first: &'static str,
        second: &'static str,
    },
    /// Neither an API key nor a self-hosted base URL was configured.
    #[error("set --api-key ({env}) or point --base-url at a self-hosted server")]
    MissingCredentials { env: &'static str },
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    BuildClient(#[from] ClientBuildError),
    /// The adapter rejected its configuration.
    #[error("failed to build GraphHopper adapter: {0}")]
    BuildAdapter(#[from] BuildError),
    /// The routing request failed.
    #[error("{command} request failed: {source}")]
    Routing {
        command: &'static str,
        #[source]
        source: RoutingApiError,
    },
    /// Serialising the command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
