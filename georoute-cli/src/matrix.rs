//! The `matrix` command.

use std::io::Write;

use clap::Parser;
use georoute_core::{Matrix, Waypoint};
use georoute_graphhopper::{GraphHopperConfig, MatrixOptions, Profile};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::connection::{AdapterFactory, Connection};
use crate::output::write_outcome;
use crate::{
    ARG_API_KEY, ARG_BASE_URL, ARG_DESTINATIONS, ARG_DRY_RUN, ARG_FAIL_FAST, ARG_MAX_RETRIES,
    ARG_POINT, ARG_PROFILE, ARG_RETRY_OVER_QUERY_LIMIT, ARG_SOURCES, ARG_TIMEOUT_MS, CliError,
    ENV_MATRIX_API_KEY, ENV_MATRIX_POINT,
};

const COMMAND: &str = "matrix";

/// CLI arguments for the `matrix` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Compute travel times and distances between points. By \
                 default every point is both an origin and a destination; \
                 --sources and --destinations select subsets by index.",
    about = "Compute travel times and distances between points"
)]
#[ortho_config(prefix = "GEOROUTE")]
pub(crate) struct MatrixArgs {
    /// Point as lat,lon; repeat for every point.
    #[arg(long = ARG_POINT, value_name = "lat,lon")]
    #[serde(default)]
    pub(crate) point: Option<Vec<Waypoint>>,
    /// GraphHopper profile such as car, bike, or foot.
    #[arg(long = ARG_PROFILE, value_name = "name")]
    #[serde(default)]
    pub(crate) profile: Option<Profile>,
    /// Comma-separated indices of the points used as origins.
    #[arg(long = ARG_SOURCES, value_name = "indices", value_delimiter = ',')]
    #[serde(default)]
    pub(crate) sources: Option<Vec<usize>>,
    /// Comma-separated indices of the points used as destinations.
    #[arg(long = ARG_DESTINATIONS, value_name = "indices", value_delimiter = ',')]
    #[serde(default)]
    pub(crate) destinations: Option<Vec<usize>>,
    /// Fail when any pair cannot be routed.
    #[arg(long = ARG_FAIL_FAST, value_name = "bool")]
    #[serde(default)]
    pub(crate) fail_fast: Option<bool>,
    /// Print the request instead of sending it.
    #[arg(long = ARG_DRY_RUN)]
    #[serde(default)]
    pub(crate) dry_run: bool,
    /// GraphHopper API key.
    #[arg(long = ARG_API_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) api_key: Option<String>,
    /// Base URL of a self-hosted GraphHopper server.
    #[arg(long = ARG_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) base_url: Option<String>,
    /// Request timeout in milliseconds.
    #[arg(long = ARG_TIMEOUT_MS, value_name = "ms")]
    #[serde(default)]
    pub(crate) timeout_ms: Option<u64>,
    /// Retry requests rejected with HTTP 429.
    #[arg(long = ARG_RETRY_OVER_QUERY_LIMIT)]
    #[serde(default)]
    pub(crate) retry_over_query_limit: bool,
    /// Retry budget for HTTP 429 responses.
    #[arg(long = ARG_MAX_RETRIES, value_name = "count")]
    #[serde(default)]
    pub(crate) max_retries: Option<u32>,
}

impl MatrixArgs {
    pub(crate) fn into_config(self) -> Result<MatrixConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        MatrixConfig::try_from(merged)
    }
}

/// Resolved `matrix` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MatrixConfig {
    pub(crate) points: Vec<Waypoint>,
    pub(crate) profile: Profile,
    pub(crate) options: MatrixOptions,
    pub(crate) dry_run: bool,
    pub(crate) graphhopper: GraphHopperConfig,
}

impl TryFrom<MatrixArgs> for MatrixConfig {
    type Error = CliError;

    fn try_from(args: MatrixArgs) -> Result<Self, Self::Error> {
        let points = args.point.ok_or(CliError::MissingArgument {
            field: ARG_POINT,
            env: ENV_MATRIX_POINT,
        })?;
        if points.is_empty() {
            return Err(CliError::TooFewPoints {
                command: COMMAND,
                required: 1,
                given: 0,
            });
        }
        let graphhopper = Connection {
            api_key: args.api_key,
            base_url: args.base_url,
            timeout_ms: args.timeout_ms,
            retry_over_query_limit: args.retry_over_query_limit,
            max_retries: args.max_retries,
        }
        .into_graphhopper_config(ENV_MATRIX_API_KEY)?;
        Ok(Self {
            points,
            profile: args.profile.unwrap_or(Profile::Car),
            options: MatrixOptions {
                sources: args.sources,
                destinations: args.destinations,
                fail_fast: args.fail_fast,
                ..MatrixOptions::default()
            },
            dry_run: args.dry_run,
            graphhopper,
        })
    }
}

pub(crate) async fn run_matrix_with(
    args: MatrixArgs,
    factory: &dyn AdapterFactory,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let adapter = factory.build(config.graphhopper)?;
    let outcome = adapter
        .matrix(
            &config.points,
            &config.profile,
            &config.options,
            config.dry_run,
        )
        .await
        .map_err(|source| CliError::Routing {
            command: COMMAND,
            source,
        })?;
    write_outcome(writer, outcome, matrix_json)
}

fn matrix_json(matrix: &Matrix) -> Value {
    json!({ "times": matrix.durations, "distances": matrix.distances })
}
