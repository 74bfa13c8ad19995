//! The `directions` command.

use std::io::Write;

use clap::Parser;
use georoute_core::Waypoint;
use georoute_graphhopper::{Algorithm, DirectionsOptions, GraphHopperConfig, Profile};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::connection::{AdapterFactory, Connection};
use crate::output::write_outcome;
use crate::{
    ARG_ALTERNATIVES, ARG_API_KEY, ARG_BASE_URL, ARG_DRY_RUN, ARG_LOCALE, ARG_MAX_RETRIES,
    ARG_POINT, ARG_PROFILE, ARG_RETRY_OVER_QUERY_LIMIT, ARG_TIMEOUT_MS, CliError,
    ENV_DIRECTIONS_API_KEY, ENV_DIRECTIONS_POINT,
};

const COMMAND: &str = "directions";

/// CLI arguments for the `directions` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a route through the given points in order. Points are \
                 written as lat,lon. Connection settings can come from CLI \
                 flags, configuration files, or environment variables.",
    about = "Plan a route through two or more points"
)]
#[ortho_config(prefix = "GEOROUTE")]
pub(crate) struct DirectionsArgs {
    /// Waypoint as lat,lon; repeat for every stop in order.
    #[arg(long = ARG_POINT, value_name = "lat,lon")]
    #[serde(default)]
    pub(crate) point: Option<Vec<Waypoint>>,
    /// GraphHopper profile such as car, bike, or foot.
    #[arg(long = ARG_PROFILE, value_name = "name")]
    #[serde(default)]
    pub(crate) profile: Option<Profile>,
    /// Language of turn instructions.
    #[arg(long = ARG_LOCALE, value_name = "code")]
    #[serde(default)]
    pub(crate) locale: Option<String>,
    /// Ask for up to this many alternative routes.
    #[arg(long = ARG_ALTERNATIVES, value_name = "count")]
    #[serde(default)]
    pub(crate) alternatives: Option<u32>,
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

impl DirectionsArgs {
    pub(crate) fn into_config(self) -> Result<DirectionsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        DirectionsConfig::try_from(merged)
    }
}

/// Resolved `directions` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DirectionsConfig {
    pub(crate) points: Vec<Waypoint>,
    pub(crate) profile: Profile,
    pub(crate) options: DirectionsOptions,
    pub(crate) dry_run: bool,
    pub(crate) graphhopper: GraphHopperConfig,
}

impl TryFrom<DirectionsArgs> for DirectionsConfig {
    type Error = CliError;

    fn try_from(args: DirectionsArgs) -> Result<Self, Self::Error> {
        let points = args.point.ok_or(CliError::MissingArgument {
            field: ARG_POINT,
            env: ENV_DIRECTIONS_POINT,
        })?;
        if points.len() < 2 {
            return Err(CliError::TooFewPoints {
                command: COMMAND,
                required: 2,
                given: points.len(),
            });
        }
        let options = DirectionsOptions {
            locale: args.locale,
            algorithm: args.alternatives.map(|_| Algorithm::AlternativeRoute),
            alternative_route_max_paths: args.alternatives,
            ..DirectionsOptions::default()
        };
        let graphhopper = Connection {
            api_key: args.api_key,
            base_url: args.base_url,
            timeout_ms: args.timeout_ms,
            retry_over_query_limit: args.retry_over_query_limit,
            max_retries: args.max_retries,
        }
        .into_graphhopper_config(ENV_DIRECTIONS_API_KEY)?;
        Ok(Self {
            points,
            profile: args.profile.unwrap_or(Profile::Car),
            options,
            dry_run: args.dry_run,
            graphhopper,
        })
    }
}

pub(crate) async fn run_directions_with(
    args: DirectionsArgs,
    factory: &dyn AdapterFactory,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let adapter = factory.build(config.graphhopper)?;
    let outcome = adapter
        .directions(
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
    write_outcome(writer, outcome, |directions| directions.to_geojson())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<DirectionsConfig, CliError> {
    let merged = DirectionsArgs::merge_from_layers(layers).map_err(CliError::from)?;
    DirectionsConfig::try_from(merged)
}
