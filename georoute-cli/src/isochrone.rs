//! The `isochrone` command.

use std::io::Write;

use clap::Parser;
use georoute_core::{IntervalType, Waypoint};
use georoute_graphhopper::{GraphHopperConfig, IsochroneOptions, Profile};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::connection::{AdapterFactory, Connection};
use crate::output::write_outcome;
use crate::{
    ARG_API_KEY, ARG_BASE_URL, ARG_BUCKETS, ARG_DISTANCE_LIMIT, ARG_DRY_RUN, ARG_MAX_RETRIES,
    ARG_POINT, ARG_PROFILE, ARG_RETRY_OVER_QUERY_LIMIT, ARG_REVERSE_FLOW, ARG_TIME_LIMIT,
    ARG_TIMEOUT_MS, CliError, ENV_ISOCHRONE_API_KEY, ENV_ISOCHRONE_POINT,
    ENV_ISOCHRONE_TIME_LIMIT,
};

const COMMAND: &str = "isochrone";

/// CLI arguments for the `isochrone` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Compute the area reachable from a point within a time \
                 (seconds) or distance (metres) budget, optionally split \
                 into equally sized buckets.",
    about = "Compute the area reachable from a point"
)]
#[ortho_config(prefix = "GEOROUTE")]
pub(crate) struct IsochroneArgs {
    /// Centre point as lat,lon.
    #[arg(long = ARG_POINT, value_name = "lat,lon")]
    #[serde(default)]
    pub(crate) point: Option<Waypoint>,
    /// GraphHopper profile such as car, bike, or foot.
    #[arg(long = ARG_PROFILE, value_name = "name")]
    #[serde(default)]
    pub(crate) profile: Option<Profile>,
    /// Time budget in seconds.
    #[arg(long = ARG_TIME_LIMIT, value_name = "seconds", conflicts_with = "distance_limit")]
    #[serde(default)]
    pub(crate) time_limit: Option<f64>,
    /// Distance budget in metres.
    #[arg(long = ARG_DISTANCE_LIMIT, value_name = "metres")]
    #[serde(default)]
    pub(crate) distance_limit: Option<f64>,
    /// Number of polygons to split the budget into.
    #[arg(long = ARG_BUCKETS, value_name = "count")]
    #[serde(default)]
    pub(crate) buckets: Option<u32>,
    /// Compute the area from which the point is reachable instead.
    #[arg(long = ARG_REVERSE_FLOW, value_name = "bool")]
    #[serde(default)]
    pub(crate) reverse_flow: Option<bool>,
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

impl IsochroneArgs {
    pub(crate) fn into_config(self) -> Result<IsochroneConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        IsochroneConfig::try_from(merged)
    }
}

/// Resolved `isochrone` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct IsochroneConfig {
    pub(crate) point: Waypoint,
    pub(crate) profile: Profile,
    pub(crate) limit: f64,
    pub(crate) options: IsochroneOptions,
    pub(crate) dry_run: bool,
    pub(crate) graphhopper: GraphHopperConfig,
}

impl TryFrom<IsochroneArgs> for IsochroneConfig {
    type Error = CliError;

    fn try_from(args: IsochroneArgs) -> Result<Self, Self::Error> {
        let point = args.point.ok_or(CliError::MissingArgument {
            field: ARG_POINT,
            env: ENV_ISOCHRONE_POINT,
        })?;
        let (limit, interval_type) = match (args.time_limit, args.distance_limit) {
            (Some(_), Some(_)) => {
                return Err(CliError::ConflictingArguments {
                    first: ARG_TIME_LIMIT,
                    second: ARG_DISTANCE_LIMIT,
                });
            }
            (Some(seconds), None) => (seconds, IntervalType::Time),
            (None, Some(metres)) => (metres, IntervalType::Distance),
            (None, None) => {
                return Err(CliError::MissingArgument {
                    field: ARG_TIME_LIMIT,
                    env: ENV_ISOCHRONE_TIME_LIMIT,
                });
            }
        };
        let graphhopper = Connection {
            api_key: args.api_key,
            base_url: args.base_url,
            timeout_ms: args.timeout_ms,
            retry_over_query_limit: args.retry_over_query_limit,
            max_retries: args.max_retries,
        }
        .into_graphhopper_config(ENV_ISOCHRONE_API_KEY)?;
        Ok(Self {
            point,
            profile: args.profile.unwrap_or(Profile::Car),
            limit,
            options: IsochroneOptions {
                interval_type,
                buckets: args.buckets,
                reverse_flow: args.reverse_flow,
            },
            dry_run: args.dry_run,
            graphhopper,
        })
    }
}

pub(crate) async fn run_isochrone_with(
    args: IsochroneArgs,
    factory: &dyn AdapterFactory,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let adapter = factory.build(config.graphhopper)?;
    let outcome = adapter
        .reachability(
            config.point,
            &config.profile,
            &[config.limit],
            &config.options,
            config.dry_run,
        )
        .await
        .map_err(|source| CliError::Routing {
            command: COMMAND,
            source,
        })?;
    write_outcome(writer, outcome, |isochrones| isochrones.to_geojson())
}
