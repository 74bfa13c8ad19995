//! Command-line interface for GraphHopper routing requests.
#![forbid(unsafe_code)]

mod connection;
mod directions;
mod error;
mod isochrone;
mod matrix;
mod output;

use std::io::Write;

use clap::{Parser, Subcommand};

use connection::{AdapterFactory, HttpAdapterFactory};
use directions::DirectionsArgs;
use isochrone::IsochroneArgs;
use matrix::MatrixArgs;

pub use error::CliError;

pub(crate) const ARG_POINT: &str = "point";
pub(crate) const ARG_PROFILE: &str = "profile";
pub(crate) const ARG_DRY_RUN: &str = "dry-run";
pub(crate) const ARG_API_KEY: &str = "api-key";
pub(crate) const ARG_BASE_URL: &str = "base-url";
pub(crate) const ARG_TIMEOUT_MS: &str = "timeout-ms";
pub(crate) const ARG_RETRY_OVER_QUERY_LIMIT: &str = "retry-over-query-limit";
pub(crate) const ARG_MAX_RETRIES: &str = "max-retries";
pub(crate) const ARG_LOCALE: &str = "locale";
pub(crate) const ARG_ALTERNATIVES: &str = "alternatives";
pub(crate) const ARG_TIME_LIMIT: &str = "time-limit";
pub(crate) const ARG_DISTANCE_LIMIT: &str = "distance-limit";
pub(crate) const ARG_BUCKETS: &str = "buckets";
pub(crate) const ARG_REVERSE_FLOW: &str = "reverse-flow";
pub(crate) const ARG_SOURCES: &str = "sources";
pub(crate) const ARG_DESTINATIONS: &str = "destinations";
pub(crate) const ARG_FAIL_FAST: &str = "fail-fast";

pub(crate) const ENV_DIRECTIONS_POINT: &str = "GEOROUTE_CMDS_DIRECTIONS_POINT";
pub(crate) const ENV_DIRECTIONS_API_KEY: &str = "GEOROUTE_CMDS_DIRECTIONS_API_KEY";
pub(crate) const ENV_ISOCHRONE_POINT: &str = "GEOROUTE_CMDS_ISOCHRONE_POINT";
pub(crate) const ENV_ISOCHRONE_TIME_LIMIT: &str = "GEOROUTE_CMDS_ISOCHRONE_TIME_LIMIT";
pub(crate) const ENV_ISOCHRONE_API_KEY: &str = "GEOROUTE_CMDS_ISOCHRONE_API_KEY";
pub(crate) const ENV_MATRIX_POINT: &str = "GEOROUTE_CMDS_MATRIX_POINT";
pub(crate) const ENV_MATRIX_API_KEY: &str = "GEOROUTE_CMDS_MATRIX_API_KEY";

/// Run the georoute CLI with the current process arguments and environment.
///
/// Results are written to standard output.
///
/// # Errors
///
/// Returns a [`CliError`] when arguments or configuration are invalid, or
/// when the routing request fails.
pub async fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    run_command_with(cli.command, &HttpAdapterFactory, &mut stdout).await
}

async fn run_command_with(
    command: Command,
    factory: &dyn AdapterFactory,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    match command {
        Command::Directions(args) => directions::run_directions_with(args, factory, writer).await,
        Command::Isochrone(args) => isochrone::run_isochrone_with(args, factory, writer).await,
        Command::Matrix(args) => matrix::run_matrix_with(args, factory, writer).await,
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "georoute",
    about = "Directions, isochrones, and matrices from GraphHopper",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan a route through two or more points.
    Directions(DirectionsArgs),
    /// Compute the area reachable from a point.
    Isochrone(IsochroneArgs),
    /// Compute travel times and distances between points.
    Matrix(MatrixArgs),
}

#[cfg(test)]
mod tests;
