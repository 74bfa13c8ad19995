//! Translation of caller options into GraphHopper request parameters.

use georoute_core::{IntervalType, Waypoint};
use serde::Serialize;
use serde_json::Value;

use crate::options::{DirectionsOptions, IsochroneOptions, MatrixOptions, Profile};

/// Grids requested from `/matrix` unless the caller names others.
pub const DEFAULT_OUT_ARRAYS: [&str; 2] = ["times", "distances"];

#[derive(Serialize)]
struct RouteBody<'a> {
    profile: &'a Profile,
    points: Vec<[f64; 2]>,
    #[serde(flatten)]
    options: DirectionsOptions,
}

#[derive(Serialize)]
struct MatrixBody<'a> {
    profile: &'a Profile,
    from_points: Vec<[f64; 2]>,
    to_points: Vec<[f64; 2]>,
    out_arrays: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fail_fast: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    snap_preventions: Option<&'a [String]>,
}

/// JSON body for `POST /route`.
///
/// Points are sent as `[lon, lat]`. `ch.disable` is forced on when the
/// options need it, overriding any caller value.
pub(crate) fn route_body(
    waypoints: &[Waypoint],
    profile: &Profile,
    options: &DirectionsOptions,
) -> Result<Value, serde_json::Error> {
    let mut options = options.clone();
    if options.requires_ch_disable() {
        options.ch_disable = Some(true);
    }
    serde_json::to_value(RouteBody {
        profile,
        points: waypoints.iter().copied().map(Waypoint::to_lon_lat).collect(),
        options,
    })
}

/// Query pairs for `GET /isochrone`, excluding the API key.
pub(crate) fn isochrone_query(
    center: Waypoint,
    profile: &Profile,
    limit: f64,
    options: &IsochroneOptions,
) -> Vec<(&'static str, String)> {
    let limit_key = match options.interval_type {
        IntervalType::Time => "time_limit",
        IntervalType::Distance => "distance_limit",
    };
    let mut query = vec![
        ("point", center.to_string()),
        ("profile", profile.to_string()),
        (limit_key, limit.to_string()),
    ];
    if let Some(buckets) = options.buckets {
        query.push(("buckets", buckets.to_string()));
    }
    if let Some(reverse_flow) = options.reverse_flow {
        query.push(("reverse_flow", reverse_flow.to_string()));
    }
    query
}

/// JSON body for `POST /matrix`.
///
/// `sources` and `destinations` select waypoints locally and are not sent.
pub(crate) fn matrix_body(
    waypoints: &[Waypoint],
    profile: &Profile,
    options: &MatrixOptions,
) -> Result<Value, serde_json::Error> {
    let out_arrays = options.out_arrays.clone().unwrap_or_else(|| {
        DEFAULT_OUT_ARRAYS
            .iter()
            .map(|name| (*name).to_owned())
            .collect()
    });
    serde_json::to_value(MatrixBody {
        profile,
        from_points: select_points(waypoints, options.sources.as_deref()),
        to_points: select_points(waypoints, options.destinations.as_deref()),
        out_arrays,
        fail_fast: options.fail_fast,
        snap_preventions: options.snap_preventions.as_deref(),
    })
}

/// Waypoints whose index appears in `indices`, in input order, as
/// `[lon, lat]`. Out-of-range indices select nothing.
fn select_points(waypoints: &[Waypoint], indices: Option<&[usize]>) -> Vec<[f64; 2]> {
    waypoints
        .iter()
        .enumerate()
        .filter(|(index, _)| indices.is_none_or(|wanted| wanted.contains(index)))
        .map(|(_, waypoint)| waypoint.to_lon_lat())
        .collect()
}
