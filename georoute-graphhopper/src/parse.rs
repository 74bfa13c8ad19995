//! Conversion of GraphHopper responses into the shared result types.
//!
//! These functions are pure: they take the decoded JSON body and never touch
//! the network, so they can be exercised with recorded payloads.

use geo::{Coord, LineString};
use georoute_core::{
    Direction, Directions, IntervalType, Isochrone, Isochrones, Matrix, RoutingApiError, Waypoint,
};
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::malformed_response;
use crate::wire::{IsochroneResponse, MatrixResponse, PathPoints, RoutePath, RouteResponse};

/// Decimal places of GraphHopper's encoded polylines.
pub const POLYLINE_PRECISION: u32 = 5;

fn decode<T: DeserializeOwned>(raw: &Value) -> Result<T, RoutingApiError> {
    T::deserialize(raw).map_err(|err| malformed_response(&err))
}

/// Parse a `/route` response into one [`Direction`] per path.
///
/// Durations are reported in milliseconds and distances in metres, as
/// GraphHopper returns them. A path without points has no geometry.
///
/// # Errors
///
/// Returns a [`RoutingApiError`] when the body or a path geometry is
/// malformed.
///
/// # Examples
///
/// ```
/// use georoute_graphhopper::parse_directions;
/// use serde_json::json;
///
/// let raw = json!({"paths": [{
///     "distance": 120.5,
///     "time": 30000,
///     "points_encoded": false,
///     "points": {"type": "LineString", "coordinates": [[13.4, 52.5], [13.41, 52.51]]}
/// }]});
/// let directions = parse_directions(raw)?;
/// let direction = &directions.directions[0];
/// assert_eq!(direction.duration, Some(30000.0));
/// assert_eq!(direction.geometry.as_ref().map(|line| line.0.len()), Some(2));
/// # Ok::<(), georoute_core::RoutingApiError>(())
/// ```
pub fn parse_directions(raw: Value) -> Result<Directions, RoutingApiError> {
    let response: RouteResponse = decode(&raw)?;
    let directions = response
        .paths
        .into_iter()
        .map(parse_path)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Directions { directions, raw })
}

fn parse_path(raw: Value) -> Result<Direction, RoutingApiError> {
    let path: RoutePath = decode(&raw)?;
    let geometry = path
        .points
        .map(|points| path_geometry(points, path.points_encoded))
        .transpose()?;
    Ok(Direction {
        geometry,
        duration: path.time,
        distance: path.distance,
        raw,
    })
}

fn path_geometry(
    points: PathPoints,
    points_encoded: Option<bool>,
) -> Result<LineString<f64>, RoutingApiError> {
    match points {
        PathPoints::Encoded(encoded) => {
            if points_encoded == Some(false) {
                debug!("path points arrived encoded despite points_encoded=false");
            }
            decode_polyline(&encoded)
        }
        PathPoints::GeoJson { coordinates } => coordinates
            .iter()
            .map(|position| position_to_coord(position))
            .collect::<Result<Vec<_>, _>>()
            .map(LineString::new),
    }
}

fn position_to_coord(position: &[f64]) -> Result<Coord<f64>, RoutingApiError> {
    match position {
        [x, y, ..] => Ok(Coord { x: *x, y: *y }),
        _ => Err(RoutingApiError::new(format!(
            "malformed response: position {position:?} has fewer than two values"
        ))),
    }
}

/// Decode a GraphHopper polyline into a `[lon, lat]` line string.
///
/// # Errors
///
/// Returns a [`RoutingApiError`] when the string is not a valid polyline.
pub fn decode_polyline(encoded: &str) -> Result<LineString<f64>, RoutingApiError> {
    polyline::decode_polyline(encoded, POLYLINE_PRECISION).map_err(|err| {
        RoutingApiError::new(format!("malformed response: invalid polyline: {err}"))
    })
}

/// Parse an `/isochrone` response.
///
/// Each polygon becomes an [`Isochrone`] centred on `center`; a polygon
/// without a bucket index gets bucket `0`.
///
/// # Errors
///
/// Returns a [`RoutingApiError`] when the body is malformed.
pub fn parse_isochrones(
    raw: Value,
    center: Waypoint,
    interval_type: IntervalType,
) -> Result<Isochrones, RoutingApiError> {
    let response: IsochroneResponse = decode(&raw)?;
    let polygons = raw.get("polygons").and_then(Value::as_array);
    let isochrones = response
        .polygons
        .iter()
        .enumerate()
        .map(|(index, polygon)| Isochrone {
            center,
            bucket: polygon.bucket(),
            interval_type,
            raw: polygons
                .and_then(|all| all.get(index))
                .cloned()
                .unwrap_or(Value::Null),
        })
        .collect();
    Ok(Isochrones { isochrones, raw })
}

/// Parse a `/matrix` response.
///
/// Grids that were not returned default to a single empty row.
///
/// # Errors
///
/// Returns a [`RoutingApiError`] when the body is malformed.
pub fn parse_matrix(raw: Value) -> Result<Matrix, RoutingApiError> {
    let response: MatrixResponse = decode(&raw)?;
    Ok(Matrix::from_grids(response.times, response.distances, raw))
}
