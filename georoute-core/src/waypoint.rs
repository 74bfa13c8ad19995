//! Geographic input coordinates accepted by every adapter operation.

use std::{fmt, str::FromStr};

use geo::Coord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A geographic coordinate in latitude/longitude order.
///
/// Callers usually think in `[lat, lon]`, while most routing services expect
/// `[lon, lat]` on the wire. Adapters convert with [`Waypoint::to_lon_lat`].
/// Ranges are not validated.
///
/// Deserialisation accepts both a `[lat, lon]` array and an object with named
/// `lat`/`lon` fields.
///
/// # Examples
///
/// ```
/// use georoute_core::Waypoint;
///
/// let berlin = Waypoint::new(52.52, 13.405);
/// assert_eq!(berlin.to_lon_lat(), [13.405, 52.52]);
///
/// let parsed: Waypoint = "52.52,13.405".parse()?;
/// assert_eq!(parsed, berlin);
///
/// let from_array: Waypoint = serde_json::from_str("[52.52, 13.405]")?;
/// let from_object: Waypoint = serde_json::from_str(r#"{"lat": 52.52, "lon": 13.405}"#)?;
/// assert_eq!(from_array, from_object);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "WaypointRepr")]
pub struct Waypoint {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WaypointRepr {
    Pair([f64; 2]),
    Named { lat: f64, lon: f64 },
}

impl From<WaypointRepr> for Waypoint {
    fn from(value: WaypointRepr) -> Self {
        match value {
            WaypointRepr::Pair([lat, lon]) | WaypointRepr::Named { lat, lon } => {
                Self::new(lat, lon)
            }
        }
    }
}

impl Waypoint {
    /// Construct a waypoint from latitude and longitude.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Return the coordinate in `[lon, lat]` wire order.
    #[must_use]
    pub const fn to_lon_lat(self) -> [f64; 2] {
        [self.lon, self.lat]
    }

    /// Return the coordinate as a `geo` coordinate (`x` = longitude).
    #[must_use]
    pub const fn to_coord(self) -> Coord<f64> {
        Coord {
            x: self.lon,
            y: self.lat,
        }
    }
}

impl From<[f64; 2]> for Waypoint {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self::new(lat, lon)
    }
}

impl From<(f64, f64)> for Waypoint {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

/// Renders `lat,lon`.
impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// Errors returned when parsing a `lat,lon` string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaypointParseError {
    /// The input did not contain exactly one comma.
    #[error("expected `lat,lon`, got {input:?}")]
    Format {
        /// The rejected input.
        input: String,
    },
    /// One of the components was not a number.
    #[error("invalid {axis} in {input:?}")]
    Number {
        /// Which component failed (`latitude` or `longitude`).
        axis: &'static str,
        /// The rejected input.
        input: String,
    },
}

impl FromStr for Waypoint {
    type Err = WaypointParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let Some((lat, lon)) = input.split_once(',') else {
            return Err(WaypointParseError::Format {
                input: input.to_owned(),
            });
        };
        if lon.contains(',') {
            return Err(WaypointParseError::Format {
                input: input.to_owned(),
            });
        }
        let parse_axis = |raw: &str, axis: &'static str| {
            raw.trim()
                .parse::<f64>()
                .map_err(|_| WaypointParseError::Number {
                    axis,
                    input: input.to_owned(),
                })
        };
        Ok(Self::new(
            parse_axis(lat, "latitude")?,
            parse_axis(lon, "longitude")?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("52.5,13.4", Waypoint::new(52.5, 13.4))]
    #[case(" -33.9 , 151.2 ", Waypoint::new(-33.9, 151.2))]
    fn parses_lat_lon_strings(#[case] input: &str, #[case] expected: Waypoint) {
        let parsed: Waypoint = input.parse().expect("valid waypoint");
        assert_eq!(parsed, expected);
    }

    #[rstest]
    #[case("52.5")]
    #[case("1,2,3")]
    fn rejects_malformed_strings(#[case] input: &str) {
        let err = input.parse::<Waypoint>().expect_err("should fail");
        assert!(matches!(err, WaypointParseError::Format { .. }));
    }

    #[rstest]
    fn reports_the_failing_axis() {
        let err = "52.5,east".parse::<Waypoint>().expect_err("should fail");
        assert_eq!(
            err,
            WaypointParseError::Number {
                axis: "longitude",
                input: "52.5,east".to_owned(),
            }
        );
    }

    #[rstest]
    fn display_matches_parse_input() {
        let waypoint = Waypoint::new(48.1, 11.5);
        assert_eq!(waypoint.to_string(), "48.1,11.5");
        assert_eq!(waypoint.to_string().parse::<Waypoint>(), Ok(waypoint));
    }

    #[rstest]
    fn coord_uses_longitude_as_x() {
        let coord = Waypoint::new(48.1, 11.5).to_coord();
        assert_eq!(coord, Coord { x: 11.5, y: 48.1 });
    }

    #[rstest]
    fn deserialises_both_shapes() {
        let pair: Vec<Waypoint> =
            serde_json::from_str(r#"[[1.0, 2.0], {"lat": 3.0, "lon": 4.0}]"#)
                .expect("should deserialise");
        assert_eq!(pair, vec![Waypoint::new(1.0, 2.0), Waypoint::new(3.0, 4.0)]);
    }
}
