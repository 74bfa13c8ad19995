//! Caller-facing options for the GraphHopper endpoints.
//!
//! Field names follow GraphHopper's parameter names; dotted names such as
//! `ch.disable` or `round_trip.seed` are spelled with underscores in Rust and
//! restored on the wire.

use std::{convert::Infallible, fmt, str::FromStr};

use georoute_core::IntervalType;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A GraphHopper routing profile.
///
/// Self-hosted instances may define their own profiles; unknown names are
/// kept as [`Profile::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Profile {
    /// Car.
    Car,
    /// Bicycle.
    Bike,
    /// Walking.
    Foot,
    /// Hiking, preferring trails.
    Hike,
    /// Mountain bike.
    Mtb,
    /// Road racing bike.
    RacingBike,
    /// Motor scooter.
    Scooter,
    /// Heavy goods vehicle.
    Truck,
    /// Light goods vehicle.
    SmallTruck,
    /// Any other profile configured on the server.
    Custom(String),
}

impl Profile {
    /// Wire name of the profile.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Car => "car",
            Self::Bike => "bike",
            Self::Foot => "foot",
            Self::Hike => "hike",
            Self::Mtb => "mtb",
            Self::RacingBike => "racingbike",
            Self::Scooter => "scooter",
            Self::Truck => "truck",
            Self::SmallTruck => "small_truck",
            Self::Custom(name) => name,
        }
    }
}

impl From<String> for Profile {
    fn from(value: String) -> Self {
        match value.as_str() {
            "car" => Self::Car,
            "bike" => Self::Bike,
            "foot" => Self::Foot,
            "hike" => Self::Hike,
            "mtb" => Self::Mtb,
            "racingbike" => Self::RacingBike,
            "scooter" => Self::Scooter,
            "truck" => Self::Truck,
            "small_truck" => Self::SmallTruck,
            _ => Self::Custom(value),
        }
    }
}

impl From<Profile> for String {
    fn from(value: Profile) -> Self {
        match value {
            Profile::Custom(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

impl FromStr for Profile {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(input.to_owned()))
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Special routing algorithms that replace plain A-to-B routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// A round trip starting and ending at the first point.
    RoundTrip,
    /// Several alternative routes between two points.
    AlternativeRoute,
}

/// Options for the `/route` endpoint.
///
/// Every field is optional; `Default` sends nothing beyond the profile and
/// points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectionsOptions {
    /// Language of turn instructions, e.g. `"de"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Include elevation in the returned geometry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<bool>,
    /// Path details to return, e.g. `"road_class"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
    /// Reorder intermediate points for the shortest overall route.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimize: Option<String>,
    /// Return turn-by-turn instructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<bool>,
    /// Compute the route geometry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calc_points: Option<bool>,
    /// Return debug information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    /// Return geometry as an encoded polyline instead of GeoJSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_encoded: Option<bool>,
    /// Disable contraction hierarchies explicitly.
    #[serde(rename = "ch.disable", skip_serializing_if = "Option::is_none")]
    pub ch_disable: Option<bool>,
    /// Per-request custom model adjusting speed and priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_model: Option<Value>,
    /// Preferred heading in degrees at each point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headings: Option<Vec<f64>>,
    /// Penalty in seconds for not matching a heading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_penalty: Option<f64>,
    /// Avoid U-turns at intermediate points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_through: Option<bool>,
    /// Special routing algorithm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<Algorithm>,
    /// Approximate round trip length in metres.
    #[serde(rename = "round_trip.distance", skip_serializing_if = "Option::is_none")]
    pub round_trip_distance: Option<f64>,
    /// Seed selecting a different round trip.
    #[serde(rename = "round_trip.seed", skip_serializing_if = "Option::is_none")]
    pub round_trip_seed: Option<u64>,
    /// Maximum number of alternative routes.
    #[serde(
        rename = "alternative_route.max_paths",
        skip_serializing_if = "Option::is_none"
    )]
    pub alternative_route_max_paths: Option<u32>,
    /// How much longer than the best route an alternative may be.
    #[serde(
        rename = "alternative_route.max_weight_factor",
        skip_serializing_if = "Option::is_none"
    )]
    pub alternative_route_max_weight_factor: Option<f64>,
    /// How much an alternative may overlap the best route.
    #[serde(
        rename = "alternative_route.max_share_factor",
        skip_serializing_if = "Option::is_none"
    )]
    pub alternative_route_max_share_factor: Option<f64>,
    /// Street-name hints used when snapping each point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hints: Option<Vec<String>>,
    /// Road types to avoid when snapping points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snap_preventions: Option<Vec<String>>,
    /// Side of the road to arrive on at each point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curbsides: Option<Vec<String>>,
}

impl DirectionsOptions {
    /// Whether these options need contraction hierarchies disabled.
    ///
    /// GraphHopper's CH speed-up cannot serve custom models, heading
    /// constraints, pass-through, round trips, or alternative routes. A
    /// present numeric option counts even when zero; `headings` counts only
    /// when non-empty and `pass_through` only when `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use georoute_graphhopper::{Algorithm, DirectionsOptions};
    ///
    /// assert!(!DirectionsOptions::default().requires_ch_disable());
    ///
    /// let round_trip = DirectionsOptions {
    ///     algorithm: Some(Algorithm::RoundTrip),
    ///     ..DirectionsOptions::default()
    /// };
    /// assert!(round_trip.requires_ch_disable());
    /// ```
    #[must_use]
    pub fn requires_ch_disable(&self) -> bool {
        self.custom_model.is_some()
            || self.headings.as_ref().is_some_and(|headings| !headings.is_empty())
            || self.heading_penalty.is_some()
            || self.pass_through == Some(true)
            || self.algorithm.is_some()
            || self.round_trip_distance.is_some()
            || self.round_trip_seed.is_some()
            || self.alternative_route_max_paths.is_some()
            || self.alternative_route_max_weight_factor.is_some()
            || self.alternative_route_max_share_factor.is_some()
    }
}

/// Options for the `/isochrone` endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsochroneOptions {
    /// Whether the interval is a time (seconds) or distance (metres) budget.
    #[serde(default)]
    pub interval_type: IntervalType,
    /// Number of equally sized polygons to split the budget into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buckets: Option<u32>,
    /// Compute reachability towards the point instead of away from it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse_flow: Option<bool>,
}

/// Options for the `/matrix` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixOptions {
    /// Indices of the waypoints used as origins; all when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<usize>>,
    /// Indices of the waypoints used as destinations; all when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<usize>>,
    /// Grids to compute; defaults to `["times", "distances"]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_arrays: Option<Vec<String>>,
    /// Fail the whole request when one pair is unroutable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_fast: Option<bool>,
    /// Road types to avoid when snapping points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snap_preventions: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("car", Profile::Car)]
    #[case("small_truck", Profile::SmallTruck)]
    #[case("racingbike", Profile::RacingBike)]
    #[case("wheelchair", Profile::Custom("wheelchair".to_owned()))]
    fn profile_names_round_trip(#[case] name: &str, #[case] expected: Profile) {
        let profile: Profile = name.parse().unwrap_or_else(|never| match never {});
        assert_eq!(profile, expected);
        assert_eq!(profile.to_string(), name);
        assert_eq!(serde_json::to_value(&profile).expect("serialise"), json!(name));
    }

    fn with(mutate: impl FnOnce(&mut DirectionsOptions)) -> DirectionsOptions {
        let mut options = DirectionsOptions::default();
        mutate(&mut options);
        options
    }

    #[rstest]
    #[case(with(|o| o.custom_model = Some(json!({"priority": []}))))]
    #[case(with(|o| o.headings = Some(vec![90.0])))]
    #[case(with(|o| o.heading_penalty = Some(0.0)))]
    #[case(with(|o| o.pass_through = Some(true)))]
    #[case(with(|o| o.algorithm = Some(Algorithm::AlternativeRoute)))]
    #[case(with(|o| o.round_trip_distance = Some(10_000.0)))]
    #[case(with(|o| o.round_trip_seed = Some(0)))]
    #[case(with(|o| o.alternative_route_max_paths = Some(3)))]
    #[case(with(|o| o.alternative_route_max_weight_factor = Some(1.4)))]
    #[case(with(|o| o.alternative_route_max_share_factor = Some(0.6)))]
    fn advanced_options_disable_ch(#[case] options: DirectionsOptions) {
        assert!(options.requires_ch_disable());
    }

    #[rstest]
    #[case(DirectionsOptions::default())]
    #[case(with(|o| o.headings = Some(Vec::new())))]
    #[case(with(|o| o.pass_through = Some(false)))]
    #[case(with(|o| {
        o.locale = Some("de".to_owned());
        o.instructions = Some(true);
        o.points_encoded = Some(false);
        o.details = Some(vec!["road_class".to_owned()]);
    }))]
    fn plain_options_keep_ch(#[case] options: DirectionsOptions) {
        assert!(!options.requires_ch_disable());
    }

    #[rstest]
    fn dotted_names_are_restored() {
        let options = with(|o| {
            o.round_trip_seed = Some(7);
            o.ch_disable = Some(false);
            o.alternative_route_max_paths = Some(2);
        });
        let value = serde_json::to_value(&options).expect("serialise");
        assert_eq!(
            value,
            json!({
                "round_trip.seed": 7,
                "ch.disable": false,
                "alternative_route.max_paths": 2,
            })
        );
    }
}
