//! Normalised reachability results.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::Waypoint;

/// Whether an isochrone budget is a travel time or a travel distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalType {
    /// Budget expressed as travel time.
    #[default]
    Time,
    /// Budget expressed as travel distance.
    Distance,
}

impl IntervalType {
    /// Lowercase name used on the wire and in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Distance => "distance",
        }
    }
}

impl fmt::Display for IntervalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntervalType {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "time" => Ok(Self::Time),
            "distance" => Ok(Self::Distance),
            other => Err(format!("unknown interval type {other:?}")),
        }
    }
}

/// One reachability polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct Isochrone {
    /// The waypoint the polygon was computed from.
    pub center: Waypoint,
    /// Bucket index of the polygon; bucket `0` is the innermost.
    pub bucket: u32,
    /// Whether the budget was time or distance.
    pub interval_type: IntervalType,
    /// The provider's polygon feature, untouched.
    pub raw: Value,
}

impl Isochrone {
    /// Render the polygon as a GeoJSON `Feature`.
    ///
    /// The provider feature is kept and its properties gain `bucket`,
    /// `interval_type`, and the `[lon, lat]` `center`. A raw value that is
    /// not a feature object is wrapped as a feature without geometry.
    #[must_use]
    pub fn to_geojson(&self) -> Value {
        let mut feature = match &self.raw {
            Value::Object(raw) => raw.clone(),
            _ => Map::from_iter([
                ("type".to_owned(), json!("Feature")),
                ("geometry".to_owned(), Value::Null),
            ]),
        };
        let properties = feature
            .entry("properties")
            .or_insert_with(|| Value::Object(Map::new()));
        if !properties.is_object() {
            *properties = Value::Object(Map::new());
        }
        if let Value::Object(map) = properties {
            map.insert("bucket".to_owned(), json!(self.bucket));
            map.insert("interval_type".to_owned(), json!(self.interval_type));
            map.insert("center".to_owned(), json!(self.center.to_lon_lat()));
        }
        Value::Object(feature)
    }
}

/// The ordered set of polygons parsed from one provider response.
#[derive(Debug, Clone, PartialEq)]
pub struct Isochrones {
    /// Parsed polygons in provider order.
    pub isochrones: Vec<Isochrone>,
    /// The full provider response.
    pub raw: Value,
}

impl Isochrones {
    /// Render every polygon as a GeoJSON `FeatureCollection`.
    #[must_use]
    pub fn to_geojson(&self) -> Value {
        let features: Vec<Value> = self.isochrones.iter().map(Isochrone::to_geojson).collect();
        json!({ "type": "FeatureCollection", "features": features })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_to_time() {
        assert_eq!(IntervalType::default(), IntervalType::Time);
    }

    #[rstest]
    #[case("time", IntervalType::Time)]
    #[case("distance", IntervalType::Distance)]
    fn parses_and_displays(#[case] raw: &str, #[case] expected: IntervalType) {
        let parsed: IntervalType = raw.parse().expect("known interval type");
        assert_eq!(parsed, expected);
        assert_eq!(parsed.to_string(), raw);
    }

    #[rstest]
    fn rejects_unknown_names() {
        assert!("speed".parse::<IntervalType>().is_err());
    }

    #[rstest]
    fn geojson_annotates_provider_feature() {
        let isochrone = Isochrone {
            center: Waypoint::new(52.5, 13.4),
            bucket: 1,
            interval_type: IntervalType::Distance,
            raw: json!({
                "type": "Feature",
                "geometry": {"type": "Polygon", "coordinates": [[[13.4, 52.5], [13.5, 52.5], [13.4, 52.6], [13.4, 52.5]]]},
                "properties": {"bucket": 1, "area": 12.5}
            }),
        };

        let feature = isochrone.to_geojson();

        assert_eq!(feature["geometry"]["type"], json!("Polygon"));
        assert_eq!(feature["properties"]["area"], json!(12.5));
        assert_eq!(feature["properties"]["interval_type"], json!("distance"));
        assert_eq!(feature["properties"]["center"], json!([13.4, 52.5]));
    }

    #[rstest]
    #[case(Value::Null)]
    #[case(json!({"type": "Feature", "properties": "odd"}))]
    fn geojson_tolerates_unexpected_raw_values(#[case] raw: Value) {
        let isochrones = Isochrones {
            isochrones: vec![Isochrone {
                center: Waypoint::new(48.1, 11.6),
                bucket: 0,
                interval_type: IntervalType::Time,
                raw,
            }],
            raw: Value::Null,
        };

        let collection = isochrones.to_geojson();

        assert_eq!(collection["type"], json!("FeatureCollection"));
        let feature = &collection["features"][0];
        assert_eq!(feature["type"], json!("Feature"));
        assert_eq!(feature["properties"]["bucket"], json!(0));
        assert_eq!(feature["properties"]["interval_type"], json!("time"));
    }
}
