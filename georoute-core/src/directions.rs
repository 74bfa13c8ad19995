//! Normalised route results.

use geo::LineString;
use serde_json::{Value, json};

/// A single route returned by a provider.
///
/// The geometry is stored with `x` = longitude and `y` = latitude, matching
/// GeoJSON axis order regardless of how the provider encoded it.
#[derive(Debug, Clone, PartialEq)]
pub struct Direction {
    /// Route geometry, absent when the provider was asked not to compute
    /// points.
    pub geometry: Option<LineString<f64>>,
    /// Travel duration as reported by the provider.
    pub duration: Option<f64>,
    /// Travel distance as reported by the provider.
    pub distance: Option<f64>,
    /// The provider's path object, untouched.
    pub raw: Value,
}

impl Direction {
    /// Render the route as a GeoJSON `Feature`.
    ///
    /// # Examples
    ///
    /// ```
    /// use geo::line_string;
    /// use georoute_core::Direction;
    /// use serde_json::json;
    ///
    /// let direction = Direction {
    ///     geometry: Some(line_string![(x: 13.4, y: 52.5), (x: 13.5, y: 52.6)]),
    ///     duration: Some(1_000.0),
    ///     distance: Some(250.0),
    ///     raw: json!({}),
    /// };
    /// let feature = direction.to_geojson();
    /// assert_eq!(feature["geometry"]["coordinates"][0], json!([13.4, 52.5]));
    /// assert_eq!(feature["properties"]["distance"], json!(250.0));
    /// ```
    #[must_use]
    pub fn to_geojson(&self) -> Value {
        let geometry = self.geometry.as_ref().map_or(Value::Null, |line| {
            let coordinates: Vec<[f64; 2]> = line.coords().map(|coord| [coord.x, coord.y]).collect();
            json!({ "type": "LineString", "coordinates": coordinates })
        });
        json!({
            "type": "Feature",
            "geometry": geometry,
            "properties": {
                "duration": self.duration,
                "distance": self.distance,
            },
        })
    }
}

/// The ordered set of routes parsed from one provider response.
#[derive(Debug, Clone, PartialEq)]
pub struct Directions {
    /// Parsed routes in provider order.
    pub directions: Vec<Direction>,
    /// The full provider response.
    pub raw: Value,
}

impl Directions {
    /// Render every route as a GeoJSON `FeatureCollection`.
    #[must_use]
    pub fn to_geojson(&self) -> Value {
        let features: Vec<Value> = self.directions.iter().map(Direction::to_geojson).collect();
        json!({ "type": "FeatureCollection", "features": features })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::line_string;
    use rstest::rstest;

    #[rstest]
    fn missing_geometry_renders_null() {
        let direction = Direction {
            geometry: None,
            duration: Some(10.0),
            distance: None,
            raw: json!({"time": 10.0}),
        };
        let feature = direction.to_geojson();
        assert_eq!(feature["geometry"], Value::Null);
        assert_eq!(feature["properties"]["duration"], json!(10.0));
        assert_eq!(feature["properties"]["distance"], Value::Null);
    }

    #[rstest]
    fn collection_keeps_route_order() {
        let first = Direction {
            geometry: Some(line_string![(x: 1.0, y: 2.0), (x: 3.0, y: 4.0)]),
            duration: Some(1.0),
            distance: Some(1.0),
            raw: json!({}),
        };
        let second = Direction {
            duration: Some(2.0),
            ..first.clone()
        };
        let directions = Directions {
            directions: vec![first, second],
            raw: json!({}),
        };
        let collection = directions.to_geojson();
        assert_eq!(collection["type"], "FeatureCollection");
        assert_eq!(collection["features"][1]["properties"]["duration"], json!(2.0));
        assert_eq!(
            collection["features"][0]["geometry"]["coordinates"],
            json!([[1.0, 2.0], [3.0, 4.0]])
        );
    }
}
