//! GraphHopper response payloads.
//!
//! Only the fields the adapter reads are modelled; everything else stays in
//! the raw JSON kept alongside each parsed result.
//!
//! See: <https://docs.graphhopper.com/>

use georoute_core::ApiHint;
use serde::Deserialize;
use serde_json::Value;

/// `/route` response: one entry per computed path.
#[derive(Debug, Deserialize)]
pub(crate) struct RouteResponse {
    #[serde(default)]
    pub paths: Vec<Value>,
}

/// The fields of one route path that feed a `Direction`.
#[derive(Debug, Deserialize)]
pub(crate) struct RoutePath {
    /// Length in metres.
    pub distance: Option<f64>,
    /// Travel time in milliseconds.
    pub time: Option<f64>,
    /// Geometry; absent when `calc_points` was false.
    pub points: Option<PathPoints>,
    /// Whether `points` is an encoded polyline.
    #[serde(default)]
    pub points_encoded: Option<bool>,
}

/// Path geometry in either of GraphHopper's encodings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum PathPoints {
    /// Google polyline with five decimal places.
    Encoded(String),
    /// GeoJSON `LineString`; positions may carry a third elevation value.
    GeoJson { coordinates: Vec<Vec<f64>> },
}

/// `/isochrone` response.
#[derive(Debug, Deserialize)]
pub(crate) struct IsochroneResponse {
    #[serde(default)]
    pub polygons: Vec<IsochronePolygon>,
}

/// A GeoJSON polygon feature; only its bucket index is read.
#[derive(Debug, Deserialize)]
pub(crate) struct IsochronePolygon {
    #[serde(default)]
    pub properties: Option<PolygonProperties>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PolygonProperties {
    #[serde(default)]
    pub bucket: Option<u32>,
}

impl IsochronePolygon {
    pub(crate) fn bucket(&self) -> u32 {
        self.properties
            .as_ref()
            .and_then(|properties| properties.bucket)
            .unwrap_or_default()
    }
}

/// `/matrix` response; grids not requested are absent.
#[derive(Debug, Deserialize)]
pub(crate) struct MatrixResponse {
    pub times: Option<Vec<Vec<Option<f64>>>>,
    pub distances: Option<Vec<Vec<Option<f64>>>>,
}

/// Error payload returned with non-2xx statuses.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
    #[serde(default)]
    pub hints: Vec<ApiHint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialise_encoded_path() {
        let json = r#"{
            "distance": 1791.011,
            "time": 404330,
            "points_encoded": true,
            "points": "oxg_Iy|ppAl@wCdE}LfFsN|@_Ej@eEtAaMh@sGVuDNcDb@{PFyGdAi]"
        }"#;

        let path: RoutePath = serde_json::from_str(json).expect("should deserialise");

        assert_eq!(path.distance, Some(1791.011));
        assert_eq!(path.time, Some(404_330.0));
        assert_eq!(path.points_encoded, Some(true));
        assert!(matches!(path.points, Some(PathPoints::Encoded(_))));
    }

    #[test]
    fn deserialise_geojson_path_with_elevation() {
        let json = r#"{
            "points_encoded": false,
            "points": {"type": "LineString", "coordinates": [[13.38, 52.51, 34.2], [13.39, 52.52, 35.0]]}
        }"#;

        let path: RoutePath = serde_json::from_str(json).expect("should deserialise");

        match path.points {
            Some(PathPoints::GeoJson { coordinates }) => {
                assert_eq!(coordinates.len(), 2);
                assert_eq!(coordinates[0], vec![13.38, 52.51, 34.2]);
            }
            other => panic!("expected GeoJSON points, got {other:?}"),
        }
        assert!(path.distance.is_none());
    }

    #[test]
    fn polygon_bucket_defaults_to_zero() {
        let json = r#"{"polygons": [
            {"type": "Feature", "properties": {"bucket": 2}},
            {"type": "Feature", "properties": {}},
            {"type": "Feature"}
        ]}"#;

        let response: IsochroneResponse = serde_json::from_str(json).expect("should deserialise");

        let buckets: Vec<u32> = response.polygons.iter().map(IsochronePolygon::bucket).collect();
        assert_eq!(buckets, vec![2, 0, 0]);
    }

    #[test]
    fn deserialise_matrix_with_unroutable_pairs() {
        let json = r#"{"times": [[0, null], [85, 0]]}"#;

        let response: MatrixResponse = serde_json::from_str(json).expect("should deserialise");

        let times = response.times.expect("should have times");
        assert_eq!(times[0][1], None);
        assert_eq!(times[1][0], Some(85.0));
        assert!(response.distances.is_none());
    }

    #[test]
    fn deserialise_error_body() {
        let json = r#"{
            "message": "Cannot find point 1: 91.0,13.4",
            "hints": [{"message": "Cannot find point 1: 91.0,13.4", "details": "PointNotFoundException", "point_index": 1}]
        }"#;

        let body: ErrorBody = serde_json::from_str(json).expect("should deserialise");

        assert_eq!(body.message.as_deref(), Some("Cannot find point 1: 91.0,13.4"));
        assert_eq!(body.hints.len(), 1);
        assert_eq!(body.hints[0].point_index, Some(1));
        assert_eq!(body.hints[0].details.as_deref(), Some("PointNotFoundException"));
    }
}
