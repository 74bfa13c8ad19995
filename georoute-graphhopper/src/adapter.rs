//! The GraphHopper adapter.
//!
//! [`GraphHopper`] turns typed requests into GraphHopper API calls and parses
//! the answers into the shared result types. The HTTP work is delegated to an
//! [`HttpTransport`], which defaults to the shared [`HttpClient`].
//!
//! # Example
//!
//! ```no_run
//! use georoute_core::Waypoint;
//! use georoute_graphhopper::{DirectionsOptions, GraphHopper, GraphHopperConfig, Profile};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let graphhopper = GraphHopper::new(GraphHopperConfig::new().with_api_key("secret"))?;
//! let outcome = graphhopper
//!     .directions(
//!         &[Waypoint::new(52.517, 13.388), Waypoint::new(52.529, 13.397)],
//!         &Profile::Car,
//!         &DirectionsOptions::default(),
//!         false,
//!     )
//!     .await?;
//! if let Some(directions) = outcome.into_executed() {
//!     println!("{} route(s)", directions.directions.len());
//! }
//! # Ok(())
//! # }
//! ```

use georoute_core::{
    Directions, HttpRequest, HttpTransport, Isochrones, Matrix, Outcome, RoutingApiError,
    Waypoint,
};
use georoute_http::HttpClient;
use log::{debug, warn};
use serde_json::Value;

use crate::config::{BuildError, GraphHopperConfig};
use crate::error::map_transport_error;
use crate::options::{DirectionsOptions, IsochroneOptions, MatrixOptions, Profile};
use crate::params;
use crate::parse::{parse_directions, parse_isochrones, parse_matrix};

const ROUTE_ENDPOINT: &str = "/route";
const ISOCHRONE_ENDPOINT: &str = "/isochrone";
const MATRIX_ENDPOINT: &str = "/matrix";

/// Client for the GraphHopper directions, isochrone, and matrix APIs.
///
/// Every operation takes a `dry_run` flag. When set, the request is built
/// and described but never sent, and the operation returns
/// [`Outcome::DryRun`].
#[derive(Debug)]
pub struct GraphHopper<T = HttpClient> {
    transport: T,
    api_key: Option<String>,
}

impl GraphHopper<HttpClient> {
    /// Create an adapter backed by the shared HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingApiKey`] when the configuration targets
    /// the hosted API without a key, or [`BuildError::HttpClient`] when the
    /// client cannot be built.
    pub fn new(config: GraphHopperConfig) -> Result<Self, BuildError> {
        config.validate()?;
        let transport = HttpClient::new(config.client_config())?;
        Ok(Self {
            transport,
            api_key: config.api_key,
        })
    }
}

impl<T: HttpTransport> GraphHopper<T> {
    /// Create an adapter that sends requests through `transport`.
    ///
    /// Only the API key is read from `config`; connection settings belong to
    /// the transport.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingApiKey`] under the same rule as
    /// [`GraphHopper::new`].
    pub fn with_transport(config: GraphHopperConfig, transport: T) -> Result<Self, BuildError> {
        config.validate()?;
        Ok(Self {
            transport,
            api_key: config.api_key,
        })
    }

    /// The transport requests are sent through.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Compute one or more routes through `waypoints` in order.
    ///
    /// # Errors
    ///
    /// Returns a [`RoutingApiError`] without a status when fewer than two
    /// waypoints are given; nothing is sent in that case. Transport failures,
    /// error responses, and malformed bodies are reported the same way as
    /// for every operation.
    pub async fn directions(
        &self,
        waypoints: &[Waypoint],
        profile: &Profile,
        options: &DirectionsOptions,
        dry_run: bool,
    ) -> Result<Outcome<Directions>, RoutingApiError> {
        if waypoints.len() < 2 {
            return Err(RoutingApiError::new(format!(
                "directions need at least two waypoints, got {}",
                waypoints.len()
            )));
        }
        let body =
            params::route_body(waypoints, profile, options).map_err(|err| encode_error(&err))?;
        let request = self.keyed(HttpRequest::post(ROUTE_ENDPOINT, body));
        self.dispatch(request, dry_run, parse_directions).await
    }

    /// Compute the area reachable from `location`.
    ///
    /// GraphHopper accepts a single budget per request and splits it into
    /// `buckets`; only the first of `intervals` is used.
    ///
    /// # Errors
    ///
    /// Returns a [`RoutingApiError`] without a status when `intervals` is
    /// empty; nothing is sent in that case.
    pub async fn reachability(
        &self,
        location: Waypoint,
        profile: &Profile,
        intervals: &[f64],
        options: &IsochroneOptions,
        dry_run: bool,
    ) -> Result<Outcome<Isochrones>, RoutingApiError> {
        let Some((&limit, ignored)) = intervals.split_first() else {
            return Err(RoutingApiError::new("reachability needs at least one interval"));
        };
        if !ignored.is_empty() {
            debug!(
                "GraphHopper isochrones take one interval; ignoring {} more",
                ignored.len()
            );
        }
        let request = params::isochrone_query(location, profile, limit, options)
            .into_iter()
            .fold(HttpRequest::get(ISOCHRONE_ENDPOINT), |request, (key, value)| {
                request.with_query(key, value)
            });
        let request = self.keyed(request);
        let interval_type = options.interval_type;
        self.dispatch(request, dry_run, |raw| {
            parse_isochrones(raw, location, interval_type)
        })
        .await
    }

    /// Compute duration and distance grids between `waypoints`.
    ///
    /// [`MatrixOptions::sources`] and [`MatrixOptions::destinations`] pick
    /// the origin and destination subsets by index.
    ///
    /// # Errors
    ///
    /// Returns a [`RoutingApiError`] without a status when `waypoints` is
    /// empty, and otherwise on transport failures, error responses, or
    /// malformed bodies.
    pub async fn matrix(
        &self,
        waypoints: &[Waypoint],
        profile: &Profile,
        options: &MatrixOptions,
        dry_run: bool,
    ) -> Result<Outcome<Matrix>, RoutingApiError> {
        if waypoints.is_empty() {
            return Err(RoutingApiError::new("matrix needs at least one waypoint"));
        }
        let body =
            params::matrix_body(waypoints, profile, options).map_err(|err| encode_error(&err))?;
        let request = self.keyed(HttpRequest::post(MATRIX_ENDPOINT, body));
        self.dispatch(request, dry_run, parse_matrix).await
    }

    fn keyed(&self, request: HttpRequest) -> HttpRequest {
        match &self.api_key {
            Some(key) => request.with_query("key", key.as_str()),
            None => request,
        }
    }

    async fn dispatch<R>(
        &self,
        request: HttpRequest,
        dry_run: bool,
        parse: impl FnOnce(Value) -> Result<R, RoutingApiError>,
    ) -> Result<Outcome<R>, RoutingApiError> {
        if dry_run {
            return Ok(Outcome::DryRun(self.transport.describe(&request)));
        }
        debug!("GraphHopper {} {}", request.method, request.endpoint);
        let raw = self.transport.perform(&request).await.map_err(|err| {
            let mapped = map_transport_error(err);
            warn!("GraphHopper {} failed: {mapped}", request.endpoint);
            mapped
        })?;
        parse(raw).map(Outcome::Executed)
    }
}

fn encode_error(err: &serde_json::Error) -> RoutingApiError {
    RoutingApiError::new(format!("failed to encode request: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use georoute_core::test_support::StubTransport;
    use rstest::rstest;
    use serde_json::json;

    fn adapter(stub: StubTransport) -> GraphHopper<StubTransport> {
        GraphHopper::with_transport(GraphHopperConfig::new().with_api_key("secret"), stub)
            .expect("config has a key")
    }

    #[rstest]
    fn hosted_api_needs_a_key() {
        let err = GraphHopper::with_transport(GraphHopperConfig::new(), StubTransport::new())
            .expect_err("key should be required");
        assert!(matches!(err, BuildError::MissingApiKey));
    }

    #[rstest]
    #[tokio::test]
    async fn directions_reject_a_single_waypoint_without_io() {
        let graphhopper = adapter(StubTransport::new());

        let err = graphhopper
            .directions(
                &[Waypoint::new(52.5, 13.4)],
                &Profile::Car,
                &DirectionsOptions::default(),
                false,
            )
            .await
            .expect_err("one waypoint is not enough");

        assert!(err.status.is_none());
        assert!(graphhopper.transport().requests().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn reachability_rejects_empty_intervals_without_io() {
        let graphhopper = adapter(StubTransport::new());

        let err = graphhopper
            .reachability(
                Waypoint::new(52.5, 13.4),
                &Profile::Foot,
                &[],
                &IsochroneOptions::default(),
                true,
            )
            .await
            .expect_err("an interval is required");

        assert!(err.status.is_none());
        assert!(graphhopper.transport().requests().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn matrix_rejects_empty_waypoints_without_io() {
        let graphhopper = adapter(StubTransport::new());

        let err = graphhopper
            .matrix(&[], &Profile::Car, &MatrixOptions::default(), false)
            .await
            .expect_err("a waypoint is required");

        assert!(err.status.is_none());
        assert!(graphhopper.transport().requests().is_empty());
    }

    #[rstest]
    #[case(429, "Too Many Requests", "API limit reached")]
    #[case(500, "Internal Server Error", "Unexpected server failure")]
    #[tokio::test]
    async fn provider_failures_keep_status_message_and_hints(
        #[case] status: u16,
        #[case] status_text: &str,
        #[case] message: &str,
    ) {
        let stub = StubTransport::new().with_http_error(
            status,
            status_text,
            json!({
                "message": message,
                "hints": [{"message": message, "details": "LimitException"}],
            }),
        );
        let graphhopper = adapter(stub);

        let err = graphhopper
            .matrix(
                &[Waypoint::new(52.5, 13.4)],
                &Profile::Car,
                &MatrixOptions::default(),
                false,
            )
            .await
            .expect_err("provider failure surfaces");

        assert_eq!(err.status, Some(status));
        assert_eq!(err.status_text.as_deref(), Some(status_text));
        assert_eq!(err.error_message.as_deref(), Some(message));
        let hint = err.hints.first().expect("hint kept");
        assert_eq!(hint.message, message);
        assert_eq!(hint.details.as_deref(), Some("LimitException"));
        assert_eq!(hint.point_index, None);
    }

    #[rstest]
    #[tokio::test]
    async fn directions_post_key_and_lon_lat_points() {
        let stub = StubTransport::new().with_response(json!({"paths": []}));
        let graphhopper = adapter(stub);

        let outcome = graphhopper
            .directions(
                &[Waypoint::new(52.5, 13.4), Waypoint::new(52.6, 13.5)],
                &Profile::Bike,
                &DirectionsOptions::default(),
                false,
            )
            .await
            .expect("directions succeed");

        assert!(!outcome.is_dry_run());
        let request = graphhopper.transport().last_request().expect("request sent");
        assert_eq!(request.endpoint, "/route");
        assert_eq!(request.query_value("key"), Some("secret"));
        assert_eq!(
            request.body,
            Some(json!({"profile": "bike", "points": [[13.4, 52.5], [13.5, 52.6]]}))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn extra_intervals_are_ignored() {
        let stub = StubTransport::new().with_response(json!({"polygons": []}));
        let graphhopper = adapter(stub);

        graphhopper
            .reachability(
                Waypoint::new(52.5, 13.4),
                &Profile::Car,
                &[300.0, 600.0],
                &IsochroneOptions::default(),
                false,
            )
            .await
            .expect("reachability succeeds");

        let request = graphhopper.transport().last_request().expect("request sent");
        assert_eq!(request.query_value("time_limit"), Some("300"));
        assert_eq!(request.query_value("key"), Some("secret"));
    }

    #[rstest]
    #[tokio::test]
    async fn self_hosted_requests_carry_no_key() {
        let stub = StubTransport::new().with_response(json!({"times": [[0.0]]}));
        let graphhopper = GraphHopper::with_transport(
            GraphHopperConfig::new().with_base_url("http://localhost:8989"),
            stub,
        )
        .expect("base url is enough");

        graphhopper
            .matrix(
                &[Waypoint::new(52.5, 13.4)],
                &Profile::Car,
                &MatrixOptions::default(),
                false,
            )
            .await
            .expect("matrix succeeds");

        let request = graphhopper.transport().last_request().expect("request sent");
        assert!(request.query_value("key").is_none());
    }
}
