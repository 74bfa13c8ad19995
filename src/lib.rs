//! Facade crate for georoute routing adapters.
//!
//! This crate re-exports the shared result types, the HTTP client, and the
//! provider adapters enabled through feature flags.

#![forbid(unsafe_code)]

pub use georoute_core::{
    ApiHint, Direction, Directions, HttpMethod, HttpRequest, HttpTransport, IntervalType,
    Isochrone, Isochrones, Matrix, Outcome, RoutingApiError, TransportError, Waypoint,
    WaypointParseError,
};
pub use georoute_http::{ClientBuildError, ClientConfig, HttpClient};

#[cfg(feature = "test-support")]
pub use georoute_core::test_support;

/// GraphHopper directions, isochrone, and matrix adapter.
#[cfg(feature = "graphhopper")]
pub mod graphhopper {
    pub use georoute_graphhopper::*;
}
