//! Core domain types shared by every georoute provider adapter.
//!
//! Responsibilities:
//! - Model caller inputs ([`Waypoint`]) and the normalised results
//!   ([`Directions`], [`Isochrones`], [`Matrix`]).
//! - Define the single error surfaced by adapter operations
//!   ([`RoutingApiError`]).
//! - Define the injected HTTP capability ([`HttpTransport`]) that adapters
//!   issue their requests through.
//!
//! Boundaries:
//! - No provider wire formats live here; each adapter owns its own.
//! - No HTTP stack; `georoute-http` supplies the reqwest-backed transport.
//!
//! Invariants:
//! - Every value is immutable once built from a response payload.
//! - No global mutable state.
#![forbid(unsafe_code)]

mod directions;
mod error;
mod isochrones;
mod matrix;
mod outcome;
pub mod transport;
mod waypoint;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use directions::{Direction, Directions};
pub use error::{ApiHint, RoutingApiError};
pub use isochrones::{IntervalType, Isochrone, Isochrones};
pub use matrix::Matrix;
pub use outcome::Outcome;
pub use transport::{HttpMethod, HttpRequest, HttpTransport, TransportError};
pub use waypoint::{Waypoint, WaypointParseError};
