//! GraphHopper adapter for georoute.
//!
//! [`GraphHopper`] exposes three operations against a hosted or self-hosted
//! GraphHopper instance:
//!
//! - [`GraphHopper::directions`] calls `POST /route`.
//! - [`GraphHopper::reachability`] calls `GET /isochrone`.
//! - [`GraphHopper::matrix`] calls `POST /matrix`.
//!
//! Each returns an [`Outcome`](georoute_core::Outcome): the parsed result,
//! or a description of the request when run with `dry_run` set. Parsing is
//! available separately through [`parse_directions`], [`parse_isochrones`],
//! and [`parse_matrix`].
#![forbid(unsafe_code)]

mod adapter;
mod config;
mod error;
mod options;
mod params;
mod parse;
mod wire;

pub use adapter::GraphHopper;
pub use config::{BuildError, DEFAULT_BASE_URL, DEFAULT_USER_AGENT, GraphHopperConfig};
pub use error::map_transport_error;
pub use options::{Algorithm, DirectionsOptions, IsochroneOptions, MatrixOptions, Profile};
pub use params::DEFAULT_OUT_ARRAYS;
pub use parse::{
    POLYLINE_PRECISION, decode_polyline, parse_directions, parse_isochrones, parse_matrix,
};
