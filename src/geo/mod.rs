#![doc = include_str!("../../docs/geo.md")]

use std::f64::consts::PI;

/// Mean radius of the earth, in kilometers, used for distance calculations.
pub const EARTH_RADIUS_KM: f64 = 6367.0;

/// Highest latitude (north or south) the Mercator projector will accept.
pub const MAX_LATITUDE: f64 = 70.0;

/// Places the Greenwich meridian in the center of the projection.
pub const PROJECTION_MERIDIAN: f64 = -PI;

#[doc(hidden)]
pub mod coord;
#[doc(hidden)]
pub mod error;
pub mod geodesy;
pub mod project;

#[doc(inline)]
pub use coord::coordinate::{Coordinate, Hemisphere};
#[doc(inline)]
pub use coord::point::PlotPoint;
#[doc(inline)]
pub use error::GeoError;
#[doc(inline)]
pub use geodesy::Sphere;
#[doc(inline)]
pub use project::{Mercator, Project};
