#![doc = include_str!("../README.md")]

pub mod error;
pub mod geo;
pub mod plot;
#[doc(hidden)]
pub mod util;

#[doc(inline)]
pub use crate::error::{Error, Result};
#[doc(inline)]
pub use crate::geo::geodesy::{distance, intermediate_point, to_degrees, to_radians, waypoints};
#[doc(inline)]
pub use crate::geo::project::{project, unproject};
#[doc(inline)]
pub use crate::geo::{Coordinate, GeoError, Hemisphere, Mercator, PlotPoint, Project, Sphere};
#[doc(inline)]
pub use crate::plot::{cell, plot_coordinate, AsciiPlot, PlotError, Surface};
