//! Required structures to project coordinates onto a plot.

use crate::geo::{Coordinate, GeoError, PlotPoint};

#[doc(hidden)]
pub mod mercator;
#[doc(hidden)]
#[cfg(test)]
mod test;

#[doc(inline)]
pub use mercator::Mercator;

/// Allows for projection between coordinates and plot-space.
pub trait Project {
    /// Projects a coordinate into plot-space, multiplying the result by `scale`.
    ///
    /// ### Example
    /// ```rust
    /// use greatcircle::{Coordinate, Mercator, Project};
    ///
    /// let point = Mercator::default().project(&Coordinate::new(0.0, 0.0), 1.0)?;
    /// assert!((point.y - 2.0).abs() < 1e-12);
    /// # Ok::<(), greatcircle::GeoError>(())
    /// ```
    fn project(&self, coordinate: &Coordinate, scale: f64) -> Result<PlotPoint, GeoError>;

    /// The inverse of [`Project::project`].
    fn unproject(&self, point: &PlotPoint, scale: f64) -> Result<Coordinate, GeoError>;
}

/// Projects onto the default [`Mercator`] projection.
pub fn project(coordinate: &Coordinate, scale: f64) -> Result<PlotPoint, GeoError> {
    Mercator::default().project(coordinate, scale)
}

/// Always fails, see [`Mercator::unproject`](Project::unproject).
pub fn unproject(point: &PlotPoint, scale: f64) -> Result<Coordinate, GeoError> {
    Mercator::default().unproject(point, scale)
}
