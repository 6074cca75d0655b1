//! Rendering of projected points onto a character grid.
//!
//! The geodesy and projection code never touch a [`Surface`] themselves;
//! [`cell`] and [`plot_coordinate`] bridge their plot-space output onto
//! grid cells.

use log::debug;

use crate::geo::{Coordinate, Mercator, PlotPoint, Project};

pub mod ascii;
#[doc(hidden)]
pub mod error;
pub mod surface;

#[doc(inline)]
pub use ascii::AsciiPlot;
#[doc(inline)]
pub use error::PlotError;
#[doc(inline)]
pub use surface::Surface;

/// Maps a Mercator plot-space point, projected at `scale`, onto the
/// `(column, row)` cell of a `width` x `height` grid.
///
/// Greenwich lands on column `width / 2` and the equator on row
/// `height / 2`, matching the axes of an [`AsciiPlot`]. Negative
/// plot-space values saturate at cell 0.
pub fn cell(point: &PlotPoint, scale: f64, width: usize, height: usize) -> (usize, usize) {
    let (x, y) = point.x_y();
    let (extent_x, extent_y) = Mercator::extent(scale);

    let column = (x / extent_x * width.saturating_sub(1) as f64).round();
    let row = (y / extent_y * height.saturating_sub(1) as f64).round();

    (column as usize, row as usize)
}

/// Projects `coordinate` and places `symbol` on the matching cell of
/// `surface`, returning the cell it was placed on.
pub fn plot_coordinate<S: Surface>(
    surface: &mut S,
    mercator: &Mercator,
    coordinate: &Coordinate,
    scale: f64,
    symbol: char,
) -> crate::Result<(usize, usize)> {
    let point = mercator.project(coordinate, scale)?;
    let (column, row) = cell(&point, scale, surface.width(), surface.height());

    debug!("Plotting {coordinate} at cell ({column}, {row})");
    surface.place_point(column, row, symbol)?;

    Ok((column, row))
}
