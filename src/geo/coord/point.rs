use serde::{Deserialize, Serialize};

/// A point in scaled plot-space, as produced by a [`Project`](crate::geo::Project)
/// implementation. Callers map it onto integer grid cells before drawing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        PlotPoint { x, y }
    }

    pub fn x_y(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}
