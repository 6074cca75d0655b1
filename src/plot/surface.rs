use crate::plot::error::PlotError;

/// A fixed-size grid of character cells that symbols can be placed onto.
/// Column 0 is the western edge and row 0 the southern edge.
pub trait Surface {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Places `symbol` at the given cell, failing with
    /// [`PlotError::OutOfBounds`] when `column >= width` or `row >= height`.
    fn place_point(&mut self, column: usize, row: usize, symbol: char) -> Result<(), PlotError>;

    fn contains(&self, column: usize, row: usize) -> bool {
        column < self.width() && row < self.height()
    }
}
