use std::fmt::{Display, Formatter};

use crate::plot::error::PlotError;
use crate::plot::surface::Surface;

const BLANK: char = ' ';
const MERIDIAN: char = '|';
const EQUATOR: char = '-';
const ORIGIN: char = '+';

/// `AsciiPlot`
/// A character grid with the zero meridian and the equator drawn through
/// its center, printed north-up through [`Display`].
///
/// ```rust
/// use greatcircle::{AsciiPlot, Surface};
///
/// let mut plot = AsciiPlot::new(5, 3);
/// plot.place_point(0, 2, '*')?;
///
/// assert_eq!(plot.to_string(), "* |  \n--+--\n  |  \n");
/// # Ok::<(), greatcircle::PlotError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiPlot {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl AsciiPlot {
    pub fn new(width: usize, height: usize) -> Self {
        let mut plot = AsciiPlot {
            width,
            height,
            cells: vec![BLANK; width * height],
        };

        if width == 0 || height == 0 {
            return plot;
        }

        let (meridian, equator) = (width / 2, height / 2);

        for row in 0..height {
            plot.cells[row * width + meridian] = MERIDIAN;
        }

        for column in 0..width {
            plot.cells[equator * width + column] = if column == meridian {
                ORIGIN
            } else {
                EQUATOR
            };
        }

        plot
    }

    /// Returns the symbol at the given cell, if it lies on the plot.
    pub fn symbol_at(&self, column: usize, row: usize) -> Option<char> {
        if !self.contains(column, row) {
            return None;
        }

        self.cells.get(row * self.width + column).copied()
    }

    /// Iterates the rows of the plot, north first.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width.max(1)).rev()
    }
}

impl Surface for AsciiPlot {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn place_point(&mut self, column: usize, row: usize, symbol: char) -> Result<(), PlotError> {
        if !self.contains(column, row) {
            return Err(PlotError::OutOfBounds {
                column,
                row,
                width: self.width,
                height: self.height,
            });
        }

        self.cells[row * self.width + column] = symbol;
        Ok(())
    }
}

impl Display for AsciiPlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row.iter().collect::<String>())?;
        }

        Ok(())
    }
}
