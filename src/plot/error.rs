use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlotError {
    #[error("cell ({column}, {row}) lies outside of the {width}x{height} plot")]
    OutOfBounds {
        column: usize,
        row: usize,
        width: usize,
        height: usize,
    },
}
