use thiserror::Error;

use crate::geo::error::GeoError;
use crate::impl_err;
use crate::plot::error::PlotError;

/// The crate-level error, wrapping the error of whichever
/// submodule failed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Geo(GeoError),

    #[error(transparent)]
    Plot(PlotError),
}

impl_err!(GeoError, Geo);
impl_err!(PlotError, Plot);

pub type Result<T> = std::result::Result<T, Error>;
