use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    #[error("invalid coordinate: latitude {0} must lie in -90..=90 and longitude {1} in -180..=180")]
    InvalidCoordinate(f64, f64),

    #[error("latitude {0} exceeds the {1} degree limit of the mercator projection")]
    LatitudeOutOfRange(f64, f64),

    #[error("distance must be a finite, non-negative number of kilometers. Given: {0}")]
    InvalidDistance(f64),

    #[error("route needs {0} steps, more than the limit of {1}")]
    TooManyWaypoints(f64, usize),

    #[error("origin and destination have no angular separation to interpolate across")]
    DegenerateInput,

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}
