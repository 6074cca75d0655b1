use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::geo::error::GeoError;

pub type Degree = f64;

/// The half of the globe a latitude or longitude falls in.
#[derive(strum::Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

/// `Coordinate`
/// A point on the earth in signed decimal degrees, where positive values
/// denote North and East, and negative values South and West.
///
/// ```rust
/// use greatcircle::Coordinate;
///
/// let berlin = Coordinate::new(52.52, 13.4);
/// assert_eq!(berlin.to_string(), "52.52 North, 13.40 East");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: Degree,
    pub longitude: Degree,
}

impl Coordinate {
    /// Constructs a new `Coordinate` without checking its range.
    pub const fn new(latitude: Degree, longitude: Degree) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }

    /// Constructs a new `Coordinate`, rejecting values outside of
    /// -90..=90 latitude and -180..=180 longitude.
    pub fn try_new(latitude: Degree, longitude: Degree) -> Result<Self, GeoError> {
        let coordinate = Coordinate::new(latitude, longitude);

        if !coordinate.is_valid() {
            return Err(GeoError::InvalidCoordinate(latitude, longitude));
        }

        Ok(coordinate)
    }

    /// Both bounds are inclusive. `NaN` in either component is never valid.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Returns the (north/south, east/west) hemispheres of the coordinate.
    /// Zero counts as North and East.
    pub fn hemispheres(&self) -> (Hemisphere, Hemisphere) {
        let vertical = if self.latitude < 0.0 {
            Hemisphere::South
        } else {
            Hemisphere::North
        };

        let horizontal = if self.longitude < 0.0 {
            Hemisphere::West
        } else {
            Hemisphere::East
        };

        (vertical, horizontal)
    }
}

impl Display for Coordinate {
    /// Format is: `00.00 North, 00.00 East`
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (vertical, horizontal) = self.hemispheres();

        write!(
            f,
            "{:.2} {}, {:.2} {}",
            self.latitude.abs(),
            vertical,
            self.longitude.abs(),
            horizontal
        )
    }
}

impl From<Coordinate> for geo::Point {
    fn from(value: Coordinate) -> Self {
        geo::Point::new(value.longitude, value.latitude)
    }
}

impl From<geo::Point> for Coordinate {
    fn from(value: geo::Point) -> Self {
        let (longitude, latitude) = value.x_y();
        Coordinate::new(latitude, longitude)
    }
}
