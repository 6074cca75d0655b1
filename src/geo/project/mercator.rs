use std::f64::consts::PI;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::geo::geodesy::to_radians;
use crate::geo::project::Project;
use crate::geo::{Coordinate, GeoError, PlotPoint, MAX_LATITUDE, PROJECTION_MERIDIAN};

/// A spherical Mercator projection.
///
/// For `scale = 1`, values for `x` range over `0..=2π` and values for `y`
/// roughly over `0..=4`, with the equator at `y = 2`. Latitudes beyond
/// `max_latitude` are rejected, since the projection becomes practically
/// unusable towards the poles.
///
/// *Learn more [here](https://en.wikipedia.org/wiki/Mercator_projection).*
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mercator {
    /// Highest latitude, north or south, accepted by [`Project::project`].
    pub max_latitude: f64,
    /// Longitude, in radians, mapped onto `x = 0`.
    pub projection_meridian: f64,
}

impl Default for Mercator {
    fn default() -> Self {
        Mercator {
            max_latitude: MAX_LATITUDE,
            projection_meridian: PROJECTION_MERIDIAN,
        }
    }
}

impl Mercator {
    /// Scales below 1, and `NaN`, are treated as 1.
    pub fn clamp_scale(scale: f64) -> f64 {
        let clamped = scale.max(1.0);
        if clamped != scale {
            trace!("Clamped projection scale {scale} to {clamped}");
        }

        clamped
    }

    /// Width and height of the plot-space covered at the given scale.
    pub fn extent(scale: f64) -> (f64, f64) {
        let scale = Self::clamp_scale(scale);
        (2.0 * PI * scale, 4.0 * scale)
    }
}

impl Project for Mercator {
    fn project(&self, coordinate: &Coordinate, scale: f64) -> Result<PlotPoint, GeoError> {
        if !coordinate.is_valid() {
            debug!("Refusing to project invalid coordinate {coordinate:?}");
            return Err(GeoError::InvalidCoordinate(
                coordinate.latitude,
                coordinate.longitude,
            ));
        }

        if coordinate.latitude.abs() > self.max_latitude {
            debug!(
                "Refusing to project {coordinate}, beyond {} degrees",
                self.max_latitude
            );
            return Err(GeoError::LatitudeOutOfRange(
                coordinate.latitude,
                self.max_latitude,
            ));
        }

        let scale = Self::clamp_scale(scale);
        let lat = to_radians(coordinate.latitude);
        let lng = to_radians(coordinate.longitude);

        let x = (lng - self.projection_meridian) * scale;
        // Shifted by two so every accepted latitude lands on a positive y
        let y = (lat.tan() + 1.0 / lat.cos()).ln() * scale + scale * 2.0;

        Ok(PlotPoint::new(x, y))
    }

    fn unproject(&self, _: &PlotPoint, _: f64) -> Result<Coordinate, GeoError> {
        Err(GeoError::NotImplemented("inverse mercator projection"))
    }
}
