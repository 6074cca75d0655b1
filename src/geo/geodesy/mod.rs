//! Great-circle calculations on a spherical earth.
//!
//! All operations are available on a [`Sphere`], which carries the radius
//! used for distances, and as free functions using [`Sphere::default`].

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::geo::{Coordinate, GeoError, EARTH_RADIUS_KM};

/// Most steps [`Sphere::waypoints`] will walk a single route in.
pub const MAX_WAYPOINT_STEPS: usize = 1_000_000;

#[doc(hidden)]
pub mod angle;
#[doc(hidden)]
pub mod haversine;
#[doc(hidden)]
pub mod waypoint;

#[doc(inline)]
pub use angle::{to_degrees, to_radians};

/// A spherical earth model of a given radius, in kilometers.
///
/// ```rust
/// use greatcircle::{Coordinate, Sphere};
///
/// let sphere = Sphere::default();
/// let origin = Coordinate::new(0.0, 0.0);
/// let destination = Coordinate::new(0.0, 90.0);
///
/// let quarter = sphere.distance(&origin, &destination);
/// assert!((quarter - 6367.0 * std::f64::consts::FRAC_PI_2).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sphere {
    pub radius_km: f64,
}

impl Default for Sphere {
    fn default() -> Self {
        Sphere {
            radius_km: EARTH_RADIUS_KM,
        }
    }
}

impl Sphere {
    pub const fn new(radius_km: f64) -> Self {
        Sphere { radius_km }
    }

    /// Haversine distance between two coordinates, in kilometers.
    /// Inputs are not range-checked.
    pub fn distance(&self, origin: &Coordinate, destination: &Coordinate) -> f64 {
        haversine::haversine_angle(origin, destination) * self.radius_km
    }

    /// Returns the point `distance_km` along the great circle from `origin`
    /// towards `destination`.
    ///
    /// A distance at or beyond the length of the route returns the
    /// destination unchanged.
    pub fn intermediate_point(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        distance_km: f64,
    ) -> Result<Coordinate, GeoError> {
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(GeoError::InvalidDistance(distance_km));
        }

        let total = self.distance(origin, destination);
        if distance_km >= total {
            trace!("{distance_km}km reaches the destination of a {total}km route");
            return Ok(*destination);
        }

        waypoint::interpolate(origin, destination, distance_km / total)
    }

    /// Walks from `origin` to `destination` in increments of `step_km`.
    ///
    /// The first entry is always `origin` and the last is always
    /// `destination`; intermediate entries are `step_km` apart.
    ///
    /// Fails with [`GeoError::TooManyWaypoints`] when the route would need
    /// more than [`MAX_WAYPOINT_STEPS`] steps.
    pub fn waypoints(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        step_km: f64,
    ) -> Result<Vec<Coordinate>, GeoError> {
        if !step_km.is_finite() || step_km <= 0.0 {
            return Err(GeoError::InvalidDistance(step_km));
        }

        let total = self.distance(origin, destination);
        let steps = (total / step_km).ceil();
        if !steps.is_finite() || steps > MAX_WAYPOINT_STEPS as f64 {
            return Err(GeoError::TooManyWaypoints(steps, MAX_WAYPOINT_STEPS));
        }

        let steps = steps as usize;
        debug!("Walking {total}km route in {steps} steps of {step_km}km");

        let mut route = Vec::with_capacity(steps.saturating_add(1));
        route.push(*origin);

        for step in 1..steps {
            route.push(self.intermediate_point(origin, destination, step as f64 * step_km)?);
        }

        if steps > 0 {
            route.push(*destination);
        }

        Ok(route)
    }
}

/// Haversine distance, in kilometers, on the default [`Sphere`].
pub fn distance(origin: &Coordinate, destination: &Coordinate) -> f64 {
    Sphere::default().distance(origin, destination)
}

/// See [`Sphere::intermediate_point`].
pub fn intermediate_point(
    origin: &Coordinate,
    destination: &Coordinate,
    distance_km: f64,
) -> Result<Coordinate, GeoError> {
    Sphere::default().intermediate_point(origin, destination, distance_km)
}

/// See [`Sphere::waypoints`].
pub fn waypoints(
    origin: &Coordinate,
    destination: &Coordinate,
    step_km: f64,
) -> Result<Vec<Coordinate>, GeoError> {
    Sphere::default().waypoints(origin, destination, step_km)
}
