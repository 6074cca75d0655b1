use crate::geo::geodesy::angle::to_radians;
use crate::geo::Coordinate;

/// Central angle, in radians, between two coordinates on a unit sphere.
pub fn haversine_angle(origin: &Coordinate, destination: &Coordinate) -> f64 {
    let origin_lat = to_radians(origin.latitude);
    let origin_lng = to_radians(origin.longitude);
    let destination_lat = to_radians(destination.latitude);
    let destination_lng = to_radians(destination.longitude);

    let delta_lat = destination_lat - origin_lat;
    let delta_lng = destination_lng - origin_lng;

    let a = (delta_lat / 2.0).sin().powi(2)
        + origin_lat.cos() * destination_lat.cos() * (delta_lng / 2.0).sin().powi(2);

    // Rounding can push `a` past 1 for antipodal points
    2.0 * a.sqrt().min(1.0).asin()
}
