use approx::assert_relative_eq;
use std::f64::consts::PI;

use crate::geo::project::{project, unproject};
use crate::geo::{Coordinate, GeoError, Mercator, PlotPoint, Project, MAX_LATITUDE};

#[test_log::test]
fn equator_maps_to_shifted_origin() {
    let point = project(&Coordinate::new(0.0, 0.0), 1.0).unwrap();

    assert_relative_eq!(point.x, PI);
    assert_relative_eq!(point.y, 2.0);
}

#[test]
fn longitude_spans_full_width() {
    let west = project(&Coordinate::new(0.0, -180.0), 1.0).unwrap();
    let east = project(&Coordinate::new(0.0, 180.0), 1.0).unwrap();

    assert_relative_eq!(west.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(east.x, 2.0 * PI, epsilon = 1e-12);
}

#[test_log::test]
fn latitude_stays_within_plot() {
    let north = project(&Coordinate::new(MAX_LATITUDE, 0.0), 1.0).unwrap();
    let south = project(&Coordinate::new(-MAX_LATITUDE, 0.0), 1.0).unwrap();

    assert!(north.y > 2.0 && north.y < 4.0);
    assert!(south.y > 0.0 && south.y < 2.0);
    assert_relative_eq!(north.y - 2.0, 2.0 - south.y, epsilon = 1e-12);
    assert_relative_eq!(north.y, 3.7354, epsilon = 1e-4);
}

#[test]
fn rejects_polar_latitudes() {
    for latitude in [71.0, -71.0] {
        assert_eq!(
            project(&Coordinate::new(latitude, 10.0), 1.0),
            Err(GeoError::LatitudeOutOfRange(latitude, MAX_LATITUDE))
        );
    }
}

#[test]
fn rejects_invalid_coordinates() {
    assert_eq!(
        project(&Coordinate::new(0.0, 200.0), 1.0),
        Err(GeoError::InvalidCoordinate(0.0, 200.0))
    );

    // Validity is checked before the latitude limit
    assert_eq!(
        project(&Coordinate::new(95.0, 0.0), 1.0),
        Err(GeoError::InvalidCoordinate(95.0, 0.0))
    );
}

#[test_log::test]
fn sub_unit_scale_is_clamped() {
    let coordinate = Coordinate::new(48.8566, 2.3522);

    assert_eq!(project(&coordinate, 0.5), project(&coordinate, 1.0));
    assert_eq!(project(&coordinate, -3.0), project(&coordinate, 1.0));
    assert_eq!(project(&coordinate, f64::NAN), project(&coordinate, 1.0));
}

#[test]
fn scale_is_linear() {
    let coordinate = Coordinate::new(-23.5505, -46.6333);
    let unit = project(&coordinate, 1.0).unwrap();
    let scaled = project(&coordinate, 4.0).unwrap();

    assert_relative_eq!(scaled.x, unit.x * 4.0, epsilon = 1e-12);
    assert_relative_eq!(scaled.y, unit.y * 4.0, epsilon = 1e-12);
}

#[test]
fn extent_matches_scale() {
    let (width, height) = Mercator::extent(2.0);

    assert_relative_eq!(width, 4.0 * PI);
    assert_relative_eq!(height, 8.0);
    assert_eq!(Mercator::extent(0.1), Mercator::extent(1.0));
}

#[test]
fn custom_latitude_limit() {
    let mercator = Mercator {
        max_latitude: 80.0,
        ..Mercator::default()
    };

    assert!(mercator.project(&Coordinate::new(75.0, 0.0), 1.0).is_ok());
    assert_eq!(
        mercator.project(&Coordinate::new(-81.0, 0.0), 1.0),
        Err(GeoError::LatitudeOutOfRange(-81.0, 80.0))
    );
}

#[test]
fn loads_from_partial_configuration() {
    let mercator: Mercator = serde_json::from_str(r#"{ "max_latitude": 60.0 }"#).unwrap();

    assert_eq!(mercator.max_latitude, 60.0);
    assert_eq!(mercator.projection_meridian, -PI);
}

#[test]
fn unproject_is_not_implemented() {
    let coordinate = Coordinate::new(10.0, 10.0);
    let point = project(&coordinate, 2.0).unwrap();

    assert!(matches!(
        unproject(&point, 2.0),
        Err(GeoError::NotImplemented(_))
    ));
    assert!(matches!(
        Mercator::default().unproject(&PlotPoint::new(0.0, 0.0), 1.0),
        Err(GeoError::NotImplemented(_))
    ));
}
