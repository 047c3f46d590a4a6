use approx::assert_abs_diff_eq;
use sphera::{math_utils::shortest_arc_deg, EclipticPosition};

/// Compare two ecliptic positions, the longitude modulo 360°.
pub fn assert_position_close(actual: &EclipticPosition, expected: &EclipticPosition, epsilon: f64) {
    assert!(
        shortest_arc_deg(actual.longitude, expected.longitude) < epsilon,
        "longitude: got {}, expected {}",
        actual.longitude,
        expected.longitude
    );
    assert_abs_diff_eq!(actual.latitude, expected.latitude, epsilon = epsilon);
    assert_abs_diff_eq!(actual.distance, expected.distance, epsilon = epsilon);
}

pub fn position(longitude: f64, latitude: f64, distance: f64) -> EclipticPosition {
    EclipticPosition {
        longitude,
        latitude,
        distance,
    }
}
