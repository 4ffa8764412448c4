use model::route::{Coordinates, LineString, RouteEstimate};
use utility::geo::{haversine_distance, interpolate};

/// Typical detour of a road route over the great-circle line.
pub const ROAD_CURVATURE_FACTOR: f64 = 1.3;

pub const AVERAGE_SPEED_KMH: f64 = 30.0;

/// Number of segments in the interpolated geometry, giving 11 points
/// including both endpoints.
pub const ROUTE_SEGMENTS: usize = 10;

/// Straight-line routing approximation: haversine distance inflated by the
/// road-curvature factor, travel time at a fixed average speed, and a
/// linearly interpolated geometry. Not a road path; the external provider
/// handles real routing.
pub fn estimate_route(from: Coordinates, to: Coordinates) -> RouteEstimate {
    let direct_km = haversine_distance(from.lat, from.lon, to.lat, to.lon);
    let road_km = direct_km * ROAD_CURVATURE_FACTOR;

    let duration = (road_km / AVERAGE_SPEED_KMH * 3600.0).round() as u64;

    let mut coordinates = Vec::with_capacity(ROUTE_SEGMENTS + 1);
    for i in 0..=ROUTE_SEGMENTS {
        let ratio = i as f64 / ROUTE_SEGMENTS as f64;
        coordinates.push([
            interpolate(from.lon, to.lon, ratio),
            interpolate(from.lat, to.lat, ratio),
        ]);
    }

    RouteEstimate::new(road_km * 1000.0, duration, LineString::new(coordinates))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_estimate_one_degree_of_longitude() {
        let estimate = estimate_route(
            Coordinates::new(0.0, 0.0),
            Coordinates::new(0.0, 1.0),
        );

        // 111.19 km direct, times the 1.3 road factor
        assert!((estimate.distance - 144_553.0).abs() < 10.0);
        assert_eq!(estimate.duration, 17_346);
    }

    #[test]
    fn distance_is_symmetric_and_geometry_reverses() {
        let from = Coordinates::new(54.3233, 10.1228);
        let to = Coordinates::new(54.0924, 10.6173);

        let there = estimate_route(from, to);
        let back = estimate_route(to, from);

        assert!((there.distance - back.distance).abs() < 1e-6);
        assert_eq!(there.duration, back.duration);

        let mut reversed = back.geometry.coordinates.clone();
        reversed.reverse();
        for (a, b) in there.geometry.coordinates.iter().zip(&reversed) {
            assert!((a[0] - b[0]).abs() < 1e-9);
            assert!((a[1] - b[1]).abs() < 1e-9);
        }
    }

    #[test]
    fn geometry_has_eleven_points_with_exact_endpoints() {
        let estimate = estimate_route(
            Coordinates::new(30.3165, 78.0322),
            Coordinates::new(30.3255, 78.0436),
        );

        let coordinates = &estimate.geometry.coordinates;
        assert_eq!(coordinates.len(), ROUTE_SEGMENTS + 1);
        assert_eq!(coordinates[0], [78.0322, 30.3165]);
        assert!((coordinates[10][0] - 78.0436).abs() < 1e-9);
        assert!((coordinates[10][1] - 30.3255).abs() < 1e-9);
    }

    #[test]
    fn zero_length_route_has_zero_distance_and_duration() {
        let point = Coordinates::new(54.3233, 10.1228);
        let estimate = estimate_route(point, point);

        assert_eq!(estimate.distance, 0.0);
        assert_eq!(estimate.duration, 0);
        assert_eq!(estimate.geometry.coordinates.len(), 11);
        assert!(estimate.steps.is_empty());
    }
}
