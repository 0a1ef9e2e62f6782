use super::EARTH_RADIUS_M;
use crate::GeoPoint;

/// Returns the great-circle distance, in meters, between `a` and `b`
/// on a spherical earth.
pub fn distance_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let two = 2.0;

    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / two).sin().powi(2) + (d_lon / two).sin().powi(2) * lat1.cos() * lat2.cos();

    // Rounding can push `h` a hair past 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);

    two * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}

#[cfg(test)]
mod tests {
    use super::distance_m;
    use crate::GeoPoint;
    use approx::assert_relative_eq;

    #[test]
    fn test_one_degree_at_equator() {
        let d = distance_m(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0));
        assert_relative_eq!(d, 111_194.926_644_558_74, max_relative = 1e-9);
        assert_relative_eq!(d, 111_195.0, max_relative = 0.005);
    }

    #[test]
    fn test_coincident_points() {
        let p = GeoPoint::new(44.283_098, -71.308_307);
        assert_eq!(distance_m(p, p), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            (GeoPoint::new(28.6139, 77.2090), GeoPoint::new(28.7041, 77.1025)),
            (GeoPoint::new(-33.86, 151.21), GeoPoint::new(51.51, -0.13)),
            (GeoPoint::new(89.9, 0.0), GeoPoint::new(-89.9, 180.0)),
        ];
        for (a, b) in pairs {
            assert_eq!(distance_m(a, b), distance_m(b, a));
        }
    }

    #[test]
    fn test_monotonic_in_separation() {
        let origin = GeoPoint::new(10.0, 10.0);
        let mut last = 0.0;
        for step in 1..=80 {
            let d = distance_m(origin, GeoPoint::new(10.0 + f64::from(step), 10.0));
            assert!(d > last);
            last = d;
        }
    }

    #[test]
    fn test_delhi_link_length() {
        let d = distance_m(
            GeoPoint::new(28.6139, 77.2090),
            GeoPoint::new(28.7041, 77.1025),
        );
        assert_relative_eq!(d, 14_442.261_432_724_144, max_relative = 1e-9);
    }
}
