use crate::{
    fresnel::first_fresnel_radius_at_midpoint,
    math::{bearing_deg, distance_m},
    GeoPoint, RfLinkError,
};

/// Derived first fresnel zone geometry of a link between two points.
///
/// Never stored; recompute it whenever either endpoint may have moved.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FresnelGeometry {
    /// Arithmetic mean of the endpoints' lat/lon.
    pub center: GeoPoint,

    /// Great-circle length of the link in meters.
    pub length_m: f64,

    /// First fresnel zone radius at the link midpoint in meters.
    pub radius_at_midpoint_m: f64,

    /// Planar direction from `a` to `b`, see [`bearing_deg`].
    pub azimuth_deg: f64,
}

/// Computes the fresnel geometry of a link from `a` to `b` at
/// `freq_ghz`.
///
/// The center is the lat/lon mean rather than the geodesic midpoint,
/// which is close enough for terrestrial links.
pub fn compute_link_geometry(
    a: GeoPoint,
    b: GeoPoint,
    freq_ghz: f64,
) -> Result<FresnelGeometry, RfLinkError> {
    let length_m = distance_m(a, b);
    let radius_at_midpoint_m = first_fresnel_radius_at_midpoint(length_m, freq_ghz)?;
    Ok(FresnelGeometry {
        center: GeoPoint::new((a.lat + b.lat) / 2.0, (a.lon + b.lon) / 2.0),
        length_m,
        radius_at_midpoint_m,
        azimuth_deg: bearing_deg(a, b),
    })
}

#[cfg(test)]
mod tests {
    use super::compute_link_geometry;
    use crate::{GeoPoint, RfLinkError};
    use approx::assert_relative_eq;

    #[test]
    fn test_delhi_link() {
        let a = GeoPoint::new(28.6139, 77.2090);
        let b = GeoPoint::new(28.7041, 77.1025);
        let geometry = compute_link_geometry(a, b, 5.0).unwrap();
        assert_relative_eq!(geometry.center.lat, 28.659, epsilon = 1e-9);
        assert_relative_eq!(geometry.center.lon, 77.15575, epsilon = 1e-9);
        assert_relative_eq!(geometry.length_m, 14_442.26, epsilon = 0.01);
        assert_relative_eq!(geometry.radius_at_midpoint_m, 14.7134, epsilon = 1e-3);
        assert_relative_eq!(geometry.azimuth_deg, 139.737, epsilon = 1e-3);
    }

    #[test]
    fn test_coincident_endpoints() {
        let p = GeoPoint::new(-33.86, 151.21);
        let geometry = compute_link_geometry(p, p, 2.4).unwrap();
        assert_eq!(geometry.center, p);
        assert_eq!(geometry.length_m, 0.0);
        assert_eq!(geometry.radius_at_midpoint_m, 0.0);
        assert_eq!(geometry.azimuth_deg, 0.0);
    }

    #[test]
    fn test_zero_frequency() {
        let geometry = compute_link_geometry(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0), 0.0);
        assert!(matches!(geometry, Err(RfLinkError::InvalidParameter { .. })));
    }
}
