use crate::GeoPoint;

/// Returns the planar direction, in degrees (-180, 180], from `a` to
/// `b`, treating lat/lon as a flat cartesian grid.
///
/// This is *not* a geodesic bearing. It is counter-clockwise from east
/// (`0` is due east, `90` due north) and only meant to orient visual
/// indicators.
pub fn bearing_deg(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = b.lat - a.lat;
    let d_lon = b.lon - a.lon;
    let angle = d_lat.atan2(d_lon).to_degrees();
    // atan2 may return -180 for (−0, −x); fold it into the half-open range.
    if angle <= -180.0 {
        angle + 360.0
    } else {
        angle
    }
}
