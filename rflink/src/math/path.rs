use super::linspace;
use crate::GeoPoint;

/// Returns `n` points evenly spaced in lat/lon from `a` to `b`.
///
/// Straight-line interpolation in degrees, matching the arithmetic
/// midpoint used for link geometry.
pub fn path_points(a: GeoPoint, b: GeoPoint, n: usize) -> impl Iterator<Item = GeoPoint> {
    linspace(a.lat, b.lat, n)
        .zip(linspace(a.lon, b.lon, n))
        .map(|(lat, lon)| GeoPoint::new(lat, lon))
}
