use geo::geometry::{Coord, Point};

/// A geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Latitude in degrees, [-90, 90].
    pub lat: f64,
    /// Longitude in degrees, [-180, 180].
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<GeoPoint> for Coord<f64> {
    fn from(GeoPoint { lat, lon }: GeoPoint) -> Self {
        Coord { x: lon, y: lat }
    }
}

impl From<Coord<f64>> for GeoPoint {
    fn from(Coord { x, y }: Coord<f64>) -> Self {
        Self { lat: y, lon: x }
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(point: GeoPoint) -> Self {
        Point::from(Coord::<f64>::from(point))
    }
}

impl From<Point<f64>> for GeoPoint {
    fn from(point: Point<f64>) -> Self {
        Self::from(point.0)
    }
}
