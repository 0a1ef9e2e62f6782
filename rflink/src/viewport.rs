//! Geographic to screen projection.
//!
//! The host map renderer owns the real viewport; anything that can map
//! a [`GeoPoint`] to a pixel position implements [`Viewport`],
//! including plain closures.

use crate::GeoPoint;
use geo::geometry::Coord;
use std::f64::consts::PI;

/// Maps a geographic coordinate to a screen point (pixels, y down).
pub trait Viewport {
    fn project(&self, point: GeoPoint) -> Coord<f64>;
}

impl<F> Viewport for F
where
    F: Fn(GeoPoint) -> Coord<f64>,
{
    fn project(&self, point: GeoPoint) -> Coord<f64> {
        self(point)
    }
}

/// Side length of a slippy-map tile in pixels.
const TILE_PX: f64 = 256.0;

/// Web Mercator is undefined at the poles; latitudes are clamped here.
const MAX_LAT_DEG: f64 = 85.051_128_779_806_59;

/// A spherical Web Mercator viewport, the projection used by slippy
/// map tile servers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WebMercator {
    /// Zoom level; the world is `256 * 2^zoom` pixels wide.
    zoom: f64,

    /// World pixel position of the screen's top-left corner.
    origin: Coord<f64>,
}

impl WebMercator {
    /// Returns a viewport whose top-left corner is the world's
    /// top-left corner.
    pub fn new(zoom: f64) -> Self {
        Self {
            zoom,
            origin: Coord { x: 0.0, y: 0.0 },
        }
    }

    /// Returns a viewport of `size` pixels centered on `center`.
    pub fn centered(center: GeoPoint, zoom: f64, size: Coord<f64>) -> Self {
        let world = Self::new(zoom).world_px(center);
        Self {
            zoom,
            origin: world - size / 2.0,
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Width of the whole world, in pixels, at this zoom.
    pub fn world_size_px(&self) -> f64 {
        TILE_PX * self.zoom.exp2()
    }

    fn world_px(&self, point: GeoPoint) -> Coord<f64> {
        let size = self.world_size_px();
        let lat = point.lat.clamp(-MAX_LAT_DEG, MAX_LAT_DEG).to_radians();
        let x = size * (point.lon + 180.0) / 360.0;
        let y = size * (0.5 - (PI / 4.0 + lat / 2.0).tan().ln() / (2.0 * PI));
        Coord { x, y }
    }
}

impl Viewport for WebMercator {
    fn project(&self, point: GeoPoint) -> Coord<f64> {
        self.world_px(point) - self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::{Viewport, WebMercator};
    use crate::GeoPoint;
    use approx::assert_relative_eq;
    use geo::{coord, Coord};

    #[test]
    fn test_closure_viewport() {
        let flat = |p: GeoPoint| coord!(x: p.lon * 10.0, y: -p.lat * 10.0);
        assert_eq!(
            flat.project(GeoPoint::new(1.0, 2.0)),
            coord!(x: 20.0, y: -10.0)
        );
    }

    #[test]
    fn test_world_corners() {
        let viewport = WebMercator::new(0.0);
        let center = viewport.project(GeoPoint::new(0.0, 0.0));
        assert_relative_eq!(center.x, 128.0);
        assert_relative_eq!(center.y, 128.0, epsilon = 1e-9);

        let nw = viewport.project(GeoPoint::new(90.0, -180.0));
        assert_relative_eq!(nw.x, 0.0);
        assert_relative_eq!(nw.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_north_is_up() {
        let viewport = WebMercator::new(5.0);
        let south = viewport.project(GeoPoint::new(10.0, 0.0));
        let north = viewport.project(GeoPoint::new(20.0, 0.0));
        assert!(north.y < south.y);
    }

    #[test]
    fn test_centered() {
        let center = GeoPoint::new(20.5937, 78.9629);
        let size: Coord<f64> = coord!(x: 800.0, y: 600.0);
        let viewport = WebMercator::centered(center, 5.0, size);
        let projected = viewport.project(center);
        assert_relative_eq!(projected.x, 400.0, epsilon = 1e-9);
        assert_relative_eq!(projected.y, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zoom_doubles_scale() {
        let a = GeoPoint::new(28.6139, 77.2090);
        let b = GeoPoint::new(28.7041, 77.1025);
        let span = |zoom: f64| {
            let viewport = WebMercator::new(zoom);
            let d = viewport.project(b) - viewport.project(a);
            d.x.hypot(d.y)
        };
        assert_relative_eq!(span(11.0), 2.0 * span(10.0), max_relative = 1e-9);
    }
}
