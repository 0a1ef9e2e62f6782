//! Screen-space rendering of a link's first fresnel zone.
//!
//! A fresnel ellipsoid cut through an arbitrary map projection is not
//! really an ellipse. What we produce is an indicator that follows the
//! link on screen and scales smoothly with zoom.

use crate::{link::FresnelGeometry, viewport::Viewport, GeoPoint, RfLinkError};
use geo::geometry::Coord;
use log::debug;

/// Smallest semi-major radius, in pixels, `EllipseConfig` accepts.
pub const MIN_SEMI_MAJOR_PX: f64 = 5.0;

/// Smallest semi-minor radius, in pixels, `EllipseConfig` accepts.
pub const MIN_SEMI_MINOR_PX: f64 = 8.0;

/// Visibility floors applied when projecting an ellipse.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EllipseConfig {
    min_semi_major_px: f64,
    min_semi_minor_px: f64,
}

impl Default for EllipseConfig {
    fn default() -> Self {
        Self {
            min_semi_major_px: MIN_SEMI_MAJOR_PX,
            min_semi_minor_px: MIN_SEMI_MINOR_PX,
        }
    }
}

impl EllipseConfig {
    /// Returns a config with custom floors.
    ///
    /// Floors below [`MIN_SEMI_MAJOR_PX`] / [`MIN_SEMI_MINOR_PX`] (or
    /// non-finite ones) are rejected.
    pub fn new(min_semi_major_px: f64, min_semi_minor_px: f64) -> Result<Self, RfLinkError> {
        if !(min_semi_major_px.is_finite() && min_semi_major_px >= MIN_SEMI_MAJOR_PX) {
            return Err(RfLinkError::InvalidParameter {
                name: "min_semi_major_px",
                value: min_semi_major_px,
            });
        }
        if !(min_semi_minor_px.is_finite() && min_semi_minor_px >= MIN_SEMI_MINOR_PX) {
            return Err(RfLinkError::InvalidParameter {
                name: "min_semi_minor_px",
                value: min_semi_minor_px,
            });
        }
        Ok(Self {
            min_semi_major_px,
            min_semi_minor_px,
        })
    }

    pub fn min_semi_major_px(&self) -> f64 {
        self.min_semi_major_px
    }

    pub fn min_semi_minor_px(&self) -> f64 {
        self.min_semi_minor_px
    }
}

/// A drawable, rotated ellipse in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScreenEllipse {
    pub center: Coord<f64>,
    pub semi_major_px: f64,
    pub semi_minor_px: f64,

    /// Clockwise rotation of the major axis from screen +x, in degrees.
    ///
    /// Screen y grows downward, so this is unrelated to the link's
    /// geographic azimuth.
    pub rotation_deg: f64,
}

impl ScreenEllipse {
    /// SVG `transform` attribute rotating an axis-aligned ellipse drawn
    /// at `center` into place.
    pub fn to_svg_transform(&self) -> String {
        format!(
            "rotate({}, {}, {})",
            self.rotation_deg, self.center.x, self.center.y
        )
    }
}

/// Projects `geometry`, the fresnel geometry of the link from `a` to
/// `b`, onto the screen through `viewport`.
pub fn project_to_screen<V>(
    geometry: &FresnelGeometry,
    a: GeoPoint,
    b: GeoPoint,
    viewport: &V,
    config: &EllipseConfig,
) -> ScreenEllipse
where
    V: Viewport + ?Sized,
{
    let p_a = viewport.project(a);
    let p_b = viewport.project(b);
    let delta = p_b - p_a;

    // Screen midpoint, not `geometry.center` re-projected.
    let center = (p_a + p_b) / 2.0;
    let half_span_px = delta.x.hypot(delta.y) / 2.0;
    let semi_major_px = half_span_px.max(config.min_semi_major_px);

    // Once the major axis is floored the pixel scale no longer tracks
    // the link, so the minor axis is floored too.
    let m_per_px = geometry.length_m / (2.0 * semi_major_px);
    let semi_minor_px = if half_span_px >= config.min_semi_major_px
        && m_per_px.is_finite()
        && m_per_px > 0.0
    {
        (geometry.radius_at_midpoint_m / m_per_px).max(config.min_semi_minor_px)
    } else {
        config.min_semi_minor_px
    };

    let rotation_deg = delta.y.atan2(delta.x).to_degrees();

    debug!(
        "ellipse; center: {center:?}, major: {semi_major_px}, minor: {semi_minor_px}, m/px: {m_per_px}"
    );

    ScreenEllipse {
        center,
        semi_major_px,
        semi_minor_px,
        rotation_deg,
    }
}
