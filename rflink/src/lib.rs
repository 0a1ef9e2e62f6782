//! # Radio Link Geometry
//!
//! `rflink` is the computational core of a point-to-point radio link
//! planner: great-circle link length, first fresnel zone size, and a
//! screen-space ellipse for drawing the zone over a map. Towers and the
//! links between them live in a [`LinkRegistry`].
//!
//! ```
//! use rflink::{ellipse::EllipseConfig, viewport::WebMercator, GeoPoint, LinkRegistry};
//!
//! let mut registry = LinkRegistry::new();
//! let a = registry.add_tower(GeoPoint::new(28.6139, 77.2090), 5.0, "A");
//! let b = registry.add_tower(GeoPoint::new(28.7041, 77.1025), 5.0, "B");
//! registry.begin_link(a);
//! let link = registry.complete_link(b)?;
//! registry.set_active_link(Some(link));
//!
//! let ellipse = registry
//!     .active_ellipse(&WebMercator::new(16.0), &EllipseConfig::default())
//!     .expect("link is active")?;
//! assert!(ellipse.semi_minor_px >= 8.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod ellipse;
mod error;
pub mod fresnel;
pub mod link;
pub mod math;
mod point;
pub mod registry;
pub mod viewport;

pub use crate::{
    error::{LinkRejection, RfLinkError},
    link::{compute_link_geometry, FresnelGeometry},
    point::GeoPoint,
    registry::{LinkRegistry, TowerPatch},
};
pub use geo;
