mod bearing;
mod haversine;
mod linspace;
mod path;

pub use self::{bearing::bearing_deg, haversine::distance_m, path::path_points};
use linspace::linspace;

/// Mean earth radius (meters) used by all great-circle math.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
