//! Per-element geometry on geographic quadrilaterals.
//!
//! - **Winding**: counterclockwise reordering of element nodes
//! - **Quad measures**: vertex centroid, signed area
//! - **Haversine**: great-circle distance in meters

mod error;
mod haversine;
mod quad;
mod winding;

pub use error::GeometryError;
pub use haversine::{EARTH_RADIUS_M, haversine_distance};
pub use quad::{centroid, element_coords, signed_area};
pub use winding::{is_counterclockwise, normalize_elements, normalize_quad};
