//! Planar quantities of a single quadrilateral.
//!
//! Coordinates are `(x, y)` = `(lon, lat)` in degrees. Areas are in
//! square degrees and only used for sign and degeneracy checks.

use geo::{Area, LineString, Polygon};

use crate::mesh::{NodeTable, QuadElement};

use super::error::GeometryError;

/// Resolve the four vertex coordinates of an element.
pub fn element_coords(
    nodes: &NodeTable,
    element: &QuadElement,
) -> Result<[(f64, f64); 4], GeometryError> {
    let mut coords = [(0.0, 0.0); 4];
    for (slot, &node) in coords.iter_mut().zip(element.nodes.iter()) {
        *slot = nodes
            .get(node)
            .ok_or(GeometryError::InvalidNodeReference {
                element: element.id,
                node,
            })?;
    }
    Ok(coords)
}

/// Arithmetic mean of the four vertices.
pub fn centroid(coords: &[(f64, f64); 4]) -> (f64, f64) {
    let (sx, sy) = coords
        .iter()
        .fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x, sy + y));
    (sx / 4.0, sy / 4.0)
}

/// Signed shoelace area in the given vertex order.
///
/// Positive for counterclockwise order.
pub fn signed_area(coords: &[(f64, f64); 4]) -> f64 {
    Polygon::new(LineString::from(coords.to_vec()), vec![]).signed_area()
}

/// Squared diagonal of the vertices' bounding box.
pub fn extent_squared(coords: &[(f64, f64); 4]) -> f64 {
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for &(x, y) in coords {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }
    let (dx, dy) = (max_x - min_x, max_y - min_y);
    dx * dx + dy * dy
}
