//! Counterclockwise vertex ordering for quadrilaterals.
//!
//! Gmsh does not guarantee a winding for element connectivity. The
//! vertices are sorted by polar angle `atan2(y - cy, x - cx)` about the
//! vertex centroid, which yields counterclockwise order for any quad that
//! is star-shaped with respect to its centroid.

use log::trace;

use crate::mesh::{NodeTable, QuadElement};
use crate::types::NodeId;

use super::error::GeometryError;
use super::quad::{centroid, element_coords, extent_squared, signed_area};

/// Relative tolerance below which an element's area counts as zero.
const AREA_TOLERANCE: f64 = 1e-12;

/// Reorder an element's nodes counterclockwise around their centroid.
///
/// The result starts at the vertex with the smallest polar angle in
/// `(-π, π]`, so normalizing twice gives the same order.
///
/// # Errors
/// * `InvalidNodeReference` if a node id is not in `nodes`
/// * `DegenerateElement` for coincident vertices, equal polar angles or
///   zero area
pub fn normalize_quad(nodes: &NodeTable, element: &QuadElement) -> Result<QuadElement, GeometryError> {
    let coords = element_coords(nodes, element)?;
    let degenerate = |reason: String| GeometryError::DegenerateElement {
        element: element.id,
        reason,
    };

    for i in 0..4 {
        for j in i + 1..4 {
            if coords[i] == coords[j] {
                return Err(degenerate(format!(
                    "nodes {} and {} coincide",
                    element.nodes[i], element.nodes[j]
                )));
            }
        }
    }

    let (cx, cy) = centroid(&coords);
    let mut vertices: [(f64, NodeId, (f64, f64)); 4] = [(0.0, NodeId::new(0), (0.0, 0.0)); 4];
    for (k, vertex) in vertices.iter_mut().enumerate() {
        let (x, y) = coords[k];
        *vertex = ((y - cy).atan2(x - cx), element.nodes[k], (x, y));
    }
    vertices.sort_by(|a, b| a.0.total_cmp(&b.0));

    if vertices.windows(2).any(|w| w[0].0 == w[1].0) {
        return Err(degenerate("two vertices share a polar angle".to_string()));
    }

    let ordered = vertices.map(|v| v.2);
    let area = signed_area(&ordered);
    if !area.is_finite() || area.abs() <= AREA_TOLERANCE * extent_squared(&ordered) {
        return Err(degenerate(format!("zero area ({area:e})")));
    }

    let normalized = element.with_nodes(vertices.map(|v| v.1));
    trace!(
        "Element {}: {:?} -> {:?}",
        element.id,
        element.nodes,
        normalized.nodes
    );
    Ok(normalized)
}

/// Normalize every element, stopping at the first failure.
pub fn normalize_elements(
    nodes: &NodeTable,
    elements: &[QuadElement],
) -> Result<Vec<QuadElement>, GeometryError> {
    elements.iter().map(|e| normalize_quad(nodes, e)).collect()
}

/// Check whether an element's nodes are in counterclockwise order.
pub fn is_counterclockwise(nodes: &NodeTable, element: &QuadElement) -> Result<bool, GeometryError> {
    let coords = element_coords(nodes, element)?;
    Ok(signed_area(&coords) > 0.0)
}
