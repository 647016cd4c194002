//! Covering circles for quadrilateral elements.
//!
//! For each element the tile center is the arithmetic mean of the four
//! `(lon, lat)` vertices. The radius is the haversine distance from the
//! center to a vertex, scaled by the safety factor:
//!
//! r = safety_factor · d(center, v₀)            (first vertex, default)
//! r = safety_factor · maxᵢ d(center, vᵢ)       (max vertex)

use crate::geometry::{GeometryError, centroid, element_coords, haversine_distance};
use crate::mesh::{NodeTable, QuadElement};

use super::config::{CoveringRadius, TilingConfig};

/// One search tile: a circle on the Earth's surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
    /// Center latitude in degrees
    pub latitude: f64,
    /// Center longitude in degrees
    pub longitude: f64,
    /// Covering radius in meters
    pub radius_m: f64,
}

impl Tile {
    /// Create a new tile.
    pub fn new(latitude: f64, longitude: f64, radius_m: f64) -> Self {
        Self {
            latitude,
            longitude,
            radius_m,
        }
    }
}

/// Compute the covering tile of a single element.
///
/// # Errors
/// * `InvalidNodeReference` if a node id is not in `nodes`
/// * `DegenerateElement` if the radius is not strictly positive and finite
pub fn covering_tile(
    nodes: &NodeTable,
    element: &QuadElement,
    config: &TilingConfig,
) -> Result<Tile, GeometryError> {
    let coords = element_coords(nodes, element)?;
    let (lon_c, lat_c) = centroid(&coords);

    let distance_to = |&(lon, lat): &(f64, f64)| {
        haversine_distance(lat_c, lon_c, lat, lon, config.earth_radius_m)
    };
    let base = match config.radius {
        CoveringRadius::FirstVertex => distance_to(&coords[0]),
        CoveringRadius::MaxVertex => coords.iter().map(distance_to).fold(0.0, f64::max),
    };
    let radius_m = base * config.safety_factor;

    if !(radius_m.is_finite() && radius_m > 0.0) {
        return Err(GeometryError::DegenerateElement {
            element: element.id,
            reason: format!("covering radius {radius_m} is not positive"),
        });
    }

    Ok(Tile::new(lat_c, lon_c, radius_m))
}

/// Compute one tile per element, in element order.
///
/// Elements are expected to be normalized already; the first vertex of
/// each element determines the default radius.
pub fn generate_tiles(
    nodes: &NodeTable,
    elements: &[QuadElement],
    config: &TilingConfig,
) -> Result<Vec<Tile>, GeometryError> {
    elements
        .iter()
        .map(|element| covering_tile(nodes, element, config))
        .collect()
}
