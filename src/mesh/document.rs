//! Mesh document produced by the Gmsh reader.
//!
//! Mirrors the sections of an MSH 4.1 file: physical groups, geometric
//! entities (points, curves, surfaces) and the discretized mesh (nodes and
//! quadrilateral elements). The document is built once and read-only after.

use crate::types::{ElementId, NodeId};

use super::node_table::NodeTable;

/// A named physical group from `$PhysicalNames`.
#[derive(Clone, Debug, PartialEq)]
pub struct PhysicalGroup {
    /// Dimension of the tagged entities (1 = curve, 2 = surface)
    pub dimension: u8,
    /// Numeric tag, unique within its dimension
    pub tag: i32,
    /// Group name with the surrounding quotes removed
    pub name: String,
}

/// Physical groups split by dimension.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhysicalEntities {
    /// Boundary curve groups (dimension 1)
    pub curves: Vec<PhysicalGroup>,
    /// Surface groups (every other dimension)
    pub surfaces: Vec<PhysicalGroup>,
}

impl PhysicalEntities {
    /// Total number of groups.
    pub fn len(&self) -> usize {
        self.curves.len() + self.surfaces.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty() && self.surfaces.is_empty()
    }

    /// Find a group by dimension and tag.
    pub fn get(&self, dimension: u8, tag: i32) -> Option<&PhysicalGroup> {
        let table = if dimension == 1 {
            &self.curves
        } else {
            &self.surfaces
        };
        table.iter().find(|g| g.dimension == dimension && g.tag == tag)
    }

    /// Iterate over all groups in curve-then-surface order.
    pub fn iter(&self) -> impl Iterator<Item = &PhysicalGroup> {
        self.curves.iter().chain(self.surfaces.iter())
    }
}

/// Geometric point entity.
#[derive(Clone, Debug, PartialEq)]
pub struct GeometricPoint {
    pub id: i32,
    pub x: f64,
    pub y: f64,
}

/// Geometric curve entity.
#[derive(Clone, Debug, PartialEq)]
pub struct GeometricCurve {
    pub id: i32,
    /// `[min_x, min_y, min_z, max_x, max_y, max_z]`
    pub bbox: [f64; 6],
    pub physical_tags: Vec<i32>,
    /// Bounding point ids; the sign encodes orientation.
    pub bounding_points: Vec<i32>,
}

/// Geometric surface entity.
#[derive(Clone, Debug, PartialEq)]
pub struct GeometricSurface {
    pub id: i32,
    /// `[min_x, min_y, min_z, max_x, max_y, max_z]`
    pub bbox: [f64; 6],
    pub physical_tags: Vec<i32>,
    /// Bounding curve ids; the sign encodes orientation.
    pub bounding_curves: Vec<i32>,
}

/// Geometric entities from the `$Entities` section.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Geometry {
    pub points: Vec<GeometricPoint>,
    pub curves: Vec<GeometricCurve>,
    pub surfaces: Vec<GeometricSurface>,
}

/// A mesh node.
///
/// Coordinates are stored as `(x, y, z)` with x = longitude and
/// y = latitude for geographic meshes.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: NodeId,
    /// Dimension of the owning geometric entity
    pub entity_dim: u8,
    /// Tag of the owning geometric entity
    pub entity_tag: i32,
    pub coords: [f64; 3],
}

impl Node {
    /// Longitude (first coordinate).
    #[inline]
    pub fn lon(&self) -> f64 {
        self.coords[0]
    }

    /// Latitude (second coordinate).
    #[inline]
    pub fn lat(&self) -> f64 {
        self.coords[1]
    }
}

/// A 4-node quadrilateral element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuadElement {
    pub id: ElementId,
    /// Tag of the surface entity the element belongs to
    pub entity_tag: i32,
    /// Node ids in file-declared order (not necessarily counterclockwise)
    pub nodes: [NodeId; 4],
}

impl QuadElement {
    /// Create a new element.
    pub fn new(id: ElementId, entity_tag: i32, nodes: [NodeId; 4]) -> Self {
        Self {
            id,
            entity_tag,
            nodes,
        }
    }

    /// Same element with its nodes replaced.
    pub fn with_nodes(&self, nodes: [NodeId; 4]) -> Self {
        Self {
            id: self.id,
            entity_tag: self.entity_tag,
            nodes,
        }
    }
}

/// The discretized geometry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    /// Nodes in declaration order
    pub nodes: Vec<Node>,
    /// Quadrilateral elements in declaration order; other types are dropped
    pub elements: Vec<QuadElement>,
}

/// Root artifact produced by the parser.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshDocument {
    pub physical_entities: PhysicalEntities,
    pub geometry: Geometry,
    pub mesh: MeshData,
}

impl MeshDocument {
    /// Number of nodes.
    pub fn n_nodes(&self) -> usize {
        self.mesh.nodes.len()
    }

    /// Number of quadrilateral elements.
    pub fn n_elements(&self) -> usize {
        self.mesh.elements.len()
    }

    /// Build the node id to coordinate map.
    pub fn node_table(&self) -> NodeTable {
        NodeTable::from_nodes(&self.mesh.nodes)
    }
}
