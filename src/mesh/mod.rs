//! Mesh representation.
//!
//! Provides the parsed form of a Gmsh mesh file:
//! - Physical groups and geometric entities
//! - Nodes with their owning entity and coordinates
//! - Quadrilateral element connectivity
//! - Explicit node id to coordinate lookup
//! - Gmsh mesh file I/O

mod document;
pub mod gmsh;
mod node_table;

pub use document::{
    GeometricCurve, GeometricPoint, GeometricSurface, Geometry, MeshData, MeshDocument, Node,
    PhysicalEntities, PhysicalGroup, QuadElement,
};
pub use gmsh::{GmshError, parse_gmsh_mesh, read_gmsh_mesh, write_gmsh_mesh};
pub use node_table::NodeTable;
