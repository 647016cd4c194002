//! # tilegrid-rs
//!
//! Circular search tiles from a Gmsh quadrilateral mesh.
//!
//! A region of interest is meshed with quads (lon/lat degrees). Each quad
//! becomes one circle, centered on its vertex centroid, with a haversine
//! radius large enough to cover it:
//! - Gmsh MSH 4.1 ASCII reading and writing
//! - Counterclockwise winding normalization
//! - Haversine covering-radius tiles
//! - Plain-text tile list I/O
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use tilegrid::{TilingConfig, tile_mesh_file_to};
//!
//! let tiles = tile_mesh_file_to(
//!     Path::new("region.msh"),
//!     Path::new("tiles.txt"),
//!     &TilingConfig::default(),
//! )?;
//! println!("{} tiles", tiles.len());
//! # Ok::<(), tilegrid::PipelineError>(())
//! ```

pub mod geometry;
pub mod io;
pub mod mesh;
pub mod pipeline;
pub mod tiling;
pub mod types;

// Re-export main types for convenience
pub use geometry::{GeometryError, haversine_distance, normalize_elements, normalize_quad};
pub use io::{TileFileError, read_tiles, write_tiles};
pub use mesh::{GmshError, MeshDocument, NodeTable, QuadElement, parse_gmsh_mesh, read_gmsh_mesh};
pub use pipeline::{PipelineError, tile_mesh, tile_mesh_file, tile_mesh_file_to, tile_mesh_str};
pub use tiling::{CoveringRadius, Tile, TileSet, TilingConfig, generate_tiles};
pub use types::{ElementId, GeoBoundingBox, NodeId};
