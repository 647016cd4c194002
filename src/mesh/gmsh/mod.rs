//! Gmsh mesh file I/O.
//!
//! Supports reading and writing Gmsh MSH format version 4.1 (ASCII).
//!
//! ## Sections
//! - `$PhysicalNames`: named curve and surface groups
//! - `$Entities`: geometric points, curves and surfaces
//! - `$Nodes`: node blocks per owning entity
//! - `$Elements`: element blocks; only 4-node quadrilaterals (type 3) are kept
//!
//! ## Example
//! ```no_run
//! use tilegrid::mesh::gmsh::read_gmsh_mesh;
//! use std::path::Path;
//!
//! let doc = read_gmsh_mesh(Path::new("buenos_aires.msh")).expect("Failed to read mesh");
//! println!("{} quadrilaterals", doc.n_elements());
//! ```

mod cursor;
mod error;
mod reader;
mod section;
mod writer;

pub use error::GmshError;
pub use reader::{GmshElementType, parse_gmsh_mesh, read_gmsh_mesh};
pub use section::Section;
pub use writer::{format_gmsh_mesh, write_gmsh_mesh};
