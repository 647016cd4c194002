//! I/O utilities for tile output files.
//!
//! Mesh files are handled by [`crate::mesh::gmsh`]; this module covers the
//! plain-text tile list consumed by downstream search jobs.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use tilegrid::io::{read_tiles, write_tiles};
//!
//! let tiles = read_tiles(Path::new("tiles.txt")).unwrap();
//! for t in &tiles {
//!     println!("{:.4}, {:.4}: {:.0} m", t.latitude, t.longitude, t.radius_m);
//! }
//! write_tiles(Path::new("copy.txt"), &tiles).unwrap();
//! ```

mod tile_file;

pub use tile_file::{TileFileError, format_tiles, parse_tiles, read_tiles, write_tiles};
