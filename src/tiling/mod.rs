//! Search tile generation.
//!
//! Each normalized quadrilateral element becomes one circular tile: the
//! center is the vertex centroid and the radius covers the element with
//! a configurable safety margin.

mod config;
mod generator;
mod tile_set;

pub use config::{ConfigError, CoveringRadius, TilingConfig};
pub use generator::{Tile, covering_tile, generate_tiles};
pub use tile_set::{TileSet, TileStatistics};
