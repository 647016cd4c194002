//! End-to-end tiling: mesh file in, tile list out.
//!
//! parse → normalize winding → generate tiles → write
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use tilegrid::pipeline::tile_mesh_file_to;
//! use tilegrid::tiling::TilingConfig;
//!
//! let tiles = tile_mesh_file_to(
//!     Path::new("region.msh"),
//!     Path::new("tiles.txt"),
//!     &TilingConfig::default(),
//! )
//! .unwrap();
//! if let Some(stats) = tiles.statistics() {
//!     println!("{}", stats);
//! }
//! ```

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use crate::geometry::{GeometryError, normalize_elements};
use crate::io::{TileFileError, write_tiles};
use crate::mesh::{GmshError, MeshDocument, parse_gmsh_mesh, read_gmsh_mesh};
use crate::tiling::{ConfigError, TileSet, TilingConfig, generate_tiles};

/// Any failure along the tiling pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Mesh file could not be read or decoded
    #[error("Mesh error: {0}")]
    Mesh(#[from] GmshError),

    /// Element could not be normalized or tiled
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// Tile file could not be written
    #[error("Tile file error: {0}")]
    TileFile(#[from] TileFileError),

    /// Configuration is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Generate tiles for an already parsed mesh.
pub fn tile_mesh(doc: &MeshDocument, config: &TilingConfig) -> Result<TileSet, PipelineError> {
    config.validate()?;

    let nodes = doc.node_table();
    let elements = if config.normalize_winding {
        Cow::Owned(normalize_elements(&nodes, &doc.mesh.elements)?)
    } else {
        debug!("Winding normalization disabled, using file node order");
        Cow::Borrowed(doc.mesh.elements.as_slice())
    };

    let tiles = TileSet::new(generate_tiles(&nodes, &elements, config)?);
    info!(
        "Generated {} tiles from {} elements",
        tiles.len(),
        doc.n_elements()
    );
    Ok(tiles)
}

/// Parse mesh text and generate its tiles.
pub fn tile_mesh_str(content: &str, config: &TilingConfig) -> Result<TileSet, PipelineError> {
    let doc = parse_gmsh_mesh(content)?;
    tile_mesh(&doc, config)
}

/// Read a mesh file and generate its tiles.
pub fn tile_mesh_file(path: &Path, config: &TilingConfig) -> Result<TileSet, PipelineError> {
    info!("Reading mesh {}", path.display());
    let doc = read_gmsh_mesh(path)?;
    tile_mesh(&doc, config)
}

/// Read a mesh file, generate its tiles and write them to `output`.
///
/// Nothing is written if any step before the write fails.
pub fn tile_mesh_file_to(
    mesh_path: &Path,
    output: &Path,
    config: &TilingConfig,
) -> Result<TileSet, PipelineError> {
    let tiles = tile_mesh_file(mesh_path, config)?;
    write_tiles(output, tiles.tiles())?;
    info!("Wrote {} tiles to {}", tiles.len(), output.display());
    Ok(tiles)
}

/// Tile several mesh files independently.
///
/// One result per input, in input order. With the `parallel` feature the
/// files are processed on the rayon thread pool.
pub fn tile_mesh_files<P>(
    paths: &[P],
    config: &TilingConfig,
) -> Vec<(PathBuf, Result<TileSet, PipelineError>)>
where
    P: AsRef<Path> + Sync,
{
    let run = |path: &P| {
        let path = path.as_ref();
        (path.to_path_buf(), tile_mesh_file(path, config))
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        paths.par_iter().map(run).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        paths.iter().map(run).collect()
    }
}
