//! Command-line front end: turn a Gmsh quad mesh into a tile list.
//!
//! ```text
//! tilegrid region.msh -o tiles.txt
//! tilegrid region.msh -o tiles.txt --config tiling.toml --max-vertex-radius
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use tilegrid::pipeline::tile_mesh_file_to;
use tilegrid::tiling::{CoveringRadius, TilingConfig};

#[derive(Parser, Debug)]
#[command(name = "tilegrid", version, about)]
struct Args {
    /// Gmsh MSH 4.1 ASCII mesh with quadrilateral elements
    mesh: PathBuf,

    /// Output tile file (`lat,lon,radius` per line)
    #[arg(short, long, default_value = "tiles.txt")]
    output: PathBuf,

    /// TOML tiling configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Cover every vertex instead of measuring to the first one
    #[arg(long, default_value_t = false)]
    max_vertex_radius: bool,

    /// Override the radius safety factor
    #[arg(long)]
    safety_factor: Option<f64>,

    /// Keep element node order as declared in the mesh
    #[arg(long, default_value_t = false)]
    no_normalize: bool,
}

impl Args {
    fn tiling_config(&self) -> Result<TilingConfig> {
        let mut config = match &self.config {
            Some(path) => TilingConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => TilingConfig::default(),
        };

        if self.max_vertex_radius {
            config = config.with_radius(CoveringRadius::MaxVertex);
        }
        if let Some(factor) = self.safety_factor {
            config = config.with_safety_factor(factor);
        }
        if self.no_normalize {
            config = config.with_normalize_winding(false);
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.tiling_config()?;

    let tiles = tile_mesh_file_to(&args.mesh, &args.output, &config)
        .with_context(|| format!("tiling {}", args.mesh.display()))?;

    if let Some(stats) = tiles.statistics() {
        info!("{}", stats.to_string().trim_end());
    }
    Ok(())
}
