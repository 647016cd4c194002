//! Ordered collection of tiles with summary statistics.

use std::fmt;

use crate::types::GeoBoundingBox;

use super::generator::Tile;

/// Tiles in element order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TileSet {
    tiles: Vec<Tile>,
}

impl TileSet {
    /// Wrap a list of tiles.
    pub fn new(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// All tiles as a slice.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate over tiles.
    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// Consume the set, returning the tiles.
    pub fn into_inner(self) -> Vec<Tile> {
        self.tiles
    }

    /// Bounding box of the tile centers.
    pub fn bounding_box(&self) -> Option<GeoBoundingBox> {
        GeoBoundingBox::from_points(self.tiles.iter().map(|t| (t.latitude, t.longitude)))
    }

    /// Count, radius range and center extent. `None` when empty.
    pub fn statistics(&self) -> Option<TileStatistics> {
        let bbox = self.bounding_box()?;

        let (min, max, sum) = self.tiles.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, sum), t| (min.min(t.radius_m), max.max(t.radius_m), sum + t.radius_m),
        );

        Some(TileStatistics {
            count: self.tiles.len(),
            min_radius_m: min,
            max_radius_m: max,
            mean_radius_m: sum / self.tiles.len() as f64,
            bbox,
        })
    }
}

impl From<Vec<Tile>> for TileSet {
    fn from(tiles: Vec<Tile>) -> Self {
        Self::new(tiles)
    }
}

impl<'a> IntoIterator for &'a TileSet {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

/// Summary of a tile set.
#[derive(Debug, Clone)]
pub struct TileStatistics {
    /// Number of tiles
    pub count: usize,
    /// Smallest radius in meters
    pub min_radius_m: f64,
    /// Largest radius in meters
    pub max_radius_m: f64,
    /// Mean radius in meters
    pub mean_radius_m: f64,
    /// Extent of the tile centers
    pub bbox: GeoBoundingBox,
}

impl fmt::Display for TileStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tile Statistics:")?;
        writeln!(f, "  Tiles: {}", self.count)?;
        writeln!(
            f,
            "  Radius: min {:.1} m, max {:.1} m, mean {:.1} m",
            self.min_radius_m, self.max_radius_m, self.mean_radius_m
        )?;
        writeln!(f, "  Centers: {}", self.bbox)
    }
}
