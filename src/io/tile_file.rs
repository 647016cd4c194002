//! Reader and writer for tile list files.
//!
//! # File Format
//!
//! One tile per line, comma separated, no header:
//!
//! ```text
//! -34.575,-58.375,3782.52
//! -34.575,-58.325,3782.52
//! ```
//!
//! Columns are center latitude (degrees), center longitude (degrees) and
//! radius (meters). Numbers are written in shortest round-trip form.
//! When reading, blank lines and lines starting with `#` are ignored.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::tiling::Tile;

/// Error type for tile file I/O.
#[derive(Debug, Error)]
pub enum TileFileError {
    /// File I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Parse error with 1-based line number
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },
}

/// Render tiles as `lat,lon,radius` lines.
pub fn format_tiles(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(|t| format!("{},{},{}\n", t.latitude, t.longitude, t.radius_m))
        .collect()
}

/// Write tiles to a file, replacing any existing content.
pub fn write_tiles(path: &Path, tiles: &[Tile]) -> Result<(), TileFileError> {
    fs::write(path, format_tiles(tiles))?;
    Ok(())
}

/// Parse tiles from a string.
pub fn parse_tiles(content: &str) -> Result<Vec<Tile>, TileFileError> {
    let mut tiles = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        tiles.push(parse_tile_line(line, line_num + 1)?);
    }

    Ok(tiles)
}

/// Read tiles from a file.
pub fn read_tiles(path: &Path) -> Result<Vec<Tile>, TileFileError> {
    let content = fs::read_to_string(path)?;
    parse_tiles(&content)
}

fn parse_tile_line(line: &str, line_num: usize) -> Result<Tile, TileFileError> {
    let error = |message: String| TileFileError::ParseError {
        line: line_num,
        message,
    };

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != 3 {
        return Err(error(format!("expected 3 fields, found {}", fields.len())));
    }

    let mut values = [0.0; 3];
    for (value, (field, name)) in values
        .iter_mut()
        .zip(fields.iter().zip(["latitude", "longitude", "radius"]))
    {
        *value = field
            .parse::<f64>()
            .map_err(|_| error(format!("invalid {name} '{field}'")))?;
    }
    let [latitude, longitude, radius_m] = values;

    if !(-90.0..=90.0).contains(&latitude) {
        return Err(error(format!("latitude {latitude} out of range")));
    }
    if !(radius_m.is_finite() && radius_m > 0.0) {
        return Err(error(format!("radius {radius_m} must be positive")));
    }

    Ok(Tile::new(latitude, longitude, radius_m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_format() {
        let tiles = [Tile::new(0.5, 0.5, 86488.8), Tile::new(-34.575, -58.375, 1.0)];
        assert_eq!(format_tiles(&tiles), "0.5,0.5,86488.8\n-34.575,-58.375,1\n");
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_tiles(&[]), "");
    }

    #[test]
    fn test_parse_skips_blank_and_comments() {
        let content = "# generated\n\n0.5,0.5,100\n  -1.25 , 2.5 , 7.5  \n";
        let tiles = parse_tiles(content).unwrap();
        assert_eq!(
            tiles,
            vec![Tile::new(0.5, 0.5, 100.0), Tile::new(-1.25, 2.5, 7.5)]
        );
    }

    #[test]
    fn test_parse_wrong_field_count() {
        let result = parse_tiles("0.5,0.5,100\n0.5,0.5\n");
        match result {
            Err(TileFileError::ParseError { line, message }) => {
                assert_eq!(line, 2);
                assert!(message.contains("3 fields"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_bad_number() {
        let result = parse_tiles("0.5,east,100\n");
        assert!(matches!(
            result,
            Err(TileFileError::ParseError { line: 1, ref message }) if message.contains("longitude")
        ));
    }

    #[test]
    fn test_parse_rejects_non_positive_radius() {
        assert!(parse_tiles("0.5,0.5,0\n").is_err());
        assert!(parse_tiles("0.5,0.5,-3\n").is_err());
        assert!(parse_tiles("91.0,0.5,3\n").is_err());
    }

    #[test]
    fn test_write_then_read() {
        let tiles = vec![
            Tile::new(-34.575, -58.375, 3782.521_944_8),
            Tile::new(0.5, 0.5, 86_488.807_1),
        ];
        let file = NamedTempFile::new().unwrap();

        write_tiles(file.path(), &tiles).unwrap();
        assert_eq!(fs::read_to_string(file.path()).unwrap(), format_tiles(&tiles));
        assert_eq!(read_tiles(file.path()).unwrap(), tiles);
    }

    #[test]
    fn test_write_matches_format() {
        let tiles = [Tile::new(-34.6, -58.4, 1234.5), Tile::new(10.0, 20.0, 0.125)];
        let file = NamedTempFile::new().unwrap();

        write_tiles(file.path(), &tiles).unwrap();
        assert_eq!(
            fs::read_to_string(file.path()).unwrap(),
            "-34.6,-58.4,1234.5\n10,20,0.125\n"
        );
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_tiles(&dir.path().join("absent.txt"));
        assert!(matches!(result, Err(TileFileError::IoError(_))));
    }
}
