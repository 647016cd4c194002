//! Tiling configuration.
//!
//! Loaded from TOML or built in code:
//!
//! ```toml
//! earth_radius_m = 6371000.0
//! safety_factor = 1.1
//! radius = "first_vertex"   # or "max_vertex"
//! normalize_winding = true
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::EARTH_RADIUS_M;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML syntax or schema error
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Value out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// How the base covering radius of an element is measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoveringRadius {
    /// Distance from the centroid to the element's first vertex.
    ///
    /// May under-cover irregular quads; the safety factor compensates.
    #[default]
    FirstVertex,
    /// Largest distance from the centroid to any vertex.
    MaxVertex,
}

/// Parameters of the tile generator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TilingConfig {
    /// Sphere radius for the haversine distance, meters
    pub earth_radius_m: f64,
    /// Multiplier applied to the base covering radius
    pub safety_factor: f64,
    /// Base radius strategy
    pub radius: CoveringRadius,
    /// Reorder element nodes counterclockwise before generating tiles
    pub normalize_winding: bool,
}

impl Default for TilingConfig {
    fn default() -> Self {
        Self {
            earth_radius_m: EARTH_RADIUS_M,
            safety_factor: 1.1,
            radius: CoveringRadius::FirstVertex,
            normalize_winding: true,
        }
    }
}

impl TilingConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Earth radius in meters.
    pub fn with_earth_radius(mut self, radius_m: f64) -> Self {
        self.earth_radius_m = radius_m;
        self
    }

    /// Set the safety factor.
    pub fn with_safety_factor(mut self, factor: f64) -> Self {
        self.safety_factor = factor;
        self
    }

    /// Set the covering radius strategy.
    pub fn with_radius(mut self, radius: CoveringRadius) -> Self {
        self.radius = radius;
        self
    }

    /// Enable or disable winding normalization.
    pub fn with_normalize_winding(mut self, normalize: bool) -> Self {
        self.normalize_winding = normalize;
        self
    }

    /// Check that all values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.earth_radius_m.is_finite() && self.earth_radius_m > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "earth_radius_m must be positive, got {}",
                self.earth_radius_m
            )));
        }
        if !(self.safety_factor.is_finite() && self.safety_factor > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "safety_factor must be positive, got {}",
                self.safety_factor
            )));
        }
        Ok(())
    }

    /// Parse and validate a TOML configuration. Missing keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = TilingConfig::default();
        assert_eq!(config.earth_radius_m, 6_371_000.0);
        assert_eq!(config.safety_factor, 1.1);
        assert_eq!(config.radius, CoveringRadius::FirstVertex);
        assert!(config.normalize_winding);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = TilingConfig::new()
            .with_safety_factor(1.25)
            .with_radius(CoveringRadius::MaxVertex)
            .with_normalize_winding(false)
            .with_earth_radius(6_378_137.0);
        assert_eq!(config.safety_factor, 1.25);
        assert_eq!(config.radius, CoveringRadius::MaxVertex);
        assert!(!config.normalize_winding);
        assert_eq!(config.earth_radius_m, 6_378_137.0);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = TilingConfig::from_toml_str("radius = \"max_vertex\"\n").unwrap();
        assert_eq!(config.radius, CoveringRadius::MaxVertex);
        assert_eq!(config.safety_factor, 1.1);
    }

    #[test]
    fn test_empty_toml() {
        let config = TilingConfig::from_toml_str("").unwrap();
        assert_eq!(config, TilingConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = TilingConfig::from_toml_str("safety = 2.0\n");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_invalid_values() {
        let result = TilingConfig::from_toml_str("safety_factor = 0.0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let config = TilingConfig::new().with_earth_radius(f64::NAN);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "safety_factor = 1.5").unwrap();
        writeln!(file, "normalize_winding = false").unwrap();

        let config = TilingConfig::load(file.path()).unwrap();
        assert_eq!(config.safety_factor, 1.5);
        assert!(!config.normalize_winding);
    }

    #[test]
    fn test_serialize_roundtrip() {
        let config = TilingConfig::new().with_radius(CoveringRadius::MaxVertex);
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("radius = \"max_vertex\""));
        assert_eq!(TilingConfig::from_toml_str(&text).unwrap(), config);
    }
}
