//! Geographic bounds.

use std::fmt;

/// Geographic bounding box in WGS84 degrees.
///
/// # Example
///
/// ```
/// use tilegrid::types::GeoBoundingBox;
///
/// let bbox = GeoBoundingBox::from_points([(-34.6, -58.4), (-34.5, -58.3)]).unwrap();
/// assert!(bbox.contains(-34.55, -58.35));
/// assert!(!bbox.contains(-33.0, -58.35));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoBoundingBox {
    /// Minimum longitude (western edge) in degrees
    pub min_lon: f64,
    /// Minimum latitude (southern edge) in degrees
    pub min_lat: f64,
    /// Maximum longitude (eastern edge) in degrees
    pub max_lon: f64,
    /// Maximum latitude (northern edge) in degrees
    pub max_lat: f64,
}

impl GeoBoundingBox {
    /// Create a new bounding box.
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Smallest box enclosing every `(lat, lon)` point.
    ///
    /// Returns `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut iter = points.into_iter();
        let (lat, lon) = iter.next()?;
        let mut bbox = Self::new(lon, lat, lon, lat);
        for (lat, lon) in iter {
            bbox.include(lat, lon);
        }
        Some(bbox)
    }

    /// Grow the box so it contains `(lat, lon)`.
    pub fn include(&mut self, lat: f64, lon: f64) {
        self.min_lon = self.min_lon.min(lon);
        self.max_lon = self.max_lon.max(lon);
        self.min_lat = self.min_lat.min(lat);
        self.max_lat = self.max_lat.max(lat);
    }

    /// Check if a point is within this bounding box.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lon >= self.min_lon && lon <= self.max_lon && lat >= self.min_lat && lat <= self.max_lat
    }

    /// Get the center of the bounding box as `(lat, lon)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }
}

impl fmt::Display for GeoBoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lon [{:.4}, {:.4}], lat [{:.4}, {:.4}]",
            self.min_lon, self.max_lon, self.min_lat, self.max_lat
        )
    }
}
