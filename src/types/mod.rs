//! Strongly-typed domain types shared across the crate.
//!
//! - **Id newtypes**: `NodeId` and `ElementId` keep mesher-assigned ids apart
//! - **Geographic bounds**: `GeoBoundingBox` in WGS84 degrees

mod bounds;
mod indices;

pub use bounds::GeoBoundingBox;
pub use indices::{ElementId, NodeId};
