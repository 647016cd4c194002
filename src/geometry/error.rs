use thiserror::Error;

use crate::types::{ElementId, NodeId};

/// Error type for per-element geometric operations.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    /// Element has coincident vertices, equal polar angles or zero area.
    #[error("Degenerate element {element}: {reason}")]
    DegenerateElement { element: ElementId, reason: String },

    /// Element refers to a node missing from the node table.
    #[error("Element {element} references unknown node {node}")]
    InvalidNodeReference { element: ElementId, node: NodeId },
}
