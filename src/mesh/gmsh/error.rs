use thiserror::Error;

use crate::types::{ElementId, NodeId};

use super::section::Section;

/// Error type for Gmsh I/O operations.
///
/// Every variant is fatal for the file being read; the reader never
/// recovers or returns a partial document.
#[derive(Debug, Error)]
pub enum GmshError {
    /// File could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A `$Name` / `$EndName` marker pair is absent.
    #[error("Missing section: ${0}")]
    MissingSection(Section),

    /// Declared record count disagrees with the records present.
    #[error("{section} (line {line}): declared {declared} records, found {found}")]
    SectionCountMismatch {
        section: Section,
        /// 0-based line offset in the file
        line: usize,
        declared: usize,
        found: usize,
    },

    /// A line has the wrong number or type of tokens.
    #[error("{section} (line {line}): {message}")]
    MalformedRecord {
        section: Section,
        /// 0-based line offset in the file
        line: usize,
        message: String,
    },

    /// Unsupported mesh format version or file type.
    #[error("Unsupported Gmsh version: {0}")]
    UnsupportedVersion(String),

    /// An element refers to a node that was never declared.
    #[error("Element {element} references unknown node {node}")]
    InvalidNodeReference { element: ElementId, node: NodeId },
}

impl GmshError {
    /// Section the error was raised in, when it is tied to one.
    pub fn section(&self) -> Option<Section> {
        match self {
            GmshError::MissingSection(section)
            | GmshError::SectionCountMismatch { section, .. }
            | GmshError::MalformedRecord { section, .. } => Some(*section),
            GmshError::InvalidNodeReference { .. } => Some(Section::Elements),
            GmshError::Io(_) | GmshError::UnsupportedVersion(_) => None,
        }
    }

    /// 0-based line offset of the offending record, when known.
    pub fn line(&self) -> Option<usize> {
        match self {
            GmshError::SectionCountMismatch { line, .. } | GmshError::MalformedRecord { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }
}
