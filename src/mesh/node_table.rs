//! Node id to coordinate lookup.
//!
//! Element connectivity refers to nodes by their declared id. The table
//! resolves ids explicitly instead of relying on `id - 1` array positions,
//! so gaps or out-of-order ids in the file are handled correctly.

use std::collections::HashMap;

use crate::types::NodeId;

use super::document::Node;

/// Map from node id to planar `(x, y)` = `(lon, lat)` coordinates.
#[derive(Clone, Debug, Default)]
pub struct NodeTable {
    coords: HashMap<NodeId, (f64, f64)>,
}

impl NodeTable {
    /// Build the table from parsed nodes.
    pub fn from_nodes(nodes: &[Node]) -> Self {
        let coords = nodes
            .iter()
            .map(|n| (n.id, (n.coords[0], n.coords[1])))
            .collect();
        Self { coords }
    }

    /// Insert or replace a node; returns the previous coordinates if any.
    pub fn insert(&mut self, id: NodeId, x: f64, y: f64) -> Option<(f64, f64)> {
        self.coords.insert(id, (x, y))
    }

    /// Look up the `(x, y)` coordinates of a node.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<(f64, f64)> {
        self.coords.get(&id).copied()
    }

    /// Check whether a node id is present.
    pub fn contains(&self, id: NodeId) -> bool {
        self.coords.contains_key(&id)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

impl FromIterator<(NodeId, (f64, f64))> for NodeTable {
    fn from_iter<I: IntoIterator<Item = (NodeId, (f64, f64))>>(iter: I) -> Self {
        Self {
            coords: iter.into_iter().collect(),
        }
    }
}
