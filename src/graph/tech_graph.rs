// src/graph/tech_graph.rs
//! The technology graph structure and query interface.

use std::collections::HashMap;
use std::ops::Index;

use super::node::{NodeId, Technology};

/// Fully linked technology graph.
///
/// Nodes are owned by a single arena; edges are [`NodeId`] lists, so there
/// are no reference cycles between nodes.
#[derive(Debug, Clone, Default)]
pub struct TechGraph {
    pub(crate) nodes: Vec<Technology>,
    pub(crate) index: HashMap<String, NodeId>,
}

impl TechGraph {
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks a technology up by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Technology> {
        self.nodes.get(id.0)
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Technology> {
        self.find(name).and_then(|id| self.get(id))
    }

    /// All node ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// All nodes in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Technology)> {
        self.nodes.iter().enumerate().map(|(i, t)| (NodeId(i), t))
    }

    /// Total number of `blocked_by` links.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|t| t.blocked_by.len()).sum()
    }

    /// Direct prerequisites of `id`, by name.
    #[must_use]
    pub fn prerequisite_names(&self, id: NodeId) -> Vec<&str> {
        self[id].blocked_by.iter().map(|p| self[*p].name.as_str()).collect()
    }

    /// Direct dependents of `id`, by name.
    #[must_use]
    pub fn dependent_names(&self, id: NodeId) -> Vec<&str> {
        self[id].blocking.iter().map(|d| self[*d].name.as_str()).collect()
    }
}

impl Index<NodeId> for TechGraph {
    type Output = Technology;

    fn index(&self, id: NodeId) -> &Technology {
        &self.nodes[id.0]
    }
}
