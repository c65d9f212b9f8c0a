// src/graph/node.rs
//! Technology nodes and their arena handles.

use crate::catalog::TechnologyRecord;

/// Position of a node inside its [`super::TechGraph`].
///
/// Only meaningful for the graph that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// One researchable technology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Technology {
    pub name: String,
    pub epoch: String,
    pub cost: Option<String>,
    pub extra: Option<String>,
    pub effect: Option<String>,
    /// Non-technology requirements. Never edges.
    pub special_prerequisites: Vec<String>,
    /// Direct prerequisites (edges into this node).
    pub(crate) blocked_by: Vec<NodeId>,
    /// Direct dependents; the inverse of `blocked_by`.
    pub(crate) blocking: Vec<NodeId>,
}

impl Technology {
    /// Copies the scalar fields of a record; edges start empty.
    #[must_use]
    pub fn from_record(record: &TechnologyRecord) -> Self {
        Self {
            name: record.name.clone(),
            epoch: record.epoch.clone(),
            cost: record.cost.clone(),
            extra: record.extra.clone(),
            effect: record.effect.clone(),
            special_prerequisites: record.special_prerequisites.clone(),
            blocked_by: Vec::new(),
            blocking: Vec::new(),
        }
    }

    #[must_use]
    pub fn blocked_by(&self) -> &[NodeId] {
        &self.blocked_by
    }

    #[must_use]
    pub fn blocking(&self) -> &[NodeId] {
        &self.blocking
    }

    /// True if any display-only field is set.
    #[must_use]
    pub fn has_details(&self) -> bool {
        self.cost.is_some()
            || self.extra.is_some()
            || self.effect.is_some()
            || !self.special_prerequisites.is_empty()
    }
}
