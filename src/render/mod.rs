// src/render/mod.rs
//! Graphviz DOT rendering of a technology subset.
//!
//! Nodes are clustered by epoch. Every prerequisite of a rendered node gets a
//! cluster placement, even when it was not selected itself, so that each edge
//! endpoint lands in its era.

mod dot;
pub mod template;

pub use dot::{group_by_epoch, placed_nodes, tooltip};

use crate::graph::{Subgraph, TechGraph};

/// Serializes a [`Subgraph`] into a `strict digraph`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotRenderer {
    details: bool,
}

impl DotRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a tooltip with cost, effect and special prerequisites to
    /// each node.
    #[must_use]
    pub fn with_details(mut self, details: bool) -> Self {
        self.details = details;
        self
    }

    #[must_use]
    pub fn render(&self, graph: &TechGraph, subgraph: &Subgraph) -> String {
        let mut out = String::new();
        dot::write_header(&mut out);
        dot::write_clusters(&mut out, graph, subgraph, self.details);
        dot::write_edges(&mut out, graph, subgraph);
        dot::write_footer(&mut out);
        out
    }
}
