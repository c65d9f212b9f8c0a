// src/graph/extract.rs
//! Neighborhood extraction around a queried technology.
//!
//! The neighborhood is the full ancestor closure of the technology plus a
//! fixed number of descendant generations.

use std::collections::VecDeque;

use indexmap::IndexSet;
use tracing::{debug, error, warn};

use super::node::NodeId;
use super::tech_graph::TechGraph;
use crate::error::{Result, TechTreeError};

/// Descendant generations kept below the queried technology (children and
/// grandchildren).
pub const DESCENDANT_DEPTH: usize = 2;

/// What to do when the query is missing or names no technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownQueryPolicy {
    /// Return the whole graph, nothing highlighted.
    #[default]
    Lenient,
    /// Fail with [`TechTreeError::UnknownQueryTechnology`].
    Strict,
}

/// One selected node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member {
    pub id: NodeId,
    pub highlighted: bool,
}

/// An ordered, deduplicated node subset of a [`TechGraph`].
///
/// At most one member is highlighted: names are unique, and only the node
/// named by the query is tagged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subgraph {
    nodes: IndexSet<NodeId>,
    highlighted: Option<NodeId>,
}

impl Subgraph {
    /// Tags each id with `highlighted = (name == query)`.
    #[must_use]
    pub fn tagged(graph: &TechGraph, ids: impl IntoIterator<Item = NodeId>, query: Option<&str>) -> Self {
        let nodes: IndexSet<NodeId> = ids.into_iter().collect();
        let highlighted = query.and_then(|q| nodes.iter().copied().find(|&id| graph[id].name == q));
        Self { nodes, highlighted }
    }

    /// Every node of `graph`, in catalog order.
    #[must_use]
    pub fn whole(graph: &TechGraph, query: Option<&str>) -> Self {
        Self::tagged(graph, graph.ids(), query)
    }

    pub fn members(&self) -> impl Iterator<Item = Member> + '_ {
        self.nodes.iter().map(|&id| Member {
            id,
            highlighted: self.highlighted == Some(id),
        })
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }

    #[must_use]
    pub fn is_highlighted(&self, id: NodeId) -> bool {
        self.highlighted == Some(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Selects the neighborhood of a technology.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubgraphExtractor {
    policy: UnknownQueryPolicy,
}

impl SubgraphExtractor {
    #[must_use]
    pub fn new(policy: UnknownQueryPolicy) -> Self {
        Self { policy }
    }

    /// Extracts ancestors, the technology itself, and its descendants up to
    /// [`DESCENDANT_DEPTH`].
    ///
    /// # Errors
    /// Under [`UnknownQueryPolicy::Strict`], returns
    /// [`TechTreeError::UnknownQueryTechnology`] when `query` is `None` or
    /// names no technology.
    pub fn extract(&self, graph: &TechGraph, query: Option<&str>) -> Result<Subgraph> {
        let Some(target) = query.and_then(|q| graph.find(q)) else {
            return self.handle_unknown(graph, query);
        };

        let mut selected = ancestors(graph, target);
        selected.extend(descendants(graph, target, DESCENDANT_DEPTH));
        debug!(
            technology = query.unwrap_or_default(),
            selected = selected.len(),
            total = graph.len(),
            "neighborhood extracted"
        );
        Ok(Subgraph::tagged(graph, selected, query))
    }

    fn handle_unknown(&self, graph: &TechGraph, query: Option<&str>) -> Result<Subgraph> {
        match self.policy {
            UnknownQueryPolicy::Lenient => {
                if let Some(name) = query {
                    warn!(technology = name, "unknown technology, rendering the whole graph");
                }
                Ok(Subgraph::whole(graph, query))
            }
            UnknownQueryPolicy::Strict => {
                error!(technology = ?query, "unexpected technology");
                Err(TechTreeError::UnknownQueryTechnology {
                    name: query.map(str::to_string),
                })
            }
        }
    }
}

/// Transitive closure over `blocked_by`, starting with `target` itself.
///
/// Breadth-first; a node is enqueued at most once, so cyclic input terminates.
#[must_use]
pub fn ancestors(graph: &TechGraph, target: NodeId) -> IndexSet<NodeId> {
    let mut visited = IndexSet::from([target]);
    let mut queue = VecDeque::from([target]);

    while let Some(id) = queue.pop_front() {
        for &prerequisite in graph[id].blocked_by() {
            if visited.insert(prerequisite) {
                queue.push_back(prerequisite);
            }
        }
    }
    visited
}

/// Dependents of `target`, `depth` generations deep, excluding `target`
/// unless it is reached again through a cycle.
#[must_use]
pub fn descendants(graph: &TechGraph, target: NodeId, depth: usize) -> IndexSet<NodeId> {
    let mut found = IndexSet::new();
    let mut frontier: Vec<NodeId> = graph[target].blocking().to_vec();

    for _ in 0..depth {
        if frontier.is_empty() {
            break;
        }
        found.extend(frontier.iter().copied());
        frontier = frontier
            .iter()
            .flat_map(|&id| graph[id].blocking().iter().copied())
            .collect();
    }
    found
}
