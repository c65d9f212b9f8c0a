// src/graph/mod.rs
//! The technology dependency graph.

pub mod builder;
pub mod extract;
pub mod node;
pub mod tech_graph;

pub use builder::GraphBuilder;
pub use extract::{Member, Subgraph, SubgraphExtractor, UnknownQueryPolicy, DESCENDANT_DEPTH};
pub use node::{NodeId, Technology};
pub use tech_graph::TechGraph;
