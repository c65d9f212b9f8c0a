// src/graph/builder.rs
//! Graph construction: node creation and edge linking.

use std::collections::HashMap;

use tracing::{debug, error};

use super::node::{NodeId, Technology};
use super::tech_graph::TechGraph;
use crate::catalog::{PrerequisiteGroup, TechnologyRecord};
use crate::error::{Result, TechTreeError};

/// Turns a flat record list into a bidirectionally linked [`TechGraph`].
pub struct GraphBuilder;

impl GraphBuilder {
    /// Builds the graph in two passes: nodes first, then edges.
    ///
    /// # Errors
    /// Returns [`TechTreeError::DuplicateTechnology`] if two records share a
    /// name, and [`TechTreeError::MissingPrerequisiteReference`] if a group
    /// names a technology absent from `records`.
    pub fn build(records: &[TechnologyRecord]) -> Result<TechGraph> {
        let mut graph = create_nodes(records)?;
        for record in records {
            link_record(&mut graph, record)?;
        }
        debug!(
            nodes = graph.len(),
            edges = graph.edge_count(),
            "technology graph built"
        );
        Ok(graph)
    }
}

fn create_nodes(records: &[TechnologyRecord]) -> Result<TechGraph> {
    let mut nodes = Vec::with_capacity(records.len());
    let mut index = HashMap::with_capacity(records.len());

    for record in records {
        let id = NodeId(nodes.len());
        if index.insert(record.name.clone(), id).is_some() {
            error!(technology = %record.name, "duplicate technology in catalog");
            return Err(TechTreeError::DuplicateTechnology {
                name: record.name.clone(),
            });
        }
        nodes.push(Technology::from_record(record));
    }

    Ok(TechGraph { nodes, index })
}

fn link_record(graph: &mut TechGraph, record: &TechnologyRecord) -> Result<()> {
    let Some(dependent) = graph.find(&record.name) else {
        error!(record = ?record, "expected technology for record");
        return Err(TechTreeError::MissingSelfRecord {
            name: record.name.clone(),
        });
    };

    for group in &record.prerequisites {
        link_group(graph, record, group, dependent)?;
    }
    Ok(())
}

// Alternatives are linked as "all of": every name in the group becomes an edge.
fn link_group(
    graph: &mut TechGraph,
    record: &TechnologyRecord,
    group: &PrerequisiteGroup,
    dependent: NodeId,
) -> Result<()> {
    for name in group.linked_names() {
        let Some(prerequisite) = graph.find(name) else {
            error!(
                technology = %record.name,
                group = %group.raw(),
                prerequisite = name,
                "expected prerequisite technology"
            );
            return Err(TechTreeError::MissingPrerequisiteReference {
                technology: record.name.clone(),
                group: group.raw(),
                prerequisite: name.to_string(),
            });
        };
        link(graph, prerequisite, dependent);
    }
    Ok(())
}

fn link(graph: &mut TechGraph, prerequisite: NodeId, dependent: NodeId) {
    graph.nodes[prerequisite.0].blocking.push(dependent);
    graph.nodes[dependent.0].blocked_by.push(prerequisite);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, prereqs: &[&str]) -> TechnologyRecord {
        TechnologyRecord::new(name, "Epoch", prereqs).unwrap()
    }

    #[test]
    fn test_links_both_directions() {
        let graph = GraphBuilder::build(&[rec("A", &[]), rec("B", &["A"])]).unwrap();
        let a = graph.find("A").unwrap();
        let b = graph.find("B").unwrap();
        assert_eq!(graph[a].blocking(), &[b]);
        assert_eq!(graph[b].blocked_by(), &[a]);
        assert!(graph[a].blocked_by().is_empty());
    }

    #[test]
    fn test_prerequisite_may_follow_dependent() {
        let graph = GraphBuilder::build(&[rec("B", &["A"]), rec("A", &[])]).unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = GraphBuilder::build(&[rec("A", &[]), rec("A", &[])]).unwrap_err();
        assert!(matches!(err, TechTreeError::DuplicateTechnology { name } if name == "A"));
    }

    #[test]
    fn test_missing_reference_reports_context() {
        let err = GraphBuilder::build(&[rec("B", &["A/Ghost"]), rec("A", &[])]).unwrap_err();
        match err {
            TechTreeError::MissingPrerequisiteReference {
                technology,
                group,
                prerequisite,
            } => {
                assert_eq!(technology, "B");
                assert_eq!(group, "A/Ghost");
                assert_eq!(prerequisite, "Ghost");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_self_record() {
        let mut graph = TechGraph::default();
        let err = link_record(&mut graph, &rec("Orphan", &[])).unwrap_err();
        assert!(matches!(err, TechTreeError::MissingSelfRecord { name } if name == "Orphan"));
    }

    #[test]
    fn test_empty_catalog() {
        let graph = GraphBuilder::build(&[]).unwrap();
        assert!(graph.is_empty());
    }
}
