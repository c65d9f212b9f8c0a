// src/render/dot.rs
use std::fmt::Write;

use indexmap::{IndexMap, IndexSet};

use super::template::{self, quote};
use crate::graph::{NodeId, Subgraph, TechGraph, Technology};

/// Nodes that need a cluster placement: the subset followed by every direct
/// prerequisite of a subset member, first occurrence wins.
#[must_use]
pub fn placed_nodes(graph: &TechGraph, subgraph: &Subgraph) -> IndexSet<NodeId> {
    let mut placed: IndexSet<NodeId> = subgraph.ids().collect();
    for id in subgraph.ids() {
        placed.extend(graph[id].blocked_by().iter().copied());
    }
    placed
}

/// Groups `nodes` by epoch, keeping the order in which epochs are first seen.
#[must_use]
pub fn group_by_epoch<'g>(
    graph: &'g TechGraph,
    nodes: &IndexSet<NodeId>,
) -> IndexMap<&'g str, Vec<NodeId>> {
    let mut clusters: IndexMap<&str, Vec<NodeId>> = IndexMap::new();
    for &id in nodes {
        clusters.entry(graph[id].epoch.as_str()).or_default().push(id);
    }
    clusters
}

pub fn write_header(out: &mut String) {
    let _ = writeln!(out, "strict digraph {} {{", quote(template::GRAPH_NAME));
    let _ = writeln!(out, "  {}", template::GRAPH_ATTRS);
    let _ = writeln!(out, "  {}", template::NODE_ATTRS);
    let _ = writeln!(out, "  {}", template::EDGE_ATTRS);
}

pub fn write_clusters(
    out: &mut String,
    graph: &TechGraph,
    subgraph: &Subgraph,
    details: bool,
) {
    let placed = placed_nodes(graph, subgraph);
    for (index, (epoch, ids)) in group_by_epoch(graph, &placed).iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(out, "  subgraph cluster_{index} {{");
        let _ = writeln!(out, "    label = {};", quote(epoch));
        for &id in ids {
            write_node(out, &graph[id], subgraph.is_highlighted(id), details);
        }
        out.push_str("  }\n");
    }
}

fn write_node(out: &mut String, tech: &Technology, highlighted: bool, details: bool) {
    let mut attrs = Vec::new();
    if highlighted {
        attrs.push(template::HIGHLIGHT_ATTRS.to_string());
    }
    if details && tech.has_details() {
        attrs.push(format!("tooltip={}", quote(&tooltip(tech))));
    }

    if attrs.is_empty() {
        let _ = writeln!(out, "    {};", quote(&tech.name));
    } else {
        let _ = writeln!(out, "    {} [{}];", quote(&tech.name), attrs.join(" "));
    }
}

/// Display-only fields, one per line.
#[must_use]
pub fn tooltip(tech: &Technology) -> String {
    let mut lines = Vec::new();
    if let Some(effect) = &tech.effect {
        lines.push(format!("Effect: {effect}"));
    }
    if let Some(cost) = &tech.cost {
        lines.push(format!("Cost: {cost}"));
    }
    if let Some(extra) = &tech.extra {
        lines.push(extra.clone());
    }
    if !tech.special_prerequisites.is_empty() {
        lines.push(format!("Requires: {}", tech.special_prerequisites.join(", ")));
    }
    lines.join("\n")
}

pub fn write_edges(out: &mut String, graph: &TechGraph, subgraph: &Subgraph) {
    let mut first = true;
    for id in subgraph.ids() {
        let tech = &graph[id];
        for &prerequisite in tech.blocked_by() {
            if first {
                let _ = writeln!(out);
                first = false;
            }
            let _ = writeln!(
                out,
                "  {} -> {};",
                quote(&graph[prerequisite].name),
                quote(&tech.name)
            );
        }
    }
}

pub fn write_footer(out: &mut String) {
    out.push_str("}\n");
}
