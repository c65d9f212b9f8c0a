// tests/unit_render.rs
//! Tests for DOT rendering.

use techtree_core::catalog::TechnologyRecord;
use techtree_core::graph::{GraphBuilder, Subgraph, SubgraphExtractor, TechGraph};
use techtree_core::render::{group_by_epoch, placed_nodes, DotRenderer};

fn sample() -> TechGraph {
    GraphBuilder::build(&[
        TechnologyRecord::new("Agriculture", "Stone", &[]).unwrap(),
        TechnologyRecord::new("Hunting", "Stone", &[]).unwrap(),
        TechnologyRecord::new("Husbandry", "Stone", &["Agriculture/Hunting"]).unwrap(),
        TechnologyRecord::new("Wheel", "Bronze", &["Husbandry"]).unwrap(),
        TechnologyRecord::new("Riding", "Classical", &["Wheel"]).unwrap(),
        TechnologyRecord::new("Chivalry", "Medieval", &["Riding"]).unwrap(),
    ])
    .unwrap()
}

fn edge_lines(dot: &str) -> usize {
    dot.lines().filter(|l| l.contains(" -> ")).count()
}

fn cluster_lines(dot: &str) -> usize {
    dot.lines().filter(|l| l.trim_start().starts_with("subgraph cluster_")).count()
}

#[test]
fn test_one_edge_per_blocked_by_link() {
    let graph = sample();
    let sub = SubgraphExtractor::default().extract(&graph, Some("Wheel")).unwrap();
    let expected: usize = sub.ids().map(|id| graph[id].blocked_by().len()).sum();
    let dot = DotRenderer::new().render(&graph, &sub);
    assert_eq!(edge_lines(&dot), expected);
    assert_eq!(expected, 5);
}

#[test]
fn test_one_cluster_per_epoch() {
    let graph = sample();
    let sub = SubgraphExtractor::default().extract(&graph, Some("Wheel")).unwrap();
    let dot = DotRenderer::new().render(&graph, &sub);
    // Wheel's neighborhood spans Stone, Bronze, Classical and Medieval.
    assert_eq!(cluster_lines(&dot), 4);
}

#[test]
fn test_unselected_prerequisites_still_placed() {
    let graph = sample();
    let riding = graph.find("Riding").unwrap();
    let sub = Subgraph::tagged(&graph, [riding], None);

    let placed = placed_nodes(&graph, &sub);
    assert_eq!(placed.len(), 2);
    assert!(placed.contains(&graph.find("Wheel").unwrap()));

    let dot = DotRenderer::new().render(&graph, &sub);
    assert_eq!(cluster_lines(&dot), 2);
    assert!(dot.contains("label = \"Bronze\";\n    \"Wheel\";"));
    assert_eq!(edge_lines(&dot), 1);
}

#[test]
fn test_epoch_groups_keep_first_seen_order() {
    let graph = sample();
    let sub = Subgraph::whole(&graph, None);
    let placed = placed_nodes(&graph, &sub);
    let groups = group_by_epoch(&graph, &placed);
    let epochs: Vec<_> = groups.keys().copied().collect();
    assert_eq!(epochs, vec!["Stone", "Bronze", "Classical", "Medieval"]);
    assert_eq!(groups["Stone"].len(), 3);
}

#[test]
fn test_full_graph_render_has_no_highlight() {
    let graph = sample();
    let sub = SubgraphExtractor::default().extract(&graph, None).unwrap();
    let dot = DotRenderer::new().render(&graph, &sub);
    assert!(!dot.contains("#00ff00"));
    assert_eq!(edge_lines(&dot), graph.edge_count());
}
