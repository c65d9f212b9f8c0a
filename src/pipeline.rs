// src/pipeline.rs
//! Catalog → graph → neighborhood → DOT, end to end.

use tracing::info;

use crate::catalog::{self, Catalog};
use crate::config::Config;
use crate::error::Result;
use crate::graph::{GraphBuilder, SubgraphExtractor};
use crate::render::DotRenderer;

/// Loads the configured catalog and renders the neighborhood of `query`.
///
/// Nothing is returned unless every stage succeeds.
///
/// # Errors
/// Propagates loader, builder and extractor errors.
pub fn run(config: &Config, query: Option<&str>) -> Result<String> {
    let catalog = catalog::load(&config.source)?;
    render_catalog(&catalog, config, query)
}

/// Same as [`run`] for an already loaded catalog.
///
/// # Errors
/// Propagates builder and extractor errors.
pub fn render_catalog(catalog: &Catalog, config: &Config, query: Option<&str>) -> Result<String> {
    let graph = GraphBuilder::build(catalog.records())?;
    let subgraph = SubgraphExtractor::new(config.policy).extract(&graph, query)?;
    info!(
        nodes = subgraph.len(),
        of = graph.len(),
        "rendering technology graph"
    );
    Ok(DotRenderer::new()
        .with_details(config.details)
        .render(&graph, &subgraph))
}
