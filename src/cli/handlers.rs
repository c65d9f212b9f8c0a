// src/cli/handlers.rs
//! Command handler for the `techtree` binary.

use std::io::Write;

use anyhow::{Context, Result};

use super::args::Cli;
use crate::catalog::CatalogSource;
use crate::config::Config;
use crate::exit::TechTreeExit;
use crate::graph::UnknownQueryPolicy;
use crate::pipeline;

/// Merges the config file with command-line overrides.
///
/// # Errors
/// Returns error if the config file cannot be read or parsed.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(data) = &cli.data {
        config.source = CatalogSource::File(data.clone());
    }
    if cli.strict {
        config.policy = UnknownQueryPolicy::Strict;
    }
    config.details |= cli.details;
    Ok(config)
}

/// Renders the requested graph and writes it to `out`.
///
/// # Errors
/// Returns error if any stage fails; `out` is untouched in that case.
pub fn handle_render<W: Write>(cli: &Cli, out: &mut W) -> Result<TechTreeExit> {
    let config = resolve_config(cli)?;
    let dot = pipeline::run(&config, cli.technology.as_deref())?;
    out.write_all(dot.as_bytes()).context("Failed to write graph")?;
    out.flush().context("Failed to write graph")?;
    Ok(TechTreeExit::Success)
}
