use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::catalog::CatalogSource;
use crate::graph::UnknownQueryPolicy;

/// Contents of `techtree.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TechTreeToml {
    /// Catalog file; relative paths resolve against the config file's directory.
    pub data: Option<PathBuf>,
    /// Fail on unknown technologies instead of rendering everything.
    pub strict: bool,
    /// Emit node tooltips with the display-only fields.
    pub details: bool,
}

/// Effective settings for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub source: CatalogSource,
    pub policy: UnknownQueryPolicy,
    pub details: bool,
}
