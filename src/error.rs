// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TechTreeError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Failed to parse catalog {origin}: {source}")]
    Parse {
        source: serde_json::Error,
        origin: String,
    },

    #[error("Failed to parse config {path}: {source}")]
    Config {
        source: toml::de::Error,
        path: PathBuf,
    },

    #[error("Technology '{name}' vanished from the graph it was built into")]
    MissingSelfRecord { name: String },

    #[error("Technology '{technology}' requires unknown technology '{prerequisite}' (group: \"{group}\")")]
    MissingPrerequisiteReference {
        technology: String,
        group: String,
        prerequisite: String,
    },

    #[error("Technology '{name}' appears more than once in the catalog")]
    DuplicateTechnology { name: String },

    #[error("Technology '{technology}' has a malformed prerequisite group: \"{group}\"")]
    MalformedPrerequisiteGroup { technology: String, group: String },

    #[error("Unknown technology: {}", .name.as_deref().unwrap_or("<none given>"))]
    UnknownQueryTechnology { name: Option<String> },
}

pub type Result<T> = std::result::Result<T, TechTreeError>;
