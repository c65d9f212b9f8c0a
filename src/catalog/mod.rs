// src/catalog/mod.rs
//! Loading the technology catalog.
//!
//! The catalog is an immutable snapshot: it is loaded once at process entry
//! and handed to [`crate::graph::GraphBuilder`] explicitly.

pub mod prereq;
pub mod record;

pub use prereq::{PrerequisiteGroup, ALTERNATIVE_SEPARATOR};
pub use record::{RawRecord, TechnologyRecord};

use std::fmt;
use std::fs;
use std::path::PathBuf;

use tracing::{debug, error};

use crate::error::{Result, TechTreeError};

/// Dataset compiled into the binary.
pub const BUNDLED_CATALOG: &str = include_str!("../../data/technologies.json");

/// Where to read the catalog from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogSource {
    #[default]
    Bundled,
    File(PathBuf),
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled => write!(f, "<bundled>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Ordered, parsed record list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<TechnologyRecord>,
}

impl Catalog {
    #[must_use]
    pub fn new(records: Vec<TechnologyRecord>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[TechnologyRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Loads and parses the catalog from `source`.
///
/// # Errors
/// Returns [`TechTreeError::Io`] if the file cannot be read,
/// [`TechTreeError::Parse`] on invalid JSON, and
/// [`TechTreeError::MalformedPrerequisiteGroup`] on an empty alternative.
pub fn load(source: &CatalogSource) -> Result<Catalog> {
    let catalog = match source {
        CatalogSource::Bundled => parse(BUNDLED_CATALOG, &source.to_string())?,
        CatalogSource::File(path) => {
            let content = fs::read_to_string(path).map_err(|e| {
                error!(path = %path.display(), "cannot read catalog");
                TechTreeError::Io {
                    source: e,
                    path: path.clone(),
                }
            })?;
            parse(&content, &source.to_string())?
        }
    };
    debug!(source = %source, records = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Parses a JSON array of raw records.
///
/// # Errors
/// Returns [`TechTreeError::Parse`] on invalid JSON and
/// [`TechTreeError::MalformedPrerequisiteGroup`] on an empty alternative.
pub fn parse(json: &str, origin: &str) -> Result<Catalog> {
    let raw: Vec<RawRecord> = serde_json::from_str(json).map_err(|e| {
        error!(origin, "catalog is not a valid record list");
        TechTreeError::Parse {
            source: e,
            origin: origin.to_string(),
        }
    })?;
    let records = raw
        .into_iter()
        .map(TechnologyRecord::try_from)
        .collect::<Result<Vec<_>>>()?;
    Ok(Catalog::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let json = r#"[
            {"name": "Pottery", "epoch": "Stone Age"},
            {
                "name": "Writing",
                "epoch": "Bronze Age",
                "cost": "120",
                "extra": "Unlocks libraries",
                "effect": "+1 science",
                "prerequisites": ["Pottery"],
                "specialPrerequisites": ["Own a river tile"]
            }
        ]"#;
        let catalog = parse(json, "test").unwrap();
        assert_eq!(catalog.len(), 2);
        let writing = &catalog.records()[1];
        assert_eq!(writing.cost.as_deref(), Some("120"));
        assert_eq!(writing.effect.as_deref(), Some("+1 science"));
        assert_eq!(writing.prerequisites, vec![PrerequisiteGroup::AllOf("Pottery".into())]);
        assert_eq!(writing.special_prerequisites, vec!["Own a river tile".to_string()]);
    }

    #[test]
    fn test_missing_epoch_is_parse_error() {
        let err = parse(r#"[{"name": "Pottery"}]"#, "test").unwrap_err();
        assert!(matches!(err, TechTreeError::Parse { .. }));
    }

    #[test]
    fn test_malformed_group_names_record() {
        let json = r#"[{"name": "Writing", "epoch": "E", "prerequisites": ["Pottery//Clay"]}]"#;
        match parse(json, "test").unwrap_err() {
            TechTreeError::MalformedPrerequisiteGroup { technology, group } => {
                assert_eq!(technology, "Writing");
                assert_eq!(group, "Pottery//Clay");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = load(&CatalogSource::Bundled).unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = CatalogSource::File(PathBuf::from("/definitely/not/here.json"));
        assert!(matches!(load(&source), Err(TechTreeError::Io { .. })));
    }
}
