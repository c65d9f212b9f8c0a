// src/catalog/record.rs
//! On-disk record shape and its parsed counterpart.

use serde::{Deserialize, Serialize};
use tracing::error;

use super::prereq::PrerequisiteGroup;
use crate::error::{Result, TechTreeError};

/// A record exactly as the upstream scraper writes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    pub name: String,
    pub epoch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prerequisites: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special_prerequisites: Vec<String>,
}

/// A catalog record with its prerequisite groups parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnologyRecord {
    pub name: String,
    pub epoch: String,
    pub cost: Option<String>,
    pub extra: Option<String>,
    pub effect: Option<String>,
    pub prerequisites: Vec<PrerequisiteGroup>,
    pub special_prerequisites: Vec<String>,
}

impl TechnologyRecord {
    /// Record with no display fields.
    ///
    /// # Errors
    /// Returns [`TechTreeError::MalformedPrerequisiteGroup`] on an empty
    /// alternative, exactly as catalog parsing does.
    pub fn new(name: &str, epoch: &str, prerequisites: &[&str]) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            epoch: epoch.to_string(),
            cost: None,
            extra: None,
            effect: None,
            prerequisites: parse_groups(name, prerequisites)?,
            special_prerequisites: Vec::new(),
        })
    }
}

fn parse_groups<S: AsRef<str>>(technology: &str, groups: &[S]) -> Result<Vec<PrerequisiteGroup>> {
    groups
        .iter()
        .map(|group| {
            let group = group.as_ref();
            PrerequisiteGroup::parse(group).ok_or_else(|| {
                error!(technology, group, "malformed prerequisite group");
                TechTreeError::MalformedPrerequisiteGroup {
                    technology: technology.to_string(),
                    group: group.to_string(),
                }
            })
        })
        .collect()
}

impl TryFrom<RawRecord> for TechnologyRecord {
    type Error = TechTreeError;

    fn try_from(raw: RawRecord) -> Result<Self> {
        let prerequisites = parse_groups(&raw.name, raw.prerequisites.as_slice())?;

        Ok(Self {
            name: raw.name,
            epoch: raw.epoch,
            cost: raw.cost,
            extra: raw.extra,
            effect: raw.effect,
            prerequisites,
            special_prerequisites: raw.special_prerequisites,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_alternative() {
        match TechnologyRecord::new("T", "E", &["Ghost//Other"]) {
            Err(TechTreeError::MalformedPrerequisiteGroup { technology, group }) => {
                assert_eq!(technology, "T");
                assert_eq!(group, "Ghost//Other");
            }
            other => panic!("expected MalformedPrerequisiteGroup, got {other:?}"),
        }
    }

    #[test]
    fn test_new_keeps_every_group() {
        let record = TechnologyRecord::new("T", "E", &["A", "B/C"]).unwrap();
        assert_eq!(record.prerequisites.len(), 2);
    }
}
