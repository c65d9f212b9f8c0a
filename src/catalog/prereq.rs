// src/catalog/prereq.rs
//! Prerequisite groups, parsed once at load time.
//!
//! Upstream data encodes a requirement as a single string. A bare name means
//! that technology is required; `A/B` lists alternatives.

/// Separator between alternatives inside one raw group string.
pub const ALTERNATIVE_SEPARATOR: char = '/';

/// One entry of a technology's requirement list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrerequisiteGroup {
    /// A single required technology.
    AllOf(String),
    /// Alternatives joined by [`ALTERNATIVE_SEPARATOR`].
    ///
    /// The graph still links every alternative as a hard edge; see
    /// [`PrerequisiteGroup::linked_names`].
    AnyOf(Vec<String>),
}

impl PrerequisiteGroup {
    /// Parses a raw group string. Returns `None` when any alternative is empty.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let parts: Vec<&str> = raw.split(ALTERNATIVE_SEPARATOR).collect();
        if parts.iter().any(|p| p.is_empty()) {
            return None;
        }
        match parts.as_slice() {
            [single] => Some(Self::AllOf((*single).to_string())),
            many => Some(Self::AnyOf(many.iter().map(|p| (*p).to_string()).collect())),
        }
    }

    /// Names that become `blocked_by` edges.
    ///
    /// Alternatives are rendered as "all of": each one yields an edge.
    pub fn linked_names(&self) -> impl Iterator<Item = &str> {
        let names: &[String] = match self {
            Self::AllOf(name) => std::slice::from_ref(name),
            Self::AnyOf(names) => names,
        };
        names.iter().map(String::as_str)
    }

    /// The group as it appears in the source data.
    #[must_use]
    pub fn raw(&self) -> String {
        match self {
            Self::AllOf(name) => name.clone(),
            Self::AnyOf(names) => names.join(&ALTERNATIVE_SEPARATOR.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_name_is_all_of() {
        assert_eq!(
            PrerequisiteGroup::parse("Pottery"),
            Some(PrerequisiteGroup::AllOf("Pottery".into()))
        );
    }

    #[test]
    fn test_alternatives_link_every_name() {
        let group = PrerequisiteGroup::parse("Mining/Masonry").unwrap();
        assert!(matches!(group, PrerequisiteGroup::AnyOf(_)));
        let names: Vec<_> = group.linked_names().collect();
        assert_eq!(names, vec!["Mining", "Masonry"]);
        assert_eq!(group.raw(), "Mining/Masonry");
    }

    #[test]
    fn test_empty_segments_rejected() {
        for raw in ["", "A//B", "A/", "/B"] {
            assert!(PrerequisiteGroup::parse(raw).is_none(), "accepted {raw:?}");
        }
    }

    #[test]
    fn test_names_are_verbatim() {
        let group = PrerequisiteGroup::parse("Bronze Working").unwrap();
        assert_eq!(group.linked_names().collect::<Vec<_>>(), vec!["Bronze Working"]);
    }
}
