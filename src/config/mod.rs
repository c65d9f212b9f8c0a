// src/config/mod.rs
pub mod types;

pub use self::types::{Config, TechTreeToml};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::catalog::CatalogSource;
use crate::error::{Result, TechTreeError};
use crate::graph::UnknownQueryPolicy;

/// Config file looked up in the working directory when none is named.
pub const DEFAULT_CONFIG_FILE: &str = "techtree.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads settings from `path`, or from `techtree.toml` in the working
    /// directory if `path` is `None`. A missing default file yields defaults.
    ///
    /// # Errors
    /// Returns an error if an explicitly named file cannot be read, or if
    /// any config file fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = Self::new();
        match path {
            Some(p) => config.apply_file(p)?,
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    config.apply_file(&default)?;
                }
            }
        }
        Ok(config)
    }

    /// Reads and applies one TOML file.
    ///
    /// # Errors
    /// Returns [`TechTreeError::Io`] or [`TechTreeError::Config`].
    pub fn apply_file(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path).map_err(|e| {
            error!(path = %path.display(), "cannot read config");
            TechTreeError::Io {
                source: e,
                path: path.to_path_buf(),
            }
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        self.apply_toml(&content, base).map_err(|e| {
            error!(path = %path.display(), "invalid config");
            TechTreeError::Config {
                source: e,
                path: path.to_path_buf(),
            }
        })?;
        debug!(path = %path.display(), "config applied");
        Ok(())
    }

    /// Parses TOML content; `base` anchors a relative `data` path.
    ///
    /// # Errors
    /// Returns the TOML error on invalid content.
    pub fn apply_toml(&mut self, content: &str, base: &Path) -> std::result::Result<(), toml::de::Error> {
        let parsed: TechTreeToml = toml::from_str(content)?;
        if let Some(data) = parsed.data {
            self.source = CatalogSource::File(base.join(data));
        }
        if parsed.strict {
            self.policy = UnknownQueryPolicy::Strict;
        }
        self.details |= parsed.details;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = Config::new();
        assert_eq!(c.source, CatalogSource::Bundled);
        assert_eq!(c.policy, UnknownQueryPolicy::Lenient);
        assert!(!c.details);
    }

    #[test]
    fn test_relative_data_resolves_against_base() {
        let mut c = Config::new();
        c.apply_toml("data = \"techs.json\"\nstrict = true", Path::new("/etc/tt"))
            .unwrap();
        assert_eq!(c.source, CatalogSource::File(PathBuf::from("/etc/tt/techs.json")));
        assert_eq!(c.policy, UnknownQueryPolicy::Strict);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut c = Config::new();
        assert!(c.apply_toml("depth = 3", Path::new("")).is_err());
    }
}
