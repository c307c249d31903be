//! Configuration shared by the graph builders and search strategies.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{LadderError, Result};
use crate::search::FrontierMode;

/// Default wildcard marker used by the bucket builder.
pub const DEFAULT_WILDCARD: char = '_';

/// Configuration for building and querying word ladder solutions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LadderConfig {
    /// Marker substituted into bucket patterns.
    pub wildcard: char,

    /// How the breadth-first search tracks already visited words.
    pub frontier: FrontierMode,

    /// Reject empty words, mixed lengths and duplicate dictionary entries
    /// before building the graph.
    pub validate_input: bool,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            wildcard: DEFAULT_WILDCARD,
            frontier: FrontierMode::PathCopy,
            validate_input: true,
        }
    }
}

impl LadderConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: LadderConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the builders cannot work with.
    ///
    /// An alphanumeric wildcard could collide with a real letter and merge
    /// unrelated buckets.
    pub fn validate(&self) -> Result<()> {
        if self.wildcard.is_alphanumeric() {
            return Err(LadderError::invalid_config(format!(
                "wildcard '{}' must not be alphanumeric",
                self.wildcard
            )));
        }
        Ok(())
    }

    pub fn with_frontier(mut self, frontier: FrontierMode) -> Self {
        self.frontier = frontier;
        self
    }

    pub fn with_validation(mut self, validate_input: bool) -> Self {
        self.validate_input = validate_input;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = LadderConfig::default();
        assert_eq!(config.wildcard, '_');
        assert_eq!(config.frontier, FrontierMode::PathCopy);
        assert!(config.validate_input);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_alphanumeric_wildcard_rejected() {
        let config = LadderConfig {
            wildcard: 'x',
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LadderError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_load_partial_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"frontier": "visited_set"}}"#).unwrap();

        let config = LadderConfig::from_file(file.path()).unwrap();
        assert_eq!(config.frontier, FrontierMode::VisitedSet);
        assert_eq!(config.wildcard, DEFAULT_WILDCARD);
        assert!(config.validate_input);
    }

    #[test]
    fn test_load_missing_file() {
        let result = LadderConfig::from_file("/nonexistent/wordladder.json");
        assert!(matches!(result, Err(LadderError::Anyhow(_))));
    }

    #[test]
    fn test_builder_style_setters() {
        let config = LadderConfig::default()
            .with_frontier(FrontierMode::VisitedSet)
            .with_validation(false);
        assert_eq!(config.frontier, FrontierMode::VisitedSet);
        assert!(!config.validate_input);
    }
}
