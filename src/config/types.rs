//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (~/.config/repotree/) and project (.repotree/) level configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::snapshot;
use crate::tree::{EntryFilter, SortOrder};
use crate::types::{RepoTreeError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Tree building settings
    pub tree: TreeConfig,

    /// Output settings
    pub output: OutputConfig,

    /// Snapshot source settings
    pub snapshots: SnapshotConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            tree: TreeConfig::default(),
            output: OutputConfig::default(),
            snapshots: SnapshotConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `RepoTreeError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if self.tree.max_depth == Some(0) {
            return Err(RepoTreeError::Config(
                "tree.max_depth must be greater than 0".to_string(),
            ));
        }

        EntryFilter::new(&self.tree.exclude)
            .map_err(|e| RepoTreeError::Config(format!("tree.exclude: {}", e)))?;

        if self.snapshots.root.as_os_str().is_empty() {
            return Err(RepoTreeError::Config(
                "snapshots.root must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Tree Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TreeConfig {
    /// Ordering applied after building (preserve keeps listing order)
    pub sort: SortOrder,

    /// Glob patterns of entries to drop before building
    pub exclude: Vec<String>,

    /// Depth limit for text rendering
    pub max_depth: Option<usize>,
}

// =============================================================================
// Output Configuration
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(format!(
                "Unknown output format: {}. Valid values: text, json, yaml",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Show file sizes in text trees
    pub show_size: bool,

    /// Colorize text output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_size: false,
            color: true,
        }
    }
}

// =============================================================================
// Snapshot Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Directory holding `<owner>/<repo>/tree.json` snapshots
    pub root: PathBuf,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(snapshot::DEFAULT_ROOT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tree.sort, SortOrder::Preserve);
        assert!(config.tree.exclude.is_empty());
    }

    #[test]
    fn test_zero_depth_rejected() {
        let mut config = Config::default();
        config.tree.max_depth = Some(0);
        assert!(matches!(config.validate(), Err(RepoTreeError::Config(_))));
    }

    #[test]
    fn test_bad_exclude_rejected() {
        let mut config = Config::default();
        config.tree.exclude = vec!["[".to_string()];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("tree.exclude"));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("YML".parse::<OutputFormat>(), Ok(OutputFormat::Yaml));
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
