//! CLI Common Utilities
//!
//! Shared initialization and context management for CLI commands.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigLoader, OutputFormat};
use crate::source::SnapshotSource;
use crate::tree::{EntryFilter, SortOrder, TreeBuilder, TreeRenderer};
use crate::types::Result;

/// Command execution context
///
/// Loaded configuration plus the CLI overrides every command understands.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: Config,
}

impl CommandContext {
    /// Load configuration from all layers
    pub fn load() -> Result<Self> {
        Ok(Self::from_config(ConfigLoader::load()?))
    }

    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Output format, CLI flag first
    pub fn format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.unwrap_or(self.config.output.format)
    }

    /// Tree builder from config, with extra excludes and an optional sort override
    pub fn tree_builder(&self, extra_exclude: &[String], sort: Option<SortOrder>) -> Result<TreeBuilder> {
        let patterns: Vec<String> = self
            .config
            .tree
            .exclude
            .iter()
            .chain(extra_exclude)
            .cloned()
            .collect();

        Ok(TreeBuilder::new()
            .with_filter(EntryFilter::new(&patterns)?)
            .with_sort(sort.unwrap_or(self.config.tree.sort)))
    }

    pub fn renderer(&self, depth: Option<usize>, sizes: bool) -> TreeRenderer {
        TreeRenderer::new()
            .with_max_depth(depth.or(self.config.tree.max_depth))
            .with_sizes(sizes || self.config.output.show_size)
            .with_color(self.config.output.color && console::colors_enabled())
    }

    /// Snapshot source rooted at the flag or the configured directory
    pub fn snapshot_source(&self, root: Option<&Path>) -> SnapshotSource {
        let root: PathBuf = root
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.config.snapshots.root.clone());
        SnapshotSource::new(root)
    }
}

/// Serialize a value for machine-readable formats
///
/// Returns `None` for text output, which each command renders itself.
pub fn serialize_for(value: &impl Serialize, format: OutputFormat) -> Result<Option<String>> {
    match format {
        OutputFormat::Json => Ok(Some(serde_json::to_string_pretty(value)?)),
        OutputFormat::Yaml => Ok(Some(serde_yaml::to_string(value)?)),
        OutputFormat::Text => Ok(None),
    }
}
