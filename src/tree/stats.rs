//! Tree Statistics
//!
//! Summary metrics over a built hierarchy, used by the `stats` command and
//! as a quick sanity check on listings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::scale;
use crate::types::{Node, walk_forest};

/// Project scale classification based on file count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectScale {
    /// < 50 files
    #[default]
    Small,
    /// 50-199 files
    Medium,
    /// 200-499 files
    Large,
    /// 500+ files
    Enterprise,
}

impl ProjectScale {
    /// Determine project scale from file count
    pub fn from_file_count(count: usize) -> Self {
        if count < scale::MEDIUM_MIN_FILES {
            ProjectScale::Small
        } else if count < scale::LARGE_MIN_FILES {
            ProjectScale::Medium
        } else if count < scale::ENTERPRISE_MIN_FILES {
            ProjectScale::Large
        } else {
            ProjectScale::Enterprise
        }
    }
}

impl std::fmt::Display for ProjectScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectScale::Small => write!(f, "small"),
            ProjectScale::Medium => write!(f, "medium"),
            ProjectScale::Large => write!(f, "large"),
            ProjectScale::Enterprise => write!(f, "enterprise"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TreeStats {
    pub directories: usize,
    pub files: usize,
    /// Sum of known file sizes in bytes
    pub total_size: u64,
    /// Files whose size the listing did not report
    pub files_without_size: usize,
    /// Deepest level reached; roots are depth 1
    pub max_depth: usize,
    /// File count per extension ("" for files without one)
    pub extensions: BTreeMap<String, usize>,
    pub scale: ProjectScale,
}

impl TreeStats {
    pub fn from_nodes(nodes: &[Node]) -> Self {
        let mut stats = TreeStats::default();

        walk_forest(nodes, &mut |node, depth| {
            stats.max_depth = stats.max_depth.max(depth);
            match node {
                Node::Directory(_) => stats.directories += 1,
                Node::File(file) => {
                    stats.files += 1;
                    match file.size {
                        Some(size) => stats.total_size = stats.total_size.saturating_add(size),
                        None => stats.files_without_size += 1,
                    }
                    *stats.extensions.entry(file.extension.clone()).or_default() += 1;
                }
            }
        });

        stats.scale = ProjectScale::from_file_count(stats.files);
        stats
    }

    /// Extensions ordered by file count, most common first
    pub fn top_extensions(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut exts: Vec<(&str, usize)> = self
            .extensions
            .iter()
            .map(|(ext, &count)| (ext.as_str(), count))
            .collect();
        exts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        exts.truncate(limit);
        exts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build_file_tree;
    use crate::types::FlatEntry;

    #[test]
    fn test_stats_for_nested_tree() {
        let tree = build_file_tree(&[
            FlatEntry::blob("src/index.ts", Some(120)),
            FlatEntry::blob("src/utils/helpers.ts", Some(45)),
            FlatEntry::blob("README.md", Some(30)),
            FlatEntry::blob("LICENSE", None),
        ]);
        let stats = TreeStats::from_nodes(&tree);

        assert_eq!(stats.directories, 2);
        assert_eq!(stats.files, 4);
        assert_eq!(stats.total_size, 195);
        assert_eq!(stats.files_without_size, 1);
        assert_eq!(stats.max_depth, 3);
        assert_eq!(stats.extensions.get("ts"), Some(&2));
        assert_eq!(stats.extensions.get(""), Some(&1));
        assert_eq!(stats.scale, ProjectScale::Small);
        assert_eq!(stats.top_extensions(1), vec![("ts", 2)]);
    }

    #[test]
    fn test_empty_stats() {
        let stats = TreeStats::from_nodes(&[]);
        assert_eq!(stats, TreeStats::default());
    }

    #[test]
    fn test_scale_thresholds() {
        assert_eq!(ProjectScale::from_file_count(0), ProjectScale::Small);
        assert_eq!(ProjectScale::from_file_count(49), ProjectScale::Small);
        assert_eq!(ProjectScale::from_file_count(50), ProjectScale::Medium);
        assert_eq!(ProjectScale::from_file_count(200), ProjectScale::Large);
        assert_eq!(ProjectScale::from_file_count(500), ProjectScale::Enterprise);
    }

    #[test]
    fn test_total_size_saturates() {
        let nodes = build_file_tree(&[
            FlatEntry::blob("huge.bin", Some(u64::MAX)),
            FlatEntry::blob("tiny.txt", Some(1)),
        ]);
        let stats = TreeStats::from_nodes(&nodes);
        assert_eq!(stats.total_size, u64::MAX);
        assert_eq!(stats.files, 2);
    }
}
