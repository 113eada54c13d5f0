use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::types::Node;

/// Ordering applied to every level of a built tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Keep the builder's first-seen order
    #[default]
    Preserve,
    /// Sort by name, case-insensitive
    Alphabetical,
    /// Directories before files, each group by name
    DirectoriesFirst,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Preserve => write!(f, "preserve"),
            SortOrder::Alphabetical => write!(f, "alphabetical"),
            SortOrder::DirectoriesFirst => write!(f, "directories-first"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "preserve" => Ok(SortOrder::Preserve),
            "alphabetical" | "alpha" => Ok(SortOrder::Alphabetical),
            "directories-first" | "dirs-first" => Ok(SortOrder::DirectoriesFirst),
            _ => Err(format!(
                "Unknown sort order: {}. Valid values: preserve, alphabetical, directories-first",
                s
            )),
        }
    }
}

fn by_name(a: &Node, b: &Node) -> Ordering {
    a.name()
        .to_lowercase()
        .cmp(&b.name().to_lowercase())
        .then_with(|| a.name().cmp(b.name()))
}

/// Sort a forest in place, recursively. `Preserve` is a no-op.
pub fn sort_nodes(nodes: &mut [Node], order: SortOrder) {
    match order {
        SortOrder::Preserve => return,
        SortOrder::Alphabetical => nodes.sort_by(by_name),
        SortOrder::DirectoriesFirst => nodes.sort_by(|a, b| {
            b.is_directory()
                .cmp(&a.is_directory())
                .then_with(|| by_name(a, b))
        }),
    }

    for node in nodes.iter_mut() {
        if let Node::Directory(dir) = node {
            sort_nodes(&mut dir.children, order);
        }
    }
}
