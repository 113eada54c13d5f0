//! Path Categorisation
//!
//! Buckets repository paths into coarse roles (components, pages, APIs, ...)
//! using ordered substring rules. The first matching rule wins, so e.g. an
//! `app/api/.../route.ts` file counts as a page, not an API.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::{Node, walk_forest};

/// Extensions and file names treated as source for analysis
const SOURCE_SUFFIXES: &[&str] = &[
    ".js", ".jsx", ".ts", ".tsx", ".py", ".go", ".java", ".cs", ".rb", ".php", ".rs", ".c",
    ".cpp", ".h", ".hpp", ".swift", ".kt", ".kts", "Dockerfile", "Makefile", ".yml", ".yaml",
    ".json", ".md",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PathCategory {
    Components,
    Pages,
    Apis,
    DataModels,
    Utilities,
    Configurations,
    Other,
}

impl PathCategory {
    pub const ALL: [PathCategory; 7] = [
        PathCategory::Components,
        PathCategory::Pages,
        PathCategory::Apis,
        PathCategory::DataModels,
        PathCategory::Utilities,
        PathCategory::Configurations,
        PathCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PathCategory::Components => "Components",
            PathCategory::Pages => "Pages",
            PathCategory::Apis => "APIs",
            PathCategory::DataModels => "Data models",
            PathCategory::Utilities => "Utilities",
            PathCategory::Configurations => "Configurations",
            PathCategory::Other => "Other",
        }
    }
}

fn contains_any(path: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| path.contains(n))
}

/// Classify a repository path
pub fn categorize_path(path: &str) -> PathCategory {
    let path = path.to_lowercase();

    if contains_any(&path, &["component", "/ui/", "/components/"]) {
        PathCategory::Components
    } else if contains_any(&path, &["/pages/", "/page.", "/views/"]) || path.starts_with("app/") {
        PathCategory::Pages
    } else if contains_any(
        &path,
        &["/api/", "controller", "route.", "endpoint", "/routes/"],
    ) {
        PathCategory::Apis
    } else if contains_any(&path, &["model", "schema", "entity", "type", "interface"]) {
        PathCategory::DataModels
    } else if contains_any(&path, &["util", "helper", "service", "lib", "hook", "/store/"]) {
        PathCategory::Utilities
    } else if path.contains("config")
        || path.ends_with(".json")
        || path.ends_with(".yml")
        || path.ends_with(".yaml")
        || path.contains(".env")
        || path.ends_with(".rc")
    {
        PathCategory::Configurations
    } else {
        PathCategory::Other
    }
}

pub fn is_source_file(path: &str) -> bool {
    SOURCE_SUFFIXES.iter().any(|suffix| path.ends_with(suffix))
}

/// File paths of a tree grouped by category, in tree order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategorizedPaths {
    pub categories: BTreeMap<PathCategory, Vec<String>>,
}

impl CategorizedPaths {
    pub fn from_nodes(nodes: &[Node], source_only: bool) -> Self {
        let mut categories: BTreeMap<PathCategory, Vec<String>> = BTreeMap::new();

        walk_forest(nodes, &mut |node, _| {
            if let Node::File(file) = node
                && (!source_only || is_source_file(&file.path))
            {
                categories
                    .entry(categorize_path(&file.path))
                    .or_default()
                    .push(file.path.clone());
            }
        });

        Self { categories }
    }

    pub fn get(&self, category: PathCategory) -> &[String] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn total(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build_file_tree;
    use crate::types::FlatEntry;

    #[test]
    fn test_categorize_rules_in_order() {
        assert_eq!(
            categorize_path("src/components/Button.tsx"),
            PathCategory::Components
        );
        assert_eq!(categorize_path("app/api/search/route.ts"), PathCategory::Pages);
        assert_eq!(categorize_path("src/routes/users.js"), PathCategory::Apis);
        assert_eq!(categorize_path("src/models/user.py"), PathCategory::DataModels);
        assert_eq!(categorize_path("src/hooks/useAuth.ts"), PathCategory::Utilities);
        assert_eq!(categorize_path("tsconfig.json"), PathCategory::Configurations);
        assert_eq!(categorize_path("README.md"), PathCategory::Other);
    }

    #[test]
    fn test_categorize_is_case_insensitive() {
        assert_eq!(
            categorize_path("src/UI/Components/Card.tsx"),
            PathCategory::Components
        );
    }

    #[test]
    fn test_is_source_file() {
        assert!(is_source_file("src/main.rs"));
        assert!(is_source_file("Dockerfile"));
        assert!(is_source_file("docs/intro.md"));
        assert!(!is_source_file("assets/logo.png"));
    }

    #[test]
    fn test_categorized_paths_from_tree() {
        let tree = build_file_tree(&[
            FlatEntry::blob("src/components/Nav.tsx", None),
            FlatEntry::blob("src/lib/github.ts", None),
            FlatEntry::blob("public/logo.png", None),
        ]);

        let all = CategorizedPaths::from_nodes(&tree, false);
        assert_eq!(all.total(), 3);
        assert_eq!(all.get(PathCategory::Components), ["src/components/Nav.tsx"]);
        assert_eq!(all.get(PathCategory::Utilities), ["src/lib/github.ts"]);

        let source = CategorizedPaths::from_nodes(&tree, true);
        assert_eq!(source.total(), 2);
        assert!(source.get(PathCategory::Other).is_empty());
    }
}
