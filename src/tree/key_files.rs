//! Key File Ranking
//!
//! Assigns every file a role from its name and path, then ranks files so the
//! ones a newcomer should open first come out on top. Roles are tested in a
//! fixed order and the first match wins; ranking uses a separate priority.

use serde::{Deserialize, Serialize};

use crate::types::{Node, walk_forest};

const ENTRY_POINTS: &[&str] = &[
    "index.js", "index.ts", "main.js", "main.ts", "app.js", "app.ts", "server.js", "server.ts",
    "index.jsx", "index.tsx", "main.jsx", "main.tsx", "app.jsx", "app.tsx",
];

const CONFIG_FILES: &[&str] = &[
    "package.json",
    "tsconfig.json",
    "webpack.config.js",
    ".env.example",
    "docker-compose.yml",
    "Dockerfile",
    "next.config.js",
    "next.config.ts",
    "vite.config.js",
    "vite.config.ts",
    "tailwind.config.js",
    "tailwind.config.ts",
    "jest.config.js",
    "jest.config.ts",
];

const FRAMEWORK_FILES: &[&str] = &[
    "layout.tsx",
    "page.tsx",
    "routes.tsx",
    "App.tsx",
    "App.jsx",
    "store.ts",
    "store.js",
    "context.tsx",
    "context.jsx",
    "schema.graphql",
    "schema.prisma",
];

const MODULE_INDEXES: &[&str] = &["/index.ts", "/index.js", "/index.tsx", "/index.jsx"];

/// Role of a file, declared in ranking priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileRole {
    Documentation,
    EntryPoint,
    Configuration,
    Framework,
    ApiEndpoint,
    ModuleEntry,
    Component,
    DataModel,
    Utility,
    Hook,
    Styling,
    Source,
}

impl FileRole {
    pub fn label(&self) -> &'static str {
        match self {
            FileRole::Documentation => "Project documentation",
            FileRole::EntryPoint => "Main entry point",
            FileRole::Configuration => "Configuration file",
            FileRole::Framework => "Framework file",
            FileRole::ApiEndpoint => "API endpoint",
            FileRole::ModuleEntry => "Module entry point",
            FileRole::Component => "UI component",
            FileRole::DataModel => "Data model/type",
            FileRole::Utility => "Utility/library",
            FileRole::Hook => "Hook",
            FileRole::Styling => "Styling",
            FileRole::Source => "Source file",
        }
    }
}

/// Classify a file by its exact name, then by its lowercased path
pub fn classify_file(path: &str) -> FileRole {
    let name = path.rsplit('/').next().unwrap_or(path);
    let lower = path.to_lowercase();

    // Nested package indexes are module entries even though their names
    // are also entry point names
    if lower.contains("/src/") && MODULE_INDEXES.iter().any(|s| lower.ends_with(s)) {
        FileRole::ModuleEntry
    } else if ENTRY_POINTS.contains(&name) {
        FileRole::EntryPoint
    } else if CONFIG_FILES.contains(&name) {
        FileRole::Configuration
    } else if name.to_lowercase().contains("readme.md") {
        FileRole::Documentation
    } else if FRAMEWORK_FILES.contains(&name) {
        FileRole::Framework
    } else if lower.contains("/api/") && lower.contains("/route.ts") {
        FileRole::ApiEndpoint
    } else if lower.contains("/components/") {
        FileRole::Component
    } else if lower.contains("/utils/") || lower.contains("/lib/") {
        FileRole::Utility
    } else if lower.contains("/hooks/") {
        FileRole::Hook
    } else if lower.contains("/styles/") || lower.ends_with(".css") || lower.ends_with(".scss") {
        FileRole::Styling
    } else if lower.contains("/models/") || lower.contains("/types/") {
        FileRole::DataModel
    } else {
        FileRole::Source
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyFile {
    pub path: String,
    pub name: String,
    pub role: FileRole,
    /// Unknown sizes count as 0
    pub size: u64,
}

/// Top `limit` files ordered by role priority, then shallower paths, then
/// larger files; remaining ties keep tree order
pub fn rank_key_files(nodes: &[Node], limit: usize) -> Vec<KeyFile> {
    let mut files = Vec::new();
    walk_forest(nodes, &mut |node, depth| {
        if let Node::File(file) = node {
            files.push((
                depth,
                KeyFile {
                    path: file.path.clone(),
                    name: file.name.clone(),
                    role: classify_file(&file.path),
                    size: file.size.unwrap_or(0),
                },
            ));
        }
    });

    files.sort_by(|(da, a), (db, b)| {
        a.role
            .cmp(&b.role)
            .then_with(|| da.cmp(db))
            .then_with(|| b.size.cmp(&a.size))
    });

    files.into_iter().take(limit).map(|(_, file)| file).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build_file_tree;
    use crate::types::FlatEntry;

    #[test]
    fn test_classify_by_name() {
        assert_eq!(classify_file("src/main.ts"), FileRole::EntryPoint);
        assert_eq!(classify_file("package.json"), FileRole::Configuration);
        assert_eq!(classify_file("docs/README.md"), FileRole::Documentation);
        assert_eq!(classify_file("app/layout.tsx"), FileRole::Framework);
        assert_eq!(classify_file("prisma/schema.prisma"), FileRole::Framework);
    }

    #[test]
    fn test_name_rules_are_case_sensitive() {
        // Name lists match exactly; only the readme check ignores case
        assert_eq!(classify_file("readme.MD"), FileRole::Documentation);
        assert_eq!(classify_file("src/App.tsx"), FileRole::Framework);
        assert_eq!(classify_file("src/APP.tsx"), FileRole::Source);
    }

    #[test]
    fn test_classify_by_path() {
        assert_eq!(classify_file("pkg/src/widgets/index.tsx"), FileRole::ModuleEntry);
        assert_eq!(classify_file("src/index.tsx"), FileRole::EntryPoint);
        assert_eq!(classify_file("app/api/users/route.ts"), FileRole::ApiEndpoint);
        assert_eq!(classify_file("web/components/Button.tsx"), FileRole::Component);
        assert_eq!(classify_file("web/lib/fetch.ts"), FileRole::Utility);
        assert_eq!(classify_file("web/hooks/useThing.ts"), FileRole::Hook);
        assert_eq!(classify_file("web/theme.scss"), FileRole::Styling);
        assert_eq!(classify_file("web/types/user.ts"), FileRole::DataModel);
        assert_eq!(classify_file("tools/gen.py"), FileRole::Source);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // A component directory under utils still counts as a component
        assert_eq!(classify_file("x/utils/components/a.ts"), FileRole::Component);
        // Utilities are checked before data models
        assert_eq!(classify_file("x/lib/types/a.ts"), FileRole::Utility);
    }

    #[test]
    fn test_rank_orders_by_role_then_depth_then_size() {
        let nodes = build_file_tree(&[
            FlatEntry::blob("src/components/Big.tsx", Some(900)),
            FlatEntry::blob("src/components/Small.tsx", Some(10)),
            FlatEntry::blob("web/deep/index.ts", Some(5)),
            FlatEntry::blob("index.ts", Some(1)),
            FlatEntry::blob("README.md", None),
            FlatEntry::blob("package.json", Some(50)),
        ]);
        let ranked = rank_key_files(&nodes, 10);
        let paths: Vec<&str> = ranked.iter().map(|f| f.path.as_str()).collect();

        assert_eq!(
            paths,
            vec![
                "README.md",
                "index.ts",
                "web/deep/index.ts",
                "package.json",
                "src/components/Big.tsx",
                "src/components/Small.tsx",
            ]
        );
        assert_eq!(ranked[0].size, 0);
    }

    #[test]
    fn test_rank_respects_limit() {
        let nodes = build_file_tree(&[
            FlatEntry::blob("a.rs", Some(1)),
            FlatEntry::blob("b.rs", Some(2)),
            FlatEntry::blob("c.rs", Some(3)),
        ]);
        let ranked = rank_key_files(&nodes, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name, "c.rs");
        assert!(rank_key_files(&[], 5).is_empty());
    }
}
