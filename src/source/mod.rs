//! Repository Sources
//!
//! Defines the `RepositorySource` trait through which flat listings and
//! repository metadata reach the tree builder, and `assemble_structure`,
//! which joins both into one `RepositoryStructure`.
//!
//! ## Modules
//!
//! - `listing`: Parsing of listing documents (envelope or bare array)
//! - `snapshot`: Directory of saved hosting-API responses

mod listing;
mod snapshot;

pub use listing::{listing_from_value, parse_listing, read_listing};
pub use snapshot::SnapshotSource;

use tracing::{debug, info, warn};

use crate::tree::TreeBuilder;
use crate::types::{RepoId, RepositoryMetadata, RepositoryStructure, Result, TreeListing};

// =============================================================================
// Repository Source Trait
// =============================================================================

/// Supplies the recursive listing and metadata of a repository
pub trait RepositorySource: Send + Sync {
    /// Full recursive listing of the default branch
    ///
    /// Returns `RepoTreeError::NotFound` when the repository does not exist.
    fn fetch_tree(&self, repo: &RepoId) -> Result<TreeListing>;

    /// Details, language breakdown, contributors and recent commits
    fn fetch_metadata(&self, repo: &RepoId) -> Result<RepositoryMetadata>;

    /// Source name for logging
    fn name(&self) -> &str;
}

/// Fetch, build and merge everything known about a repository
pub fn assemble_structure(
    source: &dyn RepositorySource,
    repo: &RepoId,
    builder: &TreeBuilder,
) -> Result<RepositoryStructure> {
    info!("Assembling structure for {} (source: {})", repo, source.name());

    let listing = source.fetch_tree(repo)?;
    if listing.truncated {
        warn!(
            "Listing for {} was truncated upstream; tree is incomplete ({} entries)",
            repo,
            listing.tree.len()
        );
    }

    debug!(
        "Listing for {}: {} entries, {} blobs",
        repo,
        listing.tree.len(),
        listing.blob_count()
    );
    let tree = builder.build(&listing.tree);
    let metadata = source.fetch_metadata(repo)?;

    let mut structure = RepositoryStructure::new(repo.clone(), tree, metadata);
    structure.truncated = listing.truncated;
    structure.validate()?;

    info!(
        "Structure for {}: {} root nodes, {} languages, {} contributors, {} commits",
        repo,
        structure.tree.len(),
        structure.languages.len(),
        structure.contributors.len(),
        structure.commits.len()
    );

    Ok(structure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::SortOrder;
    use crate::types::{FlatEntry, Node, RepoTreeError, RepositoryDetails};
    use std::collections::HashMap;

    /// In-memory source keyed by full repository name
    struct MemorySource {
        repos: HashMap<String, (TreeListing, RepositoryMetadata)>,
    }

    impl RepositorySource for MemorySource {
        fn fetch_tree(&self, repo: &RepoId) -> Result<TreeListing> {
            self.repos
                .get(&repo.full_name())
                .map(|(listing, _)| listing.clone())
                .ok_or_else(|| RepoTreeError::NotFound(repo.full_name()))
        }

        fn fetch_metadata(&self, repo: &RepoId) -> Result<RepositoryMetadata> {
            Ok(self
                .repos
                .get(&repo.full_name())
                .map(|(_, metadata)| metadata.clone())
                .unwrap_or_default())
        }

        fn name(&self) -> &str {
            "memory"
        }
    }

    fn source_with(listing: TreeListing, metadata: RepositoryMetadata) -> MemorySource {
        let mut repos = HashMap::new();
        repos.insert("o/r".to_string(), (listing, metadata));
        MemorySource { repos }
    }

    #[test]
    fn test_assemble_merges_tree_and_metadata() {
        let listing = TreeListing::from_entries(vec![
            FlatEntry::blob("src/lib.rs", Some(10)),
            FlatEntry::blob("Cargo.toml", Some(5)),
        ]);
        let mut metadata = RepositoryMetadata {
            details: Some(RepositoryDetails {
                name: "r".into(),
                full_name: "o/r".into(),
                ..Default::default()
            }),
            ..Default::default()
        };
        metadata.languages.insert("Rust".into(), 10);
        let source = source_with(listing, metadata);

        let repo = RepoId::new("o", "r").unwrap();
        let structure = assemble_structure(&source, &repo, &TreeBuilder::new()).unwrap();

        assert_eq!(structure.repository, repo);
        assert_eq!(structure.tree.len(), 2);
        assert!(matches!(structure.tree[0], Node::Directory(_)));
        assert_eq!(structure.languages.get("Rust"), Some(&10));
        assert!(!structure.truncated);

        let json = serde_json::to_value(&structure).unwrap();
        assert_eq!(json["repository"], "o/r");
        assert_eq!(json["tree"][0]["type"], "directory");
    }

    #[test]
    fn test_assemble_keeps_truncation_flag() {
        let mut listing = TreeListing::from_entries(vec![FlatEntry::blob("b", None)]);
        listing.truncated = true;
        let source = source_with(listing, RepositoryMetadata::default());

        let structure = assemble_structure(
            &source,
            &RepoId::new("o", "r").unwrap(),
            &TreeBuilder::new().with_sort(SortOrder::Alphabetical),
        )
        .unwrap();
        assert!(structure.truncated);
        assert_eq!(structure.tree.len(), 1);
    }

    #[test]
    fn test_assemble_not_found() {
        let source = source_with(TreeListing::default(), RepositoryMetadata::default());
        let err = assemble_structure(
            &source,
            &RepoId::new("o", "missing").unwrap(),
            &TreeBuilder::new(),
        )
        .unwrap_err();
        assert_eq!(err.http_status(), 404);
    }

    #[test]
    fn test_assemble_rejects_invalid_metadata() {
        let metadata = RepositoryMetadata {
            commits: vec![Default::default()],
            ..Default::default()
        };
        let source = source_with(TreeListing::default(), metadata);
        let err = assemble_structure(&source, &RepoId::new("o", "r").unwrap(), &TreeBuilder::new())
            .unwrap_err();
        assert!(matches!(err, RepoTreeError::InvalidData { .. }));
        assert_eq!(err.http_status(), 500);
    }

    #[test]
    fn test_empty_repository_is_not_an_error() {
        let source = source_with(TreeListing::default(), RepositoryMetadata::default());
        let structure =
            assemble_structure(&source, &RepoId::new("o", "r").unwrap(), &TreeBuilder::new())
                .unwrap();
        assert!(structure.tree.is_empty());
    }
}
