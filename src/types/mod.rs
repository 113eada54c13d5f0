pub mod entry;
pub mod error;
pub mod node;
pub mod repository;

pub use entry::{EntryKind, FlatEntry, TreeListing};
pub use error::{ErrorCategory, RepoTreeError, Result, ResultExt};
pub use node::{DirectoryNode, FileNode, Node, file_extension, walk_forest};
pub use repository::{
    CommitSummary, Contributor, ErrorResponse, LanguageShare, RepoId, RepositoryDetails,
    RepositoryMetadata, RepositoryStructure,
};
