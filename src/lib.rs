//! RepoTree - Repository File Tree Reconstruction
//!
//! Turns the flat, path-keyed listing a hosting API returns for a repository
//! into a nested hierarchy of directories and files, and joins it with the
//! repository's metadata into one structure document.
//!
//! ## Core Features
//!
//! - **Two-Pass Builder**: every directory exists exactly once before any file
//!   is attached, regardless of listing order
//! - **Tree Policies**: glob exclusion and opt-in sort orders
//! - **Summaries**: counts, sizes, extensions, project scale, path categories
//! - **Sources**: pluggable `RepositorySource` with a snapshot-directory backend
//!
//! ## Quick Start
//!
//! ```ignore
//! use repotree::{FlatEntry, build_file_tree};
//!
//! let entries = vec![FlatEntry::blob("src/main.rs", Some(120))];
//! let tree = build_file_tree(&entries);
//! assert_eq!(tree[0].name(), "src");
//! ```
//!
//! ## Modules
//!
//! - [`types`]: Listing entries, tree nodes, repository documents, errors
//! - [`tree`]: Builder, sorting, filtering, statistics, rendering
//! - [`source`]: Listing parsing and repository sources
//! - [`config`]: Layered configuration

pub mod cli;
pub mod config;
pub mod constants;
pub mod source;
pub mod tree;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader, OutputFormat};

// Error Types
pub use types::error::{ErrorCategory, RepoTreeError, Result, ResultExt};

// Listing and Nodes
pub use types::{
    DirectoryNode, EntryKind, FileNode, FlatEntry, Node, RepoId, RepositoryStructure, TreeListing,
};

// =============================================================================
// Tree Re-exports
// =============================================================================

pub use tree::{
    EntryFilter, ProjectScale, SortOrder, TreeBuilder, TreeRenderer, TreeStats, build_file_tree,
};

// =============================================================================
// Source Re-exports
// =============================================================================

pub use source::{RepositorySource, SnapshotSource, assemble_structure, parse_listing};
