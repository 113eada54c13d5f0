//! Snapshot Source
//!
//! Serves previously saved hosting-API responses from a directory laid out
//! as `<root>/<owner>/<repo>/tree.json` with an optional `metadata.json`
//! alongside.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::RepositorySource;
use super::listing::parse_listing;
use crate::constants::snapshot::{METADATA_FILE, TREE_FILE};
use crate::types::{RepoId, RepoTreeError, RepositoryMetadata, Result, ResultExt, TreeListing};

#[derive(Debug, Clone)]
pub struct SnapshotSource {
    root: PathBuf,
}

impl SnapshotSource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn repo_dir(&self, repo: &RepoId) -> PathBuf {
        self.root.join(repo.owner()).join(repo.name())
    }
}

impl RepositorySource for SnapshotSource {
    fn fetch_tree(&self, repo: &RepoId) -> Result<TreeListing> {
        let path = self.repo_dir(repo).join(TREE_FILE);
        if !path.is_file() {
            debug!("No snapshot listing at {}", path.display());
            return Err(RepoTreeError::NotFound(repo.full_name()));
        }

        debug!("Loading snapshot listing from {}", path.display());
        parse_listing(BufReader::new(File::open(&path)?))
    }

    fn fetch_metadata(&self, repo: &RepoId) -> Result<RepositoryMetadata> {
        let path = self.repo_dir(repo).join(METADATA_FILE);
        if !path.is_file() {
            debug!("No snapshot metadata at {}", path.display());
            return Ok(RepositoryMetadata::default());
        }

        serde_json::from_reader(BufReader::new(File::open(&path)?)).with_source(self.name())
    }

    fn name(&self) -> &str {
        "snapshot"
    }
}
