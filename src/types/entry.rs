//! Flat tree listing types
//!
//! Mirrors one row of a hosting API's recursive tree listing.

use serde::{Deserialize, Serialize, Serializer};

/// Object type of a listing row
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum EntryKind {
    /// A file
    Blob,
    /// A directory
    Tree,
    /// A submodule pointer
    Commit,
    /// Anything else the API sends; kept verbatim
    Other(String),
}

impl EntryKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Blob => "blob",
            Self::Tree => "tree",
            Self::Commit => "commit",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for EntryKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "blob" => Self::Blob,
            "tree" => Self::Tree,
            "commit" => Self::Commit,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for EntryKind {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl Serialize for EntryKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a recursive tree listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatEntry {
    /// Slash-separated path relative to the repository root
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Byte size; only present for blobs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

impl FlatEntry {
    /// Creates a file entry
    pub fn blob(path: impl Into<String>, size: Option<u64>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Blob,
            size,
            sha: None,
            url: None,
            mode: None,
        }
    }

    /// Creates a directory entry
    pub fn tree(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Tree,
            size: None,
            sha: None,
            url: None,
            mode: None,
        }
    }

    pub fn is_blob(&self) -> bool {
        self.kind == EntryKind::Blob
    }

    /// Non-empty path segments; empty segments from stray slashes are skipped
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|s| !s.is_empty())
    }
}

/// Envelope returned by a recursive tree listing request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeListing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub tree: Vec<FlatEntry>,
    /// Set when the API cut the listing short
    #[serde(default)]
    pub truncated: bool,
}

impl TreeListing {
    pub fn from_entries(tree: Vec<FlatEntry>) -> Self {
        Self {
            tree,
            ..Self::default()
        }
    }

    pub fn blob_count(&self) -> usize {
        self.tree.iter().filter(|e| e.is_blob()).count()
    }
}
