//! Global Constants
//!
//! Centralized constants for configuration and tuning.

/// Project scale thresholds (file counts)
pub mod scale {
    /// Smallest file count classified as medium
    pub const MEDIUM_MIN_FILES: usize = 50;

    /// Smallest file count classified as large
    pub const LARGE_MIN_FILES: usize = 200;

    /// Smallest file count classified as enterprise
    pub const ENTERPRISE_MIN_FILES: usize = 500;
}

/// Snapshot source layout
pub mod snapshot {
    /// Listing file inside `<root>/<owner>/<repo>/`
    pub const TREE_FILE: &str = "tree.json";

    /// Optional metadata file next to the listing
    pub const METADATA_FILE: &str = "metadata.json";

    /// Default snapshot root, relative to the working directory
    pub const DEFAULT_ROOT: &str = ".repotree/snapshots";
}

/// Output defaults
pub mod output {
    /// Extensions shown by `stats` in text mode
    pub const TOP_EXTENSIONS: usize = 10;

    /// Key files reported by `stats`
    pub const KEY_FILES: usize = 15;

    /// Commits listed by `structure` in text mode
    pub const RECENT_COMMITS: usize = 5;

    /// Contributors listed by `structure` in text mode
    pub const TOP_CONTRIBUTORS: usize = 5;
}
