//! File Tree Module
//!
//! Turns flat repository listings into nested hierarchies:
//! - Two-pass hierarchy reconstruction
//! - Optional ordering policies and exclusion filters
//! - Statistics, path categorisation, key file ranking and text rendering

pub mod builder;
pub mod category;
pub mod filter;
pub mod key_files;
pub mod render;
pub mod sort;
pub mod stats;

pub use builder::{TreeBuilder, build_file_tree};
pub use category::{CategorizedPaths, PathCategory, categorize_path, is_source_file};
pub use filter::EntryFilter;
pub use key_files::{FileRole, KeyFile, classify_file, rank_key_files};
pub use render::{TreeRenderer, format_size};
pub use sort::{SortOrder, sort_nodes};
pub use stats::{ProjectScale, TreeStats};
