pub mod config;
pub mod stats;
pub mod structure;
pub mod tree;
