//! Stats Command
//!
//! Summarize a saved listing: counts, sizes, extensions, path categories and
//! the files worth reading first.

use serde::Serialize;
use std::path::PathBuf;

use crate::cli::ui::output::Output;
use crate::cli::util::{CommandContext, serialize_for};
use crate::config::OutputFormat;
use crate::constants::output::{KEY_FILES, TOP_EXTENSIONS};
use crate::source::read_listing;
use crate::tree::{CategorizedPaths, KeyFile, PathCategory, TreeStats, format_size, rank_key_files};
use crate::types::Result;

#[derive(Serialize)]
struct StatsReport {
    stats: TreeStats,
    categories: CategorizedPaths,
    key_files: Vec<KeyFile>,
    truncated: bool,
}

pub fn run(input: PathBuf, format: Option<OutputFormat>, source_only: bool) -> Result<()> {
    let ctx = CommandContext::load()?;
    let listing = read_listing(&input)?;
    let nodes = ctx.tree_builder(&[], None)?.build(&listing.tree);

    let report = StatsReport {
        stats: TreeStats::from_nodes(&nodes),
        categories: CategorizedPaths::from_nodes(&nodes, source_only),
        key_files: rank_key_files(&nodes, KEY_FILES),
        truncated: listing.truncated,
    };

    if let Some(serialized) = serialize_for(&report, ctx.format(format))? {
        println!("{}", serialized);
        return Ok(());
    }

    let out = Output::new();
    let stats = &report.stats;

    out.header("Repository Tree Stats");
    out.field("Files", stats.files);
    out.field("Directories", stats.directories);
    out.field("Total size", format_size(stats.total_size));
    if stats.files_without_size > 0 {
        out.field("Unsized", stats.files_without_size);
    }
    out.field("Max depth", stats.max_depth);
    out.field("Scale", stats.scale);
    if report.truncated {
        out.warning("Listing was truncated upstream; numbers are lower bounds");
    }

    let top = stats.top_extensions(TOP_EXTENSIONS);
    if !top.is_empty() {
        out.section("Extensions");
        for (ext, count) in top {
            let ext = if ext.is_empty() { "(none)" } else { ext };
            println!("  {:<12} {}", ext, count);
        }
    }

    out.section(if source_only {
        "Categories (source files)"
    } else {
        "Categories"
    });
    for category in PathCategory::ALL {
        let paths = report.categories.get(category);
        if !paths.is_empty() {
            println!("  {:<16} {}", category.label(), paths.len());
        }
    }

    if !report.key_files.is_empty() {
        out.section("Key files");
        for file in &report.key_files {
            println!("  {:<24} {}", file.role.label(), file.path);
        }
    }

    Ok(())
}
