//! Tree Command
//!
//! Rebuild and print the hierarchy of a saved listing.
//!
//! Usage:
//!   repotree tree [--input FILE|-] [--format text|json|yaml] [--sort ORDER]
//!                 [--depth N] [--exclude GLOB]... [--sizes]

use std::path::PathBuf;

use tracing::info;

use crate::cli::ui::output::Output;
use crate::cli::util::{CommandContext, serialize_for};
use crate::config::OutputFormat;
use crate::source::read_listing;
use crate::tree::SortOrder;
use crate::types::Result;

pub struct TreeOptions {
    pub input: PathBuf,
    pub format: Option<OutputFormat>,
    pub sort: Option<SortOrder>,
    pub depth: Option<usize>,
    pub exclude: Vec<String>,
    pub sizes: bool,
}

pub fn run(options: TreeOptions) -> Result<()> {
    let ctx = CommandContext::load()?;
    let listing = read_listing(&options.input)?;

    if listing.truncated {
        Output::new().warning("Listing was truncated upstream; the tree is incomplete");
    }

    let builder = ctx.tree_builder(&options.exclude, options.sort)?;
    let nodes = builder.build(&listing.tree);
    info!(
        "Built {} root nodes from {} entries",
        nodes.len(),
        listing.tree.len()
    );

    let format = ctx.format(options.format);
    match serialize_for(&nodes, format)? {
        Some(serialized) => println!("{}", serialized),
        None => print!("{}", ctx.renderer(options.depth, options.sizes).render(&nodes)),
    }

    Ok(())
}
