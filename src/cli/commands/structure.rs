//! Structure Command
//!
//! Assemble the full structure of a repository (tree, details, languages,
//! contributors, commits) from a snapshot source.

use std::path::PathBuf;

use crate::cli::ui::output::Output;
use crate::cli::util::{CommandContext, serialize_for};
use crate::config::OutputFormat;
use crate::constants::output::{RECENT_COMMITS, TOP_CONTRIBUTORS};
use crate::source::assemble_structure;
use crate::tree::{SortOrder, TreeStats};
use crate::types::{ErrorResponse, RepoId, RepositoryStructure, Result};

pub struct StructureOptions {
    pub repo: String,
    pub snapshots: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub sort: Option<SortOrder>,
    pub depth: Option<usize>,
}

pub fn run(options: StructureOptions) -> Result<()> {
    let ctx = CommandContext::load()?;
    let format = ctx.format(options.format);

    let result = options.repo.parse::<RepoId>().and_then(|repo| {
        let source = ctx.snapshot_source(options.snapshots.as_deref());
        let builder = ctx.tree_builder(&[], options.sort)?;
        assemble_structure(&source, &repo, &builder)
    });

    let structure = match result {
        Ok(structure) => structure,
        Err(err) => {
            // Machine-readable callers get the same body an API would answer with
            if let Some(body) = serialize_for(&ErrorResponse::from_error(&err), format)? {
                println!("{}", body);
            }
            return Err(err);
        }
    };

    match serialize_for(&structure, format)? {
        Some(serialized) => println!("{}", serialized),
        None => print_text(&ctx, &structure, options.depth),
    }

    Ok(())
}

fn print_text(ctx: &CommandContext, structure: &RepositoryStructure, depth: Option<usize>) {
    let out = Output::new();
    out.header(&structure.repository.full_name());

    if let Some(details) = &structure.details {
        if let Some(description) = &details.description {
            println!("{}", description);
        }
        out.field("Stars", details.stars);
        out.field("Forks", details.forks);
        out.field("Open issues", details.open_issues);
        if let Some(language) = &details.language {
            out.field("Language", language);
        }
        if let Some(branch) = &details.default_branch {
            out.field("Branch", branch);
        }
    }

    let stats = TreeStats::from_nodes(&structure.tree);
    out.field("Files", stats.files);
    out.field("Directories", stats.directories);

    if structure.truncated {
        out.warning("Listing was truncated upstream; the tree is incomplete");
    }

    let shares = structure.language_shares();
    if !shares.is_empty() {
        out.section("Languages");
        for share in shares {
            println!("  {:<16} {:>5.1}%", share.language, share.percent);
        }
    }

    out.section("Tree");
    print!("{}", ctx.renderer(depth, false).render(&structure.tree));

    if !structure.contributors.is_empty() {
        out.section("Top contributors");
        for contributor in structure.contributors.iter().take(TOP_CONTRIBUTORS) {
            println!(
                "  {:<20} {} contributions",
                contributor.login, contributor.contributions
            );
        }
    }

    if !structure.commits.is_empty() {
        out.section("Recent commits");
        for commit in structure.commits.iter().take(RECENT_COMMITS) {
            let short_sha: String = commit.sha.chars().take(7).collect();
            let date = commit
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            println!("  {} {:<10} {}", short_sha, date, commit.headline());
        }
    }
}
