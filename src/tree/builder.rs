//! File Tree Builder
//!
//! Rebuilds a nested directory/file hierarchy from a flat recursive tree
//! listing in two passes:
//!
//! 1. Every entry's proper path prefixes become directory nodes, each
//!    created once and attached to its parent (or the root list).
//! 2. Every blob becomes a file node attached to its parent directory.
//!
//! Because directories are all created in pass 1, root-level files always
//! follow root-level directories in the output. Directories are inferred
//! from path prefixes only; an explicit `tree` entry with no files under it
//! produces no node.
//!
//! Nodes are collected in an index arena while building and turned into an
//! owned `Vec<Node>` at the end. The lookup table lives only for one call.

use std::collections::HashMap;

use tracing::debug;

use super::filter::EntryFilter;
use super::sort::{SortOrder, sort_nodes};
use crate::types::{DirectoryNode, FileNode, FlatEntry, Node};

enum Slot {
    Dir(usize),
    File(FileNode),
}

struct DirSlot {
    name: String,
    path: String,
    children: Vec<Slot>,
}

/// Build the root node list for a flat listing.
///
/// Total over its input: malformed entries are skipped, never reported.
pub fn build_file_tree(entries: &[FlatEntry]) -> Vec<Node> {
    let mut dirs: Vec<Option<DirSlot>> = Vec::new();
    let mut lookup: HashMap<String, usize> = HashMap::new();
    let mut roots: Vec<Slot> = Vec::new();

    // Pass 1: directory skeleton
    for entry in entries {
        let segments: Vec<&str> = entry.segments().collect();
        if segments.is_empty() {
            debug!("Skipping entry with empty path: {:?}", entry.path);
            continue;
        }

        let mut current = String::new();
        let mut parent: Option<usize> = None;

        for segment in &segments[..segments.len() - 1] {
            if !current.is_empty() {
                current.push('/');
            }
            current.push_str(segment);

            let id = match lookup.get(&current) {
                Some(&id) => id,
                None => {
                    let id = dirs.len();
                    dirs.push(Some(DirSlot {
                        name: (*segment).to_string(),
                        path: current.clone(),
                        children: Vec::new(),
                    }));
                    lookup.insert(current.clone(), id);

                    match parent.and_then(|p| dirs[p].as_mut()) {
                        Some(parent_dir) => parent_dir.children.push(Slot::Dir(id)),
                        None => roots.push(Slot::Dir(id)),
                    }
                    id
                }
            };
            parent = Some(id);
        }
    }

    // Pass 2: attach files
    for entry in entries.iter().filter(|e| e.is_blob()) {
        let segments: Vec<&str> = entry.segments().collect();
        let Some((file_name, parents)) = segments.split_last() else {
            continue;
        };

        let file = FileNode::new(*file_name, segments.join("/"), entry.size);

        if parents.is_empty() {
            roots.push(Slot::File(file));
            continue;
        }

        let parent_path = parents.join("/");
        match lookup.get(&parent_path).and_then(|&id| dirs[id].as_mut()) {
            Some(dir) => dir.children.push(Slot::File(file)),
            None => debug!("Dropping {}: parent {} not found", file.path, parent_path),
        }
    }

    debug!(
        "Built file tree: {} entries, {} directories, {} roots",
        entries.len(),
        dirs.len(),
        roots.len()
    );

    roots
        .into_iter()
        .filter_map(|slot| materialize(slot, &mut dirs))
        .collect()
}

fn materialize(slot: Slot, dirs: &mut [Option<DirSlot>]) -> Option<Node> {
    match slot {
        Slot::File(file) => Some(Node::File(file)),
        Slot::Dir(id) => {
            // Each directory is referenced by exactly one parent slot
            let dir = dirs.get_mut(id)?.take()?;
            let children = dir
                .children
                .into_iter()
                .filter_map(|child| materialize(child, dirs))
                .collect();
            Some(Node::Directory(DirectoryNode::new(dir.name, dir.path, children)))
        }
    }
}

/// Configurable front end over [`build_file_tree`]
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    filter: EntryFilter,
    sort: SortOrder,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop entries matching the filter before building
    pub fn with_filter(mut self, filter: EntryFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Reorder every level after building
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn build(&self, entries: &[FlatEntry]) -> Vec<Node> {
        let mut nodes = if self.filter.is_empty() {
            build_file_tree(entries)
        } else {
            let kept = self.filter.apply(entries);
            debug!("Filter kept {} of {} entries", kept.len(), entries.len());
            build_file_tree(&kept)
        };
        sort_nodes(&mut nodes, self.sort);
        nodes
    }
}
