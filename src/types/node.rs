use serde::{Deserialize, Serialize};

/// A node of the rebuilt file hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Directory(DirectoryNode),
    File(FileNode),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryNode {
    pub name: String,
    pub path: String,
    /// Children in first-seen order
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    pub name: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Text after the last '.' of the name, empty when there is none
    pub extension: String,
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Directory(d) => &d.name,
            Node::File(f) => &f.name,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Node::Directory(d) => &d.path,
            Node::File(f) => &f.path,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Directory(d) => &d.children,
            Node::File(_) => &[],
        }
    }

    pub fn as_directory(&self) -> Option<&DirectoryNode> {
        match self {
            Node::Directory(d) => Some(d),
            Node::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            Node::File(f) => Some(f),
            Node::Directory(_) => None,
        }
    }

    /// Visit this node and all descendants depth-first, parents before children
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node, usize)) {
        fn go<'a>(node: &'a Node, depth: usize, visit: &mut impl FnMut(&'a Node, usize)) {
            visit(node, depth);
            for child in node.children() {
                go(child, depth + 1, visit);
            }
        }
        go(self, 1, visit);
    }
}

impl DirectoryNode {
    pub fn new(name: impl Into<String>, path: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            children,
        }
    }
}

impl FileNode {
    /// Creates a file node, deriving the extension from `name`
    pub fn new(name: impl Into<String>, path: impl Into<String>, size: Option<u64>) -> Self {
        let name = name.into();
        let extension = file_extension(&name).to_string();
        Self {
            name,
            path: path.into(),
            size,
            extension,
        }
    }
}

/// Substring after the last '.', or "" when the name has no dot
pub fn file_extension(name: &str) -> &str {
    name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("")
}

/// Visit every node of a forest depth-first; roots have depth 1
pub fn walk_forest<'a>(nodes: &'a [Node], visit: &mut impl FnMut(&'a Node, usize)) {
    for node in nodes {
        node.walk(visit);
    }
}
