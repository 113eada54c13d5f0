//! Text rendering of a file hierarchy as an indented box-drawing tree.

use console::style;

use crate::types::Node;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

#[derive(Debug, Clone, Default)]
pub struct TreeRenderer {
    max_depth: Option<usize>,
    show_size: bool,
    color: bool,
}

impl TreeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop descending below this many levels (roots are level 1)
    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_sizes(mut self, show: bool) -> Self {
        self.show_size = show;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn render(&self, nodes: &[Node]) -> String {
        let mut out = String::new();
        self.render_level(nodes, "", 1, &mut out);
        out
    }

    fn render_level(&self, nodes: &[Node], prefix: &str, depth: usize, out: &mut String) {
        let count = nodes.len();
        for (i, node) in nodes.iter().enumerate() {
            let last = i + 1 == count;
            out.push_str(prefix);
            out.push_str(if last { LAST_BRANCH } else { BRANCH });
            out.push_str(&self.label(node));
            out.push('\n');

            let children = node.children();
            if children.is_empty() {
                continue;
            }

            let child_prefix = format!("{}{}", prefix, if last { SPACE } else { PIPE });
            if self.max_depth.is_some_and(|max| depth >= max) {
                out.push_str(&child_prefix);
                out.push_str(LAST_BRANCH);
                out.push_str(&format!("… {} more\n", children.len()));
            } else {
                self.render_level(children, &child_prefix, depth + 1, out);
            }
        }
    }

    fn label(&self, node: &Node) -> String {
        match node {
            Node::Directory(dir) => {
                let name = format!("{}/", dir.name);
                if self.color {
                    style(name).blue().bold().to_string()
                } else {
                    name
                }
            }
            Node::File(file) => match (self.show_size, file.size) {
                (true, Some(size)) => {
                    let size = format!("({})", format_size(size));
                    if self.color {
                        format!("{} {}", file.name, style(size).dim())
                    } else {
                        format!("{} {}", file.name, size)
                    }
                }
                _ => file.name.clone(),
            },
        }
    }
}

/// Human-readable byte size
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}
