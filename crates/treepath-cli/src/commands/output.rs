//! Text and JSON rendering of nodes.

use std::rc::Rc;

use indexmap::IndexMap;
use serde::Serialize;
use treepath_core::memory::{MemoryNode, MemoryTree};
use treepath_core::{Colors, Node, all_parameter_names};

/// JSON shape of a node.
#[derive(Debug, Serialize)]
pub struct NodeJson {
    pub name: String,
    pub params: IndexMap<String, String>,
}

impl NodeJson {
    /// Stored parameters only.
    pub fn stored(node: &MemoryNode) -> Self {
        Self {
            name: node.node_name(),
            params: node.params().clone(),
        }
    }

    /// Every parameter name the node answers to, flags expanded.
    pub fn expanded(node: &MemoryNode) -> Self {
        let params = all_parameter_names(node)
            .into_iter()
            .map(|name| {
                let value = node.parameter(&name);
                (name, value)
            })
            .collect();
        Self {
            name: node.node_name(),
            params,
        }
    }
}

pub fn to_json(nodes: &[NodeJson]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(nodes)
}

/// `name  key=value ...` on one line.
pub fn format_node(node: &MemoryNode, colors: Colors) -> String {
    let mut line = colors.name(&node.node_name());
    if !node.params().is_empty() {
        line.push(' ');
    }
    for (key, value) in node.params() {
        line.push(' ');
        line.push_str(&colors.param(key, value));
    }
    line
}

pub fn format_nodes(nodes: &[MemoryNode], colors: Colors) -> String {
    nodes.iter().map(|node| format_node(node, colors) + "\n").collect()
}

/// Node name followed by one indented `key=value` line per parameter name.
pub fn format_params(node: &MemoryNode, colors: Colors) -> String {
    let mut out = colors.name(&node.node_name());
    out.push('\n');
    for name in all_parameter_names(node) {
        let value = node.parameter(&name);
        out.push_str("  ");
        out.push_str(&colors.param(&name, &value));
        out.push('\n');
    }
    out
}

/// Whole snapshot, two spaces of indentation per level.
pub fn format_tree(tree: &Rc<MemoryTree>, colors: Colors) -> String {
    let mut out = String::new();
    let mut stack: Vec<(MemoryNode, usize)> =
        tree.roots().into_iter().rev().map(|node| (node, 0)).collect();

    while let Some((node, depth)) = stack.pop() {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&format_node(&node, colors));
        out.push('\n');
        stack.extend(node.children().into_iter().rev().map(|child| (child, depth + 1)));
    }
    out
}
