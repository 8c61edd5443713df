//! Fixtures shared by evaluator and synthesizer tests.

use std::rc::Rc;

use indoc::indoc;
use treepath_core::Node;
use treepath_core::memory::{MemoryNode, MemoryTree};

/// Three top-level windows with a few controls.
///
/// Pre-order slots: Notepad 0, Edit 1, Edit 2, status bar 3, Calculator 4,
/// Buttons 5-8, Tooltip 9, Paint 10.
pub const DESKTOP: &str = indoc! {r#"
    [
        {
            "name": "Untitled - Notepad",
            "params": {"class": "Notepad", "title": "b", "style_": "VISIBLE SYSMENU"},
            "children": [
                {"name": "Edit", "params": {"class": "Edit", "id": "15"}},
                {"name": "Edit", "params": {"class": "Edit", "id": "16", "enabled": "0"}},
                {"name": "msctls_statusbar32", "params": {"id": "1025"}}
            ]
        },
        {
            "name": "Calculator",
            "params": {"class": "CalcFrame", "title": "a"},
            "children": [
                {"name": "Button", "params": {"title": "OK", "enabled": "1", "id": "1"}},
                {"name": "Button", "params": {"title": "OK all", "enabled": "0", "id": "2"}},
                {"name": "Button", "params": {"title": "Cancel", "enabled": "1", "id": "3"}},
                {
                    "name": "Button",
                    "params": {"title": "OKAY", "enabled": "1", "id": "4"},
                    "children": [{"name": "Tooltip"}]
                }
            ]
        },
        {"name": "Paint", "params": {"class": "MSPaintApp", "title": "c"}}
    ]
"#};

pub fn desktop() -> Rc<MemoryTree> {
    MemoryTree::from_json(DESKTOP).expect("fixture snapshot is valid")
}

/// Top-level window of the fixture by name.
pub fn window(tree: &Rc<MemoryTree>, name: &str) -> MemoryNode {
    tree.roots()
        .into_iter()
        .find(|node| node.node_name() == name)
        .unwrap_or_else(|| panic!("no window `{name}` in fixture"))
}

pub fn names(nodes: &[MemoryNode]) -> Vec<String> {
    nodes.iter().map(Node::node_name).collect()
}

/// One line per node: name followed by its parameters.
pub fn render(nodes: &[MemoryNode]) -> String {
    nodes
        .iter()
        .map(|node| {
            let params: Vec<String> = node
                .params()
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect();
            if params.is_empty() {
                node.node_name()
            } else {
                format!("{} [{}]", node.node_name(), params.join(" "))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
