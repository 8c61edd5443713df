//! Shared logic for commands that load a snapshot and evaluate a path.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::rc::Rc;

use tracing::debug;
use treepath_core::memory::{MemoryNode, MemoryTree};
use treepath_lib::Evaluator;

/// Load a tree snapshot from a file, or stdin for `-`.
pub fn load_tree(path: &Path) -> Result<Rc<MemoryTree>, String> {
    let json = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read stdin: {}", e))?;
        buf
    } else {
        fs::read_to_string(path)
            .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?
    };

    let tree = MemoryTree::from_json(&json).map_err(|e| format!("{}: {}", path.display(), e))?;
    debug!(path = %path.display(), nodes = tree.len(), "snapshot loaded");
    Ok(tree)
}

/// Load a snapshot or exit with its error.
pub fn load_tree_or_exit(path: &Path) -> Rc<MemoryTree> {
    load_tree(path).unwrap_or_else(|msg| exit_with_error(msg))
}

/// Evaluate `path` from the snapshot's top-level nodes or exit with its error.
pub fn evaluate_or_exit(tree: &Rc<MemoryTree>, path: &str, fuel: Option<u32>) -> Vec<MemoryNode> {
    Evaluator::new()
        .with_fuel(fuel)
        .evaluate(path, [tree.desktop()])
        .unwrap_or_else(|e| exit_with_error(e))
}

pub fn exit_with_error(msg: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", msg);
    std::process::exit(1);
}
