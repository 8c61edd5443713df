use std::path::PathBuf;

use tracing::debug;
use treepath_core::Colors;
use treepath_lib::find_best_path;

use super::run_common::{evaluate_or_exit, exit_with_error, load_tree_or_exit};

pub struct LocateArgs {
    pub tree_path: PathBuf,
    pub path: String,
    pub params: Vec<String>,
    pub fuel: Option<u32>,
    pub color: bool,
}

pub fn run(args: LocateArgs) {
    let tree = load_tree_or_exit(&args.tree_path);
    let found = evaluate_or_exit(&tree, &args.path, args.fuel);
    let colors = Colors::new(args.color);
    let desktop = tree.desktop();

    for node in &found {
        debug!(node = ?node, "locating");
        let located = find_best_path(&desktop, node, args.params.as_slice())
            .unwrap_or_else(|e| exit_with_error(format!("{:?}: {}", node, e)));
        println!("{}", colors.name(&located));
    }
}
