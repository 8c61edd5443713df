use std::path::PathBuf;

use treepath_core::Colors;

use super::output::format_tree;
use super::run_common::load_tree_or_exit;

pub struct TreeArgs {
    pub tree_path: PathBuf,
    pub color: bool,
}

pub fn run(args: TreeArgs) {
    let tree = load_tree_or_exit(&args.tree_path);
    print!("{}", format_tree(&tree, Colors::new(args.color)));
}
