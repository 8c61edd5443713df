use std::path::PathBuf;

use treepath_core::Colors;

use super::output::{NodeJson, format_params, to_json};
use super::run_common::{evaluate_or_exit, exit_with_error, load_tree_or_exit};

pub struct ParamsArgs {
    pub tree_path: PathBuf,
    pub path: String,
    pub fuel: Option<u32>,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: ParamsArgs) {
    let tree = load_tree_or_exit(&args.tree_path);
    let found = evaluate_or_exit(&tree, &args.path, args.fuel);

    if args.json {
        let nodes: Vec<NodeJson> = found.iter().map(NodeJson::expanded).collect();
        let json = to_json(&nodes).unwrap_or_else(|e| exit_with_error(e));
        println!("{}", json);
        return;
    }

    let colors = Colors::new(args.color);
    for node in &found {
        print!("{}", format_params(node, colors));
    }
}
