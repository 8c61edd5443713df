use std::path::PathBuf;

use treepath_core::Colors;
use treepath_lib::Evaluator;

use super::output::{NodeJson, format_node, to_json};
use super::run_common::{exit_with_error, load_tree_or_exit};

pub struct SingleArgs {
    pub tree_path: PathBuf,
    pub path: String,
    pub kind: String,
    pub fuel: Option<u32>,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: SingleArgs) {
    let tree = load_tree_or_exit(&args.tree_path);
    let found = Evaluator::new()
        .with_fuel(args.fuel)
        .evaluate_single(tree.desktop(), &args.path, &args.kind)
        .unwrap_or_else(|e| exit_with_error(e));

    let Some(node) = found else {
        eprintln!("no {} matches `{}`", args.kind, args.path);
        return;
    };

    if args.json {
        let json = to_json(&[NodeJson::stored(&node)]).unwrap_or_else(|e| exit_with_error(e));
        println!("{}", json);
        return;
    }

    println!("{}", format_node(&node, Colors::new(args.color)));
}
