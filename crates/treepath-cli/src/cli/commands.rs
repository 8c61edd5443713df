//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`.

use clap::Command;

use super::args::*;

/// Flags every command understands.
fn with_common_args(cmd: Command) -> Command {
    cmd.arg(verbose_arg()).arg(color_arg())
}

/// Flags for commands that evaluate a path.
fn with_eval_args(cmd: Command) -> Command {
    with_common_args(cmd.arg(tree_path_arg()).arg(path_arg()).arg(fuel_arg()))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("treepath")
        .about("Path expressions for addressing nodes in labelled trees")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(eval_command())
        .subcommand(single_command())
        .subcommand(locate_command())
        .subcommand(params_command())
        .subcommand(quote_command())
        .subcommand(tree_command())
}

/// Print every node a path selects.
pub fn eval_command() -> Command {
    let cmd = Command::new("eval")
        .about("Print every node a path selects")
        .after_help(
            r#"EXAMPLES:
  treepath eval desktop.json 'Calculator|Button'
  treepath eval desktop.json '**|Edit&id={#10..20}'
  treepath eval desktop.json '*|.!title|.#1' --json
  cat desktop.json | treepath eval - 'Notepad*'"#,
        )
        .arg(json_arg());

    with_eval_args(cmd)
}

/// Print the only node a path selects.
pub fn single_command() -> Command {
    let cmd = Command::new("single")
        .about("Print the only node a path selects (fails when several match)")
        .after_help(
            r#"EXAMPLES:
  treepath single desktop.json 'Calculator|Button&title=OK'
  treepath single desktop.json 'Calculator|Button' --kind button"#,
        )
        .arg(kind_arg())
        .arg(json_arg());

    with_eval_args(cmd)
}

/// Synthesize a unique path for every node a path selects.
pub fn locate_command() -> Command {
    let cmd = Command::new("locate")
        .about("Print the shortest unique path to every node a path selects")
        .after_help(
            r#"EXAMPLES:
  treepath locate desktop.json '**|Tooltip'
  treepath locate desktop.json '**|Edit' --params class,id"#,
        )
        .arg(params_arg());

    with_eval_args(cmd)
}

/// List parameter names and values of selected nodes.
pub fn params_command() -> Command {
    let cmd = Command::new("params")
        .about("List parameters (including expanded flags) of every node a path selects")
        .after_help(
            r#"EXAMPLES:
  treepath params desktop.json 'Untitled - Notepad'
  treepath params desktop.json '*' --json"#,
        )
        .arg(json_arg());

    with_eval_args(cmd)
}

/// Quote literal text as a pattern.
pub fn quote_command() -> Command {
    let cmd = Command::new("quote")
        .about("Escape text so it matches literally in a path")
        .after_help(
            r#"EXAMPLES:
  treepath quote 'Save *as*'        # Save ^*as^*"#,
        )
        .arg(text_arg());

    with_common_args(cmd)
}

/// Print a snapshot as an indented tree.
pub fn tree_command() -> Command {
    let cmd = Command::new("tree")
        .about("Print a tree snapshot")
        .after_help(
            r#"EXAMPLES:
  treepath tree desktop.json
  treepath tree - < desktop.json"#,
        )
        .arg(tree_path_arg());

    with_common_args(cmd)
}
