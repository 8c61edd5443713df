//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition is reused by
//! every subcommand that takes it.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Tree snapshot file (positional, `-` for stdin).
pub fn tree_path_arg() -> Arg {
    Arg::new("tree_path")
        .value_name("TREE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("JSON tree snapshot (use \"-\" for stdin)")
}

/// Path expression (positional).
pub fn path_arg() -> Arg {
    Arg::new("path")
        .value_name("PATH")
        .required(true)
        .help("Path expression, e.g. 'Calculator|Button&title=OK'")
}

/// Text to quote (positional).
pub fn text_arg() -> Arg {
    Arg::new("text")
        .value_name("TEXT")
        .required(true)
        .help("Literal text to turn into a pattern")
}

/// Noun used in the ambiguity error (--kind).
pub fn kind_arg() -> Arg {
    Arg::new("kind")
        .long("kind")
        .value_name("KIND")
        .default_value("node")
        .help("What the path is expected to find, used in error messages")
}

/// Candidate parameters for synthesized paths (--params).
pub fn params_arg() -> Arg {
    Arg::new("params")
        .short('p')
        .long("params")
        .value_name("NAMES")
        .value_delimiter(',')
        .help("Parameters tried, in order, to disambiguate siblings (comma-separated)")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print matches as JSON")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for debug logs, -vv for trace logs)")
}

/// Descendant expansion limit (--fuel).
pub fn fuel_arg() -> Arg {
    Arg::new("fuel")
        .long("fuel")
        .value_name("N")
        .default_value("1000000")
        .value_parser(value_parser!(u32))
        .help("Maximum nodes visited by '**' per evaluation (0 for no limit)")
}
