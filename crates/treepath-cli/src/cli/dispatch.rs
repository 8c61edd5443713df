//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the fields each command uses
//! - `From<*Params>` impls bridge dispatch to command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use treepath_lib::DEFAULT_FUEL;

use super::ColorChoice;
use crate::commands::eval::EvalArgs;
use crate::commands::locate::LocateArgs;
use crate::commands::params::ParamsArgs;
use crate::commands::quote::QuoteArgs;
use crate::commands::single::SingleArgs;
use crate::commands::tree::TreeArgs;

pub struct EvalParams {
    pub tree_path: PathBuf,
    pub path: String,
    pub fuel: u32,
    pub json: bool,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl EvalParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            tree_path: parse_tree_path(m),
            path: parse_path(m),
            fuel: parse_fuel(m),
            json: m.get_flag("json"),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<EvalParams> for EvalArgs {
    fn from(p: EvalParams) -> Self {
        Self {
            tree_path: p.tree_path,
            path: p.path,
            fuel: fuel_limit(p.fuel),
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct SingleParams {
    pub tree_path: PathBuf,
    pub path: String,
    pub kind: String,
    pub fuel: u32,
    pub json: bool,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl SingleParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            tree_path: parse_tree_path(m),
            path: parse_path(m),
            kind: m
                .get_one::<String>("kind")
                .cloned()
                .unwrap_or_else(|| "node".to_string()),
            fuel: parse_fuel(m),
            json: m.get_flag("json"),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<SingleParams> for SingleArgs {
    fn from(p: SingleParams) -> Self {
        Self {
            tree_path: p.tree_path,
            path: p.path,
            kind: p.kind,
            fuel: fuel_limit(p.fuel),
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct LocateParams {
    pub tree_path: PathBuf,
    pub path: String,
    pub params: Vec<String>,
    pub fuel: u32,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl LocateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            tree_path: parse_tree_path(m),
            path: parse_path(m),
            params: m
                .get_many::<String>("params")
                .map(|names| names.filter(|name| !name.is_empty()).cloned().collect())
                .unwrap_or_default(),
            fuel: parse_fuel(m),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<LocateParams> for LocateArgs {
    fn from(p: LocateParams) -> Self {
        Self {
            tree_path: p.tree_path,
            path: p.path,
            params: p.params,
            fuel: fuel_limit(p.fuel),
            color: p.color.should_colorize(),
        }
    }
}

pub struct ParamsParams {
    pub tree_path: PathBuf,
    pub path: String,
    pub fuel: u32,
    pub json: bool,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl ParamsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            tree_path: parse_tree_path(m),
            path: parse_path(m),
            fuel: parse_fuel(m),
            json: m.get_flag("json"),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<ParamsParams> for ParamsArgs {
    fn from(p: ParamsParams) -> Self {
        Self {
            tree_path: p.tree_path,
            path: p.path,
            fuel: fuel_limit(p.fuel),
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct QuoteParams {
    pub text: String,
    pub verbose: u8,
}

impl QuoteParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            text: m.get_one::<String>("text").cloned().unwrap_or_default(),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<QuoteParams> for QuoteArgs {
    fn from(p: QuoteParams) -> Self {
        Self { text: p.text }
    }
}

pub struct TreeParams {
    pub tree_path: PathBuf,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl TreeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            tree_path: parse_tree_path(m),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<TreeParams> for TreeArgs {
    fn from(p: TreeParams) -> Self {
        Self {
            tree_path: p.tree_path,
            color: p.color.should_colorize(),
        }
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_tree_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("tree_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

fn parse_path(m: &ArgMatches) -> String {
    m.get_one::<String>("path").cloned().unwrap_or_default()
}

fn parse_fuel(m: &ArgMatches) -> u32 {
    m.get_one::<u32>("fuel").copied().unwrap_or(DEFAULT_FUEL)
}

/// `--fuel 0` lifts the limit.
fn fuel_limit(fuel: u32) -> Option<u32> {
    (fuel != 0).then_some(fuel)
}
