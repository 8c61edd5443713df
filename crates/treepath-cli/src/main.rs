#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod cli;
mod commands;

use cli::{
    EvalParams, LocateParams, ParamsParams, QuoteParams, SingleParams, TreeParams, build_cli,
    init_logging,
};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("eval", m)) => {
            let params = EvalParams::from_matches(m);
            init_logging(params.verbose);
            commands::eval::run(params.into());
        }
        Some(("single", m)) => {
            let params = SingleParams::from_matches(m);
            init_logging(params.verbose);
            commands::single::run(params.into());
        }
        Some(("locate", m)) => {
            let params = LocateParams::from_matches(m);
            init_logging(params.verbose);
            commands::locate::run(params.into());
        }
        Some(("params", m)) => {
            let params = ParamsParams::from_matches(m);
            init_logging(params.verbose);
            commands::params::run(params.into());
        }
        Some(("quote", m)) => {
            let params = QuoteParams::from_matches(m);
            init_logging(params.verbose);
            commands::quote::run(params.into());
        }
        Some(("tree", m)) => {
            let params = TreeParams::from_matches(m);
            init_logging(params.verbose);
            commands::tree::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
