pub mod eval;
pub mod locate;
pub mod output;
pub mod params;
pub mod quote;
pub mod run_common;
pub mod single;
pub mod tree;
