//! treepath: path expressions for addressing nodes in labelled trees.
//!
//! # Example
//!
//! ```
//! use treepath_core::memory::MemoryTree;
//! use treepath_lib::{Root, evaluate, find_best_expression};
//!
//! let tree = MemoryTree::from_json(r#"[
//!     {"name": "Notepad", "children": [
//!         {"name": "Edit", "params": {"id": "15"}},
//!         {"name": "Edit", "params": {"id": "16"}}
//!     ]}
//! ]"#)
//! .expect("valid snapshot");
//!
//! let edits = evaluate("Notepad|Edit", [tree.desktop()]).expect("valid path");
//! assert_eq!(edits.len(), 2);
//!
//! let notepad = Root::Node(tree.roots()[0].clone());
//! let expr = find_best_expression(&notepad, &edits[1], &["id"]).expect("unique");
//! assert_eq!(expr, "Edit&id=16");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod eval;
pub mod pattern;
pub mod synth;

#[cfg(test)]
mod test_utils;

pub use eval::{DEFAULT_FUEL, Evaluator, evaluate, evaluate_single};
pub use pattern::{Pattern, quote, unquote};
pub use synth::{find_best_expression, find_best_path};

pub use treepath_core::{Node, Root, all_parameter_names};

/// Errors raised while compiling or evaluating path expressions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Malformed path or pattern text.
    #[error("syntax error in `{text}` at offset {offset}: {message}")]
    Syntax {
        text: String,
        offset: usize,
        message: String,
    },

    /// The matching engine rejected a pattern (usually a verbatim `{...}` group).
    #[error("invalid pattern `{pattern}`: {message}")]
    PatternCompile { pattern: String, message: String },

    /// A single-result lookup matched several nodes.
    #[error("more than one {kind} matches `{path}` ({count} found)")]
    Ambiguous {
        kind: String,
        path: String,
        count: usize,
    },

    #[error("ambiguous nodes detected")]
    Disambiguation,

    #[error("node `{0}` is not a child of the given root")]
    NotAChild(String),

    /// Descendant expansion visited more nodes than the evaluator allows.
    #[error("execution limit exceeded")]
    ExecFuelExhausted,
}

impl Error {
    pub(crate) fn syntax(text: &str, offset: usize, message: impl Into<String>) -> Self {
        Error::Syntax {
            text: text.to_string(),
            offset,
            message: message.into(),
        }
    }
}

/// Result type for path operations.
pub type Result<T> = std::result::Result<T, Error>;
