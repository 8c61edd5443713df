#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Node capability for treepath path expressions.
//!
//! Two layers:
//! - **Capability layer**: the [`Node`] trait and the [`Root`] frontier entry that every
//!   tree provider plugs into. The query engine is written against these only.
//! - **Provider layer**: [`memory::MemoryTree`], an arena-backed tree used for JSON
//!   snapshots and tests.

use std::hash::Hash;

mod colors;
pub mod memory;
mod params;

#[cfg(test)]
mod lib_tests;

pub use colors::Colors;
pub use params::all_parameter_names;

// ============================================================================
// Node Capability
// ============================================================================

/// An addressable element of an external tree.
///
/// Equality and hashing must follow the identity of the external resource the node
/// wraps (a window handle, an accessible object), not its current content: two
/// wrappers built for the same resource compare equal.
pub trait Node: Clone + Eq + Hash {
    /// The default match key.
    fn node_name(&self) -> String;

    /// Names of the parameters this node exposes.
    fn parameter_names(&self) -> Vec<String>;

    /// Value of a parameter, looked up case-insensitively.
    ///
    /// Never fails: unknown names resolve to `""`, and attributes that exist but
    /// cannot be read resolve to a provider-chosen sentinel such as `"?"`.
    fn parameter(&self, name: &str) -> String;

    /// Children in document order.
    fn children(&self) -> Vec<Self>;

    /// The enclosing root, or `None` for a top-level node.
    fn parent(&self) -> Option<Root<Self>>;
}

// ============================================================================
// Roots
// ============================================================================

/// A starting point for a query: either a node or a synthetic parentless container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Root<N> {
    Node(N),
    /// Synthetic root with a fixed child list (e.g. "all top-level windows").
    Detached(Vec<N>),
}

impl<N: Node> Root<N> {
    pub fn children(&self) -> Vec<N> {
        match self {
            Root::Node(node) => node.children(),
            Root::Detached(children) => children.clone(),
        }
    }

    pub fn parent(&self) -> Option<Root<N>> {
        match self {
            Root::Node(node) => node.parent(),
            Root::Detached(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&N> {
        match self {
            Root::Node(node) => Some(node),
            Root::Detached(_) => None,
        }
    }

    /// Wrap this root so that its only child is itself.
    ///
    /// Lets a filter over children act on the root. Synthetic roots have no
    /// node to expose and become empty.
    pub fn into_singleton(self) -> Root<N> {
        match self {
            Root::Node(node) => Root::Detached(vec![node]),
            Root::Detached(_) => Root::Detached(Vec::new()),
        }
    }
}

impl<N: Node> From<N> for Root<N> {
    fn from(node: N) -> Self {
        Root::Node(node)
    }
}
