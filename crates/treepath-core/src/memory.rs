//! Arena-backed tree provider.
//!
//! Holds a captured tree (from a JSON snapshot or built by hand) so path
//! expressions can be evaluated without a live desktop. A node may be linked
//! under more than one parent, which models providers whose hierarchies
//! reconverge.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use indexmap::IndexMap;

use crate::{Node, Root};

/// Errors raised while loading a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("invalid tree snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Node as it appears in a JSON snapshot.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawNode {
    pub name: String,
    #[serde(default)]
    pub params: IndexMap<String, String>,
    #[serde(default)]
    pub children: Vec<RawNode>,
}

/// A snapshot is either one node or a list of top-level nodes.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(untagged)]
enum RawSnapshot {
    Many(Vec<RawNode>),
    One(RawNode),
}

#[derive(Debug, Default)]
struct NodeData {
    name: String,
    params: IndexMap<String, String>,
    children: Vec<usize>,
    parent: Option<usize>,
}

/// Handle of a node inside a [`MemoryTreeBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Immutable tree of named nodes with string parameters.
#[derive(Debug, Default)]
pub struct MemoryTree {
    nodes: Vec<NodeData>,
    roots: Vec<usize>,
}

impl MemoryTree {
    pub fn builder() -> MemoryTreeBuilder {
        MemoryTreeBuilder::default()
    }

    /// Load a tree from its JSON snapshot.
    pub fn from_json(json: &str) -> Result<Rc<MemoryTree>, SnapshotError> {
        let snapshot: RawSnapshot = serde_json::from_str(json)?;
        let raw = match snapshot {
            RawSnapshot::Many(nodes) => nodes,
            RawSnapshot::One(node) => vec![node],
        };
        Ok(Self::from_raw(&raw))
    }

    pub fn from_raw(raw: &[RawNode]) -> Rc<MemoryTree> {
        fn insert(builder: &mut MemoryTreeBuilder, raw: &RawNode) -> NodeId {
            let id = builder.node(&raw.name);
            for (key, value) in &raw.params {
                builder.param(id, key, value);
            }
            for child in &raw.children {
                let child = insert(builder, child);
                builder.child(id, child);
            }
            id
        }

        let mut builder = Self::builder();
        for node in raw {
            insert(&mut builder, node);
        }
        builder.build()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level nodes (those never linked under a parent).
    pub fn roots(self: &Rc<Self>) -> Vec<MemoryNode> {
        self.roots.iter().map(|&id| self.handle(id)).collect()
    }

    /// Synthetic root whose children are the top-level nodes.
    pub fn desktop(self: &Rc<Self>) -> Root<MemoryNode> {
        Root::Detached(self.roots())
    }

    /// Handle for a node created through the builder.
    pub fn node(self: &Rc<Self>, id: NodeId) -> MemoryNode {
        self.handle(id.0)
    }

    fn handle(self: &Rc<Self>, id: usize) -> MemoryNode {
        MemoryNode {
            tree: Rc::clone(self),
            id,
        }
    }
}

/// Incremental construction of a [`MemoryTree`].
#[derive(Debug, Default)]
pub struct MemoryTreeBuilder {
    nodes: Vec<NodeData>,
}

impl MemoryTreeBuilder {
    /// Create a detached node.
    pub fn node(&mut self, name: impl Into<String>) -> NodeId {
        self.nodes.push(NodeData {
            name: name.into(),
            ..NodeData::default()
        });
        NodeId(self.nodes.len() - 1)
    }

    pub fn param(
        &mut self,
        id: NodeId,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.nodes[id.0].params.insert(key.into(), value.into());
        self
    }

    /// Append `child` to `parent`'s children.
    ///
    /// The first link decides what `parent()` reports; later links only add
    /// another path to the same node.
    pub fn child(&mut self, parent: NodeId, child: NodeId) -> &mut Self {
        self.nodes[parent.0].children.push(child.0);
        let data = &mut self.nodes[child.0];
        if data.parent.is_none() {
            data.parent = Some(parent.0);
        }
        self
    }

    pub fn build(self) -> Rc<MemoryTree> {
        let roots = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, data)| data.parent.is_none())
            .map(|(id, _)| id)
            .collect();
        Rc::new(MemoryTree {
            nodes: self.nodes,
            roots,
        })
    }
}

/// A node of a [`MemoryTree`]. Identity is the tree plus the arena slot.
#[derive(Clone)]
pub struct MemoryNode {
    tree: Rc<MemoryTree>,
    id: usize,
}

impl MemoryNode {
    pub fn id(&self) -> NodeId {
        NodeId(self.id)
    }

    /// Parameters as stored, in insertion order.
    pub fn params(&self) -> &IndexMap<String, String> {
        &self.data().params
    }

    fn data(&self) -> &NodeData {
        &self.tree.nodes[self.id]
    }

    /// Resolve `prefix_flag` against the longest matching `prefix_` flag list.
    fn flag(&self, name: &str) -> Option<String> {
        let (key, value) = self
            .data()
            .params
            .iter()
            .filter(|(key, _)| {
                key.ends_with('_')
                    && name.len() > key.len()
                    && name
                        .get(..key.len())
                        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(key))
            })
            .max_by_key(|(key, _)| key.len())?;

        let flag = &name[key.len()..];
        let set = value.split(' ').any(|f| f.eq_ignore_ascii_case(flag));
        Some(if set { "1" } else { "0" }.to_string())
    }
}

impl PartialEq for MemoryNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tree, &other.tree) && self.id == other.id
    }
}

impl Eq for MemoryNode {}

impl Hash for MemoryNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.tree).hash(state);
        self.id.hash(state);
    }
}

impl fmt::Debug for MemoryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.data().name, self.id)
    }
}

impl Node for MemoryNode {
    fn node_name(&self) -> String {
        self.data().name.clone()
    }

    fn parameter_names(&self) -> Vec<String> {
        self.data().params.keys().cloned().collect()
    }

    fn parameter(&self, name: &str) -> String {
        let params = &self.data().params;
        params
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.clone())
            .or_else(|| self.flag(name))
            .unwrap_or_default()
    }

    fn children(&self) -> Vec<Self> {
        self.data()
            .children
            .iter()
            .map(|&id| self.tree.handle(id))
            .collect()
    }

    fn parent(&self) -> Option<Root<Self>> {
        self.data()
            .parent
            .map(|id| Root::Node(self.tree.handle(id)))
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod memory_tests;
