//! The node arena.
//!
//! `NodeGraph` owns every node of one program plus the workspace variable
//! list. Nodes are appended and never removed, so a `NodeId` stays valid for
//! the lifetime of the graph.

use std::ops::Index;

use crate::{Node, NodeId};

/// A workspace variable: stable id plus the name the user gave it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    pub id: String,
    pub name: String,
}

/// Arena of nodes addressed by [`NodeId`].
#[derive(Clone, Debug, Default)]
pub struct NodeGraph {
    nodes: Vec<Node>,
    variables: Vec<Variable>,
}

impl NodeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, returning its handle.
    ///
    /// A node without a key gets `n<index>`.
    pub fn add(&mut self, mut node: Node) -> NodeId {
        let id = NodeId::new(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        if node.key.is_empty() {
            node.key = format!("n{}", id.raw());
        }
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Whether `id` refers to a node of this graph.
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes with their handles, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(u32::try_from(i).unwrap_or(u32::MAX)), n))
    }

    /// Find a node by its editor key.
    pub fn find(&self, key: &str) -> Option<NodeId> {
        self.iter().find(|(_, n)| n.key == key).map(|(id, _)| id)
    }

    /// Key of a node for diagnostics; falls back to the raw index.
    pub fn key_of(&self, id: NodeId) -> String {
        self.get(id)
            .map_or_else(|| format!("#{}", id.raw()), |n| n.key.clone())
    }

    pub fn add_variable(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.variables.push(Variable {
            id: id.into(),
            name: name.into(),
        });
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Display name of a variable.
    pub fn variable_name(&self, id: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|v| v.id == id)
            .map(|v| v.name.as_str())
    }

    /// Connect `child` to a value slot of `parent`.
    pub fn connect_value(&mut self, parent: NodeId, slot: &str, child: NodeId) {
        if let Some(node) = self.get_mut(parent) {
            node.values.set(slot, Some(child));
        }
    }

    /// Connect the head of a statement chain to a statement slot of `parent`.
    pub fn connect_statement(&mut self, parent: NodeId, slot: &str, head: NodeId) {
        if let Some(node) = self.get_mut(parent) {
            node.statements.set(slot, Some(head));
        }
    }

    pub fn set_next(&mut self, from: NodeId, to: NodeId) {
        if let Some(node) = self.get_mut(from) {
            node.next = Some(to);
        }
    }

    /// Link `ids` into one statement chain, in order.
    pub fn chain(&mut self, ids: &[NodeId]) {
        for pair in ids.windows(2) {
            self.set_next(pair[0], pair[1]);
        }
    }

    /// Nodes not referenced by any other node, in insertion order.
    ///
    /// These are the natural entry points of a pass.
    pub fn default_roots(&self) -> Vec<NodeId> {
        let mut referenced = vec![false; self.nodes.len()];
        for node in &self.nodes {
            for target in node.successors() {
                if let Some(flag) = referenced.get_mut(target.index()) {
                    *flag = true;
                }
            }
        }
        self.iter()
            .filter(|(id, _)| !referenced[id.index()])
            .map(|(id, _)| id)
            .collect()
    }
}

impl Index<NodeId> for NodeGraph {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}
