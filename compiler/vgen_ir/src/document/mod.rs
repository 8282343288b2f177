//! JSON wire format for graphs handed over by the editor.
//!
//! ```json
//! {
//!   "variables": [{ "id": "v1", "name": "count" }],
//!   "nodes": [
//!     { "id": "a", "kind": "module_dec", "fields": { "modName": "top" }, "next": "b" },
//!     { "id": "b", "kind": "end_module" }
//!   ],
//!   "roots": ["a"]
//! }
//! ```
//!
//! Nodes refer to each other by editor id. Loading resolves those ids to
//! arena handles; it does not run [`validate`](crate::validate).

use std::fmt;

use rustc_hash::FxHashMap;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::{FieldValue, GraphError, Node, NodeGraph, NodeId};

/// Top-level document.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDocument {
    #[serde(default)]
    pub variables: Vec<VariableDocument>,
    pub nodes: Vec<NodeDocument>,
    /// Entry points; unreferenced nodes when absent.
    #[serde(default)]
    pub roots: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariableDocument {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeDocument {
    pub id: String,
    pub kind: String,
    #[serde(default)]
    pub fields: FxHashMap<String, FieldValue>,
    #[serde(default)]
    pub values: OrderedSlots,
    #[serde(default)]
    pub statements: OrderedSlots,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub output: bool,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

/// A JSON object of `slot -> node id | null`, in document order.
#[derive(Debug, Default)]
pub struct OrderedSlots(pub Vec<(String, Option<String>)>);

impl<'de> Deserialize<'de> for OrderedSlots {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SlotsVisitor;

        impl<'de> Visitor<'de> for SlotsVisitor {
            type Value = OrderedSlots;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from slot name to node id or null")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut slots = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, target)) = map.next_entry::<String, Option<String>>()? {
                    slots.push((name, target));
                }
                Ok(OrderedSlots(slots))
            }
        }

        deserializer.deserialize_map(SlotsVisitor)
    }
}

/// A graph loaded from a document, with its entry points.
#[derive(Debug)]
pub struct LoadedGraph {
    pub graph: NodeGraph,
    pub roots: Vec<NodeId>,
}

/// Parse a JSON document and resolve it into an arena.
pub fn parse_document(text: &str) -> Result<LoadedGraph, GraphError> {
    let document: GraphDocument =
        serde_json::from_str(text).map_err(|e| GraphError::Parse {
            message: e.to_string(),
        })?;
    document.into_graph()
}

impl GraphDocument {
    /// Resolve editor ids into arena handles.
    pub fn into_graph(self) -> Result<LoadedGraph, GraphError> {
        let mut ids: FxHashMap<String, NodeId> = FxHashMap::default();
        let mut graph = NodeGraph::new();

        // First pass allocates handles so links can point forward.
        for doc in &self.nodes {
            let mut node = if doc.output {
                Node::expression(&doc.kind)
            } else {
                Node::statement(&doc.kind)
            };
            node.key.clone_from(&doc.id);
            let id = graph.add(node);
            if ids.insert(doc.id.clone(), id).is_some() {
                return Err(GraphError::DuplicateNodeId {
                    node: doc.id.clone(),
                });
            }
        }

        let resolve = |owner: &str, slot: &str, target: &str| {
            ids.get(target)
                .copied()
                .ok_or_else(|| GraphError::DanglingReference {
                    node: owner.to_string(),
                    slot: slot.to_string(),
                    target: target.to_string(),
                })
        };

        for doc in self.nodes {
            let id = resolve(&doc.id, "id", &doc.id)?;
            let mut values = Vec::with_capacity(doc.values.0.len());
            for (slot, target) in doc.values.0 {
                let target = target.map(|t| resolve(&doc.id, &slot, &t)).transpose()?;
                values.push((slot, target));
            }
            let mut statements = Vec::with_capacity(doc.statements.0.len());
            for (slot, target) in doc.statements.0 {
                let target = target.map(|t| resolve(&doc.id, &slot, &t)).transpose()?;
                statements.push((slot, target));
            }
            let next = doc
                .next
                .map(|t| resolve(&doc.id, "next", &t))
                .transpose()?;

            let Some(node) = graph.get_mut(id) else {
                continue;
            };
            node.fields = doc.fields;
            for (slot, target) in values {
                node.values.set(&slot, target);
            }
            for (slot, target) in statements {
                node.statements.set(&slot, target);
            }
            node.next = next;
            node.comment = doc.comment;
            node.enabled = doc.enabled;
        }

        for variable in self.variables {
            graph.add_variable(variable.id, variable.name);
        }

        let roots = match self.roots {
            Some(keys) => keys
                .iter()
                .map(|key| resolve("roots", "roots", key))
                .collect::<Result<Vec<_>, _>>()?,
            None => graph.default_roots(),
        };

        Ok(LoadedGraph { graph, roots })
    }
}
