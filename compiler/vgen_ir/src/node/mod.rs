//! Graph nodes and their slots.
//!
//! A node is either an expression (`produces_value`) or a statement. Value
//! slots point at expression nodes, statement slots point at the head of a
//! statement chain, and `next` continues the chain the node belongs to.

use std::borrow::Cow;
use std::fmt;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::NodeId;

/// A literal entered directly on a node.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// The value as text, the way it appears in generated code.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(s) => Cow::Borrowed(s),
            FieldValue::Number(n) => Cow::Owned(format_number(*n)),
            FieldValue::Bool(true) => Cow::Borrowed("TRUE"),
            FieldValue::Bool(false) => Cow::Borrowed("FALSE"),
        }
    }

    /// The value as a number, if it is one or parses as one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse().ok(),
            FieldValue::Bool(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i64> for FieldValue {
    #[allow(
        clippy::cast_precision_loss,
        reason = "field numbers are edited by hand and stay far below 2^53"
    )]
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

/// Format a number in its shortest form: integral values print without a
/// fractional part (`3`, not `3.0`).
#[allow(
    clippy::cast_possible_truncation,
    reason = "guarded by the magnitude check"
)]
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// A named attachment point on a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    pub name: String,
    pub target: Option<NodeId>,
}

/// Ordered list of slots.
///
/// Slot order is the order the editor declared the inputs in, which is the
/// order comments are harvested in. A slot may exist without a target.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlotList {
    slots: Vec<Slot>,
}

impl SlotList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target of a slot, creating the slot if needed.
    pub fn set(&mut self, name: &str, target: Option<NodeId>) {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.name == name) {
            slot.target = target;
        } else {
            self.slots.push(Slot {
                name: name.to_string(),
                target,
            });
        }
    }

    /// Whether the slot exists, connected or not.
    pub fn contains(&self, name: &str) -> bool {
        self.slots.iter().any(|s| s.name == name)
    }

    /// The node connected to a slot.
    pub fn target(&self, name: &str) -> Option<NodeId> {
        self.slots
            .iter()
            .find(|s| s.name == name)
            .and_then(|s| s.target)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    /// Connected targets, in slot order.
    pub fn targets(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.slots.iter().filter_map(|s| s.target)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// One unit of the visual program graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Stable id assigned by the editor. Used in error messages.
    pub key: String,
    /// Tag selecting the handler.
    pub kind: String,
    pub fields: FxHashMap<String, FieldValue>,
    pub values: SlotList,
    pub statements: SlotList,
    pub next: Option<NodeId>,
    pub produces_value: bool,
    pub comment: Option<String>,
    /// Disabled nodes generate nothing.
    pub enabled: bool,
}

impl Node {
    fn new(kind: &str, produces_value: bool) -> Self {
        Node {
            key: String::new(),
            kind: kind.to_string(),
            fields: FxHashMap::default(),
            values: SlotList::new(),
            statements: SlotList::new(),
            next: None,
            produces_value,
            comment: None,
            enabled: true,
        }
    }

    /// A node with an output.
    pub fn expression(kind: &str) -> Self {
        Self::new(kind, true)
    }

    /// A void node that chains through `next`.
    pub fn statement(kind: &str) -> Self {
        Self::new(kind, false)
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn with_field(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Declare a value slot without connecting it.
    #[must_use]
    pub fn with_value_slot(mut self, name: &str) -> Self {
        self.values.set(name, None);
        self
    }

    /// Declare a statement slot without connecting it.
    #[must_use]
    pub fn with_statement_slot(mut self, name: &str) -> Self {
        self.statements.set(name, None);
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Field text, empty when the field is absent.
    pub fn field_text(&self, name: &str) -> Cow<'_, str> {
        self.fields
            .get(name)
            .map_or(Cow::Borrowed(""), FieldValue::as_text)
    }

    /// The attached comment, if any and non-empty.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref().filter(|c| !c.is_empty())
    }

    /// Every node this node links to: value inputs, statement inputs, then `next`.
    pub fn successors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.values
            .targets()
            .chain(self.statements.targets())
            .chain(self.next)
    }
}

#[cfg(test)]
mod tests;
