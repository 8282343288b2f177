//! Handler registry: node kind -> code generator.
//!
//! The registry is the only extension point of the generator. Handlers come
//! in two shapes that must match the node they are used for: expression
//! handlers return text with the precedence of its outermost operator,
//! statement handlers return complete lines. The whole reachable graph is
//! checked against the table before any text is produced.

use std::fmt;
use std::sync::OnceLock;

use rustc_hash::{FxHashMap, FxHashSet};
use vgen_ir::{NodeGraph, NodeId};

use crate::context::GenerationContext;
use crate::{handlers, CodegenError, Precedence};

/// Global registry with the built-in Verilog handlers.
static BUILTIN_REGISTRY: OnceLock<HandlerRegistry> = OnceLock::new();

/// Generates an expression node: text plus the level of its outermost operator.
pub type ExpressionFn = dyn Fn(&mut GenerationContext<'_>, NodeId) -> Result<(String, Precedence), CodegenError>
    + Send
    + Sync;

/// Generates a statement node's own lines, newline-terminated.
pub type StatementFn =
    dyn Fn(&mut GenerationContext<'_>, NodeId) -> Result<String, CodegenError> + Send + Sync;

/// Whether a handler (or node) produces a value or a statement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HandlerShape {
    Expression,
    Statement,
}

impl HandlerShape {
    /// Shape a node needs, from its `produces_value` flag.
    pub fn of_node(produces_value: bool) -> Self {
        if produces_value {
            HandlerShape::Expression
        } else {
            HandlerShape::Statement
        }
    }
}

impl fmt::Display for HandlerShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerShape::Expression => f.write_str("expression"),
            HandlerShape::Statement => f.write_str("statement"),
        }
    }
}

/// A registered code generator.
pub enum Handler {
    Expression(Box<ExpressionFn>),
    Statement(Box<StatementFn>),
}

impl Handler {
    pub fn shape(&self) -> HandlerShape {
        match self {
            Handler::Expression(_) => HandlerShape::Expression,
            Handler::Statement(_) => HandlerShape::Statement,
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler::{:?}", self.shape())
    }
}

/// Table of handlers by node kind.
#[derive(Debug, Default)]
pub struct HandlerRegistry {
    handlers: FxHashMap<String, Handler>,
}

impl HandlerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every built-in Verilog handler.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        handlers::register_builtins(&mut registry);
        registry
    }

    /// Register (or replace) an expression handler.
    pub fn register_expression<F>(&mut self, kind: &str, handler: F)
    where
        F: Fn(&mut GenerationContext<'_>, NodeId) -> Result<(String, Precedence), CodegenError>
            + Send
            + Sync
            + 'static,
    {
        self.handlers
            .insert(kind.to_string(), Handler::Expression(Box::new(handler)));
    }

    /// Register (or replace) a statement handler.
    pub fn register_statement<F>(&mut self, kind: &str, handler: F)
    where
        F: Fn(&mut GenerationContext<'_>, NodeId) -> Result<String, CodegenError>
            + Send
            + Sync
            + 'static,
    {
        self.handlers
            .insert(kind.to_string(), Handler::Statement(Box::new(handler)));
    }

    pub fn get(&self, kind: &str) -> Option<&Handler> {
        self.handlers.get(kind)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.handlers.contains_key(kind)
    }

    /// Registered kinds, in no particular order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> + '_ {
        self.handlers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Check every node reachable from `roots` against the table.
    ///
    /// Disabled nodes generate nothing, so only their `next` chain is followed.
    /// The graph must already be structurally valid.
    pub fn check(&self, graph: &NodeGraph, roots: &[NodeId]) -> Result<(), CodegenError> {
        let mut seen = FxHashSet::default();
        let mut stack: Vec<NodeId> = roots.iter().rev().copied().collect();

        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            let Some(node) = graph.get(id) else {
                continue;
            };

            if !node.enabled {
                stack.extend(node.next);
                continue;
            }

            let found = HandlerShape::of_node(node.produces_value);
            match self.handlers.get(&node.kind) {
                None => {
                    return Err(CodegenError::UnsupportedKind {
                        node: graph.key_of(id),
                        kind: node.kind.clone(),
                    });
                }
                Some(handler) if handler.shape() != found => {
                    return Err(CodegenError::HandlerShapeMismatch {
                        node: graph.key_of(id),
                        kind: node.kind.clone(),
                        registered: handler.shape(),
                        found,
                    });
                }
                Some(_) => {}
            }

            let successors: Vec<NodeId> = node.successors().collect();
            stack.extend(successors.into_iter().rev());
        }
        Ok(())
    }
}

/// The shared registry of built-in handlers.
pub fn builtin_registry() -> &'static HandlerRegistry {
    BUILTIN_REGISTRY.get_or_init(HandlerRegistry::with_builtins)
}

#[cfg(test)]
mod tests;
