//! Per-pass generation state and the traversal itself.
//!
//! A `GenerationContext` borrows the graph, the handler table and the
//! configuration, and owns everything a pass mutates: the name allocator and
//! the declaration registry. Handlers receive the context and pull their
//! inputs through it, so nesting, parenthesization, comment harvesting and
//! indentation are decided here and nowhere else.

use vgen_ir::{validate, Node, NodeGraph, NodeId};
use vgen_stack::ensure_sufficient_stack;

use crate::comments::{comment_block, prefix_lines, tidy};
use crate::names::{NameAllocator, NameSpace};
use crate::precedence::parenthesize;
use crate::registry::{Handler, HandlerRegistry, HandlerShape};
use crate::{CodegenConfig, CodegenError, DeclarationRegistry, Precedence};

/// State of one generation pass.
pub struct GenerationContext<'a> {
    graph: &'a NodeGraph,
    registry: &'a HandlerRegistry,
    config: &'a CodegenConfig,
    names: NameAllocator,
    declarations: DeclarationRegistry,
    /// Counter behind `fresh_name` identities.
    fresh_counter: u32,
}

impl<'a> GenerationContext<'a> {
    pub fn new(
        graph: &'a NodeGraph,
        registry: &'a HandlerRegistry,
        config: &'a CodegenConfig,
    ) -> Self {
        GenerationContext {
            graph,
            registry,
            config,
            names: NameAllocator::with_reserved(config.reserved_words.iter().cloned()),
            declarations: DeclarationRegistry::new(),
            fresh_counter: 0,
        }
    }

    #[inline]
    pub fn graph(&self) -> &'a NodeGraph {
        self.graph
    }

    #[inline]
    pub fn config(&self) -> &'a CodegenConfig {
        self.config
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &'a Node {
        &self.graph[id]
    }

    /// Field text of a node, empty when absent.
    pub fn field(&self, id: NodeId, name: &str) -> String {
        self.graph[id].field_text(name).into_owned()
    }

    pub fn names(&self) -> &NameAllocator {
        &self.names
    }

    pub fn declarations(&self) -> &DeclarationRegistry {
        &self.declarations
    }

    /// Generate a full pass over `roots`.
    ///
    /// Validates the graph, checks every reachable kind against the handler
    /// table, then emits the roots in order. Calling it again with the same
    /// roots yields the same text.
    #[tracing::instrument(level = "debug", skip_all, fields(roots = roots.len()))]
    pub fn generate(&mut self, roots: &[NodeId]) -> Result<String, CodegenError> {
        validate(self.graph, roots)?;
        self.registry.check(self.graph, roots)?;

        self.names.reset();
        self.declarations.reset();
        self.fresh_counter = 0;
        for var in self.graph.variables() {
            self.names.allocate(NameSpace::Variable, &var.id, &var.name);
        }

        let mut parts = Vec::with_capacity(roots.len());
        for &root in roots {
            let text = self.root(root)?;
            if !text.is_empty() {
                parts.push(text);
            }
        }

        let code = self.finish(&parts.join("\n"));
        Ok(tidy(&code))
    }

    fn root(&mut self, id: NodeId) -> Result<String, CodegenError> {
        let node = self.node(id);
        if !node.produces_value {
            return self.statement_chain(id);
        }
        if !node.enabled {
            return Ok(String::new());
        }
        match self.expression(id)? {
            Some((text, _)) if !text.is_empty() => {
                let mut out = self.comments_for(id);
                out.push_str(&text);
                out.push_str(";\n");
                Ok(out)
            }
            _ => Ok(String::new()),
        }
    }

    /// Prepend the collected declarations to `body`.
    pub fn finish(&self, body: &str) -> String {
        if self.declarations.is_empty() {
            return body.to_string();
        }
        let mut out = self.declarations.collect().join("\n\n");
        out.push_str("\n\n\n");
        out.push_str(body);
        out
    }

    /// Run the expression handler of `id`.
    ///
    /// A disabled node yields `None`, the same as an unconnected input.
    pub fn expression(&mut self, id: NodeId) -> Result<Option<(String, Precedence)>, CodegenError> {
        let node = self.node(id);
        if !node.enabled {
            return Ok(None);
        }
        let registry = self.registry;
        match registry.get(&node.kind) {
            Some(Handler::Expression(handler)) => {
                tracing::trace!(kind = %node.kind, node = %node.key, "expression");
                let generated = ensure_sufficient_stack(|| handler(self, id))?;
                Ok(Some(generated))
            }
            Some(Handler::Statement(_)) => Err(self.shape_mismatch(id, HandlerShape::Statement)),
            None => Err(self.unsupported(id)),
        }
    }

    /// Run the statement handler of `id`, without comments or the chain after it.
    pub fn statement(&mut self, id: NodeId) -> Result<String, CodegenError> {
        let node = self.node(id);
        let registry = self.registry;
        match registry.get(&node.kind) {
            Some(Handler::Statement(handler)) => {
                tracing::trace!(kind = %node.kind, node = %node.key, "statement");
                ensure_sufficient_stack(|| handler(self, id))
            }
            Some(Handler::Expression(_)) => Err(self.shape_mismatch(id, HandlerShape::Expression)),
            None => Err(self.unsupported(id)),
        }
    }

    /// Text of the expression connected to `slot`, parenthesized if it binds
    /// looser than `required`.
    ///
    /// `None` when the slot is empty, the child is disabled or it generated
    /// nothing; the caller supplies its own fallback.
    pub fn value(
        &mut self,
        node: NodeId,
        slot: &str,
        required: Precedence,
    ) -> Result<Option<String>, CodegenError> {
        let Some(child) = self.node(node).values.target(slot) else {
            return Ok(None);
        };
        match self.expression(child)? {
            Some((text, level)) if !text.is_empty() => Ok(Some(parenthesize(text, level, required))),
            _ => Ok(None),
        }
    }

    /// [`value`](Self::value) with a fallback literal.
    pub fn value_or(
        &mut self,
        node: NodeId,
        slot: &str,
        required: Precedence,
        fallback: &str,
    ) -> Result<String, CodegenError> {
        Ok(self
            .value(node, slot, required)?
            .unwrap_or_else(|| fallback.to_string()))
    }

    /// The statement chain hanging off `slot`, indented one level.
    pub fn statements(&mut self, node: NodeId, slot: &str) -> Result<String, CodegenError> {
        let Some(head) = self.node(node).statements.target(slot) else {
            return Ok(String::new());
        };
        let chain = self.statement_chain(head)?;
        Ok(prefix_lines(&chain, &self.config.indent))
    }

    /// Every statement from `head` along `next`, each preceded by its comments.
    ///
    /// Disabled statements are skipped; the chain continues past them.
    pub fn statement_chain(&mut self, head: NodeId) -> Result<String, CodegenError> {
        let mut out = String::new();
        let mut cursor = Some(head);
        while let Some(id) = cursor {
            let node = self.node(id);
            cursor = node.next;
            if !node.enabled {
                continue;
            }
            out.push_str(&self.comments_for(id));
            out.push_str(&self.statement(id)?);
        }
        Ok(out)
    }

    /// Comment lines for a top-level or statement node: its own comment,
    /// wrapped, then the comments of every expression plugged into it.
    fn comments_for(&self, id: NodeId) -> String {
        let node = self.node(id);
        let mut out = String::new();
        if let Some(comment) = node.comment() {
            out.push_str(&comment_block(comment, self.config.comment_wrap));
        }
        for child in node.values.targets() {
            let nested = self.nested_comments(child);
            if !nested.is_empty() {
                out.push_str(&prefix_lines(&nested, "// "));
            }
        }
        out
    }

    /// Comments in the value subtree under `id`, preorder, one per line.
    fn nested_comments(&self, id: NodeId) -> String {
        let mut comments = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let node = self.node(current);
            if let Some(comment) = node.comment() {
                comments.push(comment);
            }
            let children: Vec<NodeId> = node.values.targets().collect();
            stack.extend(children.into_iter().rev());
        }
        if comments.is_empty() {
            return String::new();
        }
        let mut out = comments.join("\n");
        out.push('\n');
        out
    }

    /// Legal name of a workspace variable.
    pub fn variable_name(&mut self, var_id: &str) -> String {
        let graph = self.graph;
        let requested = graph.variable_name(var_id).unwrap_or(var_id);
        self.names.allocate(NameSpace::Variable, var_id, requested)
    }

    /// A helper name distinct from every other name in this pass.
    pub fn fresh_name(&mut self, prefix: &str) -> String {
        let identity = format!("{prefix}#{}", self.fresh_counter);
        self.fresh_counter += 1;
        self.names.allocate(NameSpace::Developer, &identity, prefix)
    }

    /// Register a one-shot declaration. Returns whether `key` was new.
    pub fn define(&mut self, key: &str, text: impl Into<String>) -> bool {
        self.declarations.define(key, text)
    }

    fn unsupported(&self, id: NodeId) -> CodegenError {
        CodegenError::UnsupportedKind {
            node: self.graph.key_of(id),
            kind: self.node(id).kind.clone(),
        }
    }

    fn shape_mismatch(&self, id: NodeId, registered: HandlerShape) -> CodegenError {
        let node = self.node(id);
        CodegenError::HandlerShapeMismatch {
            node: self.graph.key_of(id),
            kind: node.kind.clone(),
            registered,
            found: HandlerShape::of_node(node.produces_value),
        }
    }
}
