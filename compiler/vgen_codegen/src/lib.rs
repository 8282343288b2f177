//! Verilog code generation from node graphs.
//!
//! # Architecture
//!
//! ```text
//! NodeGraph + roots
//!        ↓
//!   validate + HandlerRegistry::check   (structure, kinds, shapes)
//!        ↓
//!   GenerationContext::generate         (handlers pull inputs through the context)
//!        ↓
//!   finish + tidy                       (declarations first, whitespace cleanup)
//! ```
//!
//! Expression handlers report the [`Precedence`] of the operator they emitted
//! and the context parenthesizes a child only when it binds looser than its
//! parent requires. Names for workspace variables and helpers come from a
//! [`NameAllocator`] that never hands out a Verilog keyword or the same name
//! twice. One-shot declarations go through a [`DeclarationRegistry`] and are
//! emitted once, ahead of the body.

mod comments;
mod config;
mod context;
mod declarations;
mod error;
mod handlers;
mod names;
mod precedence;
mod registry;

pub use config::CodegenConfig;
pub use context::GenerationContext;
pub use declarations::DeclarationRegistry;
pub use error::CodegenError;
pub use handlers::{register_builtins, sized_literal, Radix};
pub use names::{is_keyword, safe_name, NameAllocator, NameSpace, RESERVED_WORDS};
pub use precedence::{parenthesize, Precedence};
pub use registry::{
    builtin_registry, ExpressionFn, Handler, HandlerRegistry, HandlerShape, StatementFn,
};

use vgen_ir::{NodeGraph, NodeId};

/// Generate Verilog for `roots` with the built-in handlers.
pub fn generate(
    graph: &NodeGraph,
    roots: &[NodeId],
    config: &CodegenConfig,
) -> Result<String, CodegenError> {
    generate_with(graph, roots, builtin_registry(), config)
}

/// Generate Verilog for `roots` with a custom handler table.
pub fn generate_with(
    graph: &NodeGraph,
    roots: &[NodeId],
    registry: &HandlerRegistry,
    config: &CodegenConfig,
) -> Result<String, CodegenError> {
    GenerationContext::new(graph, registry, config).generate(roots)
}
