//! Code generation errors.

use vgen_ir::GraphError;

use crate::registry::HandlerShape;

/// Why a pass could not produce text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CodegenError {
    /// The graph failed structural validation.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// No handler is registered for the node's kind.
    #[error("node '{node}' has unsupported kind '{kind}'")]
    UnsupportedKind { node: String, kind: String },

    /// The handler for the kind has the other shape than the node.
    #[error("node '{node}': kind '{kind}' is registered as {registered} but the node is {found}")]
    HandlerShapeMismatch {
        node: String,
        kind: String,
        registered: HandlerShape,
        found: HandlerShape,
    },

    /// A choice field holds a value the handler does not know.
    #[error("node '{node}': field '{field}' has unknown value '{value}'")]
    InvalidField {
        node: String,
        field: String,
        value: String,
    },
}
