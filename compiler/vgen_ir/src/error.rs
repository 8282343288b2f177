//! Structural errors in a node graph.

/// A graph that cannot be traversed.
///
/// Every variant names the offending node by its editor key.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("node '{node}': slot '{slot}' refers to a node that does not exist ({target})")]
    DanglingReference {
        node: String,
        slot: String,
        target: String,
    },

    #[error("node '{node}' is reachable from itself")]
    Cycle { node: String },

    #[error("node '{node}': value slot '{slot}' is connected to statement node '{target}'")]
    ValueInputNotExpression {
        node: String,
        slot: String,
        target: String,
    },

    #[error("node '{node}': '{slot}' chains to expression node '{target}'")]
    StatementIsExpression {
        node: String,
        slot: String,
        target: String,
    },

    #[error("expression node '{node}' has a next statement")]
    ExpressionHasNext { node: String },

    #[error("root node '{node}' is also connected as an input")]
    RootIsReferenced { node: String },

    #[error("root #{index} does not exist")]
    UnknownRoot { index: u32 },

    #[error("node id '{node}' is used more than once")]
    DuplicateNodeId { node: String },

    #[error("invalid graph document: {message}")]
    Parse { message: String },
}
