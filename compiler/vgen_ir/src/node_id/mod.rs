//! Node handles for the graph arena.
//!
//! Nodes are addressed by `NodeId(u32)` rather than by reference, so input
//! and `next` links are plain `Option<NodeId>` values and traversal state
//! (visited sets, colors) can be kept in flat vectors.

use std::fmt;

/// Index into a [`NodeGraph`](crate::NodeGraph).
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Create a new `NodeId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}
