//! Node graph representation for the block-to-Verilog generator.
//!
//! The editor hands over a graph of visual blocks. This crate holds that
//! graph in a flat arena:
//! - [`NodeId`] handles instead of references between nodes
//! - [`Node`] with ordered value and statement slots plus a `next` link
//! - [`NodeGraph`], the arena, with the workspace variable list
//! - [`validate`], the structural check every generation pass runs first
//! - [`parse_document`], the JSON wire format
//!
//! The graph is read-only while code is generated from it.

mod document;
mod error;
mod graph;
mod node;
mod node_id;
mod validate;

pub use document::{
    parse_document, GraphDocument, LoadedGraph, NodeDocument, OrderedSlots, VariableDocument,
};
pub use error::GraphError;
pub use graph::{NodeGraph, Variable};
pub use node::{format_number, FieldValue, Node, Slot, SlotList};
pub use node_id::NodeId;
pub use validate::validate;
