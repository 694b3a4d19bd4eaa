//! keyed-graph — a generic in-memory graph container.
//!
//! Vertices are values of any type, identified by keys computed with a
//! caller-supplied key function. Edges carry an integer weight and are stored
//! in the direction they were inserted; undirected graphs also match the
//! reverse direction on lookup. Traversal and other algorithms are left to
//! consumers.

pub mod graph;
pub mod hash;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{EdgeLookup, Graph, GraphBuilder};
pub use hash::{identity, int_hash, string_hash, KeyFn};
pub use types::{
    acyclic, directed, undirected, weighted, Edge, Endpoint, GraphError, GraphOption,
    GraphResult, Properties, DEFAULT_WEIGHT,
};
