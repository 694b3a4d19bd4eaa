//! Graph container, edge lookup strategy and builder.

pub mod builder;
pub mod keyed_graph;
pub mod lookup;

pub use builder::GraphBuilder;
pub use keyed_graph::Graph;
pub use lookup::{AdjacencyMap, EdgeLookup};
