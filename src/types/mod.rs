//! Data model: edges, graph properties and errors.

pub mod edge;
pub mod error;
pub mod properties;

pub use edge::Edge;
pub use error::{Endpoint, GraphError, GraphResult};
pub use properties::{acyclic, directed, undirected, weighted, GraphOption, Properties};

/// Weight given to edges created without an explicit weight.
pub const DEFAULT_WEIGHT: i64 = 0;
