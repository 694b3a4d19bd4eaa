//! The core edge struct.

use serde::{Deserialize, Serialize};

/// A relationship between two vertices.
///
/// The edge holds its own copies of the source and target vertex values, taken
/// from the vertex table when the edge was created. Upserting a vertex later
/// does not update edges that already exist, so `source` and `target` may lag
/// behind the graph's current vertex values.
///
/// Whether the relationship is directed is a property of the graph, not of
/// the edge. `source` and `target` always reflect the order in which the edge
/// was inserted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<T> {
    /// Vertex value the edge was inserted from.
    pub source: T,
    /// Vertex value the edge was inserted to.
    pub target: T,
    /// Cost of the edge. Not validated; 0 by convention in unweighted graphs.
    pub weight: i64,
}

impl<T> Edge<T> {
    /// Create a new edge.
    pub fn new(source: T, target: T, weight: i64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}
