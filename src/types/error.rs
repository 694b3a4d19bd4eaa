//! Error types for the keyed-graph library.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which end of an edge an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    /// The vertex the edge starts at.
    Source,
    /// The vertex the edge points to.
    Target,
}

impl Endpoint {
    /// Return a human-readable name for this endpoint.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Target => "target",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// All errors that can occur in the keyed-graph library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<K> {
    /// An edge operation referenced a key that is not in the vertex table.
    #[error("could not find {endpoint} vertex with key {key:?}")]
    VertexNotFound { endpoint: Endpoint, key: K },
}

impl<K> GraphError<K> {
    /// The endpoint that caused the error.
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::VertexNotFound { endpoint, .. } => *endpoint,
        }
    }

    /// The key that could not be resolved.
    pub fn key(&self) -> &K {
        match self {
            Self::VertexNotFound { key, .. } => key,
        }
    }
}

/// Convenience result type for graph operations keyed by `K`.
pub type GraphResult<T, K> = Result<T, GraphError<K>>;
