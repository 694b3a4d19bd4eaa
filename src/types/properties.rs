//! Graph-wide properties and the option functions that set them.

use serde::{Deserialize, Serialize};

/// Flags describing the kind of graph, fixed at construction.
///
/// The default is an undirected, unweighted graph that may contain cycles.
/// `weighted` and `acyclic` are advisory: they document intent for consumers
/// but the container never checks them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Properties {
    directed: bool,
    weighted: bool,
    acyclic: bool,
}

impl Properties {
    /// Build properties by applying `options` in order. Later options win.
    pub fn from_options(options: &[GraphOption]) -> Self {
        let mut properties = Self::default();
        for option in options {
            option(&mut properties);
        }
        properties
    }

    /// Whether edge order is significant.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Whether edge weights are meaningful.
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Whether the graph is declared free of cycles.
    pub fn is_acyclic(&self) -> bool {
        self.acyclic
    }
}

/// A construction option. Each option sets exactly one flag.
pub type GraphOption = fn(&mut Properties);

/// Make the graph directed.
pub fn directed(p: &mut Properties) {
    p.directed = true;
}

/// Make the graph undirected. Useful to override an earlier `directed`.
pub fn undirected(p: &mut Properties) {
    p.directed = false;
}

/// Declare that edge weights are meaningful.
pub fn weighted(p: &mut Properties) {
    p.weighted = true;
}

/// Declare that the graph has no cycles.
pub fn acyclic(p: &mut Properties) {
    p.acyclic = true;
}
