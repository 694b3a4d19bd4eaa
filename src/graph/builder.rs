//! Fluent API for building Graph instances.

use std::hash::Hash;

use crate::hash::KeyFn;
use crate::types::{
    acyclic, directed, undirected, weighted, GraphOption, GraphResult, Properties,
};

use super::Graph;

/// Fluent builder for constructing a Graph.
///
/// Options are recorded in call order and applied at [`GraphBuilder::build`],
/// so the last call touching a flag wins. Vertices are inserted before edges.
pub struct GraphBuilder<K, T> {
    hash: KeyFn<K, T>,
    options: Vec<GraphOption>,
    vertices: Vec<T>,
    edges: Vec<(T, T, i64)>,
}

impl<K, T> GraphBuilder<K, T>
where
    K: Eq + Hash + Clone,
    T: Clone,
{
    /// Create a new builder for an undirected, unweighted graph.
    pub fn new<H>(hash: H) -> Self
    where
        H: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self {
            hash: Box::new(hash),
            options: Vec::new(),
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Apply an arbitrary option.
    pub fn option(mut self, option: GraphOption) -> Self {
        self.options.push(option);
        self
    }

    /// Make the graph directed.
    pub fn directed(self) -> Self {
        self.option(directed)
    }

    /// Make the graph undirected.
    pub fn undirected(self) -> Self {
        self.option(undirected)
    }

    /// Mark the graph as weighted.
    pub fn weighted(self) -> Self {
        self.option(weighted)
    }

    /// Mark the graph as acyclic.
    pub fn acyclic(self) -> Self {
        self.option(acyclic)
    }

    /// Add a vertex.
    pub fn vertex(mut self, value: T) -> Self {
        self.vertices.push(value);
        self
    }

    /// Add several vertices.
    pub fn vertices<I: IntoIterator<Item = T>>(mut self, values: I) -> Self {
        self.vertices.extend(values);
        self
    }

    /// Add an edge between two vertex values.
    pub fn edge(mut self, source: T, target: T, weight: i64) -> Self {
        self.edges.push((source, target, weight));
        self
    }

    /// Build the final Graph. Fails if an edge names a vertex never added.
    pub fn build(self) -> GraphResult<Graph<K, T>, K> {
        let properties = Properties::from_options(&self.options);
        let mut graph = Graph::with_properties(self.hash, properties);
        for value in self.vertices {
            graph.add_vertex(value);
        }
        for (source, target, weight) in self.edges {
            graph.add_weighted_edge(&source, &target, weight)?;
        }
        Ok(graph)
    }
}
