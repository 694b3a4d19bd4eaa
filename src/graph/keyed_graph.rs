//! Core graph structure: a vertex table plus a forward-only adjacency table.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::hash::KeyFn;
use crate::types::{
    Edge, Endpoint, GraphError, GraphOption, GraphResult, Properties, DEFAULT_WEIGHT,
};

use super::lookup::{AdjacencyMap, EdgeLookup};

/// A generic graph whose vertices of type `T` are identified by keys of type `K`.
///
/// Keys come from the key function passed to [`Graph::new`]. Vertex values are
/// cloned into the vertex table on upsert and cloned again into every edge
/// created between them; the copies are independent afterwards.
///
/// Multigraphs are not supported: there is at most one edge per ordered key
/// pair. Nothing is ever removed.
pub struct Graph<K, T> {
    hash: KeyFn<K, T>,
    properties: Properties,
    lookup: EdgeLookup,
    vertices: HashMap<K, T>,
    edges: AdjacencyMap<K, T>,
}

impl<K, T> Graph<K, T>
where
    K: Eq + Hash + Clone,
    T: Clone,
{
    /// Create an empty graph.
    ///
    /// `options` are applied in order, so a later option overrides an earlier
    /// one that sets the same flag:
    ///
    /// ```
    /// use keyed_graph::{acyclic, directed, int_hash, Graph};
    ///
    /// let mut g = Graph::new(int_hash, &[directed, acyclic]);
    /// g.add_vertex(1);
    /// g.add_vertex(2);
    /// g.add_weighted_edge(&1, &2, 7).unwrap();
    /// assert_eq!(g.get_edge(&1, &2).map(|e| e.weight), Some(7));
    /// assert!(g.get_edge(&2, &1).is_none());
    /// ```
    pub fn new<H>(hash: H, options: &[GraphOption]) -> Self
    where
        H: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self::with_properties(Box::new(hash), Properties::from_options(options))
    }

    pub(crate) fn with_properties(hash: KeyFn<K, T>, properties: Properties) -> Self {
        log::debug!(
            "new graph: directed={} weighted={} acyclic={}",
            properties.is_directed(),
            properties.is_weighted(),
            properties.is_acyclic()
        );
        Self {
            hash,
            properties,
            lookup: EdgeLookup::for_properties(&properties),
            vertices: HashMap::new(),
            edges: HashMap::new(),
        }
    }

    /// The properties fixed at construction.
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Compute the key of a vertex value with this graph's key function.
    pub fn key_of(&self, value: &T) -> K {
        (self.hash)(value)
    }

    /// Insert a vertex, replacing any vertex stored under the same key.
    ///
    /// Edges already created from or to the old value keep their copy of it.
    pub fn add_vertex(&mut self, value: T) {
        let key = self.key_of(&value);
        let replaced = self.vertices.insert(key, value).is_some();
        log::trace!(
            "vertex upserted (replaced={}, {} vertices)",
            replaced,
            self.vertices.len()
        );
    }

    /// Get a vertex by key.
    pub fn vertex(&self, key: &K) -> Option<&T> {
        self.vertices.get(key)
    }

    /// Whether a vertex with this key exists.
    pub fn contains_vertex(&self, key: &K) -> bool {
        self.vertices.contains_key(key)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored edges. An undirected edge counts once.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(HashMap::len).sum()
    }

    /// Iterate over all vertices and their keys, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = (&K, &T)> {
        self.vertices.iter()
    }

    /// Iterate over the edges stored with `key` as their source.
    ///
    /// Only the inserted orientation is visited, even in an undirected graph.
    pub fn edges_from(&self, key: &K) -> impl Iterator<Item = &Edge<T>> {
        self.edges.get(key).into_iter().flat_map(HashMap::values)
    }

    /// Create an edge of weight 0 between two existing vertices.
    pub fn add_edge(&mut self, source: &T, target: &T) -> GraphResult<(), K> {
        self.add_weighted_edge(source, target, DEFAULT_WEIGHT)
    }

    /// Create an edge between two existing vertices.
    ///
    /// Any edge already stored for the same (source, target) pair is replaced.
    pub fn add_weighted_edge(
        &mut self,
        source: &T,
        target: &T,
        weight: i64,
    ) -> GraphResult<(), K> {
        let source_key = self.key_of(source);
        let target_key = self.key_of(target);
        self.add_weighted_edge_by_keys(&source_key, &target_key, weight)
    }

    /// Create an edge of weight 0 between the vertices with the given keys.
    pub fn add_edge_by_keys(&mut self, source: &K, target: &K) -> GraphResult<(), K> {
        self.add_weighted_edge_by_keys(source, target, DEFAULT_WEIGHT)
    }

    /// Create an edge between the vertices with the given keys.
    ///
    /// Fails with [`GraphError::VertexNotFound`] if either key is missing from
    /// the vertex table, checking the source first. The graph is unchanged on
    /// failure.
    pub fn add_weighted_edge_by_keys(
        &mut self,
        source: &K,
        target: &K,
        weight: i64,
    ) -> GraphResult<(), K> {
        // Validate: source exists
        let source_value = self
            .vertices
            .get(source)
            .ok_or_else(|| GraphError::VertexNotFound {
                endpoint: Endpoint::Source,
                key: source.clone(),
            })?;

        // Validate: target exists
        let target_value = self
            .vertices
            .get(target)
            .ok_or_else(|| GraphError::VertexNotFound {
                endpoint: Endpoint::Target,
                key: target.clone(),
            })?;

        let edge = Edge::new(source_value.clone(), target_value.clone(), weight);
        let replaced = self
            .edges
            .entry(source.clone())
            .or_default()
            .insert(target.clone(), edge)
            .is_some();
        log::trace!("edge written (weight={}, replaced={})", weight, replaced);

        Ok(())
    }

    /// Get the edge between two vertex values.
    ///
    /// In an undirected graph an edge stored the other way round also matches;
    /// it is returned as stored, without swapping source and target.
    pub fn get_edge(&self, source: &T, target: &T) -> Option<&Edge<T>> {
        let source_key = self.key_of(source);
        let target_key = self.key_of(target);
        self.get_edge_by_keys(&source_key, &target_key)
    }

    /// Get the edge between the vertices with the given keys.
    pub fn get_edge_by_keys(&self, source: &K, target: &K) -> Option<&Edge<T>> {
        self.lookup.find(&self.edges, source, target)
    }

    /// Whether two edges connect the same vertices.
    ///
    /// Endpoints are compared by key. Swapped endpoints are equal only in an
    /// undirected graph. Weights are ignored.
    pub fn edges_equal(&self, a: &Edge<T>, b: &Edge<T>) -> bool {
        let a_keys = (self.key_of(&a.source), self.key_of(&a.target));
        let b_keys = (self.key_of(&b.source), self.key_of(&b.target));
        self.lookup
            .same_pair((&a_keys.0, &a_keys.1), (&b_keys.0, &b_keys.1))
    }
}

impl<K, T> fmt::Debug for Graph<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("properties", &self.properties)
            .field("vertices", &self.vertices.len())
            .field("sources", &self.edges.len())
            .finish_non_exhaustive()
    }
}
