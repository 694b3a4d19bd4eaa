//! Edge matching strategy, chosen once from the graph's properties.

use std::collections::HashMap;
use std::hash::Hash;

use crate::types::{Edge, Properties};

/// Two-level adjacency table: source key -> target key -> edge.
///
/// Only the inserted (forward) direction is ever stored.
pub type AdjacencyMap<K, T> = HashMap<K, HashMap<K, Edge<T>>>;

/// How a (source, target) pair is matched against stored edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeLookup {
    /// Order matters: only `source -> target` matches.
    Forward,
    /// Order is ignored: `target -> source` matches as well.
    Symmetric,
}

impl EdgeLookup {
    /// Select the strategy for a graph with the given properties.
    pub fn for_properties(properties: &Properties) -> Self {
        if properties.is_directed() {
            Self::Forward
        } else {
            Self::Symmetric
        }
    }

    /// Find the stored edge between two keys.
    ///
    /// The forward entry is always tried first. A symmetric lookup falls back
    /// to the reverse entry and returns it in its stored orientation.
    pub fn find<'a, K, T>(
        &self,
        adjacency: &'a AdjacencyMap<K, T>,
        source: &K,
        target: &K,
    ) -> Option<&'a Edge<T>>
    where
        K: Eq + Hash,
    {
        let forward = adjacency.get(source).and_then(|out| out.get(target));
        match self {
            Self::Forward => forward,
            Self::Symmetric => {
                forward.or_else(|| adjacency.get(target).and_then(|out| out.get(source)))
            }
        }
    }

    /// Whether two (source, target) key pairs denote the same relationship.
    pub fn same_pair<K: Eq>(&self, a: (&K, &K), b: (&K, &K)) -> bool {
        if a.0 == b.0 && a.1 == b.1 {
            return true;
        }
        match self {
            Self::Forward => false,
            Self::Symmetric => a.0 == b.1 && a.1 == b.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::directed;

    fn table() -> AdjacencyMap<u32, &'static str> {
        let mut adjacency: AdjacencyMap<u32, &'static str> = HashMap::new();
        adjacency
            .entry(1)
            .or_default()
            .insert(2, Edge::new("a", "b", 3));
        adjacency
    }

    #[test]
    fn test_strategy_from_properties() {
        assert_eq!(
            EdgeLookup::for_properties(&Properties::default()),
            EdgeLookup::Symmetric
        );
        assert_eq!(
            EdgeLookup::for_properties(&Properties::from_options(&[directed])),
            EdgeLookup::Forward
        );
    }

    #[test]
    fn test_forward_ignores_reverse_entry() {
        let adjacency = table();
        assert!(EdgeLookup::Forward.find(&adjacency, &1, &2).is_some());
        assert!(EdgeLookup::Forward.find(&adjacency, &2, &1).is_none());
    }

    #[test]
    fn test_symmetric_returns_stored_orientation() {
        let adjacency = table();
        let edge = EdgeLookup::Symmetric.find(&adjacency, &2, &1).unwrap();
        assert_eq!(edge.source, "a");
        assert_eq!(edge.target, "b");
        assert!(EdgeLookup::Symmetric.find(&adjacency, &1, &3).is_none());
        assert!(EdgeLookup::Symmetric.find(&adjacency, &3, &1).is_none());
    }

    #[test]
    fn test_same_pair() {
        assert!(EdgeLookup::Forward.same_pair((&1, &2), (&1, &2)));
        assert!(!EdgeLookup::Forward.same_pair((&1, &2), (&2, &1)));
        assert!(EdgeLookup::Symmetric.same_pair((&1, &2), (&2, &1)));
        assert!(!EdgeLookup::Symmetric.same_pair((&1, &2), (&1, &3)));
    }
}
