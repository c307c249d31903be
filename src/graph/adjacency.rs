//! Owned adjacency structure for the word graph.

use std::collections::BTreeSet;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

/// Undirected word graph stored as adjacency sets.
///
/// Every edge is recorded on both endpoints, so the structure is symmetric
/// by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    next_of: AHashMap<String, AHashSet<String>>,
}

impl AdjacencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph containing every given word as an isolated vertex.
    pub fn with_vertices<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut graph = Self::new();
        for word in words {
            graph.add_vertex(word);
        }
        graph
    }

    /// Add a vertex with no edges. Existing vertices are left untouched.
    pub fn add_vertex(&mut self, word: &str) {
        if !self.next_of.contains_key(word) {
            self.next_of.insert(word.to_string(), AHashSet::new());
        }
    }

    /// Add an undirected edge, updating both adjacency sets.
    ///
    /// Self-loops are ignored.
    pub fn add_edge(&mut self, w1: &str, w2: &str) {
        if w1 == w2 {
            return;
        }
        self.next_of
            .entry(w1.to_string())
            .or_default()
            .insert(w2.to_string());
        self.next_of
            .entry(w2.to_string())
            .or_default()
            .insert(w1.to_string());
    }

    /// Neighbors of `word`; empty for unknown words.
    pub fn neighbors<'a>(&'a self, word: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        self.next_of
            .get(word)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    pub fn are_adjacent(&self, w1: &str, w2: &str) -> bool {
        self.next_of.get(w1).is_some_and(|set| set.contains(w2))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.next_of.contains_key(word)
    }

    pub fn degree(&self, word: &str) -> usize {
        self.next_of.get(word).map_or(0, |next| next.len())
    }

    pub fn vertex_count(&self) -> usize {
        self.next_of.len()
    }

    pub fn edge_count(&self) -> usize {
        self.next_of.values().map(|next| next.len()).sum::<usize>() / 2
    }

    /// All edges as ordered `(smaller, larger)` pairs.
    pub fn edges(&self) -> BTreeSet<(String, String)> {
        self.next_of
            .iter()
            .flat_map(|(w1, set)| {
                set.iter().filter(move |w2| w1 < *w2).map(move |w2| (w1.clone(), w2.clone()))
            })
            .collect()
    }

    /// Summary numbers for reporting.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            vertices: self.vertex_count(),
            edges: self.edge_count(),
            max_degree: self.next_of.values().map(|next| next.len()).max().unwrap_or(0),
            isolated: self.next_of.values().filter(|set| set.is_empty()).count(),
        }
    }
}

/// Size statistics of an [`AdjacencyGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub vertices: usize,
    pub edges: usize,
    pub max_degree: usize,
    pub isolated: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge("hot", "dot");

        assert!(graph.are_adjacent("hot", "dot"));
        assert!(graph.are_adjacent("dot", "hot"));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn test_duplicate_edges_and_self_loops() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge("hot", "dot");
        graph.add_edge("dot", "hot");
        graph.add_edge("hot", "hot");

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree("hot"), 1);
        assert!(!graph.are_adjacent("hot", "hot"));
    }

    #[test]
    fn test_isolated_vertices() {
        let mut graph = AdjacencyGraph::with_vertices(["hit", "hot", "xyz"]);
        graph.add_edge("hit", "hot");

        assert!(graph.contains("xyz"));
        assert_eq!(graph.neighbors("xyz").count(), 0);
        assert_eq!(graph.neighbors("missing").count(), 0);
        assert_eq!(graph.degree("hit"), 1);
        assert_eq!(graph.degree("missing"), 0);

        let stats = graph.stats();
        assert_eq!(stats.vertices, 3);
        assert_eq!(stats.edges, 1);
        assert_eq!(stats.max_degree, 1);
        assert_eq!(stats.isolated, 1);
    }

    #[test]
    fn test_edges_are_normalized() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge("lot", "hot");
        graph.add_edge("dot", "lot");

        let edges: Vec<_> = graph.edges().into_iter().collect();
        assert_eq!(
            edges,
            vec![
                ("dot".to_string(), "lot".to_string()),
                ("hot".to_string(), "lot".to_string()),
            ]
        );
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let mut a = AdjacencyGraph::new();
        a.add_edge("hot", "dot");
        a.add_edge("dot", "dog");

        let mut b = AdjacencyGraph::new();
        b.add_edge("dog", "dot");
        b.add_edge("dot", "hot");

        assert_eq!(a, b);
    }
}
