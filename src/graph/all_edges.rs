//! Pairwise graph construction.

use log::debug;

use crate::graph::adjacency::AdjacencyGraph;
use crate::graph::builder::GraphBuilder;
use crate::graph::vocabulary::Vocabulary;
use crate::util::hamming::is_next_to;

/// Builds the graph by testing every unordered pair of words.
///
/// Costs O(V² · L) comparisons. Simple and correct for any vocabulary, best
/// suited to small and medium dictionaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllEdgesBuilder;

impl AllEdgesBuilder {
    pub fn new() -> Self {
        AllEdgesBuilder
    }
}

impl GraphBuilder for AllEdgesBuilder {
    fn name(&self) -> &'static str {
        "all_edges"
    }

    fn build(&self, vocabulary: &Vocabulary) -> AdjacencyGraph {
        let words = vocabulary.words();
        let mut graph = AdjacencyGraph::with_vertices(vocabulary.iter());
        let mut comparisons = 0usize;

        for (i, word) in words.iter().enumerate() {
            for candidate in &words[i + 1..] {
                comparisons += 1;
                if is_next_to(word, candidate) {
                    graph.add_edge(word, candidate);
                }
            }
        }

        debug!(
            "all_edges: {} vertices, {} edges after {} comparisons",
            graph.vertex_count(),
            graph.edge_count(),
            comparisons
        );
        graph
    }
}
