//! Wildcard bucket graph construction.
//!
//! Two equal-length words share the pattern obtained by blanking position
//! `i` exactly when they agree everywhere except possibly at `i`. Buckets are
//! keyed by the blanked position as well as the pattern, since a word may
//! already contain the wildcard character. Distinct words in the same bucket
//! are therefore at Hamming distance one, and every such pair shares exactly
//! one bucket. Grouping by pattern replaces the
//! quadratic scan with O(V · L) bucketing plus O(Σ bucket²) edge emission.

use ahash::AHashMap;
use log::{debug, trace};

use crate::config::DEFAULT_WILDCARD;
use crate::graph::adjacency::AdjacencyGraph;
use crate::graph::builder::GraphBuilder;
use crate::graph::vocabulary::Vocabulary;
use crate::util::hamming::wildcard_pattern;

/// Builds the graph by grouping words that share a wildcard pattern.
#[derive(Debug, Clone, Copy)]
pub struct BucketsBuilder {
    wildcard: char,
}

impl Default for BucketsBuilder {
    fn default() -> Self {
        Self::with_wildcard(DEFAULT_WILDCARD)
    }
}

impl BucketsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wildcard(wildcard: char) -> Self {
        BucketsBuilder { wildcard }
    }

    pub fn wildcard(&self) -> char {
        self.wildcard
    }

    /// Group vocabulary words by blanked position and pattern, preserving
    /// vocabulary order within each bucket.
    pub fn buckets<'a>(
        &self,
        vocabulary: &'a Vocabulary,
    ) -> AHashMap<(usize, String), Vec<&'a str>> {
        let mut buckets: AHashMap<(usize, String), Vec<&'a str>> = AHashMap::new();
        for word in vocabulary.iter() {
            for position in 0..word.chars().count() {
                if let Some(pattern) = wildcard_pattern(word, position, self.wildcard) {
                    buckets.entry((position, pattern)).or_default().push(word);
                }
            }
        }
        buckets
    }
}

impl GraphBuilder for BucketsBuilder {
    fn name(&self) -> &'static str {
        "buckets"
    }

    fn build(&self, vocabulary: &Vocabulary) -> AdjacencyGraph {
        let buckets = self.buckets(vocabulary);
        let mut graph = AdjacencyGraph::with_vertices(vocabulary.iter());

        for ((position, pattern), words) in &buckets {
            if words.len() < 2 {
                continue;
            }
            trace!("bucket {pattern}@{position}: {words:?}");
            for (i, w1) in words.iter().enumerate() {
                for w2 in &words[i + 1..] {
                    graph.add_edge(w1, w2);
                }
            }
        }

        debug!(
            "buckets: {} vertices, {} edges from {} buckets",
            graph.vertex_count(),
            graph.edge_count(),
            buckets.len()
        );
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::all_edges::AllEdgesBuilder;

    fn key(position: usize, pattern: &str) -> (usize, String) {
        (position, pattern.to_string())
    }

    #[test]
    fn test_bucket_contents() {
        let vocabulary = Vocabulary::new(["hot", "dot", "lot"], "hit", "cog");
        let buckets = BucketsBuilder::new().buckets(&vocabulary);

        assert_eq!(buckets[&key(0, "_ot")], vec!["hot", "dot", "lot"]);
        assert_eq!(buckets[&key(1, "h_t")], vec!["hot", "hit"]);
        assert_eq!(buckets[&key(2, "co_")], vec!["cog"]);
    }

    #[test]
    fn test_custom_wildcard() {
        let vocabulary = Vocabulary::new(["hot"], "hit", "cog");
        let builder = BucketsBuilder::with_wildcard('*');
        let buckets = builder.buckets(&vocabulary);

        assert_eq!(builder.wildcard(), '*');
        assert!(buckets.contains_key(&key(1, "h*t")));
        assert!(!buckets.contains_key(&key(1, "h_t")));
    }

    #[test]
    fn test_words_containing_the_wildcard() {
        // "_bc" blanked at 1 and "a_c" blanked at 0 both read "__c".
        let vocabulary = Vocabulary::validated(["_bc", "a_c"], "xxx", "yyy").unwrap();
        let buckets = BucketsBuilder::new().buckets(&vocabulary);
        assert_eq!(buckets[&key(1, "__c")], vec!["_bc"]);
        assert_eq!(buckets[&key(0, "__c")], vec!["a_c"]);

        let graph = BucketsBuilder::new().build(&vocabulary);
        assert!(!graph.are_adjacent("_bc", "a_c"));
        assert_eq!(graph, AllEdgesBuilder::new().build(&vocabulary));

        let vocabulary = Vocabulary::validated(["abc"], "a_c", "_bc").unwrap();
        let graph = BucketsBuilder::new().build(&vocabulary);
        assert!(graph.are_adjacent("a_c", "abc"));
        assert!(graph.are_adjacent("abc", "_bc"));
        assert!(!graph.are_adjacent("a_c", "_bc"));
        assert_eq!(graph, AllEdgesBuilder::new().build(&vocabulary));
    }

    #[test]
    fn test_matches_all_edges_builder() {
        let vocabulary = Vocabulary::new(
            [
                "hat", "hot", "dot", "dog", "lot", "log", "fog", "col", "hut", "mut", "mug",
                "dug", "lug", "cug", "dig", "dag",
            ],
            "hit",
            "cog",
        );
        let buckets = BucketsBuilder::new().build(&vocabulary);
        let all_edges = AllEdgesBuilder::new().build(&vocabulary);

        assert_eq!(buckets, all_edges);
        assert_eq!(buckets.edges(), all_edges.edges());
    }

    #[test]
    fn test_endpoint_inside_dictionary_has_no_self_loop() {
        let vocabulary = Vocabulary::new(["zzb", "zzz"], "aaa", "zzz");
        let graph = BucketsBuilder::new().build(&vocabulary);

        assert!(!graph.are_adjacent("zzz", "zzz"));
        assert_eq!(graph.degree("zzz"), 1);
    }
}
