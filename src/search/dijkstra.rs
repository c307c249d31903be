//! Shortest-path relaxation strategy.

use ahash::AHashMap;
use log::{debug, trace};

use crate::error::Result;
use crate::graph::{AdjacencyGraph, Vocabulary};
use crate::search::distance::Distance;
use crate::search::strategy::SearchStrategy;

/// Dijkstra's algorithm with every edge weighing 1.
///
/// Returns the number of edges on the shortest ladder, so
/// `hit -> hot -> dot -> dog -> cog` yields 4. An unreachable end word is
/// not an error: the result is [`Distance::Infinite`].
///
/// The frontier is the whole vocabulary and the minimum is found by a linear
/// scan, ties going to the word that comes first in vocabulary order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraSearch;

impl DijkstraSearch {
    pub fn new() -> Self {
        DijkstraSearch
    }

    /// Tentative distances from the start word to every vocabulary word that
    /// was reached before the search stopped.
    pub fn distances<'a>(
        &self,
        graph: &'a AdjacencyGraph,
        vocabulary: &'a Vocabulary,
    ) -> AHashMap<&'a str, Distance> {
        let mut distance: AHashMap<&'a str, Distance> = AHashMap::with_capacity(vocabulary.len());
        distance.insert(vocabulary.start(), Distance::ZERO);

        let mut frontier: Vec<&'a str> = vocabulary.iter().collect();
        while !frontier.is_empty() {
            let Some((index, best)) = frontier
                .iter()
                .enumerate()
                .map(|(i, word)| (i, distance.get(word).copied().unwrap_or_default()))
                .min_by_key(|&(_, d)| d)
            else {
                break;
            };

            // Everything left is unreachable.
            if best.is_infinite() {
                break;
            }

            let word = frontier.remove(index);
            let candidate = best.step();
            for next in graph.neighbors(word) {
                let current = distance.entry(next).or_default();
                if candidate < *current {
                    *current = candidate;
                }
            }
            trace!("finalized {word} at {best}, {} words left", frontier.len());
        }

        distance
    }
}

impl SearchStrategy for DijkstraSearch {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn search(&self, graph: &AdjacencyGraph, vocabulary: &Vocabulary) -> Result<Distance> {
        let distances = self.distances(graph, vocabulary);
        let result = distances
            .get(vocabulary.end())
            .copied()
            .unwrap_or_default();

        debug!(
            "dijkstra: {} -> {} costs {}",
            vocabulary.start(),
            vocabulary.end(),
            result
        );
        Ok(result)
    }
}
