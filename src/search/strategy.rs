//! Search strategy trait and strategy selection.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::LadderConfig;
use crate::error::Result;
use crate::graph::{AdjacencyGraph, Vocabulary};
use crate::search::bfs::BfsSearch;
use crate::search::dijkstra::DijkstraSearch;
use crate::search::distance::Distance;

/// Computes a path metric between the vocabulary's start and end words.
///
/// Strategies differ in both metric and failure contract: see
/// [`BfsSearch`] and [`DijkstraSearch`].
pub trait SearchStrategy: Send + Sync {
    /// Short strategy name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Run the search over an already built graph.
    fn search(&self, graph: &AdjacencyGraph, vocabulary: &Vocabulary) -> Result<Distance>;
}

/// Available search strategies.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    /// Breadth-first search counting visited words
    Bfs,
    /// Shortest-path relaxation counting edges
    Dijkstra,
}

impl SearchKind {
    pub const ALL: [SearchKind; 2] = [SearchKind::Bfs, SearchKind::Dijkstra];

    /// Instantiate the strategy.
    pub fn create(&self, config: &LadderConfig) -> Box<dyn SearchStrategy> {
        match self {
            SearchKind::Bfs => Box::new(BfsSearch::with_frontier(config.frontier)),
            SearchKind::Dijkstra => Box::new(DijkstraSearch::new()),
        }
    }
}

impl<S: SearchStrategy + ?Sized> SearchStrategy for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn search(&self, graph: &AdjacencyGraph, vocabulary: &Vocabulary) -> Result<Distance> {
        (**self).search(graph, vocabulary)
    }
}
