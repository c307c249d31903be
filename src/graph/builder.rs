//! Graph builder trait and strategy selection.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::LadderConfig;
use crate::graph::adjacency::AdjacencyGraph;
use crate::graph::all_edges::AllEdgesBuilder;
use crate::graph::buckets::BucketsBuilder;
use crate::graph::vocabulary::Vocabulary;

/// Builds the word graph connecting every pair of vocabulary words at
/// Hamming distance one.
///
/// Implementations must return a graph containing every vocabulary word as
/// a vertex, so that different strategies produce comparable results.
pub trait GraphBuilder: Send + Sync {
    /// Short strategy name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Build a fresh adjacency structure for the vocabulary.
    fn build(&self, vocabulary: &Vocabulary) -> AdjacencyGraph;
}

/// Available graph construction strategies.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuilderKind {
    /// Compare every pair of words
    AllEdges,
    /// Group words by wildcard pattern
    Buckets,
}

impl BuilderKind {
    pub const ALL: [BuilderKind; 2] = [BuilderKind::AllEdges, BuilderKind::Buckets];

    /// Instantiate the builder for this strategy.
    pub fn create(&self, config: &LadderConfig) -> Box<dyn GraphBuilder> {
        match self {
            BuilderKind::AllEdges => Box::new(AllEdgesBuilder::new()),
            BuilderKind::Buckets => Box::new(BucketsBuilder::with_wildcard(config.wildcard)),
        }
    }
}

impl<B: GraphBuilder + ?Sized> GraphBuilder for Box<B> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn build(&self, vocabulary: &Vocabulary) -> AdjacencyGraph {
        (**self).build(vocabulary)
    }
}
