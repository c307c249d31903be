//! Solutions pairing a graph builder with a search strategy.
//!
//! A [`Solution`] owns its vocabulary and the graph built from it. The graph
//! is built eagerly in [`Solution::new`] and never mutated afterwards, so
//! the instance can be queried any number of times and shared freely across
//! threads.
//!
//! # Examples
//!
//! ```
//! use wordladder::config::LadderConfig;
//! use wordladder::graph::BucketsBuilder;
//! use wordladder::search::{BfsSearch, Distance};
//! use wordladder::solution::Solution;
//!
//! let solution = Solution::new(
//!     BucketsBuilder::new(),
//!     BfsSearch::new(),
//!     ["hot", "dot", "dog", "lot", "log"],
//!     "hit",
//!     "cog",
//!     &LadderConfig::default(),
//! )
//! .unwrap();
//! assert_eq!(solution.search().unwrap(), Distance::Finite(5));
//! ```

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::LadderConfig;
use crate::error::Result;
use crate::graph::{
    AdjacencyGraph, AllEdgesBuilder, BucketsBuilder, BuilderKind, GraphBuilder, Vocabulary,
};
use crate::harness::Problem;
use crate::search::{BfsSearch, DijkstraSearch, Distance, SearchKind, SearchStrategy};

/// A graph builder bound to a search strategy over one problem instance.
#[derive(Debug, Clone)]
pub struct Solution<B, S> {
    builder: B,
    strategy: S,
    vocabulary: Vocabulary,
    graph: AdjacencyGraph,
}

impl<B: GraphBuilder, S: SearchStrategy> Solution<B, S> {
    /// Build the vocabulary and the graph for `start -> end`.
    ///
    /// Fails with [`LadderError::MalformedInput`](crate::error::LadderError::MalformedInput)
    /// when input validation is enabled and the dictionary breaks its
    /// preconditions.
    pub fn new<I, W>(
        builder: B,
        strategy: S,
        dictionary: I,
        start: &str,
        end: &str,
        config: &LadderConfig,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let vocabulary = if config.validate_input {
            Vocabulary::validated(dictionary, start, end)?
        } else {
            Vocabulary::new(dictionary, start, end)
        };
        let graph = builder.build(&vocabulary);

        debug!(
            "solution {}+{}: {} words, {} edges",
            builder.name(),
            strategy.name(),
            graph.vertex_count(),
            graph.edge_count()
        );

        Ok(Solution {
            builder,
            strategy,
            vocabulary,
            graph,
        })
    }

    /// Run the bound search strategy.
    pub fn search(&self) -> Result<Distance> {
        self.strategy.search(&self.graph, &self.vocabulary)
    }

    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn builder(&self) -> &B {
        &self.builder
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }
}

/// The four builder/search combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolutionKind {
    BuildAllEdgesSearchWithBfs,
    BuildAllEdgesSearchWithDijkstra,
    BuildBucketsSearchWithBfs,
    BuildBucketsSearchWithDijkstra,
}

impl SolutionKind {
    pub const ALL: [SolutionKind; 4] = [
        SolutionKind::BuildAllEdgesSearchWithBfs,
        SolutionKind::BuildAllEdgesSearchWithDijkstra,
        SolutionKind::BuildBucketsSearchWithBfs,
        SolutionKind::BuildBucketsSearchWithDijkstra,
    ];

    /// The combination of the given strategies.
    pub fn from_parts(builder: BuilderKind, search: SearchKind) -> Self {
        match (builder, search) {
            (BuilderKind::AllEdges, SearchKind::Bfs) => SolutionKind::BuildAllEdgesSearchWithBfs,
            (BuilderKind::AllEdges, SearchKind::Dijkstra) => {
                SolutionKind::BuildAllEdgesSearchWithDijkstra
            }
            (BuilderKind::Buckets, SearchKind::Bfs) => SolutionKind::BuildBucketsSearchWithBfs,
            (BuilderKind::Buckets, SearchKind::Dijkstra) => {
                SolutionKind::BuildBucketsSearchWithDijkstra
            }
        }
    }

    pub fn builder_kind(&self) -> BuilderKind {
        match self {
            SolutionKind::BuildAllEdgesSearchWithBfs
            | SolutionKind::BuildAllEdgesSearchWithDijkstra => BuilderKind::AllEdges,
            SolutionKind::BuildBucketsSearchWithBfs
            | SolutionKind::BuildBucketsSearchWithDijkstra => BuilderKind::Buckets,
        }
    }

    pub fn search_kind(&self) -> SearchKind {
        match self {
            SolutionKind::BuildAllEdgesSearchWithBfs | SolutionKind::BuildBucketsSearchWithBfs => {
                SearchKind::Bfs
            }
            SolutionKind::BuildAllEdgesSearchWithDijkstra
            | SolutionKind::BuildBucketsSearchWithDijkstra => SearchKind::Dijkstra,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SolutionKind::BuildAllEdgesSearchWithBfs => "BuildAllEdgesSearchWithBfs",
            SolutionKind::BuildAllEdgesSearchWithDijkstra => "BuildAllEdgesSearchWithDijkstra",
            SolutionKind::BuildBucketsSearchWithBfs => "BuildBucketsSearchWithBfs",
            SolutionKind::BuildBucketsSearchWithDijkstra => "BuildBucketsSearchWithDijkstra",
        }
    }

    /// Build a fresh solution of this kind for `start -> end` and search it.
    pub fn solve<I, W>(
        &self,
        dictionary: I,
        start: &str,
        end: &str,
        config: &LadderConfig,
    ) -> Result<Distance>
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let bfs = BfsSearch::with_frontier(config.frontier);
        let buckets = BucketsBuilder::with_wildcard(config.wildcard);
        match self {
            SolutionKind::BuildAllEdgesSearchWithBfs => {
                Solution::new(AllEdgesBuilder::new(), bfs, dictionary, start, end, config)?.search()
            }
            SolutionKind::BuildAllEdgesSearchWithDijkstra => Solution::new(
                AllEdgesBuilder::new(),
                DijkstraSearch::new(),
                dictionary,
                start,
                end,
                config,
            )?
            .search(),
            SolutionKind::BuildBucketsSearchWithBfs => {
                Solution::new(buckets, bfs, dictionary, start, end, config)?.search()
            }
            SolutionKind::BuildBucketsSearchWithDijkstra => {
                Solution::new(buckets, DijkstraSearch::new(), dictionary, start, end, config)?
                    .search()
            }
        }
    }

    /// Solve a fixture problem.
    pub fn solve_problem(&self, problem: &Problem, config: &LadderConfig) -> Result<Distance> {
        self.solve(&problem.dictionary, &problem.start, &problem.end, config)
    }
}

impl fmt::Display for SolutionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
