//! # wordladder
//!
//! Shortest word ladder lengths: how many single-letter changes it takes to
//! turn one word into another when every intermediate word must come from a
//! dictionary.
//!
//! ## Features
//!
//! - Two graph builders producing the same graph: pairwise comparison and
//!   wildcard buckets
//! - Two search strategies: breadth-first search counting visited words and
//!   shortest-path relaxation counting edges
//! - Any builder composes with any search strategy
//! - Fixtures, cross-checks and a comparison benchmark

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod harness;
pub mod search;
pub mod solution;
pub mod util;

pub mod prelude {
    pub use crate::config::LadderConfig;
    pub use crate::error::{LadderError, Result};
    pub use crate::graph::{
        AdjacencyGraph, AllEdgesBuilder, BucketsBuilder, BuilderKind, GraphBuilder, Vocabulary,
    };
    pub use crate::search::{
        BfsSearch, DijkstraSearch, Distance, FrontierMode, SearchKind, SearchStrategy,
    };
    pub use crate::solution::{Solution, SolutionKind};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
