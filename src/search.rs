//! Shortest ladder search strategies.
//!
//! A strategy takes an already built [`AdjacencyGraph`](crate::graph::AdjacencyGraph)
//! and reports a [`Distance`] between the vocabulary's endpoints.

pub mod bfs;
pub mod dijkstra;
pub mod distance;
pub mod strategy;

// Re-export commonly used types
pub use bfs::*;
pub use dijkstra::*;
pub use distance::*;
pub use strategy::*;
