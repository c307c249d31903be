//! Word graph construction.
//!
//! This module turns a dictionary and its two endpoints into an undirected
//! graph whose edges join words at Hamming distance one. Two interchangeable
//! strategies are provided, both producing the same graph.

pub mod adjacency;
pub mod all_edges;
pub mod buckets;
pub mod builder;
pub mod vocabulary;

// Re-export commonly used types
pub use adjacency::*;
pub use all_edges::*;
pub use buckets::*;
pub use builder::*;
pub use vocabulary::*;
