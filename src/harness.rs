//! Fixtures, correctness checks and benchmarking around the solutions.
//!
//! Nothing in here is needed to solve a ladder; these helpers only build
//! problems, call [`SolutionKind::solve`](crate::solution::SolutionKind::solve)
//! and report on the answers.

pub mod benchmark;
pub mod check;
pub mod fixture;

// Re-export commonly used types
pub use benchmark::*;
pub use check::*;
pub use fixture::*;
