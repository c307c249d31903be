//! Breadth-first search strategy.

use std::collections::VecDeque;

use ahash::AHashSet;
use clap::ValueEnum;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::{LadderError, Result};
use crate::graph::{AdjacencyGraph, Vocabulary};
use crate::search::distance::Distance;
use crate::search::strategy::SearchStrategy;

/// How the breadth-first frontier avoids revisiting words.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontierMode {
    /// Every frontier entry carries its own visited path
    #[default]
    PathCopy,
    /// A single visited set shared by the whole search
    VisitedSet,
}

/// Unweighted breadth-first search.
///
/// Returns the number of words on the shortest ladder, endpoints included,
/// so `hit -> hot -> dot -> dog -> cog` yields 5. When the end word cannot be
/// reached the search fails with [`LadderError::NoPath`].
///
/// Both frontier modes return identical results. `PathCopy` pays an O(V)
/// path clone per expansion and may enqueue a word once per simple path
/// reaching it; `VisitedSet` expands every word at most once.
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsSearch {
    frontier: FrontierMode,
}

impl BfsSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frontier(frontier: FrontierMode) -> Self {
        BfsSearch { frontier }
    }

    pub fn frontier(&self) -> FrontierMode {
        self.frontier
    }

    fn search_path_copy(&self, graph: &AdjacencyGraph, start: &str, end: &str) -> Option<usize> {
        let mut fifo: VecDeque<(&str, Vec<&str>)> = VecDeque::new();
        fifo.push_back((start, vec![start]));

        while let Some((current, visited)) = fifo.pop_front() {
            for next in graph.neighbors(current) {
                if visited.contains(&next) {
                    continue;
                }
                if next == end {
                    return Some(visited.len() + 1);
                }
                let mut path = visited.clone();
                path.push(next);
                fifo.push_back((next, path));
            }
            trace!("expanded {current}, {} entries queued", fifo.len());
        }
        None
    }

    fn search_visited_set(&self, graph: &AdjacencyGraph, start: &str, end: &str) -> Option<usize> {
        let mut visited: AHashSet<&str> = AHashSet::new();
        visited.insert(start);
        let mut fifo: VecDeque<(&str, usize)> = VecDeque::new();
        fifo.push_back((start, 1));

        while let Some((current, length)) = fifo.pop_front() {
            for next in graph.neighbors(current) {
                if !visited.insert(next) {
                    continue;
                }
                if next == end {
                    return Some(length + 1);
                }
                fifo.push_back((next, length + 1));
            }
        }
        None
    }
}

impl SearchStrategy for BfsSearch {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn search(&self, graph: &AdjacencyGraph, vocabulary: &Vocabulary) -> Result<Distance> {
        let (start, end) = (vocabulary.start(), vocabulary.end());

        // A ladder from a word to itself is that single word.
        if start == end {
            return Ok(Distance::Finite(1));
        }

        let found = match self.frontier {
            FrontierMode::PathCopy => self.search_path_copy(graph, start, end),
            FrontierMode::VisitedSet => self.search_visited_set(graph, start, end),
        };

        match found {
            Some(length) => {
                debug!("bfs: {start} -> {end} visits {length} words");
                Ok(Distance::Finite(length))
            }
            None => {
                debug!("bfs: {end} unreachable from {start}");
                Err(LadderError::no_path(start, end))
            }
        }
    }
}
