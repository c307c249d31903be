//! Side-by-side timing of the solution variants.

use std::hint::black_box;
use std::time::Instant;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::LadderConfig;
use crate::error::Result;
use crate::harness::check::normalized_outcome;
use crate::harness::fixture::Problem;
use crate::search::Distance;
use crate::solution::SolutionKind;

/// Default number of timed runs per cell.
pub const DEFAULT_ITERATIONS: usize = 1000;

/// Result and total time of one variant on one fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkCell {
    pub solution: SolutionKind,
    pub result: Distance,
    /// Whether the variant reported the end word as unreachable by failing.
    pub failed: bool,
    pub seconds: f64,
}

impl BenchmarkCell {
    fn label(&self) -> String {
        let result = if self.failed {
            "no path".to_string()
        } else {
            self.result.to_string()
        };
        format!("({result}, {:.6})", self.seconds)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkRow {
    pub fixture: usize,
    pub cells: Vec<BenchmarkCell>,
}

/// Results of every variant on every fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkTable {
    pub solutions: Vec<SolutionKind>,
    pub iterations: usize,
    pub rows: Vec<BenchmarkRow>,
}

impl BenchmarkTable {
    /// Render as a bordered text table, one row per fixture.
    pub fn render(&self) -> String {
        let header: Vec<String> = std::iter::once("Fixture".to_string())
            .chain(self.solutions.iter().map(|s| s.name().to_string()))
            .collect();
        let body: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                std::iter::once(row.fixture.to_string())
                    .chain(row.cells.iter().map(BenchmarkCell::label))
                    .collect()
            })
            .collect();

        let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
        for line in &body {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let separator = widths
            .iter()
            .fold(String::from("+"), |acc, w| acc + &"-".repeat(w + 2) + "+");

        let mut out = String::new();
        out.push_str(&separator);
        out.push('\n');
        out.push_str(&format_line(&header, &widths));
        out.push_str(&separator);
        out.push('\n');
        for line in &body {
            out.push_str(&format_line(line, &widths));
        }
        out.push_str(&separator);
        out.push('\n');
        out
    }
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, &width) in cells.iter().zip(widths) {
        line.push_str(&format!(" {cell:<width$} |"));
    }
    line.push('\n');
    line
}

/// Time `iterations` fresh build-and-search runs of each solution on each
/// problem.
pub fn run_benchmark(
    problems: &[Problem],
    solutions: &[SolutionKind],
    iterations: usize,
    config: &LadderConfig,
) -> Result<BenchmarkTable> {
    let iterations = iterations.max(1);
    let mut rows = Vec::with_capacity(problems.len());

    for (i, problem) in problems.iter().enumerate() {
        let mut cells = Vec::with_capacity(solutions.len());
        for &solution in solutions {
            let first = solution.solve_problem(problem, config);
            let failed = matches!(&first, Err(err) if err.is_no_path());
            let result = normalized_outcome(first)?;

            let started = Instant::now();
            for _ in 0..iterations {
                let _ = black_box(solution.solve_problem(problem, config));
            }
            let seconds = started.elapsed().as_secs_f64();

            debug!("fixture {i} {solution}: {result} in {seconds:.6}s");
            cells.push(BenchmarkCell {
                solution,
                result,
                failed,
                seconds,
            });
        }
        rows.push(BenchmarkRow { fixture: i, cells });
    }

    info!(
        "benchmarked {} solutions on {} fixtures ({} iterations)",
        solutions.len(),
        problems.len(),
        iterations
    );

    Ok(BenchmarkTable {
        solutions: solutions.to_vec(),
        iterations,
        rows,
    })
}
