//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LadderArgs, OutputFormat};
use crate::error::Result;
use crate::graph::GraphStats;
use crate::harness::{BenchmarkTable, CheckReport};
use crate::search::Distance;
use crate::solution::SolutionKind;

/// Result structure for one solved ladder.
#[derive(Debug, Serialize, Deserialize)]
pub struct SolveResult {
    pub solution: SolutionKind,
    pub start: String,
    pub end: String,
    /// `None` when the variant failed because the end is unreachable.
    pub distance: Option<Distance>,
    pub graph: GraphStats,
    pub duration_us: u64,
}

/// Output solve results.
pub fn output_solve_results(results: &[SolveResult], args: &LadderArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(&results, args),
        OutputFormat::Human => {
            for result in results {
                let distance = match result.distance {
                    Some(distance) => distance.to_string(),
                    None => "no path".to_string(),
                };
                if args.verbosity() > 1 {
                    println!(
                        "{}: {} -> {} = {} ({} words, {} edges, {}us)",
                        result.solution,
                        result.start,
                        result.end,
                        distance,
                        result.graph.vertices,
                        result.graph.edges,
                        result.duration_us
                    );
                } else {
                    println!("{}: {}", result.solution, distance);
                }
            }
            Ok(())
        }
    }
}

/// Output a check report.
pub fn output_check_report(report: &CheckReport, args: &LadderArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(report, args),
        OutputFormat::Human => {
            println!("Check Results:");
            println!("══════════════");
            for outcome in &report.outcomes {
                if !outcome.passed || args.verbosity() > 1 {
                    let status = if outcome.passed { "PASS" } else { "FAIL" };
                    println!(
                        "[{status}] fixture {} {} {}",
                        outcome.fixture, outcome.check, outcome.subject
                    );
                }
            }
            let failed = report.failures().count();
            println!(
                "{} checks, {} passed, {} failed",
                report.outcomes.len(),
                report.outcomes.len() - failed,
                failed
            );
            Ok(())
        }
    }
}

/// Output a benchmark table.
pub fn output_benchmark_table(table: &BenchmarkTable, args: &LadderArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(table, args),
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("Benchmark ({} iterations per cell):", table.iterations);
            }
            print!("{}", table.render());
            Ok(())
        }
    }
}

/// Output data that only has a JSON form.
///
/// Human format prints it pretty-printed.
pub fn output_data<T: Serialize>(data: &T, args: &LadderArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(data, args),
        OutputFormat::Human => {
            println!("{}", serde_json::to_string_pretty(data)?);
            Ok(())
        }
    }
}

/// Output in JSON format.
fn output_json<T: Serialize + ?Sized>(result: &T, args: &LadderArgs) -> Result<()> {
    println!("{}", to_json(result, args.pretty)?);
    Ok(())
}

fn to_json<T: Serialize + ?Sized>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}
