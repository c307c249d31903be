//! Correctness cross-checks run over fixtures.
//!
//! Three properties are verified:
//! - symmetry: swapping start and end leaves every variant's answer unchanged
//! - builder equivalence: both builders produce the same graph
//! - cross-strategy agreement: BFS word count minus one equals the
//!   relaxation edge count, and BFS fails exactly when relaxation is infinite

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::LadderConfig;
use crate::error::{LadderError, Result};
use crate::graph::{AllEdgesBuilder, BucketsBuilder, BuilderKind, GraphBuilder, Vocabulary};
use crate::harness::fixture::Problem;
use crate::search::{Distance, SearchKind};
use crate::solution::SolutionKind;

/// Outcome of running a solution, with "no path" folded into the value.
///
/// BFS reports an unreachable end as an error while relaxation reports an
/// infinite distance; both become `Distance::Infinite` here.
pub fn normalized_outcome(result: Result<Distance>) -> Result<Distance> {
    match result {
        Err(LadderError::NoPath { .. }) => Ok(Distance::Infinite),
        other => other,
    }
}

/// Check that `kind` answers the same for the problem and its swap.
pub fn check_symmetry(kind: SolutionKind, problem: &Problem, config: &LadderConfig) -> Result<bool> {
    let forward = normalized_outcome(kind.solve_problem(problem, config))?;
    let backward = normalized_outcome(kind.solve_problem(&problem.swapped(), config))?;
    debug!(
        "symmetry {kind}: {} -> {} = {forward}, reverse = {backward}",
        problem.start, problem.end
    );
    Ok(forward == backward)
}

/// Check that both builders produce the same graph for the problem.
pub fn check_builder_equivalence(problem: &Problem, config: &LadderConfig) -> Result<bool> {
    let vocabulary = if config.validate_input {
        Vocabulary::validated(&problem.dictionary, &problem.start, &problem.end)?
    } else {
        Vocabulary::new(&problem.dictionary, &problem.start, &problem.end)
    };
    let all_edges = AllEdgesBuilder::new().build(&vocabulary);
    let buckets = BucketsBuilder::with_wildcard(config.wildcard).build(&vocabulary);
    Ok(all_edges == buckets)
}

/// Check that BFS and relaxation agree when run on the same builder.
pub fn check_cross_strategy(
    builder: BuilderKind,
    problem: &Problem,
    config: &LadderConfig,
) -> Result<bool> {
    let bfs = SolutionKind::from_parts(builder, SearchKind::Bfs).solve_problem(problem, config);
    let dijkstra =
        SolutionKind::from_parts(builder, SearchKind::Dijkstra).solve_problem(problem, config)?;

    let agree = match (bfs, dijkstra) {
        (Ok(Distance::Finite(words)), Distance::Finite(edges)) => words == edges + 1,
        (Err(LadderError::NoPath { .. }), Distance::Infinite) => true,
        (Err(err), _) if !err.is_no_path() => return Err(err),
        _ => false,
    };
    Ok(agree)
}

/// Result of a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub fixture: usize,
    pub check: String,
    pub subject: String,
    pub passed: bool,
}

/// All check outcomes over a set of fixtures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    fn record(&mut self, fixture: usize, check: &str, subject: &str, passed: bool) {
        if !passed {
            warn!("fixture {fixture}: {check} check failed for {subject}");
        }
        self.outcomes.push(CheckOutcome {
            fixture,
            check: check.to_string(),
            subject: subject.to_string(),
            passed,
        });
    }

    /// Turn a failing report into an error.
    pub fn into_result(self) -> Result<Self> {
        let failed = self.failures().count();
        if failed == 0 {
            Ok(self)
        } else {
            Err(LadderError::check_failed(format!(
                "{failed} of {} checks failed",
                self.outcomes.len()
            )))
        }
    }
}

/// Run every check on every fixture for every solution variant.
pub fn run_checks(problems: &[Problem], config: &LadderConfig) -> Result<CheckReport> {
    let mut report = CheckReport::default();

    for (i, problem) in problems.iter().enumerate() {
        for kind in SolutionKind::ALL {
            let passed = check_symmetry(kind, problem, config)?;
            report.record(i, "symmetry", kind.name(), passed);
        }

        let passed = check_builder_equivalence(problem, config)?;
        report.record(i, "builder_equivalence", "all_edges/buckets", passed);

        for builder in BuilderKind::ALL {
            let passed = check_cross_strategy(builder, problem, config)?;
            let subject = match builder {
                BuilderKind::AllEdges => "all_edges",
                BuilderKind::Buckets => "buckets",
            };
            report.record(i, "cross_strategy", subject, passed);
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::fixture::builtin_fixtures;

    #[test]
    fn test_builtin_fixtures_pass() {
        let report = run_checks(&builtin_fixtures(), &LadderConfig::default()).unwrap();
        assert_eq!(report.outcomes.len(), 3 * 7);
        assert!(report.passed());
        assert_eq!(report.failures().count(), 0);
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn test_unreachable_problem_passes() {
        let problem = Problem::new("aaa", "zzz", ["xyz"]);
        let config = LadderConfig::default();
        for kind in SolutionKind::ALL {
            assert!(check_symmetry(kind, &problem, &config).unwrap());
        }
        for builder in BuilderKind::ALL {
            assert!(check_cross_strategy(builder, &problem, &config).unwrap());
        }
    }

    #[test]
    fn test_malformed_problem_is_an_error() {
        let problem = Problem::new("aaa", "zzz", ["ab"]);
        let result = run_checks(&[problem], &LadderConfig::default());
        assert!(matches!(result, Err(LadderError::MalformedInput(_))));
    }

    #[test]
    fn test_failing_report_into_result() {
        let mut report = CheckReport::default();
        report.record(0, "symmetry", "x", true);
        report.record(0, "symmetry", "y", false);
        assert!(!report.passed());
        assert!(matches!(report.into_result(), Err(LadderError::CheckFailed(_))));
    }

    #[test]
    fn test_normalized_outcome() {
        assert_eq!(
            normalized_outcome(Err(LadderError::no_path("a", "b"))).unwrap(),
            Distance::Infinite
        );
        assert_eq!(normalized_outcome(Ok(Distance::Finite(3))).unwrap(), Distance::Finite(3));
        assert!(normalized_outcome(Err(LadderError::other("boom"))).is_err());
    }
}
