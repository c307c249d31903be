//! Command line argument parsing for the wordladder CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::LadderConfig;
use crate::error::Result;
use crate::graph::BuilderKind;
use crate::harness::DEFAULT_ITERATIONS;
use crate::search::{FrontierMode, SearchKind};

/// wordladder - shortest word ladders with swappable strategies
#[derive(Parser, Debug, Clone)]
#[command(name = "wordladder")]
#[command(about = "Compute shortest word ladder lengths and compare strategies")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LadderArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "WORDLADDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the breadth-first frontier mode
    ///
    /// `path-copy` queues one copied path per branch and grows exponentially
    /// on large or dense dictionaries; `visited-set` gives the same results in
    /// linear time.
    #[arg(long)]
    pub frontier: Option<FrontierMode>,

    /// Override the bucket wildcard marker
    #[arg(long)]
    pub wildcard: Option<char>,

    /// Skip input precondition checks
    #[arg(long)]
    pub no_validate: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LadderArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }

    /// Load the configuration file, if any, and apply command line overrides.
    pub fn effective_config(&self) -> Result<LadderConfig> {
        let mut config = match &self.config {
            Some(path) => LadderConfig::from_file(path)?,
            None => LadderConfig::default(),
        };
        if let Some(frontier) = self.frontier {
            config.frontier = frontier;
        }
        if let Some(wildcard) = self.wildcard {
            config.wildcard = wildcard;
        }
        if self.no_validate {
            config.validate_input = false;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Solve one ladder
    Solve(SolveArgs),

    /// Run symmetry, builder equivalence and cross-strategy checks
    ///
    /// On generated fixtures of more than a few dozen words, pass
    /// `--frontier visited-set`: the default path-copy frontier grows
    /// exponentially there.
    Check(CheckArgs),

    /// Time every solution variant on every fixture
    Benchmark(BenchmarkArgs),

    /// Generate a random problem as JSON
    ///
    /// Run `check` or `benchmark` on large generated problems with
    /// `--frontier visited-set`; the default path-copy frontier grows
    /// exponentially on them.
    Generate(GenerateArgs),

    /// Print the built-in fixtures as JSON
    Fixtures,
}

/// Arguments for solving a ladder
#[derive(Parser, Debug, Clone)]
pub struct SolveArgs {
    /// Start word
    #[arg(value_name = "START")]
    pub start: String,

    /// End word
    #[arg(value_name = "END")]
    pub end: String,

    /// Dictionary words
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,

    /// Word list file, one word per line
    #[arg(short, long, value_name = "DICTIONARY_FILE")]
    pub dictionary_file: Option<PathBuf>,

    /// Graph construction strategy
    #[arg(short, long, default_value = "buckets")]
    pub builder: BuilderKind,

    /// Search strategy
    #[arg(short, long, default_value = "bfs")]
    pub search: SearchKind,

    /// Run all four builder/search combinations
    #[arg(long, conflicts_with_all = ["builder", "search"])]
    pub all: bool,
}

/// Arguments for running checks
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Fixture file (JSON); defaults to the built-in fixtures
    #[arg(long, value_name = "FIXTURE_FILE")]
    pub fixtures: Option<PathBuf>,
}

/// Arguments for benchmarking
#[derive(Parser, Debug, Clone)]
pub struct BenchmarkArgs {
    /// Fixture file (JSON); defaults to the built-in fixtures
    #[arg(long, value_name = "FIXTURE_FILE")]
    pub fixtures: Option<PathBuf>,

    /// Timed runs per fixture and solution
    #[arg(short = 'n', long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: usize,
}

/// Arguments for generating a random problem
#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    /// Number of dictionary words
    #[arg(long, default_value = "1000")]
    pub size: usize,

    /// Word length
    #[arg(long, default_value = "5")]
    pub length: usize,

    /// Random seed
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Write the problem to this file instead of stdout
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_solve() {
        let args = LadderArgs::parse_from([
            "wordladder", "solve", "hit", "cog", "hot", "dot", "dog", "--search", "dijkstra",
        ]);
        match args.command {
            Command::Solve(solve) => {
                assert_eq!(solve.start, "hit");
                assert_eq!(solve.end, "cog");
                assert_eq!(solve.words, vec!["hot", "dot", "dog"]);
                assert_eq!(solve.builder, BuilderKind::Buckets);
                assert_eq!(solve.search, SearchKind::Dijkstra);
                assert!(!solve.all);
            }
            other => panic!("Expected solve command, got {other:?}"),
        }
    }

    #[test]
    fn test_verbosity() {
        let args = LadderArgs::parse_from(["wordladder", "fixtures"]);
        assert_eq!(args.verbosity(), 1);

        let args = LadderArgs::parse_from(["wordladder", "-vv", "fixtures"]);
        assert_eq!(args.verbosity(), 3);

        let args = LadderArgs::parse_from(["wordladder", "-v", "-q", "fixtures"]);
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_effective_config_overrides() {
        let args = LadderArgs::parse_from([
            "wordladder",
            "--frontier",
            "visited-set",
            "--wildcard",
            "*",
            "--no-validate",
            "check",
        ]);
        let config = args.effective_config().unwrap();
        assert_eq!(config.frontier, FrontierMode::VisitedSet);
        assert_eq!(config.wildcard, '*');
        assert!(!config.validate_input);
    }

    #[test]
    fn test_long_help_points_at_visited_set_frontier() {
        use clap::CommandFactory;

        let command = LadderArgs::command();
        for name in ["check", "generate"] {
            let subcommand = command.find_subcommand(name).unwrap();
            let long_about = subcommand.get_long_about().unwrap().to_string();
            assert!(long_about.contains("--frontier visited-set"), "{name}: {long_about}");
        }
    }

    #[test]
    fn test_effective_config_rejects_bad_wildcard() {
        let args = LadderArgs::parse_from(["wordladder", "--wildcard", "a", "check"]);
        assert!(args.effective_config().is_err());
    }

    #[test]
    fn test_benchmark_defaults() {
        let args = LadderArgs::parse_from(["wordladder", "benchmark"]);
        match args.command {
            Command::Benchmark(bench) => {
                assert_eq!(bench.iterations, DEFAULT_ITERATIONS);
                assert!(bench.fixtures.is_none());
            }
            other => panic!("Expected benchmark command, got {other:?}"),
        }
    }
}
