//! Command implementations for the wordladder CLI.

use std::fs;
use std::time::Instant;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::LadderConfig;
use crate::error::Result;
use crate::harness::{
    builtin_fixtures, fixtures_or_builtin, generate_problem, load_word_list, run_benchmark,
    run_checks,
};
use crate::solution::{Solution, SolutionKind};

/// Execute a CLI command.
pub fn execute_command(args: LadderArgs) -> Result<()> {
    let config = args.effective_config()?;
    match &args.command {
        Command::Solve(solve_args) => solve(solve_args, &config, &args),
        Command::Check(check_args) => check(check_args, &config, &args),
        Command::Benchmark(benchmark_args) => benchmark(benchmark_args, &config, &args),
        Command::Generate(generate_args) => generate(generate_args, &args),
        Command::Fixtures => output_data(&builtin_fixtures(), &args),
    }
}

/// Solve one ladder with one or all solution variants.
fn solve(args: &SolveArgs, config: &LadderConfig, cli_args: &LadderArgs) -> Result<()> {
    let mut dictionary = args.words.clone();
    if let Some(path) = &args.dictionary_file {
        dictionary.extend(load_word_list(path)?);
    }

    let kinds = if args.all {
        SolutionKind::ALL.to_vec()
    } else {
        vec![SolutionKind::from_parts(args.builder, args.search)]
    };

    let mut results = Vec::with_capacity(kinds.len());
    for kind in kinds {
        let start_time = Instant::now();
        let solution = Solution::new(
            kind.builder_kind().create(config),
            kind.search_kind().create(config),
            &dictionary,
            &args.start,
            &args.end,
            config,
        )?;
        let distance = match solution.search() {
            Ok(distance) => Some(distance),
            Err(err) if err.is_no_path() => None,
            Err(err) => return Err(err),
        };
        let duration = start_time.elapsed();

        results.push(SolveResult {
            solution: kind,
            start: args.start.clone(),
            end: args.end.clone(),
            distance,
            graph: solution.graph().stats(),
            duration_us: duration.as_micros() as u64,
        });
    }

    output_solve_results(&results, cli_args)
}

/// Run the correctness checks and fail when any of them does not hold.
fn check(args: &CheckArgs, config: &LadderConfig, cli_args: &LadderArgs) -> Result<()> {
    let problems = fixtures_or_builtin(args.fixtures.as_ref())?;
    info!("checking {} fixtures", problems.len());

    let report = run_checks(&problems, config)?;
    output_check_report(&report, cli_args)?;
    report.into_result().map(|_| ())
}

/// Run the comparison benchmark.
fn benchmark(args: &BenchmarkArgs, config: &LadderConfig, cli_args: &LadderArgs) -> Result<()> {
    let problems = fixtures_or_builtin(args.fixtures.as_ref())?;
    let table = run_benchmark(&problems, &SolutionKind::ALL, args.iterations, config)?;
    output_benchmark_table(&table, cli_args)
}

/// Generate a random problem.
fn generate(args: &GenerateArgs, cli_args: &LadderArgs) -> Result<()> {
    let problem = generate_problem(args.size, args.length, args.seed)?;

    match &args.output {
        Some(path) => {
            fs::write(path, serde_json::to_string_pretty(&problem)?)?;
            if cli_args.verbosity() > 0 {
                println!(
                    "Wrote {} words of length {} to {}",
                    problem.dictionary.len(),
                    args.length,
                    path.display()
                );
            }
            Ok(())
        }
        None => output_data(&problem, cli_args),
    }
}
