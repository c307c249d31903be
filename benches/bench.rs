//! Criterion benchmarks for the word ladder solutions.
//!
//! Covers:
//! - graph construction with both builders on growing dictionaries
//! - every builder/search combination on the built-in fixtures
//! - breadth-first frontier modes on a generated dictionary

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use wordladder::harness::{builtin_fixtures, generate_problem};
use wordladder::prelude::*;

fn bench_graph_builders(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_builders");

    for size in [100, 500, 2000] {
        let problem = generate_problem(size, 5, 42).unwrap();
        let vocabulary = Vocabulary::new(&problem.dictionary, &problem.start, &problem.end);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("all_edges", size), &vocabulary, |b, v| {
            b.iter(|| black_box(AllEdgesBuilder::new().build(black_box(v))))
        });
        group.bench_with_input(BenchmarkId::new("buckets", size), &vocabulary, |b, v| {
            b.iter(|| black_box(BucketsBuilder::new().build(black_box(v))))
        });
    }

    group.finish();
}

fn bench_solutions(c: &mut Criterion) {
    let config = LadderConfig::default();
    let mut group = c.benchmark_group("solutions");

    for (i, fixture) in builtin_fixtures().iter().enumerate() {
        for kind in SolutionKind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.name(), i), fixture, |b, problem| {
                b.iter(|| black_box(kind.solve_problem(black_box(problem), &config)))
            });
        }
    }

    group.finish();
}

fn bench_frontier_modes(c: &mut Criterion) {
    let problem = generate_problem(1000, 5, 7).unwrap();
    let vocabulary = Vocabulary::new(&problem.dictionary, &problem.start, &problem.end);
    let graph = BucketsBuilder::new().build(&vocabulary);

    let mut group = c.benchmark_group("bfs_frontier");
    group.bench_function("visited_set", |b| {
        let search = BfsSearch::with_frontier(FrontierMode::VisitedSet);
        b.iter(|| black_box(search.search(black_box(&graph), &vocabulary)))
    });
    group.bench_function("dijkstra", |b| {
        let search = DijkstraSearch::new();
        b.iter(|| black_box(search.search(black_box(&graph), &vocabulary)))
    });
    group.finish();
}

criterion_group!(benches, bench_graph_builders, bench_solutions, bench_frontier_modes);
criterion_main!(benches);
