use breachforge::grid::Cell;
use breachforge::puzzle::Puzzle;
use breachforge::scorer::PathScorer;
use breachforge::search::{SearchOptions, Searcher, Silent};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    let puzzle = Puzzle::sample();

    let scorer = PathScorer::new(&puzzle.grid, &puzzle.targets);
    let path: Vec<Cell> = [(1, 0), (1, 1), (1, 4), (2, 0), (3, 1), (1, 5), (5, 1), (5, 0)]
        .iter()
        .map(|&(r, col)| Cell::new(r, col))
        .collect();
    c.bench_function("score (8 cells, 3 targets)", |b| {
        b.iter(|| scorer.score(black_box(&path)))
    });

    let exhaustive = Searcher::new(
        &puzzle.grid,
        &puzzle.targets,
        SearchOptions {
            buffer_len: 6,
            ..Default::default()
        },
    )
    .expect("valid options");
    c.bench_function("search sample (buffer 6, exhaustive)", |b| {
        b.iter(|| exhaustive.run(black_box(&Silent)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
