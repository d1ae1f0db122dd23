//! Benchmarks for the simulation step and full runs.
//!
//! The step function is the hot path: every cell reads up to eight
//! neighbors against the pre-step grid each round.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use warlife::{Cell, Coord, GameConfig, GameRunner, Grid, Team, step};

/// Fill the largest supported grid with an alternating two-team pattern
/// dense enough to exercise combat and revival every round.
fn battlefield() -> (Grid, GameConfig) {
    let width = Grid::MAX_WIDTH;
    let height = Grid::MAX_HEIGHT;
    let a = Team::new('A').expect("valid symbol");
    let b = Team::new('B').expect("valid symbol");

    let mut grid = Grid::new(width, height).expect("supported dimensions");
    for y in 0..height {
        for x in 0..width {
            let cell = match (x + y) % 3 {
                0 => Cell::alive(a),
                1 => Cell::alive(b),
                _ => Cell::Dead,
            };
            grid.set(Coord::new(x, y), cell);
        }
    }

    let config = GameConfig {
        width,
        height,
        death_age: 8,
        ..GameConfig::default()
    };
    (grid, config)
}

fn bench_step(c: &mut Criterion) {
    let (grid, config) = battlefield();

    c.bench_function("step_100x50_two_teams", |b| {
        b.iter(|| black_box(step(black_box(&grid), black_box(&config))));
    });
}

fn bench_ten_rounds(c: &mut Criterion) {
    let (grid, config) = battlefield();

    c.bench_function("10_rounds_100x50", |b| {
        b.iter(|| {
            let mut current = grid.clone();
            for _ in 0..10 {
                current = step(&current, &config);
            }
            black_box(current)
        });
    });
}

fn bench_run_to_completion(c: &mut Criterion) {
    let (grid, mut config) = battlefield();
    // A low round limit keeps the benchmark bounded regardless of how the
    // pattern evolves.
    config.win_round = 128;

    c.bench_function("run_to_completion_128_rounds", |b| {
        b.iter(|| {
            let runner = GameRunner::new(black_box(grid.clone()), black_box(config));
            black_box(runner.run_to_completion())
        });
    });
}

criterion_group!(benches, bench_step, bench_ten_rounds, bench_run_to_completion);
criterion_main!(benches);
