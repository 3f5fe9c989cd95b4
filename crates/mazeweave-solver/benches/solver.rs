//! Benchmarks for maze solving.
//!
//! Measures depth-first solving over serpentine mazes, the worst case for
//! path length: the single path from entrance to exit meanders through
//! every cell, so the solver's stack grows to `rows * cols` frames.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::{hint, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use mazeweave_core::{Direction, Grid, Position};
use mazeweave_solver::MazeSolver;

const SIZES: [usize; 3] = [16, 64, 128];

/// Builds an `n x n` maze whose only path snakes through every cell:
/// each row is a full corridor, and consecutive rows connect at
/// alternating ends.
fn serpentine(n: usize) -> Grid {
    let mut grid = Grid::new(n, n).unwrap();
    for row in 0..n {
        for col in 0..n - 1 {
            grid.remove_wall_between(
                Position::new(row, col),
                Position::new(row, col + 1),
                Direction::Right,
            )
            .unwrap();
        }
    }
    for row in 0..n - 1 {
        let col = if row % 2 == 0 { n - 1 } else { 0 };
        grid.remove_wall_between(
            Position::new(row, col),
            Position::new(row + 1, col),
            Direction::Bottom,
        )
        .unwrap();
    }
    grid
}

fn bench_solver(c: &mut Criterion) {
    let solver = MazeSolver::new();

    for n in SIZES {
        let grid = serpentine(n);
        let entrance = Position::new(0, 0);
        let exit = Position::new(n - 1, n - 1);
        c.bench_with_input(
            BenchmarkId::new("solver_serpentine", format!("{n}x{n}")),
            &grid,
            |b, grid| {
                b.iter_batched(
                    || hint::black_box(grid.clone()),
                    |mut grid| solver.solve(&mut grid, entrance, exit),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets = bench_solver
);
criterion_main!(benches);
