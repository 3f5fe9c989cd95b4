//! Benchmarks for maze generation.
//!
//! Measures the complete carving process (grid allocation, randomized
//! backtracking, boundary breaking) at several grid sizes.
//!
//! # Test Data
//!
//! Uses three fixed seeds per size to ensure reproducibility while covering
//! multiple cases.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use mazeweave_generator::{MazeGenerator, MazeSeed};

const SEEDS: [u64; 3] = [0x2a, 0xdead_beef, 0x0123_4567_89ab_cdef];
const SIZES: [(usize, usize); 2] = [(16, 16), (64, 64)];

fn bench_generator(c: &mut Criterion) {
    let generator = MazeGenerator::new();

    for (rows, cols) in SIZES {
        for (i, seed) in SEEDS.into_iter().enumerate() {
            let seed = MazeSeed::new(seed);
            c.bench_with_input(
                BenchmarkId::new(format!("generator_{rows}x{cols}"), format!("seed_{i}")),
                &seed,
                |b, seed| {
                    b.iter_batched(
                        || hint::black_box(*seed),
                        |seed| generator.generate_with_seed(rows, cols, seed),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets = bench_generator
);
criterion_main!(benches);
