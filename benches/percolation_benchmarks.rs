// benches/percolation_benchmarks.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use percolation_sim::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn benchmark_union_find(c: &mut Criterion) {
    c.bench_function("union_find_chain_10k", |b| {
        b.iter(|| {
            let mut uf = UnionFind::new(10_000).unwrap();
            for i in 1..10_000 {
                uf.union(i - 1, i).unwrap();
            }
            black_box(uf.connected(0, 9_999).unwrap())
        });
    });
}

fn benchmark_percolation(c: &mut Criterion) {
    c.bench_function("open_full_grid_100", |b| {
        b.iter(|| {
            let mut grid = Percolation::new(100).unwrap();
            for r in 1..=100 {
                for col in 1..=100 {
                    grid.open(r, col).unwrap();
                }
            }
            black_box(grid.percolates())
        });
    });

    c.bench_function("run_trial_200", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| black_box(run_trial(200, &mut rng).unwrap()));
    });
}

criterion_group!(benches, benchmark_union_find, benchmark_percolation);
criterion_main!(benches);
