//! Criterion micro-benchmarks for grid construction, access, copy, and move.

use arr2d_bench::{reference_grid, stress_grid};
use arr2d_grid::Grid;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// Benchmark: allocate and default-fill a 10K-cell grid.
fn bench_grid_new_10k(c: &mut Criterion) {
    c.bench_function("grid_new_10k", |b| {
        b.iter(|| {
            let g: Grid<f64> = Grid::new(100, 100).unwrap();
            black_box(g);
        });
    });
}

/// Benchmark: sum 10K cells through unchecked `get`.
fn bench_grid_get_10k(c: &mut Criterion) {
    let g = reference_grid(42).unwrap();
    c.bench_function("grid_get_10k", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for y in 0..g.height() {
                for x in 0..g.width() {
                    sum += *g.get(x, y);
                }
            }
            black_box(sum);
        });
    });
}

/// Benchmark: sum 10K cells through checked `at`.
fn bench_grid_at_10k(c: &mut Criterion) {
    let g = reference_grid(42).unwrap();
    c.bench_function("grid_at_10k", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for y in 0..g.height() {
                for x in 0..g.width() {
                    sum += *g.at(x, y).unwrap();
                }
            }
            black_box(sum);
        });
    });
}

/// Benchmark: copy-assign a 1M-cell grid over an existing one.
fn bench_grid_assign_1m(c: &mut Criterion) {
    let src = stress_grid(42).unwrap();
    let mut dst: Grid<f64> = Grid::new(10, 10).unwrap();
    c.bench_function("grid_assign_1m", |b| {
        b.iter(|| {
            dst.assign_from(&src).unwrap();
            black_box(dst.size());
        });
    });
}

/// Benchmark: move a 1M-cell grid out and back; O(1) regardless of size.
fn bench_grid_take_1m(c: &mut Criterion) {
    let mut g = stress_grid(42).unwrap();
    c.bench_function("grid_take_1m", |b| {
        b.iter(|| {
            let mut taken = g.take();
            g.move_from(&mut taken);
            black_box(g.size());
        });
    });
}

criterion_group!(
    benches,
    bench_grid_new_10k,
    bench_grid_get_10k,
    bench_grid_at_10k,
    bench_grid_assign_1m,
    bench_grid_take_1m
);
criterion_main!(benches);
