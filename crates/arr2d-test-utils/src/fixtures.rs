//! Deterministic grid and matrix fixtures.
//!
//! Random fixtures use a ChaCha8 RNG seeded from the caller's `seed`, so a
//! failing test reproduces from its seed alone. Values are small integers
//! (in `-100..=100`) so float elimination over them stays well conditioned
//! and exact comparisons remain meaningful.

use arr2d_grid::Grid;
use arr2d_matrix::{DynMatrix, Matrix};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

const LO: i32 = -100;
const HI: i32 = 100;

/// A `width x height` grid holding `0, 1, 2, ...` in row-major order.
pub fn seq_grid(width: usize, height: usize) -> Grid<usize> {
    Grid::from_fn(width, height, |x, y| y * width + x).expect("fixture grid allocation")
}

/// A `width x height` grid of seeded integers.
pub fn random_grid(width: usize, height: usize, seed: u64) -> Grid<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Grid::from_fn(width, height, |_, _| rng.random_range(LO..=HI)).expect("fixture grid allocation")
}

/// A `width x height` grid of seeded short strings, for non-`Copy` cells.
pub fn random_word_grid(width: usize, height: usize, seed: u64) -> Grid<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Grid::from_fn(width, height, |x, y| {
        format!("{x}:{y}:{}", rng.random_range(0..1000u32))
    })
    .expect("fixture grid allocation")
}

/// A fixed-size matrix of seeded integer-valued floats.
pub fn random_matrix<const M: usize, const N: usize>(seed: u64) -> Matrix<f64, M, N> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut m = Matrix::zeros();
    for v in m.iter_mut() {
        *v = f64::from(rng.random_range(LO..=HI));
    }
    m
}

/// A runtime-sized matrix of seeded integer-valued floats.
pub fn random_dyn_matrix(rows: usize, cols: usize, seed: u64) -> DynMatrix<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let values: Vec<f64> = (0..rows * cols)
        .map(|_| f64::from(rng.random_range(LO..=HI)))
        .collect();
    DynMatrix::from_row_major(rows, cols, &values).expect("fixture matrix allocation")
}
