//! Benchmark profiles for the arr2d grid and matrix crates.
//!
//! Provides deterministic inputs shared by the benches:
//!
//! - [`reference_grid`]: 100x100 grid (10K cells) of seeded `f64`
//! - [`stress_grid`]: 1000x1000 grid (1M cells) for copy and move costs
//! - [`augmented_system`]: a strictly diagonally dominant `n x (n + 1)`
//!   system, so every pivot is well away from zero

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use arr2d_grid::{Grid, GridError};
use arr2d_matrix::{DynMatrix, MatrixError};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Build a reference benchmark grid: 100x100 (10K cells).
pub fn reference_grid(seed: u64) -> Result<Grid<f64>, GridError> {
    seeded_grid(100, 100, seed)
}

/// Build a stress benchmark grid: 1000x1000 (1M cells).
pub fn stress_grid(seed: u64) -> Result<Grid<f64>, GridError> {
    seeded_grid(1000, 1000, seed)
}

fn seeded_grid(width: usize, height: usize, seed: u64) -> Result<Grid<f64>, GridError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Grid::from_fn(width, height, |_, _| rng.random_range(-1.0..1.0))
}

/// Build an `n x (n + 1)` augmented system `[A | b]` with a unique solution.
///
/// Off-diagonal entries are drawn from `[-1, 1)`; each diagonal entry is
/// `n + 1`, which makes `A` strictly diagonally dominant and therefore
/// nonsingular.
pub fn augmented_system(n: usize, seed: u64) -> Result<DynMatrix<f64>, MatrixError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let diag = (n + 1) as f64;
    let grid = Grid::from_fn(n + 1, n, |x, y| {
        if x == y {
            diag
        } else {
            rng.random_range(-1.0..1.0)
        }
    })?;
    Ok(DynMatrix::from_grid(grid))
}
