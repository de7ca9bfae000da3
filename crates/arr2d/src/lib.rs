//! arr2d: owned two-dimensional grids, compile-time and runtime matrices,
//! and Gaussian elimination.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! arr2d sub-crates. For most users, adding `arr2d` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use arr2d::prelude::*;
//!
//! // A 3x2 grid, checked and unchecked access.
//! let mut grid: Grid<i32> = Grid::new(3, 2).unwrap();
//! *grid.get_mut(2, 1) = 7;
//! assert_eq!(grid.at(2, 1), Ok(&7));
//! assert!(grid.at(3, 0).is_err());
//!
//! // Solve  x - y = 4,  2x + 3y = -6.
//! let mut system = Matrix::from_rows([[1.0, -1.0, 4.0], [2.0, 3.0, -6.0]]);
//! system.solve();
//! assert!((system[(0, 2)] - 6.0 / 5.0).abs() < 1e-12);
//! assert!((system[(1, 2)] + 14.0 / 5.0).abs() < 1e-12);
//!
//! // The same system with runtime dimensions.
//! let mut dynamic = DynMatrix::from_row_major(2, 3, &[1.0, -1.0, 4.0, 2.0, 3.0, -6.0]).unwrap();
//! dynamic.solve();
//! assert_eq!(dynamic.rank(), 2);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `arr2d-core` | Errors, the `Scalar` trait, the `RowOps` contract, row kernels |
//! | [`grid`] | `arr2d-grid` | `Grid`, allocators, `AllocConfig` |
//! | [`matrix`] | `arr2d-matrix` | `Matrix`, `DynMatrix`, the elimination engine |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`arr2d-core`).
///
/// Contains the error types ([`types::GridError`], [`types::MatrixError`]),
/// the [`types::Scalar`] element trait, and the [`types::RowOps`] contract.
pub use arr2d_core as types;

/// Grid storage (`arr2d-grid`).
///
/// [`grid::Grid`] plus the allocation seam: [`grid::GridAlloc`],
/// [`grid::Heap`], and the byte-capped [`grid::Budget`].
pub use arr2d_grid as grid;

/// Matrices and elimination (`arr2d-matrix`).
///
/// [`matrix::Matrix`] for compile-time shapes, [`matrix::DynMatrix`] for
/// runtime shapes, and the [`matrix::echelon`] engine shared by both.
pub use arr2d_matrix as matrix;

/// Common imports for typical arr2d usage.
///
/// ```rust
/// use arr2d::prelude::*;
/// ```
pub mod prelude {
    // Errors
    pub use arr2d_core::{Axis, GridError, MatrixError};

    // Traits
    pub use arr2d_core::{RowOps, Scalar};

    // Storage
    pub use arr2d_grid::{AllocConfig, Budget, Grid, GridAlloc, Heap};

    // Matrices
    pub use arr2d_matrix::{DynMatrix, Matrix};
}
