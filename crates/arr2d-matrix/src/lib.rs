//! Matrices and Gaussian elimination for arr2d.
//!
//! Two storage backends share one elimination engine:
//!
//! - [`Matrix`]: `M x N` fixed at compile time, stored inline as
//!   `[[T; N]; M]`. Shape errors in arithmetic are type errors.
//! - [`DynMatrix`]: dimensions chosen at runtime, stored in a
//!   [`Grid`](arr2d_grid::Grid). Shape errors are reported as
//!   [`MatrixError`].
//!
//! Both implement [`RowOps`], and the [`echelon`] module drives any
//! `RowOps` implementor to row echelon form ([`echelon::make_ref`]) and
//! reduced row echelon form ([`echelon::make_rref`]).
//!
//! # Example
//!
//! ```
//! use arr2d_matrix::Matrix;
//!
//! //  x -  y =  4
//! // 2x + 3y = -6
//! let mut system = Matrix::from_rows([[1.0_f64, -1.0, 4.0], [2.0, 3.0, -6.0]]);
//! system.solve();
//! assert!((system[(0, 2)] - 1.2).abs() < 1e-12);
//! assert!((system[(1, 2)] + 2.8).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dynamic;
pub mod echelon;
pub mod fixed;
mod ops;

pub use arr2d_core::{MatrixError, RowOps, Scalar};
pub use dynamic::DynMatrix;
pub use echelon::{make_ref, make_rref, solve};
pub use fixed::Matrix;
