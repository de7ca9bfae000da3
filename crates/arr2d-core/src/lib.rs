//! Core types and traits for the arr2d grid and matrix crates.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the abstractions shared by the storage and algorithm crates:
//! error types, the [`Scalar`] numeric trait, the [`RowOps`] row-operation
//! contract, and slice-level row kernels.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod rows;
pub mod scalar;
pub mod traits;

pub use error::{Axis, GridError, MatrixError};
pub use scalar::Scalar;
pub use traits::RowOps;
