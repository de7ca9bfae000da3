//! Owned two-dimensional grid storage.
//!
//! Provides [`Grid`], a dense `width x height` array backed by a single
//! contiguous buffer, with unchecked and bounds-checked access,
//! strongly exception-safe copy, O(1) move and swap, and structural
//! equality.
//!
//! # Architecture
//!
//! ```text
//! Grid<T, A: GridAlloc>
//! ├── Vec<T> (row-major, len == width * height)
//! └── A (allocation seam)
//!     ├── Heap   : global heap, exhaustion reported as an error
//!     └── Budget : heap with a per-buffer byte cap (AllocConfig)
//! ```
//!
//! Cell `(x, y)` lives at offset `y * width + x`. Row starts are computed
//! on demand rather than stored, so the grid owns one allocation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod alloc;
pub mod config;
pub mod grid;

// Public re-exports for the primary API surface.
pub use alloc::{Budget, GridAlloc, Heap};
pub use arr2d_core::{Axis, GridError};
pub use config::AllocConfig;
pub use grid::Grid;
