//! Buffer allocation seam for [`Grid`](crate::Grid).
//!
//! Every grid buffer is obtained through a [`GridAlloc`]. Allocation is
//! fallible: the allocator returns an empty `Vec` with the requested
//! capacity already reserved, or [`GridError::AllocationFailed`]. Grids
//! fill the reserved buffer without reallocating, so a successful
//! `allocate` is the only point where memory is acquired.

use arr2d_core::GridError;

use crate::config::AllocConfig;

/// Source of grid buffers.
///
/// Implementations must either return a `Vec` with
/// `capacity() >= len` and `len() == 0`, or an error. They must not
/// panic on exhaustion.
pub trait GridAlloc: Clone {
    /// Reserve space for `len` elements of `T`.
    fn allocate<T>(&self, len: usize) -> Result<Vec<T>, GridError>;
}

/// Bytes needed for `len` elements of `T`, saturating on overflow.
pub fn bytes_for<T>(len: usize) -> usize {
    len.saturating_mul(std::mem::size_of::<T>())
}

/// The global heap, with exhaustion reported instead of aborting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Heap;

impl GridAlloc for Heap {
    fn allocate<T>(&self, len: usize) -> Result<Vec<T>, GridError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(len)
            .map_err(|_| GridError::AllocationFailed {
                requested: bytes_for::<T>(len),
                budget: None,
            })?;
        Ok(buf)
    }
}

/// Heap allocation with a per-buffer byte cap.
///
/// Useful to bound untrusted dimensions: a `100_000 x 100_000` grid of
/// `f64` is refused up front instead of exhausting memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Budget {
    config: AllocConfig,
}

impl Budget {
    /// Create a budgeted allocator from a config.
    pub fn new(config: AllocConfig) -> Self {
        Self { config }
    }

    /// Shorthand for `Budget::new(AllocConfig::new(max_bytes))`.
    pub fn with_max_bytes(max_bytes: usize) -> Self {
        Self::new(AllocConfig::new(max_bytes))
    }

    /// The active configuration.
    pub fn config(&self) -> &AllocConfig {
        &self.config
    }
}

impl GridAlloc for Budget {
    fn allocate<T>(&self, len: usize) -> Result<Vec<T>, GridError> {
        if len > self.config.max_elements::<T>() {
            let requested = bytes_for::<T>(len);
            log::warn!(
                "refusing grid buffer of {requested} bytes (budget {} bytes)",
                self.config.max_bytes
            );
            return Err(GridError::AllocationFailed {
                requested,
                budget: Some(self.config.max_bytes),
            });
        }
        Heap.allocate(len).map_err(|err| match err {
            GridError::AllocationFailed { requested, .. } => GridError::AllocationFailed {
                requested,
                budget: Some(self.config.max_bytes),
            },
            other => other,
        })
    }
}
