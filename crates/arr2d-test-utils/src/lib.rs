//! Test utilities and mock allocators for arr2d development.
//!
//! Provides [`GridAlloc`] implementations that fail on demand
//! ([`FailingAlloc`]) or record what they hand out ([`CountingAlloc`]),
//! plus seeded data fixtures in [`fixtures`].
//!
//! Only integration tests (`tests/` directories) should depend on this
//! crate. A `#[cfg(test)]` unit test inside `arr2d-grid` would see a second
//! copy of the `GridAlloc` trait.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use arr2d_core::GridError;
use arr2d_grid::alloc::bytes_for;
use arr2d_grid::{GridAlloc, Heap};

/// Allocator that succeeds `succeed_count` times, then fails every call.
///
/// Clones share one counter, so a grid and every grid built from its
/// cloned allocator draw from the same allowance.
#[derive(Clone, Debug)]
pub struct FailingAlloc {
    pub succeed_count: usize,
    calls: Arc<AtomicUsize>,
}

impl FailingAlloc {
    /// Create an allocator that succeeds `succeed_count` times then fails.
    pub fn new(succeed_count: usize) -> Self {
        Self {
            succeed_count,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// An allocator that refuses every request.
    pub fn always() -> Self {
        Self::new(0)
    }

    /// How many times `allocate()` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    /// Reset the call counter, restoring the full allowance.
    pub fn reset(&self) {
        self.calls.store(0, Ordering::Relaxed);
    }
}

impl GridAlloc for FailingAlloc {
    fn allocate<T>(&self, len: usize) -> Result<Vec<T>, GridError> {
        let n = self.calls.fetch_add(1, Ordering::Relaxed);
        if n >= self.succeed_count {
            return Err(GridError::AllocationFailed {
                requested: bytes_for::<T>(len),
                budget: None,
            });
        }
        Heap.allocate(len)
    }
}

/// Heap allocator that counts calls and bytes handed out.
#[derive(Clone, Debug, Default)]
pub struct CountingAlloc {
    calls: Arc<AtomicUsize>,
    bytes: Arc<AtomicUsize>,
}

impl CountingAlloc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful and failed `allocate()` calls.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    /// Total bytes requested across all calls.
    pub fn bytes(&self) -> usize {
        self.bytes.load(Ordering::Relaxed)
    }
}

impl GridAlloc for CountingAlloc {
    fn allocate<T>(&self, len: usize) -> Result<Vec<T>, GridError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.bytes.fetch_add(bytes_for::<T>(len), Ordering::Relaxed);
        Heap.allocate(len)
    }
}
