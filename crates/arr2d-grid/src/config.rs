//! Allocation budget parameters.

/// Configuration for the [`Budget`](crate::alloc::Budget) allocator.
///
/// Caps the size of any single grid buffer. Requests above the cap are
/// refused with [`GridError::AllocationFailed`](arr2d_core::GridError)
/// before touching the system allocator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocConfig {
    /// Largest single buffer, in bytes, the allocator will hand out.
    ///
    /// Default: 1_073_741_824 (1GB).
    pub max_bytes: usize,
}

impl AllocConfig {
    /// Default per-buffer cap: 1GB.
    pub const DEFAULT_MAX_BYTES: usize = 1 << 30;

    /// Create a config with the given per-buffer byte cap.
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    /// A config that never refuses on size alone.
    pub fn unlimited() -> Self {
        Self::new(usize::MAX)
    }

    /// How many elements of `T` fit in the cap.
    ///
    /// Zero-sized types are unbounded.
    pub fn max_elements<T>(&self) -> usize {
        match std::mem::size_of::<T>() {
            0 => usize::MAX,
            elem => self.max_bytes / elem,
        }
    }
}

impl Default for AllocConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_BYTES)
    }
}
