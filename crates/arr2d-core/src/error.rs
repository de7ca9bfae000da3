//! Error types for grid storage and matrix construction.
//!
//! One enum per subsystem: [`GridError`] for storage and checked access,
//! [`MatrixError`] for shape checks layered on top of storage.

use std::error::Error;
use std::fmt;

/// The quantity a checked access was measured against.
///
/// Flat accesses are checked against the grid size; coordinate
/// accesses check `x` against the width first, then `y` against the height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// A flat row-major index, bounded by `size`.
    Index,
    /// A column coordinate, bounded by `width`.
    X,
    /// A row coordinate, bounded by `height`.
    Y,
}

impl Axis {
    /// Name of the bound this axis is checked against.
    pub fn bound_name(self) -> &'static str {
        match self {
            Self::Index => "size",
            Self::X => "width",
            Self::Y => "height",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Index => "index",
            Self::X => "x",
            Self::Y => "y",
        };
        f.write_str(name)
    }
}

/// Errors from grid allocation and checked element access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A checked accessor received an index or coordinate outside the grid.
    OutOfRange {
        /// Which index or coordinate was rejected.
        axis: Axis,
        /// The offending value.
        value: usize,
        /// The exclusive bound it violated.
        bound: usize,
    },
    /// The backing buffer could not be allocated.
    ///
    /// The receiver of a failed allocation is left untouched.
    AllocationFailed {
        /// Number of bytes requested.
        requested: usize,
        /// Byte budget of the allocator that refused, if it has one.
        budget: Option<usize>,
    },
    /// A flat buffer handed to a constructor has the wrong length.
    LengthMismatch {
        /// Length implied by the requested dimensions.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
}

impl GridError {
    /// Whether this error reports a bounds violation.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// Whether this error reports an allocation failure.
    pub fn is_allocation_failure(&self) -> bool {
        matches!(self, Self::AllocationFailed { .. })
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { axis, value, bound } => {
                write!(
                    f,
                    "{axis} (which is {value}) >= {} (which is {bound})",
                    axis.bound_name()
                )
            }
            Self::AllocationFailed { requested, budget } => {
                write!(f, "grid allocation failed: requested {requested} bytes")?;
                if let Some(budget) = budget {
                    write!(f, ", budget {budget} bytes")?;
                }
                Ok(())
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "buffer length {actual} does not match grid size {expected}")
            }
        }
    }
}

impl Error for GridError {}

/// Errors from matrix construction and shape-checked arithmetic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatrixError {
    /// An initializer slice does not hold exactly `rows * cols` elements.
    LengthMismatch {
        /// `rows * cols` of the target shape.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
    /// Operand shapes are incompatible for the requested operation.
    IncompatibleShapes {
        /// The operation that was attempted (e.g. `"mul"`).
        op: &'static str,
        /// `(rows, cols)` of the left operand.
        lhs: (usize, usize),
        /// `(rows, cols)` of the right operand.
        rhs: (usize, usize),
    },
    /// The underlying grid storage failed.
    Storage(GridError),
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "expected {expected} elements, got {actual}")
            }
            Self::IncompatibleShapes { op, lhs, rhs } => {
                write!(
                    f,
                    "incompatible shapes for {op}: {}x{} and {}x{}",
                    lhs.0, lhs.1, rhs.0, rhs.1
                )
            }
            Self::Storage(err) => write!(f, "matrix storage: {err}"),
        }
    }
}

impl Error for MatrixError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for MatrixError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::LengthMismatch { expected, actual } => {
                Self::LengthMismatch { expected, actual }
            }
            other => Self::Storage(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_names_axis_and_bound() {
        let err = GridError::OutOfRange {
            axis: Axis::X,
            value: 5,
            bound: 5,
        };
        assert_eq!(err.to_string(), "x (which is 5) >= width (which is 5)");

        let err = GridError::OutOfRange {
            axis: Axis::Index,
            value: 20,
            bound: 20,
        };
        assert_eq!(err.to_string(), "index (which is 20) >= size (which is 20)");
    }

    #[test]
    fn allocation_failure_reports_budget_when_present() {
        let unbounded = GridError::AllocationFailed {
            requested: 64,
            budget: None,
        };
        assert_eq!(unbounded.to_string(), "grid allocation failed: requested 64 bytes");

        let budgeted = GridError::AllocationFailed {
            requested: 64,
            budget: Some(32),
        };
        assert!(budgeted.to_string().ends_with("budget 32 bytes"));
        assert!(budgeted.is_allocation_failure());
        assert!(!budgeted.is_out_of_range());
    }

    #[test]
    fn storage_error_is_exposed_as_source() {
        let inner = GridError::AllocationFailed {
            requested: 8,
            budget: None,
        };
        let err = MatrixError::from(inner.clone());
        assert_eq!(err, MatrixError::Storage(inner));
        assert!(err.source().is_some());
    }

    #[test]
    fn length_mismatch_maps_across() {
        let err = MatrixError::from(GridError::LengthMismatch {
            expected: 6,
            actual: 5,
        });
        assert_eq!(
            err,
            MatrixError::LengthMismatch {
                expected: 6,
                actual: 5
            }
        );
        assert!(err.source().is_none());
    }
}
