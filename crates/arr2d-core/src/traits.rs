//! The row-operation contract driven by the elimination engine.

use crate::scalar::Scalar;

/// Elementary row operations over a dense `rows x cols` matrix.
///
/// Implemented directly by each storage backend; the elimination engine
/// is generic over this trait and never sees the storage layout. Every
/// mutating operation is restricted to columns `>= start_col`; pass `0`
/// to touch the whole row.
///
/// Row and column indices must be in range. Implementations panic
/// otherwise.
pub trait RowOps {
    /// Element type.
    type Scalar: Scalar;

    /// Number of rows.
    fn rows(&self) -> usize;

    /// Number of columns.
    fn cols(&self) -> usize;

    /// Read the element at `(row, col)`.
    fn entry(&self, row: usize, col: usize) -> Self::Scalar;

    /// Overwrite the element at `(row, col)`.
    fn set_entry(&mut self, row: usize, col: usize, value: Self::Scalar);

    /// Exchange rows `a` and `b`. A no-op when `a == b`.
    fn row_swap(&mut self, a: usize, b: usize, start_col: usize);

    /// Multiply row `row` by `scalar`.
    fn row_scale(&mut self, row: usize, scalar: Self::Scalar, start_col: usize);

    /// Add row `from` into row `to`.
    fn row_add(&mut self, from: usize, to: usize, start_col: usize) {
        self.row_add_scaled(from, Self::Scalar::ONE, to, start_col);
    }

    /// Add `scalar` times row `from` into row `to`.
    fn row_add_scaled(&mut self, from: usize, scalar: Self::Scalar, to: usize, start_col: usize);

    /// Column of the first non-zero entry of `row`, or [`RowOps::cols`]
    /// if the row is entirely zero.
    fn row_pivot(&self, row: usize) -> usize {
        let cols = self.cols();
        (0..cols)
            .find(|&col| !self.entry(row, col).is_zero())
            .unwrap_or(cols)
    }
}
