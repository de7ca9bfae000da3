//! Gaussian elimination with partial pivoting.
//!
//! The engine is generic over [`RowOps`] and never touches storage
//! directly. [`make_ref`] walks a `(row, column)` cursor from `(0, 0)`:
//!
//! 1. Among rows `row..rows`, pick the largest magnitude in `column`.
//!    Ties go to the first row encountered.
//! 2. If that magnitude is zero the column has no pivot: advance the
//!    column only and retry at the same row.
//! 3. Otherwise swap the chosen row up, normalize it so the pivot is one,
//!    and cancel the column in every row below. Advance both.
//!
//! It stops when either the rows or the columns run out. Only rows are
//! permuted, never columns, so a rank-deficient matrix ends with fewer
//! pivots than `min(rows, cols)` and all-zero rows at the bottom.
//!
//! [`make_rref`] then walks rows bottom-up and cancels each pivot column
//! in the rows above it.
//!
//! Normalizing multiplies by the pivot's reciprocal and then writes
//! [`Scalar::ONE`] into the pivot cell, so cancellation `v + (-v) * 1`
//! is exact and no float residue is mistaken for a later pivot. When the
//! reciprocal itself is zero (an integer pivot other than `±1`) the row
//! is left zeroed, as truncation dictates.

use arr2d_core::{RowOps, Scalar};
use smallvec::SmallVec;

/// Reduce `m` to row echelon form in place.
///
/// Every pivot becomes one; entries below each pivot become zero.
pub fn make_ref<R: RowOps + ?Sized>(m: &mut R) {
    let rows = m.rows();
    let cols = m.cols();
    let mut curr_row = 0;
    let mut curr_col = 0;

    while curr_row < rows && curr_col < cols {
        let mut largest = curr_row;
        for row in curr_row + 1..rows {
            if m.entry(largest, curr_col).abs() < m.entry(row, curr_col).abs() {
                largest = row;
            }
        }

        let pivot = m.entry(largest, curr_col);
        if pivot.is_zero() {
            log::trace!("column {curr_col} has no pivot at or below row {curr_row}");
            curr_col += 1;
            continue;
        }
        log::trace!("pivot {pivot:?} for column {curr_col} found in row {largest}");

        if largest != curr_row {
            m.row_swap(curr_row, largest, curr_col);
        }

        let inverse = pivot.recip();
        m.row_scale(curr_row, inverse, curr_col);
        // A truncated integer reciprocal zeroes the row; leave it zero.
        if !inverse.is_zero() {
            m.set_entry(curr_row, curr_col, R::Scalar::ONE);
        }

        for row in curr_row + 1..rows {
            let factor = m.entry(row, curr_col);
            m.row_add_scaled(curr_row, -factor, row, curr_col);
        }

        curr_row += 1;
        curr_col += 1;
    }
}

/// Back-substitute a row echelon matrix into reduced row echelon form.
///
/// Expects the output of [`make_ref`]. Row 0 has nothing above it and is
/// never used as a source; an empty matrix is left alone.
pub fn make_rref<R: RowOps + ?Sized>(m: &mut R) {
    let cols = m.cols();
    for curr_row in (1..m.rows()).rev() {
        let pivot = m.row_pivot(curr_row);
        if pivot == cols {
            continue;
        }
        for row in 0..curr_row {
            let factor = m.entry(row, pivot);
            m.row_add_scaled(curr_row, -factor, row, pivot);
        }
    }
}

/// [`make_ref`] followed by [`make_rref`].
pub fn solve<R: RowOps + ?Sized>(m: &mut R) {
    make_ref(m);
    make_rref(m);
}

/// Pivot column of every non-zero row, top to bottom.
///
/// After [`make_ref`] the result is strictly increasing and its length is
/// the rank. Columns absent from it correspond to free variables.
pub fn pivot_columns<R: RowOps + ?Sized>(m: &R) -> SmallVec<[usize; 8]> {
    let cols = m.cols();
    (0..m.rows())
        .map(|row| m.row_pivot(row))
        .filter(|&pivot| pivot != cols)
        .collect()
}

/// Number of non-zero rows. Equals the rank once `m` is in echelon form.
pub fn rank<R: RowOps + ?Sized>(m: &R) -> usize {
    pivot_columns(m).len()
}

/// Whether `m` is in row echelon form with unit pivots.
///
/// Pivots move strictly right going down, each pivot is exactly one,
/// and all-zero rows come last.
pub fn is_ref<R: RowOps + ?Sized>(m: &R) -> bool {
    let cols = m.cols();
    let mut prev: Option<usize> = None;
    let mut seen_zero_row = false;
    for row in 0..m.rows() {
        let pivot = m.row_pivot(row);
        if pivot == cols {
            seen_zero_row = true;
            continue;
        }
        if seen_zero_row || prev.is_some_and(|p| pivot <= p) {
            return false;
        }
        if m.entry(row, pivot) != R::Scalar::ONE {
            return false;
        }
        prev = Some(pivot);
    }
    true
}

/// Whether `m` is in reduced row echelon form.
///
/// [`is_ref`] holds and every pivot column is zero outside its pivot row.
pub fn is_rref<R: RowOps + ?Sized>(m: &R) -> bool {
    if !is_ref(m) {
        return false;
    }
    let cols = m.cols();
    for row in 0..m.rows() {
        let pivot = m.row_pivot(row);
        if pivot == cols {
            break;
        }
        let clean = (0..m.rows())
            .filter(|&other| other != row)
            .all(|other| m.entry(other, pivot).is_zero());
        if !clean {
            return false;
        }
    }
    true
}
