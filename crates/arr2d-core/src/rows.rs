//! Slice-level row kernels shared by the matrix storage backends.
//!
//! Every kernel touches only columns `>= start_col`. Columns before the
//! current pivot column are already eliminated, so the elimination engine
//! skips them.

use crate::scalar::Scalar;

/// Borrow two distinct elements of a slice mutably.
///
/// # Panics
///
/// Panics if `a == b` or either index is out of bounds.
pub fn pair_mut<R>(items: &mut [R], a: usize, b: usize) -> (&mut R, &mut R) {
    assert!(a != b, "pair_mut requires distinct indices, got {a} twice");
    if a < b {
        let (lo, hi) = items.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = items.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}

/// Exchange `a[start_col..]` with `b[start_col..]`.
pub fn swap_from<T>(a: &mut [T], b: &mut [T], start_col: usize) {
    a[start_col..].swap_with_slice(&mut b[start_col..]);
}

/// `row[c] *= scalar` for `c >= start_col`.
pub fn scale_from<T: Scalar>(row: &mut [T], scalar: T, start_col: usize) {
    for v in &mut row[start_col..] {
        *v *= scalar;
    }
}

/// `dst[c] += src[c] * scalar` for `c >= start_col`.
pub fn add_scaled_from<T: Scalar>(dst: &mut [T], src: &[T], scalar: T, start_col: usize) {
    for (d, &s) in dst[start_col..].iter_mut().zip(&src[start_col..]) {
        *d += s * scalar;
    }
}

/// `row[c] += row[c] * scalar` for `c >= start_col`; adding a row to itself.
pub fn add_scaled_self<T: Scalar>(row: &mut [T], scalar: T, start_col: usize) {
    for v in &mut row[start_col..] {
        let s = *v;
        *v += s * scalar;
    }
}

/// Column index of the first non-zero entry, or `row.len()` if none.
pub fn first_nonzero<T: Scalar>(row: &[T]) -> usize {
    row.iter()
        .position(|v| !v.is_zero())
        .unwrap_or(row.len())
}
