//! Compile-time-dimensioned matrices.

use std::fmt;
use std::ops::{Index, IndexMut};

use arr2d_core::{rows, MatrixError, RowOps, Scalar};

use crate::echelon;

/// An `M x N` matrix stored inline, row-major.
///
/// Dimensions are part of the type, so shape mismatches in arithmetic
/// are compile errors and the value has no heap allocation; copying a
/// `Matrix` is a plain memory copy.
///
/// # Examples
///
/// ```
/// use arr2d_matrix::Matrix;
///
/// let a = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
/// let b = a.transpose();
/// let product = a * b;
/// assert_eq!(product, Matrix::from_rows([[14, 32], [32, 77]]));
/// assert_eq!(*a.at::<1, 2>(), 6);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix<T, const M: usize, const N: usize> {
    pub(crate) data: [[T; N]; M],
}

impl<T, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Build from row-major nested arrays.
    pub const fn from_rows(data: [[T; N]; M]) -> Self {
        Self { data }
    }

    /// Number of rows, `M`.
    pub const fn rows(&self) -> usize {
        M
    }

    /// Number of columns, `N`.
    pub const fn cols(&self) -> usize {
        N
    }

    /// Number of elements, `M * N`.
    pub const fn size(&self) -> usize {
        M * N
    }

    /// Element at `(R, C)`, with the range checked at compile time.
    ///
    /// ```compile_fail
    /// use arr2d_matrix::Matrix;
    /// let m: Matrix<f64, 2, 2> = Matrix::zeros();
    /// let _ = m.at::<2, 0>();
    /// ```
    pub fn at<const R: usize, const C: usize>(&self) -> &T {
        const { assert!(R < M && C < N, "matrix index out of declared range") };
        &self.data[R][C]
    }

    /// Mutable element at `(R, C)`, with the range checked at compile time.
    pub fn at_mut<const R: usize, const C: usize>(&mut self) -> &mut T {
        const { assert!(R < M && C < N, "matrix index out of declared range") };
        &mut self.data[R][C]
    }

    /// The rows as nested arrays.
    pub fn as_rows(&self) -> &[[T; N]; M] {
        &self.data
    }

    /// The rows as mutable nested arrays.
    pub fn as_rows_mut(&mut self) -> &mut [[T; N]; M] {
        &mut self.data
    }

    /// All elements as one row-major slice.
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    /// Row-major iterator over elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Row-major mutable iterator over elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.as_flattened_mut().iter_mut()
    }

    /// Unwrap into the nested row arrays.
    pub fn into_rows(self) -> [[T; N]; M] {
        self.data
    }
}

impl<T: Copy, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Every element set to `value`.
    pub fn filled(value: T) -> Self {
        Self {
            data: [[value; N]; M],
        }
    }

    /// Build from column-major nested arrays: `cols[c][r]` lands at `(r, c)`.
    pub fn from_cols(cols: [[T; M]; N]) -> Self {
        Self {
            data: std::array::from_fn(|r| std::array::from_fn(|c| cols[c][r])),
        }
    }

    /// Build from a row-major slice of exactly `M * N` elements.
    pub fn from_row_major(values: &[T]) -> Result<Self, MatrixError> {
        if values.len() != M * N {
            return Err(MatrixError::LengthMismatch {
                expected: M * N,
                actual: values.len(),
            });
        }
        Ok(Self {
            data: std::array::from_fn(|r| std::array::from_fn(|c| values[r * N + c])),
        })
    }

    /// The `N x M` transpose.
    pub fn transpose(&self) -> Matrix<T, N, M> {
        Matrix {
            data: std::array::from_fn(|c| std::array::from_fn(|r| self.data[r][c])),
        }
    }

    /// Elementwise conversion to another scalar type of the same shape.
    ///
    /// Limited to lossless conversions (`U: From<T>`), e.g. `i32` to `f64`.
    pub fn cast<U: From<T>>(&self) -> Matrix<U, M, N> {
        Matrix {
            data: self.data.map(|row| row.map(U::from)),
        }
    }
}

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// The zero matrix.
    pub fn zeros() -> Self {
        Self::filled(T::ZERO)
    }

    /// Multiply every element by `scalar`.
    pub fn scale(&self, scalar: T) -> Self {
        Self {
            data: self.data.map(|row| row.map(|v| v * scalar)),
        }
    }

    /// Reduce to row echelon form in place; see [`echelon::make_ref`].
    pub fn make_ref(&mut self) {
        echelon::make_ref(self);
    }

    /// Back-substitute to reduced row echelon form; see [`echelon::make_rref`].
    pub fn make_rref(&mut self) {
        echelon::make_rref(self);
    }

    /// [`Matrix::make_ref`] then [`Matrix::make_rref`].
    pub fn solve(&mut self) {
        echelon::solve(self);
    }

    /// Pivot column of every non-zero row; see [`echelon::pivot_columns`].
    pub fn pivot_columns(&self) -> smallvec::SmallVec<[usize; 8]> {
        echelon::pivot_columns(self)
    }

    /// Number of non-zero rows; the rank once in echelon form.
    pub fn rank(&self) -> usize {
        echelon::rank(self)
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// The `N x N` identity.
    pub fn identity() -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.data[i][i] = T::ONE;
        }
        m
    }
}

impl<T: Scalar, const M: usize, const N: usize> Default for Matrix<T, M, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const M: usize, const N: usize> From<[[T; N]; M]> for Matrix<T, M, N> {
    fn from(data: [[T; N]; M]) -> Self {
        Self { data }
    }
}

impl<T: Scalar, const M: usize, const N: usize> RowOps for Matrix<T, M, N> {
    type Scalar = T;

    fn rows(&self) -> usize {
        M
    }

    fn cols(&self) -> usize {
        N
    }

    fn entry(&self, row: usize, col: usize) -> T {
        self.data[row][col]
    }

    fn set_entry(&mut self, row: usize, col: usize, value: T) {
        self.data[row][col] = value;
    }

    fn row_swap(&mut self, a: usize, b: usize, start_col: usize) {
        if a == b {
            return;
        }
        let (ra, rb) = rows::pair_mut(&mut self.data, a, b);
        rows::swap_from(ra, rb, start_col);
    }

    fn row_scale(&mut self, row: usize, scalar: T, start_col: usize) {
        rows::scale_from(&mut self.data[row], scalar, start_col);
    }

    fn row_add_scaled(&mut self, from: usize, scalar: T, to: usize, start_col: usize) {
        if from == to {
            rows::add_scaled_self(&mut self.data[to], scalar, start_col);
            return;
        }
        let (dst, src) = rows::pair_mut(&mut self.data, to, from);
        rows::add_scaled_from(dst, src, scalar, start_col);
    }

    fn row_pivot(&self, row: usize) -> usize {
        rows::first_nonzero(&self.data[row])
    }
}

impl<T, const M: usize, const N: usize> Index<(usize, usize)> for Matrix<T, M, N> {
    type Output = T;

    /// Element at `(row, col)`. Panics if out of range.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row][col]
    }
}

impl<T, const M: usize, const N: usize> IndexMut<(usize, usize)> for Matrix<T, M, N> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row][col]
    }
}

impl<'a, T, const M: usize, const N: usize> IntoIterator for &'a Matrix<T, M, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, const M: usize, const N: usize> fmt::Debug for Matrix<T, M, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix<{M}x{N}>")?;
        f.debug_list().entries(self.data.iter()).finish()
    }
}

/// Row-major text: elements separated by one space, one line per row.
impl<T: fmt::Display, const M: usize, const N: usize> fmt::Display for Matrix<T, M, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.data {
            for (i, v) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{v}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
