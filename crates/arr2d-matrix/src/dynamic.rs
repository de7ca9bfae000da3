//! Runtime-dimensioned matrices backed by a [`Grid`].

use std::fmt;
use std::ops::{Index, IndexMut};

use arr2d_core::{rows, GridError, MatrixError, RowOps, Scalar};
use arr2d_grid::{Grid, GridAlloc, Heap};

use crate::echelon;
use crate::fixed::Matrix;

/// A `rows x cols` matrix whose shape is chosen at runtime.
///
/// Storage is a [`Grid`] with `width == cols` and `height == rows`, so the
/// buffer is row-major and allocation goes through the grid's
/// [`GridAlloc`]. Indexing is `(row, col)`, the transpose of the grid's
/// `(x, y)`.
///
/// Arithmetic checks shapes and returns [`MatrixError::IncompatibleShapes`]
/// on mismatch instead of panicking.
pub struct DynMatrix<T, A: GridAlloc = Heap> {
    grid: Grid<T, A>,
}

impl<T: Scalar> DynMatrix<T, Heap> {
    /// A `rows x cols` zero matrix on the heap.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Self::zeros_in(rows, cols, Heap)
    }

    /// Build from a row-major slice of exactly `rows * cols` elements.
    pub fn from_row_major(rows: usize, cols: usize, values: &[T]) -> Result<Self, MatrixError> {
        let grid = Grid::from_vec(cols, rows, values.to_vec())?;
        Ok(Self { grid })
    }

    /// The `n x n` identity.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let grid = Grid::from_fn(n, n, |x, y| if x == y { T::ONE } else { T::ZERO })?;
        Ok(Self { grid })
    }

    /// Copy a fixed-size matrix onto the heap.
    pub fn from_fixed<const M: usize, const N: usize>(
        m: &Matrix<T, M, N>,
    ) -> Result<Self, MatrixError> {
        let grid = Grid::from_fn(N, M, |x, y| m[(y, x)])?;
        Ok(Self { grid })
    }
}

impl<T: Scalar, A: GridAlloc> DynMatrix<T, A> {
    /// A `rows x cols` zero matrix allocated through `alloc`.
    pub fn zeros_in(rows: usize, cols: usize, alloc: A) -> Result<Self, MatrixError> {
        let grid = Grid::from_fn_in(cols, rows, alloc, |_, _| T::ZERO)?;
        Ok(Self { grid })
    }

    /// Checked element access.
    ///
    /// Errors name the grid axis: a bad `col` is reported on `x`, a bad
    /// `row` on `y`.
    pub fn at(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        Ok(*self.grid.at(col, row)?)
    }

    /// Checked mutable element access.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        Ok(self.grid.at_mut(col, row)?)
    }

    /// The `cols x rows` transpose, allocated through a clone of this
    /// matrix's allocator.
    pub fn transpose(&self) -> Result<Self, MatrixError> {
        let grid = Grid::from_fn_in(
            self.rows(),
            self.cols(),
            self.grid.allocator().clone(),
            |x, y| self.grid[(y, x)],
        )?;
        Ok(Self { grid })
    }

    /// Elementwise sum. Shapes must match exactly.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.zip_with("add", rhs, |a, b| a + b)
    }

    /// Elementwise difference. Shapes must match exactly.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.zip_with("sub", rhs, |a, b| a - b)
    }

    /// Matrix product. `self.cols()` must equal `rhs.rows()`.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if self.cols() != rhs.rows() {
            return Err(self.incompatible("mul", rhs));
        }
        let inner = self.cols();
        let grid = Grid::from_fn_in(
            rhs.cols(),
            self.rows(),
            self.grid.allocator().clone(),
            |col, row| {
                let mut acc = T::ZERO;
                for k in 0..inner {
                    acc += self[(row, k)] * rhs[(k, col)];
                }
                acc
            },
        )?;
        Ok(Self { grid })
    }

    /// Multiply every element by `scalar`, in place.
    pub fn scale(&mut self, scalar: T) {
        for v in self.grid.iter_mut() {
            *v *= scalar;
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

    /// [`DynMatrix::make_ref`] then [`DynMatrix::make_rref`].
    pub fn solve(&mut self) {
        echelon::solve(self);
    }

    /// Number of non-zero rows; the rank once in echelon form.
    pub fn rank(&self) -> usize {
        echelon::rank(self)
    }

    fn zip_with(
        &self,
        op: &'static str,
        rhs: &Self,
        f: impl Fn(T, T) -> T,
    ) -> Result<Self, MatrixError> {
        if self.rows() != rhs.rows() || self.cols() != rhs.cols() {
            return Err(self.incompatible(op, rhs));
        }
        let grid = Grid::from_fn_in(
            self.cols(),
            self.rows(),
            self.grid.allocator().clone(),
            |x, y| f(self.grid[(x, y)], rhs.grid[(x, y)]),
        )?;
        Ok(Self { grid })
    }

    fn incompatible(&self, op: &'static str, rhs: &Self) -> MatrixError {
        MatrixError::IncompatibleShapes {
            op,
            lhs: (self.rows(), self.cols()),
            rhs: (rhs.rows(), rhs.cols()),
        }
    }
}

impl<T, A: GridAlloc> DynMatrix<T, A> {
    /// Wrap a grid; its height becomes the row count.
    pub fn from_grid(grid: Grid<T, A>) -> Self {
        Self { grid }
    }

    /// Unwrap into the backing grid.
    pub fn into_grid(self) -> Grid<T, A> {
        self.grid
    }

    /// The backing grid.
    pub fn as_grid(&self) -> &Grid<T, A> {
        &self.grid
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.grid.height()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.grid.width()
    }

    /// Row `row` as a slice.
    pub fn row(&self, row: usize) -> &[T] {
        self.grid.row(row)
    }

    /// Deep copy through a clone of the allocator.
    pub fn try_clone(&self) -> Result<Self, GridError>
    where
        T: Clone,
    {
        Ok(Self {
            grid: self.grid.try_clone()?,
        })
    }
}

impl<T: Scalar, A: GridAlloc> RowOps for DynMatrix<T, A> {
    type Scalar = T;

    fn rows(&self) -> usize {
        self.grid.height()
    }

    fn cols(&self) -> usize {
        self.grid.width()
    }

    fn entry(&self, row: usize, col: usize) -> T {
        self.grid[(col, row)]
    }

    fn set_entry(&mut self, row: usize, col: usize, value: T) {
        self.grid[(col, row)] = value;
    }

    fn row_swap(&mut self, a: usize, b: usize, start_col: usize) {
        if a == b {
            return;
        }
        let (ra, rb) = self.grid.row_pair_mut(a, b);
        rows::swap_from(ra, rb, start_col);
    }

    fn row_scale(&mut self, row: usize, scalar: T, start_col: usize) {
        rows::scale_from(self.grid.row_mut(row), scalar, start_col);
    }

    fn row_add_scaled(&mut self, from: usize, scalar: T, to: usize, start_col: usize) {
        if from == to {
            rows::add_scaled_self(self.grid.row_mut(to), scalar, start_col);
            return;
        }
        let (dst, src) = self.grid.row_pair_mut(to, from);
        rows::add_scaled_from(dst, src, scalar, start_col);
    }

    fn row_pivot(&self, row: usize) -> usize {
        rows::first_nonzero(self.grid.row(row))
    }
}

impl<T, A: GridAlloc> Index<(usize, usize)> for DynMatrix<T, A> {
    type Output = T;

    /// Element at `(row, col)`. Panics if out of range.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.grid[(col, row)]
    }
}

impl<T, A: GridAlloc> IndexMut<(usize, usize)> for DynMatrix<T, A> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.grid[(col, row)]
    }
}

impl<T: PartialEq, A: GridAlloc, B: GridAlloc> PartialEq<DynMatrix<T, B>> for DynMatrix<T, A> {
    fn eq(&self, other: &DynMatrix<T, B>) -> bool {
        self.grid == other.grid
    }
}

impl<T: PartialEq, A: GridAlloc, const M: usize, const N: usize> PartialEq<Matrix<T, M, N>>
    for DynMatrix<T, A>
{
    fn eq(&self, other: &Matrix<T, M, N>) -> bool {
        self.rows() == M && self.cols() == N && self.grid.as_slice() == other.as_slice()
    }
}

impl<T: fmt::Debug, A: GridAlloc> fmt::Debug for DynMatrix<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynMatrix")
            .field("rows", &self.rows())
            .field("cols", &self.cols())
            .field("data", &self.grid.as_slice())
            .finish()
    }
}

/// Same layout as [`Grid`]'s `Display`.
impl<T: fmt::Display, A: GridAlloc> fmt::Display for DynMatrix<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}
