//! The owned two-dimensional grid.
//!
//! A [`Grid`] owns exactly one contiguous buffer of `width * height`
//! elements in row-major order. Cell `(x, y)` lives at flat offset
//! `y * width + x`; row starts are computed, never stored, so there is
//! no second allocation to keep in sync with the first.
//!
//! # Ownership
//!
//! - **Copy** ([`Grid::try_clone`], [`Grid::assign_from`]) allocates and
//!   fills the replacement buffer before the receiver is touched. If the
//!   allocation fails the receiver is unchanged.
//! - **Move** ([`Grid::take`], [`Grid::move_from`]) transfers the buffer in
//!   O(1) and leaves the source as the empty `0 x 0` grid.
//! - **Swap** ([`Grid::swap`]) exchanges buffers in O(1) without copying
//!   elements.
//!
//! Self-assignment cannot be expressed: `assign_from(&mut self, &Self)`
//! and `move_from(&mut self, &mut Self)` cannot alias under the borrow
//! checker.

use std::fmt;
use std::ops::{Index, IndexMut};

use arr2d_core::{Axis, GridError};

use crate::alloc::{bytes_for, GridAlloc, Heap};

/// A dense, dynamically-sized 2D array with a single owned buffer.
///
/// Coordinates are `(x, y)` with `0 <= x < width` and `0 <= y < height`.
/// Flat indices are row-major: `index = y * width + x`.
///
/// # Examples
///
/// ```
/// use arr2d_grid::Grid;
///
/// let mut g: Grid<i32> = Grid::new(3, 2).unwrap();
/// *g.get_mut(2, 1) = 7;
/// assert_eq!(g.size(), 6);
/// assert_eq!(g.at_flat(5), Ok(&7));
/// assert!(g.at(3, 0).is_err());
/// ```
pub struct Grid<T, A: GridAlloc = Heap> {
    /// Row-major cells; `data.len() == width * height` always.
    data: Vec<T>,
    width: usize,
    height: usize,
    alloc: A,
}

impl<T> Grid<T, Heap> {
    /// Create a `width x height` grid of `T::default()` on the heap.
    ///
    /// Returns `Err(GridError::AllocationFailed)` if the buffer cannot be
    /// allocated or `width * height` overflows.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError>
    where
        T: Default,
    {
        Self::new_in(width, height, Heap)
    }

    /// Create a grid whose cells are produced by `f(x, y)`, in row-major order.
    pub fn from_fn(
        width: usize,
        height: usize,
        f: impl FnMut(usize, usize) -> T,
    ) -> Result<Self, GridError> {
        Self::from_fn_in(width, height, Heap, f)
    }

    /// Adopt an existing row-major buffer.
    ///
    /// Returns `Err(GridError::LengthMismatch)` if `data.len()` is not
    /// `width * height`; the buffer is dropped in that case.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self, GridError> {
        let expected = checked_size::<T>(width, height)?;
        if data.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            alloc: Heap,
        })
    }
}

impl<T, A: GridAlloc> Grid<T, A> {
    /// Create a `width x height` grid of `T::default()` using `alloc`.
    pub fn new_in(width: usize, height: usize, alloc: A) -> Result<Self, GridError>
    where
        T: Default,
    {
        Self::from_fn_in(width, height, alloc, |_, _| T::default())
    }

    /// Create a grid using `alloc`, with cells produced by `f(x, y)`.
    ///
    /// Nothing is returned until every cell is initialized. If `f` panics,
    /// the partially filled buffer is dropped with it.
    pub fn from_fn_in(
        width: usize,
        height: usize,
        alloc: A,
        mut f: impl FnMut(usize, usize) -> T,
    ) -> Result<Self, GridError> {
        let size = checked_size::<T>(width, height)?;
        let mut data = alloc.allocate::<T>(size)?;
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        log::debug!("allocated {width}x{height} grid ({} bytes)", bytes_for::<T>(size));
        Ok(Self {
            data,
            width,
            height,
            alloc,
        })
    }

    /// The empty `0 x 0` grid. Holds no allocation.
    pub fn empty_in(alloc: A) -> Self {
        Self {
            data: Vec::new(),
            width: 0,
            height: 0,
            alloc,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells, `width * height`.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Whether the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The allocator backing this grid.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    // ── Unchecked access ────────────────────────────────────────

    /// Cell at `(x, y)` without reporting range errors.
    ///
    /// # Panics
    ///
    /// Panics if the computed offset falls outside the buffer. An `x`
    /// past the row end but inside the buffer is a contract violation
    /// that debug builds catch.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> &T {
        debug_assert!(x < self.width, "x {x} >= width {}", self.width);
        &self.data[y * self.width + x]
    }

    /// Mutable cell at `(x, y)`; see [`Grid::get`].
    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut T {
        debug_assert!(x < self.width, "x {x} >= width {}", self.width);
        &mut self.data[y * self.width + x]
    }

    /// Cell at flat row-major `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= size()`.
    #[inline]
    pub fn get_flat(&self, index: usize) -> &T {
        &self.data[index]
    }

    /// Mutable cell at flat row-major `index`.
    #[inline]
    pub fn get_flat_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }

    // ── Checked access ──────────────────────────────────────────

    /// Cell at `(x, y)`, or `Err(GridError::OutOfRange)`.
    ///
    /// `x` is checked against the width before `y` against the height.
    pub fn at(&self, x: usize, y: usize) -> Result<&T, GridError> {
        let index = self.check_point(x, y)?;
        Ok(&self.data[index])
    }

    /// Mutable cell at `(x, y)`, or `Err(GridError::OutOfRange)`.
    pub fn at_mut(&mut self, x: usize, y: usize) -> Result<&mut T, GridError> {
        let index = self.check_point(x, y)?;
        Ok(&mut self.data[index])
    }

    /// Cell at flat `index`, or `Err(GridError::OutOfRange)`.
    pub fn at_flat(&self, index: usize) -> Result<&T, GridError> {
        self.check_index(index)?;
        Ok(&self.data[index])
    }

    /// Mutable cell at flat `index`, or `Err(GridError::OutOfRange)`.
    pub fn at_flat_mut(&mut self, index: usize) -> Result<&mut T, GridError> {
        self.check_index(index)?;
        Ok(&mut self.data[index])
    }

    fn check_index(&self, index: usize) -> Result<(), GridError> {
        if index >= self.size() {
            return Err(GridError::OutOfRange {
                axis: Axis::Index,
                value: index,
                bound: self.size(),
            });
        }
        Ok(())
    }

    fn check_point(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if x >= self.width {
            return Err(GridError::OutOfRange {
                axis: Axis::X,
                value: x,
                bound: self.width,
            });
        }
        if y >= self.height {
            return Err(GridError::OutOfRange {
                axis: Axis::Y,
                value: y,
                bound: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    /// Clamp a signed coordinate into `[0, width) x [0, height)`.
    ///
    /// Returns `None` for a grid with no cells, where no point is valid.
    /// Checked accessors never clamp; this is for callers doing
    /// coordinate arithmetic.
    pub fn clamp_point(&self, x: i64, y: i64) -> Option<(usize, usize)> {
        if self.is_empty() {
            return None;
        }
        Some((clamp_axis(x, self.width), clamp_axis(y, self.height)))
    }

    // ── Rows and iteration ──────────────────────────────────────

    /// The cells of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height()`.
    pub fn row(&self, y: usize) -> &[T] {
        assert!(y < self.height, "row {y} >= height {}", self.height);
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// Mutable cells of row `y`.
    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        assert!(y < self.height, "row {y} >= height {}", self.height);
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }

    /// Two distinct rows, both mutable.
    ///
    /// # Panics
    ///
    /// Panics if `a == b` or either row is out of range.
    pub fn row_pair_mut(&mut self, a: usize, b: usize) -> (&mut [T], &mut [T]) {
        assert!(a != b, "row_pair_mut requires distinct rows, got {a} twice");
        assert!(
            a < self.height && b < self.height,
            "rows ({a}, {b}) out of range for height {}",
            self.height
        );
        let w = self.width;
        let (lo, hi) = (a.min(b), a.max(b));
        let (head, tail) = self.data.split_at_mut(hi * w);
        let lo_row = &mut head[lo * w..(lo + 1) * w];
        let hi_row = &mut tail[..w];
        if a < b {
            (lo_row, hi_row)
        } else {
            (hi_row, lo_row)
        }
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// Row-major iterator over cells.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Row-major mutable iterator over cells.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// All cells as one row-major slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// All cells as one mutable row-major slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    /// Release the buffer as a row-major `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    // ── Copy, move, swap ────────────────────────────────────────

    /// Deep copy using a clone of this grid's allocator.
    ///
    /// On failure `self` is untouched and nothing is leaked.
    pub fn try_clone(&self) -> Result<Self, GridError>
    where
        T: Clone,
    {
        self.try_clone_in(self.alloc.clone())
    }

    /// Deep copy into a grid backed by `alloc`.
    pub fn try_clone_in<B: GridAlloc>(&self, alloc: B) -> Result<Grid<T, B>, GridError>
    where
        T: Clone,
    {
        let mut data = alloc.allocate::<T>(self.size())?;
        data.extend_from_slice(&self.data);
        Ok(Grid {
            data,
            width: self.width,
            height: self.height,
            alloc,
        })
    }

    /// Copy-assign: replace this grid's contents with a deep copy of `src`.
    ///
    /// The new buffer comes from this grid's allocator and is fully
    /// populated before the old buffer is released. On error (or if an
    /// element's `clone` panics) `self` keeps its previous contents.
    pub fn assign_from<B: GridAlloc>(&mut self, src: &Grid<T, B>) -> Result<(), GridError>
    where
        T: Clone,
    {
        let mut data = self.alloc.allocate::<T>(src.size())?;
        data.extend_from_slice(&src.data);
        log::debug!(
            "copy-assign {}x{} grid over {}x{}",
            src.width,
            src.height,
            self.width,
            self.height
        );
        self.data = data;
        self.width = src.width;
        self.height = src.height;
        Ok(())
    }

    /// Move the contents out, leaving `self` as the empty `0 x 0` grid.
    ///
    /// O(1); the buffer itself is transferred, not copied.
    pub fn take(&mut self) -> Self {
        let empty = Self::empty_in(self.alloc.clone());
        std::mem::replace(self, empty)
    }

    /// Move-assign: take ownership of `src`'s buffer, leaving `src` empty.
    ///
    /// The previous contents of `self` are dropped.
    pub fn move_from(&mut self, src: &mut Self) {
        *self = src.take();
    }

    /// Exchange contents with `other` in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }
}

fn checked_size<T>(width: usize, height: usize) -> Result<usize, GridError> {
    match width.checked_mul(height) {
        Some(size) => Ok(size),
        None => {
            log::warn!("grid dimensions {width}x{height} overflow usize");
            Err(GridError::AllocationFailed {
                requested: bytes_for::<T>(usize::MAX),
                budget: None,
            })
        }
    }
}

fn clamp_axis(v: i64, len: usize) -> usize {
    let max = i64::try_from(len - 1).unwrap_or(i64::MAX);
    v.clamp(0, max) as usize
}

impl<T, A: GridAlloc + Default> Default for Grid<T, A> {
    fn default() -> Self {
        Self::empty_in(A::default())
    }
}

impl<T: Clone, A: GridAlloc> Clone for Grid<T, A> {
    /// # Panics
    ///
    /// Panics if the allocation fails, like `Vec::clone`. Use
    /// [`Grid::try_clone`] to handle the error instead.
    fn clone(&self) -> Self {
        self.try_clone()
            .unwrap_or_else(|err| panic!("grid clone failed: {err}"))
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(err) = self.assign_from(source) {
            panic!("grid clone_from failed: {err}");
        }
    }
}

impl<T: fmt::Debug, A: GridAlloc> fmt::Debug for Grid<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("data", &self.data)
            .finish()
    }
}

/// Row-major text: cells separated by one space, one line per row.
impl<T: fmt::Display, A: GridAlloc> fmt::Display for Grid<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Grids are equal when their dimensions match and every cell matches.
///
/// A `2 x 3` grid never equals a `3 x 2` grid, and a grid never equals
/// another whose contents it is a prefix of.
impl<T: PartialEq, A: GridAlloc, B: GridAlloc> PartialEq<Grid<T, B>> for Grid<T, A> {
    fn eq(&self, other: &Grid<T, B>) -> bool {
        self.width == other.width && self.height == other.height && self.data == other.data
    }
}

impl<T: Eq, A: GridAlloc> Eq for Grid<T, A> {}

impl<T, A: GridAlloc> Index<usize> for Grid<T, A> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.get_flat(index)
    }
}

impl<T, A: GridAlloc> IndexMut<usize> for Grid<T, A> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.get_flat_mut(index)
    }
}

impl<T, A: GridAlloc> Index<(usize, usize)> for Grid<T, A> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        self.get(x, y)
    }
}

impl<T, A: GridAlloc> IndexMut<(usize, usize)> for Grid<T, A> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        self.get_mut(x, y)
    }
}

impl<'a, T, A: GridAlloc> IntoIterator for &'a Grid<T, A> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A: GridAlloc> IntoIterator for &'a mut Grid<T, A> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, A: GridAlloc> IntoIterator for Grid<T, A> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
