//! Borrowed minor views and cofactor expansion.

use std::fmt;

use crate::{Matrix, Number};

/// Read access to a square grid of elements, shared by matrices and nested minors.
pub(super) trait SquareView<T> {
    fn dim(&self) -> usize;
    fn at(&self, row: usize, col: usize) -> T;
}

impl<T: Copy, const N: usize> SquareView<T> for Matrix<T, N, N> {
    fn dim(&self) -> usize {
        N
    }

    fn at(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }
}

/// A square matrix with one row and one column removed.
///
/// A [`Minor`] borrows its parent (a [`Matrix`] or another [`Minor`]) and remaps indices on the
/// fly, so nested minors never copy any elements.
///
/// # Examples
///
/// ```
/// # use rigel_linalg::*;
/// let mat = Matrix::from_rows([
///     [1, 2, 3],
///     [4, 5, 6],
///     [7, 8, 9],
/// ]);
/// let minor = mat.minor(0, 1);
/// assert_eq!(minor.dim(), 2);
/// assert_eq!(minor.get(0, 0), 4);
/// assert_eq!(minor.get(1, 1), 9);
/// assert_eq!(minor.determinant(), 4 * 9 - 6 * 7);
/// ```
pub struct Minor<'a, T> {
    parent: &'a dyn SquareView<T>,
    row: usize,
    col: usize,
}

impl<'a, T: Copy> Minor<'a, T> {
    pub(super) fn new(parent: &'a dyn SquareView<T>, row: usize, col: usize) -> Self {
        let dim = parent.dim();
        assert!(
            row < dim && col < dim,
            "minor ({row}, {col}) out of bounds for dimension {dim}"
        );
        Self { parent, row, col }
    }

    /// Returns the number of rows (and columns) of this view.
    pub fn dim(&self) -> usize {
        self.parent.dim() - 1
    }

    /// Returns the element at `row` and `col` of this view.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> T {
        let dim = self.dim();
        assert!(
            row < dim && col < dim,
            "index ({row}, {col}) out of bounds for minor of dimension {dim}"
        );
        self.at(row, col)
    }

    /// Returns a view of `self` with `row` and `col` removed.
    pub fn minor(&self, row: usize, col: usize) -> Minor<'_, T> {
        Minor::new(self, row, col)
    }

    /// Computes the determinant of this view by cofactor expansion.
    pub fn determinant(&self) -> T
    where
        T: Number,
    {
        determinant(self)
    }
}

impl<'a, T: Copy> SquareView<T> for Minor<'a, T> {
    fn dim(&self) -> usize {
        self.parent.dim() - 1
    }

    fn at(&self, row: usize, col: usize) -> T {
        let row = if row >= self.row { row + 1 } else { row };
        let col = if col >= self.col { col + 1 } else { col };
        self.parent.at(row, col)
    }
}

impl<'a, T: Copy + fmt::Debug> fmt::Debug for Minor<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dim = self.dim();
        f.debug_list()
            .entries((0..dim).map(|row| (0..dim).map(|col| self.at(row, col)).collect::<Vec<_>>()))
            .finish()
    }
}

/// Cofactor expansion along the first row.
pub(super) fn determinant<T: Number>(view: &dyn SquareView<T>) -> T {
    match view.dim() {
        0 => T::ONE,
        1 => view.at(0, 0),
        2 => view.at(0, 0) * view.at(1, 1) - view.at(0, 1) * view.at(1, 0),
        n => {
            let mut det = T::ZERO;
            let mut sign = T::ONE;
            for col in 0..n {
                let minor = Minor::new(view, 0, col);
                det = det + sign * view.at(0, col) * determinant(&minor);
                sign = -sign;
            }
            det
        }
    }
}
