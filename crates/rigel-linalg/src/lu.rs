//! LU decomposition of square matrices.

use crate::{traits::Float, DegenerateInput, Matrix, Number, Vector};

/// The LU decomposition of an `N`x`N` matrix `A`, with optional partial pivoting.
///
/// The factors satisfy `L * U = P * A`, where `P` is the row permutation recorded during
/// decomposition (the identity when no pivoting is performed):
///
/// - [`LuDecomposition::lower`] is lower triangular and carries the pivots on its diagonal.
/// - [`LuDecomposition::upper`] is upper triangular with a unit diagonal.
///
/// Like every unchecked operation in this crate, decomposing a singular matrix does not fail: it
/// stores a zero (or tiny) pivot, and solving afterwards produces NaN or infinite values. The
/// checked [`LuDecomposition::try_decompose_pivoted`] rejects pivots below a tolerance instead.
///
/// # Examples
///
/// ```
/// # use rigel_linalg::*;
/// # use approx::assert_relative_eq;
/// let a = Matrix::from_rows([
///     [1.0, 2.0, 0.0],
///     [3.0, 4.0, 4.0],
///     [5.0, 6.0, 3.0],
/// ]);
/// let lu = LuDecomposition::decompose_pivoted(a);
/// assert!(lu.lower().is_lower());
/// assert!(lu.upper().is_upper());
/// assert_relative_eq!(lu.product(), lu.permutation_matrix() * a, epsilon = 1e-12);
///
/// let x = lu.solve_vector(vec3(3.0, 15.0, 14.0));
/// assert_relative_eq!(a * x, vec3(3.0, 15.0, 14.0), epsilon = 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuDecomposition<T, const N: usize> {
    lower: Matrix<T, N, N>,
    upper: Matrix<T, N, N>,
    permutation: Vector<usize, N>,
    swaps: usize,
}

impl<T: Number, const N: usize> LuDecomposition<T, N> {
    /// Decomposes `matrix` without pivoting.
    ///
    /// This is only numerically sound when no zero (or tiny) pivot shows up on the diagonal.
    /// Prefer [`LuDecomposition::decompose_pivoted`] unless the matrix is known to be diagonally
    /// dominant.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// let lu = LuDecomposition::decompose(Matrix::from_rows([
    ///     [2.0, 4.0],
    ///     [1.0, 5.0],
    /// ]));
    /// assert_eq!(lu.lower(), Matrix::from_rows([[2.0, 0.0], [1.0, 3.0]]));
    /// assert_eq!(lu.upper(), Matrix::from_rows([[1.0, 2.0], [0.0, 1.0]]));
    /// assert_eq!(lu.permutation(), [0, 1]);
    /// ```
    pub fn decompose(matrix: Matrix<T, N, N>) -> Self {
        let mut lu = Self::start(matrix);
        for k in 0..N {
            lu.eliminate(k);
        }
        lu
    }

    fn start(matrix: Matrix<T, N, N>) -> Self {
        Self {
            lower: Matrix::identity(),
            upper: matrix,
            permutation: Vector::from_fn(|i| i),
            swaps: 0,
        }
    }

    /// Swaps row `k` with row `pivot` in the remaining part of the working state.
    fn swap_pivot(&mut self, k: usize, pivot: usize) {
        if pivot == k {
            return;
        }
        log::trace!("lu: swapping row {k} with row {pivot}");

        self.permutation.as_mut_slice().swap(k, pivot);
        self.swaps += 1;
        for col in k..N {
            let tmp = self.upper[(k, col)];
            self.upper[(k, col)] = self.upper[(pivot, col)];
            self.upper[(pivot, col)] = tmp;
        }
        // Multipliers already stored in L travel with their rows.
        for col in 0..k {
            let tmp = self.lower[(k, col)];
            self.lower[(k, col)] = self.lower[(pivot, col)];
            self.lower[(pivot, col)] = tmp;
        }
    }

    /// Moves the pivot at `(k, k)` into L, normalizes row `k` of U, and clears column `k` below
    /// the diagonal.
    fn eliminate(&mut self, k: usize) {
        let pivot = self.upper[(k, k)];
        self.lower[(k, k)] = pivot;
        self.upper[(k, k)] = T::ONE;

        let inv = T::ONE / pivot;
        for col in k + 1..N {
            self.upper[(k, col)] = self.upper[(k, col)] * inv;
        }

        for row in k + 1..N {
            let factor = self.upper[(row, k)];
            self.lower[(row, k)] = factor;
            self.upper[(row, k)] = T::ZERO;
            for col in k + 1..N {
                self.upper[(row, col)] = self.upper[(row, col)] - self.upper[(k, col)] * factor;
            }
        }
    }

    /// Returns the lower triangular factor L, which carries the pivots on its diagonal.
    pub fn lower(&self) -> Matrix<T, N, N> {
        self.lower
    }

    /// Returns the upper triangular factor U, which has a unit diagonal.
    pub fn upper(&self) -> Matrix<T, N, N> {
        self.upper
    }

    /// Returns the row permutation: row `i` of `L * U` is row `permutation[i]` of the input.
    pub fn permutation(&self) -> Vector<usize, N> {
        self.permutation
    }

    /// Returns the permutation as a matrix `P`, so that `L * U == P * A`.
    pub fn permutation_matrix(&self) -> Matrix<T, N, N> {
        Matrix::from_fn(|row, col| {
            if self.permutation[row] == col {
                T::ONE
            } else {
                T::ZERO
            }
        })
    }

    /// Returns `L * U`, which reconstructs the row-permuted input matrix.
    pub fn product(&self) -> Matrix<T, N, N> {
        self.lower * self.upper
    }

    /// Computes the determinant of the decomposed matrix from the pivots.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// let a = Matrix::from_rows([
    ///     [0.0, 2.0],
    ///     [3.0, 1.0],
    /// ]);
    /// assert_eq!(LuDecomposition::decompose_pivoted(a).determinant(), -6.0);
    /// ```
    pub fn determinant(&self) -> T {
        let det = self
            .lower
            .diagonal()
            .iter()
            .fold(T::ONE, |acc, &pivot| acc * pivot);
        if self.swaps % 2 == 0 {
            det
        } else {
            -det
        }
    }

    /// Solves `A * X = B` for `X`, for every column of `b` at once.
    ///
    /// The permutation is applied to `b` first, followed by forward substitution with L and
    /// backward substitution with U.
    pub fn solve<const M: usize>(&self, b: Matrix<T, N, M>) -> Matrix<T, N, M> {
        let mut x = Matrix::from_fn(|row, col| b[(self.permutation[row], col)]);

        // L * Y = P * B
        for k in 0..N {
            let inv = T::ONE / self.lower[(k, k)];
            for col in 0..M {
                x[(k, col)] = x[(k, col)] * inv;
            }
            for row in k + 1..N {
                let factor = self.lower[(row, k)];
                for col in 0..M {
                    x[(row, col)] = x[(row, col)] - x[(k, col)] * factor;
                }
            }
        }

        // U * X = Y
        for k in (1..N).rev() {
            for row in 0..k {
                let factor = self.upper[(row, k)];
                for col in 0..M {
                    x[(row, col)] = x[(row, col)] - x[(k, col)] * factor;
                }
            }
        }

        x
    }

    /// Solves `A * x = b` for a single right-hand side.
    pub fn solve_vector(&self, b: Vector<T, N>) -> Vector<T, N> {
        let x = self.solve(Matrix::from_columns([b]));
        x.column(0)
    }
}

impl<T: Float, const N: usize> LuDecomposition<T, N> {
    /// Decomposes `matrix` with partial pivoting.
    ///
    /// Before eliminating column `k`, the row at or below `k` with the largest magnitude in column
    /// `k` is swapped into place. This never fails; see [`LuDecomposition`] for how singular input
    /// is handled.
    pub fn decompose_pivoted(matrix: Matrix<T, N, N>) -> Self {
        let mut lu = Self::start(matrix);
        for k in 0..N {
            let pivot = lu.find_pivot(k);
            lu.swap_pivot(k, pivot);
            lu.eliminate(k);
        }
        lu
    }

    /// Decomposes `matrix` with partial pivoting, failing if the magnitude of a pivot is at most
    /// `tolerance`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// let singular = Matrix::from_rows([
    ///     [1.0, 1.0, 1.0],
    ///     [1.0, 1.0, 1.0],
    ///     [0.0, 0.0, 1.0],
    /// ]);
    /// let err = LuDecomposition::try_decompose_pivoted(singular, 1e-12).unwrap_err();
    /// assert_eq!(err, DegenerateInput::Singular { column: 1 });
    /// ```
    pub fn try_decompose_pivoted(
        matrix: Matrix<T, N, N>,
        tolerance: T,
    ) -> Result<Self, DegenerateInput> {
        let mut lu = Self::start(matrix);
        for k in 0..N {
            let pivot = lu.find_pivot(k);
            if lu.upper[(pivot, k)].abs() <= tolerance {
                log::debug!("lu: no pivot above tolerance in column {k}");
                return Err(DegenerateInput::Singular { column: k });
            }
            lu.swap_pivot(k, pivot);
            lu.eliminate(k);
        }
        Ok(lu)
    }

    /// Returns the row at or below `k` with the largest magnitude in column `k`.
    fn find_pivot(&self, k: usize) -> usize {
        let mut best = k;
        let mut best_abs = self.upper[(k, k)].abs();
        for row in k + 1..N {
            let abs = self.upper[(row, k)].abs();
            if abs > best_abs {
                best = row;
                best_abs = abs;
            }
        }
        best
    }
}
