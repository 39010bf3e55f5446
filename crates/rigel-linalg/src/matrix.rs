use std::{array, fmt};

use crate::{
    traits::{Float, Number},
    DegenerateInput, LuDecomposition, One, Vector, Zero,
};

mod minor;
mod ops;
mod pretty;

pub use minor::Minor;
pub use pretty::Pretty;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 2x2 matrix with [`f64`] elements.
pub type Mat2d = Mat2<f64>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// A matrix with `R` rows and `C` columns, storing elements of type `T`.
///
/// Elements are stored contiguously in row-major order, without padding. [`Matrix::as_flat_slice`]
/// exposes that storage for interop with APIs that expect a flat buffer.
///
/// # Construction
///
/// - [`Matrix::from_rows`] takes a nested array literal (or an array of row [`Vector`]s), which is
///   the most readable way of writing down a matrix in source code.
/// - [`Matrix::from_columns`] takes one [`Vector`] per column.
/// - [`Matrix::from_fn`] invokes a closure with the row and column of each element.
/// - [`Matrix::from_generator`] invokes a zero-argument closure once per element, in row-major
///   order.
/// - [`Matrix::splat`], [`Matrix::ZERO`] and [`Matrix::identity`].
///
/// # Indexing
///
/// Elements are indexed by `(row, col)` tuples. Indexing out of bounds panics; [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`None`] instead.
///
/// # Square matrices
///
/// Square matrices additionally support [`Matrix::determinant`] (by cofactor expansion over
/// [`Minor`] views), [`Matrix::inverse`] and [`Matrix::try_inverse`] (through
/// [`LuDecomposition`]), and in-place [`Matrix::transpose`].
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; C]; R]);

unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable
    for Matrix<T, R, C>
{
}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; C]; R]);
}

impl<T: Zero + One + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Returns a matrix with ones on the main diagonal and zeroes everywhere else.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// assert_eq!(Mat2::<i32>::identity(), Matrix::from_rows([[1, 0], [0, 1]]));
    /// assert_eq!(Matrix::<i32, 2, 3>::identity(), Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 1, 0],
    /// ]));
    /// ```
    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a [`Matrix`] from an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    /// assert_eq!(mat[(0, 2)], 3);
    /// assert_eq!(mat[(1, 0)], 4);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Self(rows.map(|row| row.into().into_array()))
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// let columns = Matrix::from_columns([vec2(0, 2), vec2(1, 3)]);
    /// assert_eq!(columns, Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]));
    /// ```
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self
    where
        T: Copy,
    {
        let columns = columns.map(Into::into);
        Self::from_fn(|row, col| columns[col][row])
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each
    /// element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Creates a [`Matrix`] by invoking `next` once per element, in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// let mut i = 0;
    /// let mat: Mat2<i32> = Matrix::from_generator(|| {
    ///     i += 1;
    ///     i
    /// });
    /// assert_eq!(mat, Matrix::from_rows([[1, 2], [3, 4]]));
    /// ```
    pub fn from_generator<F>(mut next: F) -> Self
    where
        F: FnMut() -> T,
    {
        Self(array::from_fn(|_| array::from_fn(|_| next())))
    }

    /// Creates a matrix with every element set to `elem`.
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([[elem; C]; R])
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Returns the transpose of `self`, swapping rows and columns.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    /// assert_eq!(mat.transposed(), Matrix::from_rows([
    ///     [1, 4],
    ///     [2, 5],
    ///     [3, 6],
    /// ]));
    /// ```
    pub fn transposed(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self.0[col][row])
    }

    /// Returns a reference to the element at `row` and `col`, or [`None`] if either is out of
    /// bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row)?.get(col)
    }

    /// Returns a mutable reference to the element at `row` and `col`, or [`None`] if either is out
    /// of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row)?.get_mut(col)
    }

    /// Returns a copy of row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        self.0[row].into()
    }

    /// Returns a copy of column `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        Vector::from_fn(|row| self.0[row][col])
    }

    /// Swaps rows `a` and `b`.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.0.swap(a, b);
    }

    /// Returns the rows of this matrix as nested arrays.
    pub fn as_rows(&self) -> &[[T; C]; R] {
        &self.0
    }

    /// Returns the elements in row-major order as one contiguous slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// let mat = Matrix::from_rows([[1.0f32, 2.0], [3.0, 4.0]]);
    /// assert_eq!(mat.as_flat_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn as_flat_slice(&self) -> &[T]
    where
        T: bytemuck::Pod,
    {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }

    /// Mutable variant of [`Matrix::as_flat_slice`].
    pub fn as_flat_slice_mut(&mut self) -> &mut [T]
    where
        T: bytemuck::Pod,
    {
        bytemuck::cast_slice_mut(std::slice::from_mut(self))
    }

    /// Returns `true` if every element below the main diagonal is exactly zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [0, 3],
    /// ]);
    /// assert!(mat.is_upper());
    /// assert!(!mat.is_lower());
    /// ```
    pub fn is_upper(&self) -> bool
    where
        T: Zero + PartialEq,
    {
        self.0
            .iter()
            .enumerate()
            .all(|(row, elems)| elems.iter().take(row).all(|e| *e == T::ZERO))
    }

    /// Returns `true` if every element above the main diagonal is exactly zero.
    pub fn is_lower(&self) -> bool
    where
        T: Zero + PartialEq,
    {
        self.0
            .iter()
            .enumerate()
            .all(|(row, elems)| elems.iter().skip(row + 1).all(|e| *e == T::ZERO))
    }

    /// Compares each element with a relative tolerance, like [`Vector::equals`].
    pub fn equals(&self, other: &Self, max_relative: T) -> bool
    where
        T: Float,
    {
        approx::RelativeEq::relative_eq(self, other, T::EPSILON, max_relative)
    }

    /// Returns a wrapper that formats the matrix as a table with aligned columns.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// let mat = Matrix::from_rows([[1, -20], [300, 4]]);
    /// assert_eq!(mat.pretty().to_string(), "[  1 -20]\n[300   4]\n");
    /// ```
    pub fn pretty(&self) -> Pretty<'_, T, R, C> {
        Pretty::new(self)
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Transposes this square matrix in place.
    pub fn transpose(&mut self) {
        for row in 0..N {
            for col in row + 1..N {
                let (upper, lower) = self.0.split_at_mut(col);
                std::mem::swap(&mut upper[row][col], &mut lower[0][row]);
            }
        }
    }

    /// Returns the elements on the main diagonal.
    pub fn diagonal(&self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// Returns a read-only view of `self` with row `row` and column `col` removed.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn minor(&self, row: usize, col: usize) -> Minor<'_, T>
    where
        T: Copy,
    {
        Minor::new(self, row, col)
    }

    /// Computes the determinant by cofactor expansion along the first row.
    ///
    /// The cost grows factorially with `N`, which is fine for the small dimensions this type is
    /// meant for. For larger matrices, [`LuDecomposition::determinant`] is much cheaper.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [-2, -1,  2],
    ///     [ 2,  1,  4],
    ///     [-3,  3, -1],
    /// ]);
    /// assert_eq!(mat.determinant(), 54);
    /// ```
    pub fn determinant(&self) -> T
    where
        T: Number,
    {
        minor::determinant(self)
    }

    /// Returns `true` if `|det(self)| <= tolerance`.
    pub fn is_singular(&self, tolerance: T) -> bool
    where
        T: Float,
    {
        self.determinant().abs() <= tolerance
    }

    /// Computes the inverse via a pivoted [`LuDecomposition`].
    ///
    /// There is no singularity check: the inverse of a singular matrix contains NaN or infinite
    /// elements. Use [`Matrix::try_inverse`] to get an error instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// # use approx::assert_relative_eq;
    /// let mat = Matrix::from_rows([
    ///     [4.0, 7.0],
    ///     [2.0, 6.0],
    /// ]);
    /// assert_relative_eq!(mat * mat.inverse(), Mat2d::identity(), epsilon = 1e-12);
    /// ```
    pub fn inverse(&self) -> Self
    where
        T: Float,
    {
        LuDecomposition::decompose_pivoted(*self).solve(Self::identity())
    }

    /// Computes the inverse, or returns an error if a pivot's magnitude is at most `tolerance`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// let singular = Matrix::from_rows([
    ///     [1.0, 2.0],
    ///     [2.0, 4.0],
    /// ]);
    /// assert_eq!(
    ///     singular.try_inverse(1e-12),
    ///     Err(DegenerateInput::Singular { column: 1 }),
    /// );
    /// ```
    pub fn try_inverse(&self, tolerance: T) -> Result<Self, DegenerateInput>
    where
        T: Float,
    {
        Ok(LuDecomposition::try_decompose_pivoted(*self, tolerance)?.solve(Self::identity()))
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T>(&'a [T]);
        impl<'a, T: fmt::Debug> fmt::Debug for FormatRow<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (i, elem) in self.0.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in &self.0 {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}

/// Formats the matrix as `{{a, b}, {c, d}}`.
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, row) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            f.write_str("{")?;
            for (j, elem) in row.iter().enumerate() {
                if j != 0 {
                    f.write_str(", ")?;
                }
                elem.fmt(f)?;
            }
            f.write_str("}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::{vec2, vec3};

    #[test]
    fn from_rows_columns() {
        #[rustfmt::skip]
        let rows = Matrix::from_rows([
            [0, 1, 2],
            [3, 4, 5],
        ]);
        let columns = Matrix::from_columns([vec2(0, 3), vec2(1, 4), vec2(2, 5)]);
        assert_eq!(rows, columns);
        assert_eq!(rows.row(1), vec3(3, 4, 5));
        assert_eq!(rows.column(2), vec2(2, 5));
        assert_eq!(rows.as_rows(), &[[0, 1, 2], [3, 4, 5]]);
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");
        assert_eq!(mat.to_string(), "{{0, 1}, {2, 3}}");
        assert_eq!(Matrix::from_rows([[1.5, -2.0]]).to_string(), "{{1.5, -2}}");
    }

    #[test]
    fn constants() {
        assert_eq!(Mat2::<i32>::ZERO, Matrix::from_rows([[0, 0], [0, 0]]));
        assert_eq!(Mat3::<i32>::identity().diagonal(), [1, 1, 1]);
        assert_eq!(Mat3::<i32>::default(), Mat3::ZERO);
        assert_eq!(Matrix::splat(7), Matrix::from_rows([[7, 7]]));
    }

    #[test]
    fn transpose_in_place() {
        #[rustfmt::skip]
        let mut mat = Matrix::from_rows([
            [1, 2, 3],
            [4, 5, 6],
            [7, 8, 9],
        ]);
        let expected = mat.transposed();
        mat.transpose();
        assert_eq!(mat, expected);
        assert_eq!(mat.row(0), vec3(1, 4, 7));
    }

    #[test]
    fn triangular() {
        #[rustfmt::skip]
        let lower = Matrix::from_rows([
            [1.0, 0.0, 0.0],
            [2.0, 3.0, 0.0],
            [4.0, 5.0, 6.0],
        ]);
        assert!(lower.is_lower());
        assert!(!lower.is_upper());
        assert!(lower.transposed().is_upper());
        assert!(Mat3d::identity().is_upper() && Mat3d::identity().is_lower());

        // Exact comparison: tiny values still count as nonzero.
        let mut almost = Mat2d::identity();
        almost[(1, 0)] = 1e-300;
        assert!(!almost.is_upper());
    }

    #[test]
    fn determinant() {
        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [-2, -1,  2],
            [ 2,  1,  4],
            [-3,  3, -1],
        ]);
        assert_eq!(mat.determinant(), 54);
        assert_eq!(mat.transposed().determinant(), 54);
        assert_eq!(Mat4::<i32>::identity().determinant(), 1);
        assert_eq!(Matrix::<i32, 1, 1>::from_rows([[-7]]).determinant(), -7);
        assert_eq!(Matrix::<i32, 0, 0>::ZERO.determinant(), 1);

        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [2, 0, 0, 0],
            [1, 3, 0, 0],
            [9, 9, 4, 0],
            [5, 1, 8, 5],
        ]);
        assert_eq!(mat.determinant(), 2 * 3 * 4 * 5);
    }

    #[test]
    fn singular() {
        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [1.0, 2.0, 3.0],
            [2.0, 4.0, 6.0],
            [0.0, 1.0, 1.0],
        ]);
        assert!(mat.is_singular(1e-12));
        assert!(!Mat3d::identity().is_singular(1e-12));

        // Negative determinants are not singular.
        let flip = Matrix::from_rows([[0.0, 1.0], [1.0, 0.0]]);
        assert_eq!(flip.determinant(), -1.0);
        assert!(!flip.is_singular(1e-12));
    }

    #[test]
    fn inverse() {
        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [0.0, 2.0, 1.0],
            [1.0, 1.0, 0.0],
            [3.0, 0.0, 1.0],
        ]);
        let inv = mat.inverse();
        assert_relative_eq!(mat * inv, Mat3d::identity(), epsilon = 1e-12);
        assert_relative_eq!(inv * mat, Mat3d::identity(), epsilon = 1e-12);
        assert_eq!(mat.try_inverse(1e-12), Ok(inv));

        let singular = Matrix::from_rows([[1.0, 2.0], [2.0, 4.0]]);
        assert!(singular.try_inverse(1e-12).is_err());
        let inv = singular.inverse();
        assert!(inv.as_flat_slice().iter().any(|e| !e.is_finite()));
    }

    #[test]
    fn flat_storage_is_row_major() {
        let mut mat = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(mat.as_flat_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        mat.as_flat_slice_mut()[3] = -4.0;
        assert_eq!(mat[(1, 0)], -4.0);
    }

    #[test]
    fn generator_order() {
        let mut rng = fastrand::Rng::with_seed(9);
        let mut replay = fastrand::Rng::with_seed(9);
        let mat: Matrix<u32, 2, 3> = Matrix::from_generator(|| rng.u32(..));
        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(mat[(row, col)], replay.u32(..));
            }
        }
    }

    #[test]
    fn equals() {
        let a = Mat2d::identity();
        let b = a * (1.0 + 1e-10);
        assert!(a.equals(&b, 1e-9));
        assert!(!a.equals(&b, 1e-11));
    }
}
