//! Operator and comparison trait impls for [`Matrix`].

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Number, Vector};

use super::Matrix;

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    /// Indexes the matrix by `(row, col)`.
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq, const R: usize, const C: usize> Eq for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> AbsDiffEq for Matrix<T, R, C>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.elements()
            .zip(other.elements())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const R: usize, const C: usize> RelativeEq for Matrix<T, R, C>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.elements()
            .zip(other.elements())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const R: usize, const C: usize> UlpsEq for Matrix<T, R, C>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.elements()
            .zip(other.elements())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    fn elements(&self) -> impl Iterator<Item = &T> {
        self.0.iter().flatten()
    }
}

impl<T: Neg, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Matrix<T::Output, R, C>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise addition.
impl<T: Add<Output = T> + Copy, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Matrix::from_fn(|row, col| self.0[row][col] + rhs.0[row][col])
    }
}

/// Element-wise subtraction.
impl<T: Sub<Output = T> + Copy, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Matrix::from_fn(|row, col| self.0[row][col] - rhs.0[row][col])
    }
}

impl<T: AddAssign + Copy, const R: usize, const C: usize> AddAssign for Matrix<T, R, C> {
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.0.iter_mut().flatten().zip(rhs.elements()) {
            *lhs += *rhs;
        }
    }
}

impl<T: SubAssign + Copy, const R: usize, const C: usize> SubAssign for Matrix<T, R, C> {
    fn sub_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.0.iter_mut().flatten().zip(rhs.elements()) {
            *lhs -= *rhs;
        }
    }
}

// Scalars broadcast to every element, for all four arithmetic operators.
macro_rules! scalar_ops {
    ($($op:ident::$f:ident, $op_assign:ident::$f_assign:ident, $sym:tt;)+) => {
        $(
            impl<T, const R: usize, const C: usize> $op<T> for Matrix<T, R, C>
            where
                T: $op<Output = T> + Copy,
            {
                type Output = Self;

                fn $f(self, rhs: T) -> Self::Output {
                    self.map(|elem| elem $sym rhs)
                }
            }

            impl<T, const R: usize, const C: usize> $op_assign<T> for Matrix<T, R, C>
            where
                T: $op_assign + Copy,
            {
                fn $f_assign(&mut self, rhs: T) {
                    for elem in self.0.iter_mut().flatten() {
                        elem.$f_assign(rhs);
                    }
                }
            }
        )+
    };
}

scalar_ops! {
    Add::add, AddAssign::add_assign, +;
    Sub::sub, SubAssign::sub_assign, -;
    Mul::mul, MulAssign::mul_assign, *;
    Div::div, DivAssign::div_assign, /;
}

/// Matrix-Vector multiplication.
impl<T: Number, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        Vector::from_fn(|row| self.row(row).dot(rhs))
    }
}

/// Matrix-Matrix multiplication.
impl<T: Number, const R: usize, const C: usize, const M: usize> Mul<Matrix<T, C, M>>
    for Matrix<T, R, C>
{
    type Output = Matrix<T, R, M>;

    fn mul(self, rhs: Matrix<T, C, M>) -> Self::Output {
        Matrix::from_fn(|row, col| {
            (0..C).fold(T::ZERO, |acc, k| acc + self.0[row][k] * rhs.0[k][col])
        })
    }
}

impl<T: Number, const N: usize> MulAssign<Matrix<T, N, N>> for Matrix<T, N, N> {
    fn mul_assign(&mut self, rhs: Matrix<T, N, N>) {
        *self = *self * rhs;
    }
}
