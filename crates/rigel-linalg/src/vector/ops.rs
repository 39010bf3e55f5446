//! Operator and comparison trait impls for [`Vector`].

use std::ops::{
    Add, AddAssign, BitAnd, BitOr, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Not,
    Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.0.eq(other)
    }
}

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
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
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> UlpsEq for Vector<T, N>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise logical negation.
impl<T, const N: usize> Not for Vector<T, N>
where
    T: Not,
{
    type Output = Vector<T::Output, N>;

    fn not(self) -> Self::Output {
        self.map(T::not)
    }
}

// Every arithmetic operator exists in two flavors: element-wise with another vector of the same
// dimension, and broadcast with a scalar that is applied to each element.
macro_rules! arith {
    ($($op:ident::$f:ident, $op_assign:ident::$f_assign:ident, $sym:tt;)+) => {
        $(
            impl<T, const N: usize> $op<Vector<T, N>> for Vector<T, N>
            where
                T: $op + Copy,
            {
                type Output = Vector<T::Output, N>;

                fn $f(self, rhs: Vector<T, N>) -> Self::Output {
                    self.zip(rhs).map(|(l, r)| l $sym r)
                }
            }

            impl<T, const N: usize> $op<T> for Vector<T, N>
            where
                T: $op + Copy,
            {
                type Output = Vector<T::Output, N>;

                fn $f(self, rhs: T) -> Self::Output {
                    self.map(|elem| elem $sym rhs)
                }
            }

            impl<T, const N: usize> $op_assign<Vector<T, N>> for Vector<T, N>
            where
                T: $op_assign + Copy,
            {
                fn $f_assign(&mut self, rhs: Vector<T, N>) {
                    for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
                        lhs.$f_assign(rhs);
                    }
                }
            }

            impl<T, const N: usize> $op_assign<T> for Vector<T, N>
            where
                T: $op_assign + Copy,
            {
                fn $f_assign(&mut self, rhs: T) {
                    for lhs in &mut self.0 {
                        lhs.$f_assign(rhs);
                    }
                }
            }

            impl<const N: usize> $op<Vector<f32, N>> for f32 {
                type Output = Vector<f32, N>;

                fn $f(self, rhs: Vector<f32, N>) -> Self::Output {
                    rhs.map(|elem| self $sym elem)
                }
            }

            impl<const N: usize> $op<Vector<f64, N>> for f64 {
                type Output = Vector<f64, N>;

                fn $f(self, rhs: Vector<f64, N>) -> Self::Output {
                    rhs.map(|elem| self $sym elem)
                }
            }
        )+
    };
}

arith! {
    Add::add, AddAssign::add_assign, +;
    Sub::sub, SubAssign::sub_assign, -;
    Mul::mul, MulAssign::mul_assign, *;
    Div::div, DivAssign::div_assign, /;
}

/// Element-wise logical and, for combining comparison masks.
impl<T, const N: usize> BitAnd<Vector<T, N>> for Vector<T, N>
where
    T: BitAnd + Copy,
{
    type Output = Vector<T::Output, N>;

    fn bitand(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip(rhs).map(|(l, r)| l & r)
    }
}

/// Element-wise logical or, for combining comparison masks.
impl<T, const N: usize> BitOr<Vector<T, N>> for Vector<T, N>
where
    T: BitOr + Copy,
{
    type Output = Vector<T::Output, N>;

    fn bitor(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip(rhs).map(|(l, r)| l | r)
    }
}
