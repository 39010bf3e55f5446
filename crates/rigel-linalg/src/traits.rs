//! Numeric traits used as bounds throughout the crate.

use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// This is implemented automatically for every type with the required operator impls. Note that
/// unsigned integers do not qualify, since they lack [`Neg`][ops::Neg].
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Types that support the trigonometric functions.
pub trait Trig: Sized {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    /// Four-quadrant arctangent of `self` (y) and `other` (x).
    fn atan2(self, other: Self) -> Self;
    fn sin_cos(self) -> (Self, Self);
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that have an absolute value.
pub trait Abs {
    fn abs(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of [`f32::min`] and [`f32::max`] (so a NaN
/// operand is ignored). Built-in integer types use [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// Floating-point element types.
///
/// Everything that needs square roots, tolerances or angles is bounded on this trait. It is
/// implemented for [`f32`] and [`f64`].
pub trait Float:
    Number
    + Sqrt
    + Trig
    + Abs
    + MinMax
    + PartialOrd
    + approx::RelativeEq<Epsilon = Self>
    + approx::UlpsEq<Epsilon = Self>
{
    /// Machine epsilon: the difference between `1.0` and the next representable value.
    const EPSILON: Self;
    /// Tolerance used when none is specified: 4 × [`Float::EPSILON`].
    const DEFAULT_TOLERANCE: Self;
    const PI: Self;
    /// A full turn, 2π.
    const TAU: Self;
    const INFINITY: Self;

    fn floor(self) -> Self;
    fn is_finite(self) -> bool;
}

macro_rules! int_impls {
    ($($t:ty),+) => {
        $(
            impl Zero for $t {
                const ZERO: Self = 0;
            }
            impl One for $t {
                const ONE: Self = 1;
            }
            impl MinMax for $t {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
int_impls!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! signed_abs {
    ($($t:ty),+) => {
        $(
            impl Abs for $t {
                fn abs(self) -> Self {
                    <$t>::abs(self)
                }
            }
        )+
    };
}
signed_abs!(i8, i16, i32, i64, i128, isize);

macro_rules! float_impls {
    ($($t:ident),+) => {
        $(
            impl Zero for $t {
                const ZERO: Self = 0.0;
            }
            impl One for $t {
                const ONE: Self = 1.0;
            }
            impl MinMax for $t {
                fn min(self, other: Self) -> Self {
                    <$t>::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    <$t>::max(self, other)
                }
            }
            impl Abs for $t {
                fn abs(self) -> Self {
                    <$t>::abs(self)
                }
            }
            impl Sqrt for $t {
                fn sqrt(self) -> Self {
                    <$t>::sqrt(self)
                }
            }
            impl Trig for $t {
                fn sin(self) -> Self {
                    <$t>::sin(self)
                }

                fn cos(self) -> Self {
                    <$t>::cos(self)
                }

                fn tan(self) -> Self {
                    <$t>::tan(self)
                }

                fn asin(self) -> Self {
                    <$t>::asin(self)
                }

                fn acos(self) -> Self {
                    <$t>::acos(self)
                }

                fn atan(self) -> Self {
                    <$t>::atan(self)
                }

                fn atan2(self, other: Self) -> Self {
                    <$t>::atan2(self, other)
                }

                fn sin_cos(self) -> (Self, Self) {
                    <$t>::sin_cos(self)
                }
            }
            impl Float for $t {
                const EPSILON: Self = <$t>::EPSILON;
                const DEFAULT_TOLERANCE: Self = <$t>::EPSILON * 4.0;
                const PI: Self = std::$t::consts::PI;
                const TAU: Self = std::$t::consts::TAU;
                const INFINITY: Self = <$t>::INFINITY;

                fn floor(self) -> Self {
                    <$t>::floor(self)
                }

                fn is_finite(self) -> bool {
                    <$t>::is_finite(self)
                }
            }
        )+
    };
}
float_impls!(f32, f64);
