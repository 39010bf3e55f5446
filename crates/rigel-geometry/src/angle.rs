//! Scalar helpers for norms and angle arithmetic.
//!
//! Angles are in radians throughout.

use rigel_linalg::{Float, Number};

/// Computes `a² + b² + ...` over all `values`.
pub fn sum_squares<T: Number, const N: usize>(values: [T; N]) -> T {
    values.into_iter().fold(T::ZERO, |acc, v| acc + v * v)
}

/// Computes `sqrt(a² + b² + ...)` over all `values`.
///
/// The [`hypot!`](crate::hypot!) macro is a variadic shorthand for this function.
///
/// # Examples
///
/// ```
/// # use rigel_geometry::*;
/// assert_eq!(hypot([3.0, 4.0]), 5.0);
/// assert_eq!(hypot([2.0, 3.0, 6.0]), 7.0);
/// ```
pub fn hypot<T: Float, const N: usize>(values: [T; N]) -> T {
    sum_squares(values).sqrt()
}

/// Variadic form of [`hypot`](fn@crate::hypot).
///
/// # Examples
///
/// ```
/// # use rigel_geometry::hypot;
/// assert_eq!(hypot!(-5.0), 5.0);
/// assert_eq!(hypot!(1.0, 2.0, 2.0, 4.0), 5.0);
/// ```
#[macro_export]
macro_rules! hypot {
    ($($value:expr),+ $(,)?) => {
        $crate::hypot([$($value),+])
    };
}

/// Computes the remainder of `a / b` with the sign of `b`: `a - floor(a / b) * b`.
///
/// For a positive `b` the result lies in `[0, b]`. It only equals `b` when rounding pushes a tiny
/// negative `a` up to it.
pub fn unsigned_mod<T: Float>(a: T, b: T) -> T {
    a - (a / b).floor() * b
}

/// Wraps the angle `a` into `[0, 2π)`.
pub fn zero_to_two_pi<T: Float>(a: T) -> T {
    let r = unsigned_mod(a, T::TAU);
    if r >= T::TAU {
        T::ZERO
    } else {
        r
    }
}

/// Returns the signed difference `a - b` between two angles, wrapped into `[-π, π)`.
///
/// # Examples
///
/// ```
/// # use rigel_geometry::*;
/// # use std::f64::consts::{PI, TAU};
/// assert_eq!(angle_difference(TAU, 0.0), 0.0);
/// // The upper end of the range is exclusive.
/// assert_eq!(angle_difference(PI, 0.0), -PI);
/// assert!((angle_difference(0.1, TAU - 0.1) - 0.2).abs() < 1e-12);
/// ```
pub fn angle_difference<T: Float>(a: T, b: T) -> T {
    let r = zero_to_two_pi(a) - zero_to_two_pi(b);
    if r >= T::PI {
        r - T::TAU
    } else if r < -T::PI {
        r + T::TAU
    } else {
        r
    }
}

/// Returns the difference `a - b`, wrapped into the interval `[min, max)`.
///
/// With `min = -π` and `max = π` this agrees with [`angle_difference`].
pub fn interval_difference<T: Float>(a: T, b: T, min: T, max: T) -> T {
    unsigned_mod(a - b - min, max - min) + min
}
