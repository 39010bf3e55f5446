use std::{array, fmt};

use crate::{
    traits::{Float, Number, Sqrt},
    DegenerateInput, MinMax, Zero, One,
};

mod ops;
mod orthogonal;
mod view;

pub use orthogonal::Orthogonal;

/// A 1-dimensional vector.
pub type Vec1<T> = Vector<T, 1>;
/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;

/// An `N`-element column vector storing elements of type `T`.
///
/// [`Vector`] is a plain `Copy` value: its `N` elements live inline, with no heap allocation and
/// no padding.
///
/// # Construction
///
/// - The freestanding [`vec1`], [`vec2`], [`vec3`] and [`vec4`] functions create vectors from
///   the provided values.
/// - [`Vector::splat`] copies one fill value into each element.
/// - [`Vector::from_fn`] invokes a closure with the index of each element.
/// - [`Vector::from_generator`] invokes a zero-argument closure once per element, in index order.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vector::ZERO`] is a vector containing all-zeroes, and for up to 4 dimensions `Vector::X`,
///   `Vector::Y`, `Vector::Z` and `Vector::W` are the unit vectors along each axis.
///
/// # Element Access
///
/// - For vectors with up to 4 dimensions, elements can be accessed as fields `x`, `y`, `z` and `w`.
/// - The [`Index`] and [`IndexMut`] impls work just like on arrays, and panic when out of bounds.
/// - [`Vector::as_array`], [`Vector::as_slice`] and [`Vector::into_array`] expose the elements.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation when
///   the element type `T` also allows this.
///
/// # Comparisons
///
/// `==` compares all elements exactly. [`Vector::equals`] and the [`approx`] trait impls compare
/// with a tolerance. Vectors have no total or partial order; [`Vector::cmp_lt`] and friends compare
/// element-wise and return a `Vector<bool, N>`, while [`Vector::all_lt`] and friends hold only if
/// the relation holds for *every* element.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 1> {
    pub const X: Self = Self([T::ONE]);
}

impl<T: Zero + One> Vector<T, 2> {
    pub const X: Self = Self([T::ONE, T::ZERO]);
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// let v = Vector::from_fn(|i| i * 2);
    /// assert_eq!(v, vec3(0, 2, 4));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Creates a vector by invoking `next` once for each element, starting at index 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// let mut counter = 10;
    /// let v: Vec3<i32> = Vector::from_generator(|| {
    ///     counter += 1;
    ///     counter
    /// });
    /// assert_eq!(v, [11, 12, 13]);
    /// ```
    pub fn from_generator<F>(mut next: F) -> Self
    where
        F: FnMut() -> T,
    {
        Self(array::from_fn(|_| next()))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Pairs up the elements of `self` and `other`.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N>
    where
        T: Copy,
        U: Copy,
    {
        Vector::from_fn(|i| (self.0[i], other.0[i]))
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this [`Vector`].
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the Euclidean length (L2 norm) of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    #[doc(alias = "norm")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Scales this vector in place so that it has unit length.
    ///
    /// A zero vector is divided by a zero length, which leaves NaN in every element. Use
    /// [`Vector::try_normalize`] to detect that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// let mut v = vec3(0.0, 0.0, 4.0);
    /// v.normalize();
    /// assert_eq!(v, Vec3d::Z);
    /// ```
    pub fn normalize(&mut self)
    where
        T: Number + Sqrt,
    {
        let length = self.length();
        for elem in &mut self.0 {
            *elem = *elem / length;
        }
    }

    /// Returns a unit vector pointing in the same direction as `self`.
    pub fn normalized(mut self) -> Self
    where
        T: Number + Sqrt,
    {
        self.normalize();
        self
    }

    /// Returns a unit vector pointing in the same direction as `self`, or an error if `self` has
    /// zero length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// assert_eq!(vec2(0.0, -2.0).try_normalize(), Ok(vec2(0.0, -1.0)));
    /// assert_eq!(Vec2d::ZERO.try_normalize(), Err(DegenerateInput::ZeroLength));
    /// ```
    pub fn try_normalize(self) -> Result<Self, DegenerateInput>
    where
        T: Number + Sqrt,
    {
        let length = self.length();
        if length == T::ZERO {
            return Err(DegenerateInput::ZeroLength);
        }
        Ok(self.map(|elem| elem / length))
    }

    /// Returns the smallest element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// assert_eq!(vec3(4, -2, 7).min_element(), -2);
    /// ```
    pub fn min_element(&self) -> T
    where
        T: MinMax + Copy,
    {
        self.0[1..].iter().fold(self.0[0], |acc, &elem| acc.min(elem))
    }

    /// Returns the largest element.
    pub fn max_element(&self) -> T
    where
        T: MinMax + Copy,
    {
        self.0[1..].iter().fold(self.0[0], |acc, &elem| acc.max(elem))
    }

    /// Element-wise minimum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.min(b), vec3(-1.0, f32::NEG_INFINITY, 0.0));
    /// ```
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self.0[i].min(other.0[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self.0[i].max(other.0[i]))
    }

    /// Clamps each element of `self` to the range given by the matching elements of `min` and
    /// `max`.
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self.0[i].clamp(min.0[i], max.0[i]))
    }

    /// Compares the relative difference of each element with `max_relative`.
    ///
    /// Two elements `a` and `b` are considered equal if `|a - b| <= max(|a|, |b|) * max_relative`,
    /// so the comparison is symmetric in its operands. Elements closer than [`Float::EPSILON`] in
    /// absolute terms are always equal, which makes comparisons against zero well-behaved.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// let a = vec2(100.0, 1.0);
    /// let b = vec2(100.000001, 1.0);
    /// assert!(a.equals(&b, 1e-6));
    /// assert!(b.equals(&a, 1e-6));
    /// assert!(!a.equals(&b, 1e-9));
    /// ```
    pub fn equals(&self, other: &Self, max_relative: T) -> bool
    where
        T: Float,
    {
        approx::RelativeEq::relative_eq(self, other, T::EPSILON, max_relative)
    }
}

macro_rules! elementwise_cmp {
    ($($cmp:ident, $all:ident, $op:tt, $desc:literal;)+) => {
        impl<T: PartialOrd + Copy, const N: usize> Vector<T, N> {
            $(
                #[doc = concat!("Element-wise `", stringify!($op), "` comparison.")]
                pub fn $cmp(&self, other: &Self) -> Vector<bool, N> {
                    Vector::from_fn(|i| self.0[i] $op other.0[i])
                }

                #[doc = concat!("Returns `true` if every element of `self` is ", $desc, " the matching element of `other`.")]
                pub fn $all(&self, other: &Self) -> bool {
                    self.0.iter().zip(&other.0).all(|(a, b)| a $op b)
                }
            )+
        }
    };
}

elementwise_cmp! {
    cmp_lt, all_lt, <, "less than";
    cmp_le, all_le, <=, "less than or equal to";
    cmp_gt, all_gt, >, "greater than";
    cmp_ge, all_ge, >=, "greater than or equal to";
}

impl<T: PartialEq + Copy, const N: usize> Vector<T, N> {
    /// Element-wise `==` comparison.
    pub fn cmp_eq(&self, other: &Self) -> Vector<bool, N> {
        Vector::from_fn(|i| self.0[i] == other.0[i])
    }
}

impl<const N: usize> Vector<bool, N> {
    /// Returns `true` if every element is `true` (and for the empty vector).
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// let a = vec3(1, 5, 2);
    /// let b = vec3(2, 5, 3);
    /// assert!(!a.cmp_lt(&b).all());
    /// assert!(a.cmp_lt(&b).any());
    /// assert!(a.cmp_le(&b).all());
    /// ```
    pub fn all(&self) -> bool {
        self.0.iter().all(|&b| b)
    }

    /// Returns `true` if at least one element is `true`.
    pub fn any(&self) -> bool {
        self.0.iter().any(|&b| b)
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.0;
        Vector([x, y, value])
    }

    /// Computes the perpendicular dot product (the Z component of the 3D cross product) of
    /// `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// assert_eq!(Vec2d::X.perp_dot(Vec2d::Y), 1.0);
    /// assert_eq!(Vec2d::Y.perp_dot(Vec2d::X), -1.0);
    /// ```
    pub fn perp_dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.0[0] * other.0[1] - self.0[1] * other.0[0]
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// assert_eq!(vec3(-1.0, 2.0, 3.5).truncate(), vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.0;
        Vector([x, y])
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        Vector([x, y, z, value])
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// assert_eq!(Vec3d::X.cross(Vec3d::Y), Vec3d::Z);
    /// assert_eq!(Vec3d::Y.cross(Vec3d::X), -Vec3d::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;
        Vector([a2 * b3 - a3 * b2, a3 * b1 - a1 * b3, a1 * b2 - a2 * b1])
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.0;
        Vector([x, y, z])
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

/// Formats the vector as `<a,b,c>`.
impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(",")?;
            }
            elem.fmt(f)?;
        }
        f.write_str(">")
    }
}

/// Creates a 1-dimensional vector.
#[inline]
pub const fn vec1<T>(x: T) -> Vector<T, 1> {
    Vector([x])
}

/// Creates a 2-dimensional vector.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vector<T, 2> {
    Vector([x, y])
}

/// Creates a 3-dimensional vector.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vector<T, 3> {
    Vector([x, y, z])
}

/// Creates a 4-dimensional vector.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vector<T, 4> {
    Vector([x, y, z, w])
}
