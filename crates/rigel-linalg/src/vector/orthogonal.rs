use super::Vector;
use crate::{DegenerateInput, Number};

/// Construction of a nonzero vector orthogonal to a given one.
///
/// The construction is picked per dimension at compile time: 2D and 3D vectors use closed forms,
/// while 4 to 16 dimensional vectors use a general search over candidate vectors. Larger
/// dimensions have no implementation.
///
/// In every dimension the result satisfies `v.dot(v.orthogonal()) == 0` up to rounding. For
/// elements in `[-1, 1]`, the 2D and 3D forms stay within `2 * EPSILON`; the general search sums
/// more products and can exceed that slightly. The zero
/// vector (and, for 4 or more dimensions, some vectors with zero elements, see below) yields the
/// zero vector; [`Vector::try_orthogonal`] turns that case into an error.
///
/// # Examples
///
/// ```
/// # use rigel_linalg::*;
/// assert_eq!(vec2(1.0, 2.0).orthogonal(), vec2(-2.0, 1.0));
///
/// let v = vec3(1.0, 0.0, -1.0);
/// assert_eq!(v.dot(v.orthogonal()), 0.0);
/// ```
pub trait Orthogonal: Sized {
    fn orthogonal(&self) -> Self;
}

impl<T: Number> Orthogonal for Vector<T, 2> {
    /// Rotates the vector by a quarter turn: `(x, y)` maps to `(-y, x)`.
    fn orthogonal(&self) -> Self {
        Vector([-self.0[1], self.0[0]])
    }
}

impl<T: Number> Orthogonal for Vector<T, 3> {
    fn orthogonal(&self) -> Self {
        let [v0, v1, v2] = self.0;
        // (v1, -v0-v2, v1) vanishes exactly when v1 == 0 and v0 == -v2. The second candidate is
        // nonzero in that case unless the input itself is zero.
        if v1 == T::ZERO && v0 == -v2 {
            Vector([-v1 - v2, v0, v0])
        } else {
            Vector([v1, -v0 - v2, v1])
        }
    }
}

/// General construction for any dimension.
///
/// For each candidate index `skip`, every element except `skip` is set to `v[skip]`, and element
/// `skip` is set to the negated sum of the other elements of `v`. The first candidate where both
/// that sum and `v[skip]` are nonzero is returned.
///
/// If no candidate qualifies (for example when every nonzero element sits at an index whose
/// complement sums to zero), the zero vector is returned.
fn orthogonal_general<T: Number, const N: usize>(v: &Vector<T, N>) -> Vector<T, N> {
    for skip in 0..N {
        let pivot = v.0[skip];
        if pivot == T::ZERO {
            continue;
        }

        let mut normal = Vector([pivot; N]);
        let mut sum = T::ZERO;
        for i in (0..N).filter(|&i| i != skip) {
            sum = sum - v.0[i];
        }
        if sum == T::ZERO {
            continue;
        }
        normal.0[skip] = sum;
        return normal;
    }

    log::trace!("no orthogonal candidate for {}-dimensional input", N);
    Vector([T::ZERO; N])
}

macro_rules! general_orthogonal {
    ($($n:literal),+) => {
        $(
            impl<T: Number> Orthogonal for Vector<T, $n> {
                fn orthogonal(&self) -> Self {
                    orthogonal_general(self)
                }
            }
        )+
    };
}

general_orthogonal!(4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16);

impl<T: Number, const N: usize> Vector<T, N>
where
    Self: Orthogonal,
{
    /// Returns a nonzero vector orthogonal to `self`, or an error if none could be constructed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_linalg::*;
    /// assert!(vec3(0.0, 0.0, 2.0).try_orthogonal().is_ok());
    /// assert_eq!(Vec3d::ZERO.try_orthogonal(), Err(DegenerateInput::NoOrthogonal));
    /// ```
    pub fn try_orthogonal(&self) -> Result<Self, DegenerateInput> {
        let normal = self.orthogonal();
        if normal.0.iter().all(|&e| e == T::ZERO) {
            Err(DegenerateInput::NoOrthogonal)
        } else {
            Ok(normal)
        }
    }
}
