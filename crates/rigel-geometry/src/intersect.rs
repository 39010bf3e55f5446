//! Intersections between parametric lines, and between lines and axis-aligned slices.
//!
//! Lines are given as a point `p` and a direction `v`, covering `p + v * t` for every real `t`.
//! Distances are reported in that parameter `t`, i.e. in units of `|v|`.

use std::fmt;

use rigel_linalg::{Float, Orthogonal, Vector};

/// How two lines (or a line and a slice) relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntersectionType {
    /// The lines cross in exactly one point.
    Intersect,
    /// The lines are parallel and overlap.
    Coincident,
    /// The lines are parallel and distinct, or a ray/segment query missed.
    None,
}

impl fmt::Display for IntersectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Intersect => "INTERSECT",
            Self::Coincident => "COINCIDENT",
            Self::None => "NONE",
        })
    }
}

/// Result of an intersection query: the [`IntersectionType`], plus a value of type `R` when the
/// query found a single crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection<R> {
    Intersect(R),
    Coincident,
    None,
}

impl<R> Intersection<R> {
    /// Returns the kind of intersection, dropping the value.
    pub fn kind(&self) -> IntersectionType {
        match self {
            Self::Intersect(_) => IntersectionType::Intersect,
            Self::Coincident => IntersectionType::Coincident,
            Self::None => IntersectionType::None,
        }
    }

    /// Returns the value of a single crossing, or [`None`] otherwise.
    pub fn hit(self) -> Option<R> {
        match self {
            Self::Intersect(value) => Some(value),
            Self::Coincident | Self::None => Option::None,
        }
    }

    pub fn is_intersect(&self) -> bool {
        matches!(self, Self::Intersect(_))
    }

    /// Maps the value of a single crossing.
    pub fn map<U, F: FnOnce(R) -> U>(self, f: F) -> Intersection<U> {
        match self {
            Self::Intersect(value) => Intersection::Intersect(f(value)),
            Self::Coincident => Intersection::Coincident,
            Self::None => Intersection::None,
        }
    }
}

/// The crossing point of two lines, with the parameter of that point along each line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineCrossing<T, const N: usize> {
    pub point: Vector<T, N>,
    /// Parameter along the first line: `point == p1 + v1 * d1`.
    pub d1: T,
    /// Parameter along the second line: `point == p2 + v2 * d2`.
    pub d2: T,
}

/// The crossing point of a line and an axis-aligned slice, with its parameter along the line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceCrossing<T, const N: usize> {
    pub point: Vector<T, N>,
    pub distance: T,
}

/// Computes intersections between lines, using a fixed tolerance for parallelism tests.
///
/// Two lines `p1 + v1 * t` and `p2 + v2 * s` are compared through a vector `n2` orthogonal to
/// `v2` (see [`Orthogonal`]):
///
/// - if `|v1 · n2| <= tolerance`, the lines are parallel. They are [`Coincident`] if
///   `|(p2 - p1) · n2| <= tolerance` as well, and [`None`] otherwise.
/// - otherwise they cross at `t = ((p2 - p1) · n2) / (v1 · n2)`.
///
/// In 3 or more dimensions, this finds where the first line crosses the hyperplane through the
/// second line with normal `n2`. Skew lines are not detected.
///
/// # Examples
///
/// ```
/// # use rigel_geometry::*;
/// # use rigel_linalg::*;
/// let calc = GeometryCalculator::default();
/// let hit = calc.intersection(vec2(0.0, 0.0), vec2(1.0, 1.0), vec2(2.0, 0.0), vec2(0.0, 1.0));
/// assert_eq!(hit, Intersection::Intersect(vec2(2.0, 2.0)));
///
/// let parallel = calc.intersects(vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(0.0, 1.0), vec2(2.0, 0.0));
/// assert_eq!(parallel, IntersectionType::None);
/// ```
///
/// [`Coincident`]: IntersectionType::Coincident
/// [`None`]: IntersectionType::None
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryCalculator<T> {
    tolerance: T,
}

impl<T: Float> Default for GeometryCalculator<T> {
    /// Uses a tolerance of 4 machine epsilons.
    fn default() -> Self {
        Self::new(T::DEFAULT_TOLERANCE)
    }
}

impl<T: Float> GeometryCalculator<T> {
    pub fn new(tolerance: T) -> Self {
        Self { tolerance }
    }

    /// Returns a copy of `self` that uses `tolerance` for parallelism tests.
    pub fn with_tolerance(self, tolerance: T) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    fn classify(&self, numerator: T, denominator: T) -> Intersection<T> {
        if denominator.abs() <= self.tolerance {
            if numerator.abs() <= self.tolerance {
                Intersection::Coincident
            } else {
                Intersection::None
            }
        } else {
            Intersection::Intersect(numerator / denominator)
        }
    }

    /// Classifies how the lines `p1 + v1 * t` and `p2 + v2 * s` relate.
    pub fn intersects<const N: usize>(
        &self,
        p1: Vector<T, N>,
        v1: Vector<T, N>,
        p2: Vector<T, N>,
        v2: Vector<T, N>,
    ) -> IntersectionType
    where
        Vector<T, N>: Orthogonal,
    {
        self.distance(p1, v1, p2, v2).kind()
    }

    /// Computes the parameter `t` of the crossing along the first line.
    pub fn distance<const N: usize>(
        &self,
        p1: Vector<T, N>,
        v1: Vector<T, N>,
        p2: Vector<T, N>,
        v2: Vector<T, N>,
    ) -> Intersection<T>
    where
        Vector<T, N>: Orthogonal,
    {
        let n2 = v2.orthogonal();
        self.classify((p2 - p1).dot(n2), v1.dot(n2))
    }

    /// Computes the crossing point of the two lines.
    pub fn intersection<const N: usize>(
        &self,
        p1: Vector<T, N>,
        v1: Vector<T, N>,
        p2: Vector<T, N>,
        v2: Vector<T, N>,
    ) -> Intersection<Vector<T, N>>
    where
        Vector<T, N>: Orthogonal,
    {
        self.distance(p1, v1, p2, v2).map(|d1| p1 + v1 * d1)
    }

    /// Computes the crossing point along with its parameter on both lines.
    ///
    /// The parameter on the second line is recovered from the first coordinate in which `v2` is
    /// nonzero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_geometry::*;
    /// # use rigel_linalg::*;
    /// let calc = GeometryCalculator::default();
    /// let crossing = calc
    ///     .intersection_distance(vec2(0.0, 0.0), vec2(2.0, 0.0), vec2(1.0, -1.0), vec2(0.0, 4.0))
    ///     .hit()
    ///     .unwrap();
    /// assert_eq!(crossing.point, vec2(1.0, 0.0));
    /// assert_eq!(crossing.d1, 0.5);
    /// assert_eq!(crossing.d2, 0.25);
    /// ```
    pub fn intersection_distance<const N: usize>(
        &self,
        p1: Vector<T, N>,
        v1: Vector<T, N>,
        p2: Vector<T, N>,
        v2: Vector<T, N>,
    ) -> Intersection<LineCrossing<T, N>>
    where
        Vector<T, N>: Orthogonal,
    {
        self.distance(p1, v1, p2, v2).map(|d1| {
            let point = p1 + v1 * d1;
            let d2 = (0..N)
                .find(|&i| v2[i] != T::ZERO)
                .map_or(T::ZERO, |i| (point[i] - p2[i]) / v2[i]);
            LineCrossing { point, d1, d2 }
        })
    }

    /// Computes the parameter `t` at which `p + v * t` crosses the slice where coordinate `axis`
    /// equals `value`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= N`.
    pub fn slice_distance<const N: usize>(
        &self,
        p: Vector<T, N>,
        v: Vector<T, N>,
        axis: usize,
        value: T,
    ) -> Intersection<T> {
        self.classify(value - p[axis], v[axis])
    }

    /// Computes the point at which `p + v * t` crosses the slice where coordinate `axis` equals
    /// `value`.
    ///
    /// In 2D the slices are the lines `x = value` and `y = value`; in 3D they are the
    /// axis-aligned planes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_geometry::*;
    /// # use rigel_linalg::*;
    /// let calc = GeometryCalculator::default();
    /// let hit = calc.slice_intersection(vec3(0.0, 0.0, 0.0), vec3(1.0, 2.0, 4.0), 2, 2.0);
    /// assert_eq!(hit, Intersection::Intersect(vec3(0.5, 1.0, 2.0)));
    /// ```
    pub fn slice_intersection<const N: usize>(
        &self,
        p: Vector<T, N>,
        v: Vector<T, N>,
        axis: usize,
        value: T,
    ) -> Intersection<Vector<T, N>> {
        self.slice_distance(p, v, axis, value)
            .map(|distance| p + v * distance)
    }

    /// Combination of [`GeometryCalculator::slice_intersection`] and
    /// [`GeometryCalculator::slice_distance`].
    pub fn slice_intersection_distance<const N: usize>(
        &self,
        p: Vector<T, N>,
        v: Vector<T, N>,
        axis: usize,
        value: T,
    ) -> Intersection<SliceCrossing<T, N>> {
        self.slice_distance(p, v, axis, value)
            .map(|distance| SliceCrossing {
                point: p + v * distance,
                distance,
            })
    }
}

#[cfg(test)]
mod tests {
    use rigel_linalg::{vec2, vec3, Vec3d};

    use super::*;

    #[test]
    fn display() {
        assert_eq!(IntersectionType::Intersect.to_string(), "INTERSECT");
        assert_eq!(IntersectionType::Coincident.to_string(), "COINCIDENT");
        assert_eq!(IntersectionType::None.to_string(), "NONE");
    }

    #[test]
    fn coincident_and_parallel() {
        let calc = GeometryCalculator::<f64>::default();
        let p = vec2(1.0, 2.0);
        let v = vec2(3.0, -1.0);
        assert_eq!(calc.intersects(p, v, p + v * 2.5, -v), IntersectionType::Coincident);
        assert_eq!(calc.distance(p, v, p, v), Intersection::Coincident);
        assert_eq!(calc.intersection(p, v, p + vec2(0.0, 1.0), v), Intersection::None);
        assert_eq!(
            calc.intersection_distance(p, v, p + vec2(0.0, 1.0), v * 2.0),
            Intersection::None
        );
    }

    #[test]
    fn three_dimensional() {
        let calc = GeometryCalculator::<f64>::default();
        let hit = calc.intersection_distance(
            vec3(0.0, 0.0, 0.0),
            vec3(1.0, 1.0, 1.0),
            vec3(2.0, 2.0, 0.0),
            vec3(0.0, 0.0, 1.0),
        );
        let crossing = hit.hit().unwrap();
        assert_eq!(crossing.point, vec3(2.0, 2.0, 2.0));
        assert_eq!(crossing.d1, 2.0);
        assert_eq!(crossing.d2, 2.0);

        // Parallel, offset along an axis.
        assert_eq!(
            calc.intersects(Vec3d::ZERO, Vec3d::X, Vec3d::Y, Vec3d::X * 3.0),
            IntersectionType::None
        );
        assert_eq!(
            calc.intersects(Vec3d::ZERO, Vec3d::X, Vec3d::X * 5.0, -Vec3d::X),
            IntersectionType::Coincident
        );
    }

    #[test]
    fn slices() {
        let calc = GeometryCalculator::<f64>::default();
        let p = vec2(1.0, 1.0);
        let v = vec2(2.0, 0.0);

        assert_eq!(calc.slice_distance(p, v, 0, 5.0), Intersection::Intersect(2.0));
        assert_eq!(
            calc.slice_intersection_distance(p, v, 0, 0.0),
            Intersection::Intersect(SliceCrossing {
                point: vec2(0.0, 1.0),
                distance: -0.5,
            })
        );
        // Moving parallel to the slice `y = 1` and `y = 3`.
        assert_eq!(calc.slice_intersection(p, v, 1, 1.0), Intersection::Coincident);
        assert_eq!(calc.slice_intersection(p, v, 1, 3.0), Intersection::None);
    }

    #[test]
    fn tolerance() {
        let p = vec2(0.0, 0.0);
        let v1 = vec2(1.0, 0.0);
        let v2 = vec2(1.0, 1e-6);
        let strict = GeometryCalculator::default();
        let loose = strict.with_tolerance(1e-3);
        assert_eq!(loose.tolerance(), 1e-3);
        assert_eq!(strict.intersects(p, v1, p, v2), IntersectionType::Intersect);
        assert_eq!(loose.intersects(p, v1, p, v2), IntersectionType::Coincident);
    }

    #[test]
    fn intersection_helpers() {
        let hit: Intersection<f64> = Intersection::Intersect(1.5);
        assert!(hit.is_intersect());
        assert_eq!(hit.kind(), IntersectionType::Intersect);
        assert_eq!(hit.map(|d| d * 2.0).hit(), Some(3.0));
        assert_eq!(Intersection::<f64>::Coincident.hit(), None);
        assert_eq!(Intersection::<f64>::None.kind(), IntersectionType::None);
    }
}
