//! Lines, rays and line segments.

use rigel_linalg::{DegenerateInput, Float, Orthogonal, Vector};

use crate::{GeometryCalculator, Intersection, LineCrossing};

/// An infinite line through `point` with direction `direction`.
///
/// The direction does not have to be normalized; distances computed by [`Line::distance_to`] are
/// measured in units of its length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<T, const N: usize> {
    pub point: Vector<T, N>,
    pub direction: Vector<T, N>,
}

pub type Line2<T> = Line<T, 2>;
pub type Line3<T> = Line<T, 3>;

impl<T: Float, const N: usize> Line<T, N>
where
    Vector<T, N>: Orthogonal,
{
    pub fn new(point: Vector<T, N>, direction: Vector<T, N>) -> Self {
        Self { point, direction }
    }

    /// Computes where `self` and `other` cross.
    pub fn intersect(
        &self,
        other: &Self,
        calc: &GeometryCalculator<T>,
    ) -> Intersection<Vector<T, N>> {
        calc.intersection(self.point, self.direction, other.point, other.direction)
    }

    /// Returns the signed parameter along `self` at which `other` is crossed.
    ///
    /// Parallel lines that never meet are infinitely far apart, so this returns
    /// [`Float::INFINITY`] for them. Coincident lines return zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_geometry::*;
    /// # use rigel_linalg::*;
    /// let calc = GeometryCalculator::default();
    /// let x_axis = Line::new(Vec2d::ZERO, Vec2d::X);
    /// let vertical = Line::new(vec2(-3.0, 5.0), Vec2d::Y);
    /// assert_eq!(x_axis.distance_to(&vertical, &calc), -3.0);
    ///
    /// let above = Line::new(vec2(0.0, 1.0), Vec2d::X);
    /// assert_eq!(x_axis.distance_to(&above, &calc), f64::INFINITY);
    /// ```
    pub fn distance_to(&self, other: &Self, calc: &GeometryCalculator<T>) -> T {
        match calc.distance(self.point, self.direction, other.point, other.direction) {
            Intersection::Intersect(distance) => distance,
            Intersection::Coincident => T::ZERO,
            Intersection::None => T::INFINITY,
        }
    }

    /// Returns the point at parameter `t`.
    pub fn point_at(&self, t: T) -> Vector<T, N> {
        self.point + self.direction * t
    }
}

/// A finite line segment from `start` to `start + extent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment<T, const N: usize> {
    pub start: Vector<T, N>,
    pub extent: Vector<T, N>,
}

pub type LineSegment2<T> = LineSegment<T, 2>;
pub type LineSegment3<T> = LineSegment<T, 3>;

impl<T: Float, const N: usize> LineSegment<T, N> {
    pub fn new(start: Vector<T, N>, extent: Vector<T, N>) -> Self {
        Self { start, extent }
    }

    pub fn from_endpoints(start: Vector<T, N>, end: Vector<T, N>) -> Self {
        Self {
            start,
            extent: end - start,
        }
    }

    pub fn end(&self) -> Vector<T, N> {
        self.start + self.extent
    }

    /// Returns the point at parameter `t`; `t` in `[0, 1]` lies on the segment.
    pub fn point_at(&self, t: T) -> Vector<T, N> {
        self.start + self.extent * t
    }

    pub fn length(&self) -> T {
        self.extent.length()
    }
}

/// A half-line starting at `origin` and extending along a unit `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray<T, const N: usize> {
    origin: Vector<T, N>,
    direction: Vector<T, N>,
}

pub type Ray2<T> = Ray<T, 2>;
pub type Ray3<T> = Ray<T, 3>;

impl<T: Float, const N: usize> Ray<T, N> {
    /// Creates a ray, normalizing `direction`.
    ///
    /// A zero `direction` results in NaN elements; use [`Ray::try_new`] to reject it.
    pub fn new(origin: Vector<T, N>, direction: Vector<T, N>) -> Self {
        Self {
            origin,
            direction: direction.normalized(),
        }
    }

    /// Creates a ray, or returns [`DegenerateInput::ZeroLength`] if `direction` is zero.
    pub fn try_new(
        origin: Vector<T, N>,
        direction: Vector<T, N>,
    ) -> Result<Self, DegenerateInput> {
        Ok(Self {
            origin,
            direction: direction.try_normalize()?,
        })
    }

    /// Creates a ray from a direction that is already of unit length.
    pub fn from_normalized(origin: Vector<T, N>, direction: Vector<T, N>) -> Self {
        debug_assert!(
            (direction.length2() - T::ONE).abs() <= T::DEFAULT_TOLERANCE.sqrt(),
            "ray direction is not normalized"
        );
        Self { origin, direction }
    }

    pub fn origin(&self) -> Vector<T, N> {
        self.origin
    }

    pub fn direction(&self) -> Vector<T, N> {
        self.direction
    }

    pub fn point_at(&self, distance: T) -> Vector<T, N> {
        self.origin + self.direction * distance
    }

    /// Computes where this ray hits `segment`.
    ///
    /// Crossings of the underlying lines that lie behind the ray's origin, or outside of the
    /// segment, are reported as [`Intersection::None`]. The returned `d1` is the distance from the
    /// origin, `d2` the position along the segment in `[0, 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_geometry::*;
    /// # use rigel_linalg::*;
    /// let calc = GeometryCalculator::default();
    /// let ray = Ray::new(Vec2d::ZERO, vec2(2.0, 0.0));
    /// let wall = LineSegment::from_endpoints(vec2(3.0, -1.0), vec2(3.0, 1.0));
    /// let hit = ray.distance_to_segment(&wall, &calc).hit().unwrap();
    /// assert_eq!(hit.d1, 3.0);
    /// assert_eq!(hit.d2, 0.5);
    ///
    /// let behind = Ray::new(Vec2d::ZERO, vec2(-1.0, 0.0));
    /// assert_eq!(behind.distance_to_segment(&wall, &calc), Intersection::None);
    /// ```
    pub fn distance_to_segment(
        &self,
        segment: &LineSegment<T, N>,
        calc: &GeometryCalculator<T>,
    ) -> Intersection<LineCrossing<T, N>>
    where
        Vector<T, N>: Orthogonal,
    {
        let result =
            calc.intersection_distance(self.origin, self.direction, segment.start, segment.extent);
        match result {
            Intersection::Intersect(crossing)
                if crossing.d1 < T::ZERO || crossing.d2 < T::ZERO || crossing.d2 > T::ONE =>
            {
                Intersection::None
            }
            other => other,
        }
    }
}
