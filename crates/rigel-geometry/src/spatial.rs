//! Hierarchical subdivision of space.

use rigel_linalg::{Float, Vector};

use crate::Ray;

/// A 2^N-ary tree of points in an axis-aligned cube.
///
/// Every node covers the cube `[corner, corner + size)` along each axis and stores one point. A
/// point inserted into a node is routed to the child cube of half the size that contains it,
/// creating that child (with the point as its value) if it does not exist yet. In 2D this is a
/// quadtree, in 3D an octree.
///
/// # Examples
///
/// ```
/// # use rigel_geometry::*;
/// # use rigel_linalg::*;
/// let mut tree = SpatialTree::new(vec2(1.0, 1.0), Vec2d::ZERO, 4.0);
/// assert!(tree.insert(vec2(3.0, 0.5)));
/// assert!(!tree.insert(vec2(4.0, 0.0)));
/// assert_eq!(tree.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SpatialTree<T, const N: usize> {
    point: Vector<T, N>,
    corner: Vector<T, N>,
    size: T,
    children: Vec<Option<Box<Self>>>,
}

impl<T: Float, const N: usize> SpatialTree<T, N> {
    /// Creates a tree covering the cube at `corner` with edge length `size`, storing `point` at its
    /// root.
    pub fn new(point: Vector<T, N>, corner: Vector<T, N>, size: T) -> Self {
        Self {
            point,
            corner,
            size,
            children: (0..1 << N).map(|_| None).collect(),
        }
    }

    pub fn point(&self) -> Vector<T, N> {
        self.point
    }

    pub fn corner(&self) -> Vector<T, N> {
        self.corner
    }

    pub fn size(&self) -> T {
        self.size
    }

    /// Returns whether `point` lies within the cube covered by this tree.
    ///
    /// The lower faces of the cube are included and the upper faces are excluded.
    pub fn bounds(&self, point: Vector<T, N>) -> bool {
        self.corner.all_le(&point) && point.all_lt(&(self.corner + self.size))
    }

    /// Inserts `point` into the tree.
    ///
    /// Returns `false` and leaves the tree unchanged if `point` lies outside of
    /// [`SpatialTree::bounds`].
    pub fn insert(&mut self, point: Vector<T, N>) -> bool {
        if !self.bounds(point) {
            log::trace!("point outside of tree bounds, not inserting");
            return false;
        }

        self.insert_unchecked(point);
        true
    }

    fn insert_unchecked(&mut self, point: Vector<T, N>) {
        let index = self.child_index(point);
        match &mut self.children[index] {
            Some(child) => child.insert_unchecked(point),
            None => {
                let half = self.size / (T::ONE + T::ONE);
                let corner = Vector::from_fn(|i| {
                    if index & (1 << (N - 1 - i)) != 0 {
                        self.corner[i] + half
                    } else {
                        self.corner[i]
                    }
                });
                log::trace!("subdividing: new child {index}");
                self.children[index] = Some(Box::new(Self::new(point, corner, half)));
            }
        }
    }

    /// Computes the index of the child cube containing `point`.
    ///
    /// Axis 0 is the most significant bit; a bit is set if the point lies in the upper half along
    /// that axis.
    fn child_index(&self, point: Vector<T, N>) -> usize {
        let half = self.size / (T::ONE + T::ONE);
        (0..N).fold(0, |index, i| {
            (index << 1) | usize::from(point[i] - self.corner[i] >= half)
        })
    }

    /// Returns whether `ray` passes through the cube covered by this tree.
    ///
    /// Only the part of the ray in front of its origin is considered. Along axes the ray does not
    /// move on, the origin has to lie within the half-open extent used by [`SpatialTree::bounds`].
    pub fn intersects_ray(&self, ray: &Ray<T, N>) -> bool {
        let (origin, dir) = (ray.origin(), ray.direction());
        let (mut tmin, mut tmax) = (T::ZERO, T::INFINITY);
        for i in 0..N {
            let (lo, hi) = (self.corner[i], self.corner[i] + self.size);
            if dir[i] == T::ZERO {
                if !(lo <= origin[i] && origin[i] < hi) {
                    return false;
                }
                continue;
            }

            let t1 = (lo - origin[i]) / dir[i];
            let t2 = (hi - origin[i]) / dir[i];
            tmin = tmin.max(t1.min(t2));
            tmax = tmax.min(t1.max(t2));
        }
        tmax >= tmin
    }

    /// Returns the number of points stored in the tree.
    pub fn len(&self) -> usize {
        1 + self.children().map(Self::len).sum::<usize>()
    }

    /// Returns the number of levels in the tree. A tree without children has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children().map(Self::depth).max().unwrap_or(0)
    }

    fn children(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().flatten().map(|child| &**child)
    }

    /// Returns all points in the tree, in depth-first order starting at the root.
    pub fn points(&self) -> Vec<Vector<T, N>> {
        let mut points = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            points.push(node.point);
            stack.extend(node.children().collect::<Vec<_>>().into_iter().rev());
        }
        points
    }
}
