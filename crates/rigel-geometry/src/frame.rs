//! Hierarchies of coordinate frames.
//!
//! A [`FrameTree`] owns a set of frames, each described by a homogeneous transform relative to
//! an optional parent frame. Frames without a parent are positioned relative to the world.
//!
//! Transforms are `H×H` matrices with `H = DIM + 1`: the upper-left `DIM×DIM` block holds the
//! rotation, and the last column holds the translation.

mod pose;

use std::fmt;

use rigel_linalg::{vec2, vec3, Float, Mat3, Matrix, Vec2, Vec3};

pub use pose::Pose2;

/// Handle to a frame in a [`FrameTree`].
///
/// [`FrameId`]s are only meaningful for the [`FrameTree`] that handed them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(usize);

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Errors returned when restructuring a [`FrameTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    #[error("frame {0} does not exist in this tree")]
    UnknownFrame(FrameId),
    #[error("making {parent} the parent of {frame} would create a cycle")]
    Cycle { frame: FrameId, parent: FrameId },
}

#[derive(Debug, Clone)]
struct Frame<T, const H: usize> {
    parent: Option<FrameId>,
    transform: Matrix<T, H, H>,
}

/// An arena of reference frames with `H×H` homogeneous transforms.
///
/// Parent links are stored as [`FrameId`]s, so frames never own each other and the hierarchy can
/// be restructured freely with [`FrameTree::set_parent`]. Re-parenting that would form a cycle is
/// rejected.
///
/// # Panics
///
/// Methods taking a [`FrameId`] panic if it was not returned by this tree, except for
/// [`FrameTree::set_parent`], which reports [`FrameError::UnknownFrame`] instead.
///
/// # Examples
///
/// ```
/// # use rigel_geometry::*;
/// # use std::f64::consts::FRAC_PI_2;
/// let mut tree = FrameTree2::new();
/// let robot = tree.add_frame_2d(None, 1.0, 0.0, FRAC_PI_2);
/// let sensor = tree.add_frame_2d(Some(robot), 2.0, 0.0, 0.0);
///
/// let pose = tree.xy_yaw(sensor);
/// assert!((pose.x - 1.0).abs() < 1e-12);
/// assert!((pose.y - 2.0).abs() < 1e-12);
/// assert!((pose.yaw - FRAC_PI_2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct FrameTree<T, const H: usize> {
    frames: Vec<Frame<T, H>>,
}

/// Tree of 2D frames with 3×3 transforms.
pub type FrameTree2<T = f64> = FrameTree<T, 3>;
/// Tree of 3D frames with 4×4 transforms.
pub type FrameTree3<T = f64> = FrameTree<T, 4>;

impl<T, const H: usize> Default for FrameTree<T, H> {
    fn default() -> Self {
        Self { frames: Vec::new() }
    }
}

impl<T: Float, const H: usize> FrameTree<T, H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of frames in the tree.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn contains(&self, id: FrameId) -> bool {
        id.0 < self.frames.len()
    }

    /// Adds a frame with the given transform relative to `parent`.
    pub fn add_frame(&mut self, parent: Option<FrameId>, transform: Matrix<T, H, H>) -> FrameId {
        if let Some(parent) = parent {
            assert!(self.contains(parent), "unknown parent frame {parent}");
        }
        let id = FrameId(self.frames.len());
        log::trace!("adding frame {id} under {parent:?}");
        self.frames.push(Frame { parent, transform });
        id
    }

    /// Adds a frame that coincides with `parent`.
    pub fn add_identity(&mut self, parent: Option<FrameId>) -> FrameId {
        self.add_frame(parent, Matrix::identity())
    }

    fn frame(&self, id: FrameId) -> &Frame<T, H> {
        match self.frames.get(id.0) {
            Some(frame) => frame,
            None => panic!("unknown frame {id}"),
        }
    }

    fn frame_mut(&mut self, id: FrameId) -> &mut Frame<T, H> {
        match self.frames.get_mut(id.0) {
            Some(frame) => frame,
            None => panic!("unknown frame {id}"),
        }
    }

    pub fn parent(&self, id: FrameId) -> Option<FrameId> {
        self.frame(id).parent
    }

    /// Moves `id` under `parent`, or to the top level if `parent` is [`None`].
    ///
    /// The local transform of `id` is kept, so its offset from the world generally changes.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::UnknownFrame`] if either handle does not belong to this tree, and
    /// [`FrameError::Cycle`] if `parent` is `id` itself or one of its descendants.
    pub fn set_parent(&mut self, id: FrameId, parent: Option<FrameId>) -> Result<(), FrameError> {
        if !self.contains(id) {
            return Err(FrameError::UnknownFrame(id));
        }
        if let Some(parent) = parent {
            if !self.contains(parent) {
                return Err(FrameError::UnknownFrame(parent));
            }
            if self.ancestors(parent).any(|ancestor| ancestor == id) {
                log::debug!("rejecting {parent} as parent of {id}: {parent} descends from {id}");
                return Err(FrameError::Cycle { frame: id, parent });
            }
        }
        self.frame_mut(id).parent = parent;
        Ok(())
    }

    /// Iterates over `id` and all of its ancestors, nearest first.
    fn ancestors(&self, id: FrameId) -> impl Iterator<Item = FrameId> + '_ {
        std::iter::successors(Some(id), |&id| self.frame(id).parent)
    }

    /// Returns the number of ancestors of `id`. Top-level frames have depth 0.
    pub fn depth(&self, id: FrameId) -> usize {
        self.ancestors(id).count() - 1
    }

    /// Returns the transform of `id` relative to its parent.
    pub fn local_transform(&self, id: FrameId) -> Matrix<T, H, H> {
        self.frame(id).transform
    }

    pub fn set_local_transform(&mut self, id: FrameId, transform: Matrix<T, H, H>) {
        self.frame_mut(id).transform = transform;
    }

    /// Returns the transform of `id` relative to the world.
    ///
    /// This is the product of the local transforms along the path from the root down to `id`.
    pub fn offset_from_world(&self, id: FrameId) -> Matrix<T, H, H> {
        self.ancestors(id).fold(Matrix::identity(), |acc, frame| {
            self.frame(frame).transform * acc
        })
    }

    fn set_translation_component(&mut self, id: FrameId, axis: usize, value: T) {
        self.frame_mut(id).transform[(axis, H - 1)] = value;
    }
}

/// Frames in the plane.
///
/// The orientation of a 2D frame is its yaw: the counter-clockwise angle from the parent's x axis
/// to the frame's x axis.
impl<T: Float> FrameTree<T, 3> {
    /// Adds a frame at position `(x, y)` with orientation `yaw` relative to `parent`.
    pub fn add_frame_2d(&mut self, parent: Option<FrameId>, x: T, y: T, yaw: T) -> FrameId {
        self.add_frame(parent, Pose2 { x, y, yaw }.to_transform())
    }

    pub fn x_offset(&self, id: FrameId) -> T {
        self.frame(id).transform[(0, 2)]
    }

    pub fn set_x_offset(&mut self, id: FrameId, x: T) {
        self.set_translation_component(id, 0, x);
    }

    pub fn y_offset(&self, id: FrameId) -> T {
        self.frame(id).transform[(1, 2)]
    }

    pub fn set_y_offset(&mut self, id: FrameId, y: T) {
        self.set_translation_component(id, 1, y);
    }

    pub fn yaw_offset(&self, id: FrameId) -> T {
        let m = &self.frame(id).transform;
        m[(1, 0)].atan2(m[(1, 1)])
    }

    /// Replaces the rotation of `id` relative to its parent, keeping its position.
    pub fn set_yaw_offset(&mut self, id: FrameId, yaw: T) {
        let (sin, cos) = yaw.sin_cos();
        let m = &mut self.frame_mut(id).transform;
        m[(0, 0)] = cos;
        m[(0, 1)] = -sin;
        m[(1, 0)] = sin;
        m[(1, 1)] = cos;
    }

    /// Returns the pose of `id` relative to its parent.
    pub fn local_pose(&self, id: FrameId) -> Pose2<T> {
        Pose2::from_transform(&self.local_transform(id))
    }

    /// Returns the position of the origin of `id` in world coordinates.
    pub fn xy(&self, id: FrameId) -> Vec2<T> {
        let m = self.offset_from_world(id);
        vec2(m[(0, 2)], m[(1, 2)])
    }

    /// Returns the position and orientation of `id` relative to the world.
    pub fn xy_yaw(&self, id: FrameId) -> Pose2<T> {
        Pose2::from_transform(&self.offset_from_world(id))
    }

    /// Converts `point`, given in the coordinates of frame `id`, into world coordinates.
    pub fn world_position(&self, id: FrameId, point: Vec2<T>) -> Vec2<T> {
        (self.offset_from_world(id) * point.extend(T::ONE)).truncate()
    }
}

/// Frames in space.
impl<T: Float> FrameTree<T, 4> {
    /// Adds a frame with the given `rotation` and `translation` relative to `parent`.
    pub fn add_frame_3d(
        &mut self,
        parent: Option<FrameId>,
        rotation: Mat3<T>,
        translation: Vec3<T>,
    ) -> FrameId {
        let transform = Matrix::from_fn(|row, col| match (row, col) {
            (3, 3) => T::ONE,
            (3, _) => T::ZERO,
            (_, 3) => translation[row],
            _ => rotation[(row, col)],
        });
        self.add_frame(parent, transform)
    }

    pub fn x_offset(&self, id: FrameId) -> T {
        self.frame(id).transform[(0, 3)]
    }

    pub fn set_x_offset(&mut self, id: FrameId, x: T) {
        self.set_translation_component(id, 0, x);
    }

    pub fn y_offset(&self, id: FrameId) -> T {
        self.frame(id).transform[(1, 3)]
    }

    pub fn set_y_offset(&mut self, id: FrameId, y: T) {
        self.set_translation_component(id, 1, y);
    }

    pub fn z_offset(&self, id: FrameId) -> T {
        self.frame(id).transform[(2, 3)]
    }

    pub fn set_z_offset(&mut self, id: FrameId, z: T) {
        self.set_translation_component(id, 2, z);
    }

    /// Returns the translation of `id` relative to its parent.
    pub fn translation_offset(&self, id: FrameId) -> Vec3<T> {
        self.frame(id).transform.column(3).truncate()
    }

    pub fn set_translation_offset(&mut self, id: FrameId, translation: Vec3<T>) {
        for axis in 0..3 {
            self.set_translation_component(id, axis, translation[axis]);
        }
    }

    /// Returns the rotation block of the local transform of `id`.
    pub fn rotation_offset(&self, id: FrameId) -> Mat3<T> {
        let m = &self.frame(id).transform;
        Matrix::from_fn(|row, col| m[(row, col)])
    }

    /// Converts `point`, given in the coordinates of frame `id`, into world coordinates.
    pub fn world_position(&self, id: FrameId, point: Vec3<T>) -> Vec3<T> {
        (self.offset_from_world(id) * point.extend(T::ONE)).truncate()
    }

    /// Returns the position of the origin of `id` in world coordinates.
    pub fn world_origin(&self, id: FrameId) -> Vec3<T> {
        self.world_position(id, vec3(T::ZERO, T::ZERO, T::ZERO))
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rigel_linalg::{vec2, vec3, Mat3d, Mat4d, Vec3d};

    use crate::test::init_logger;

    use super::*;

    #[test]
    fn handles() {
        let mut tree = FrameTree2::<f64>::new();
        assert!(tree.is_empty());
        let root = tree.add_identity(None);
        let child = tree.add_identity(Some(root));
        let grandchild = tree.add_frame_2d(Some(child), 1.0, 2.0, 0.0);

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.parent(root), None);
        assert_eq!(tree.parent(grandchild), Some(child));
        assert_eq!(tree.depth(root), 0);
        assert_eq!(tree.depth(grandchild), 2);
        assert_eq!(grandchild.to_string(), "#2");
    }

    #[test]
    fn reparenting() {
        init_logger();

        let mut tree = FrameTree2::<f64>::new();
        let a = tree.add_frame_2d(None, 1.0, 0.0, 0.0);
        let b = tree.add_frame_2d(Some(a), 1.0, 0.0, 0.0);
        let c = tree.add_frame_2d(Some(b), 1.0, 0.0, 0.0);
        assert_eq!(tree.xy(c), vec2(3.0, 0.0));

        assert_eq!(
            tree.set_parent(a, Some(c)),
            Err(FrameError::Cycle { frame: a, parent: c })
        );
        assert_eq!(
            tree.set_parent(b, Some(b)),
            Err(FrameError::Cycle { frame: b, parent: b })
        );

        tree.set_parent(c, Some(a)).unwrap();
        assert_eq!(tree.xy(c), vec2(2.0, 0.0));
        tree.set_parent(c, None).unwrap();
        assert_eq!(tree.xy(c), vec2(1.0, 0.0));
        assert_eq!(tree.depth(c), 0);

        let mut other = FrameTree2::<f64>::new();
        other.add_identity(None);
        let foreign = FrameId(5);
        assert_eq!(
            other.set_parent(foreign, None),
            Err(FrameError::UnknownFrame(foreign))
        );
        assert_eq!(
            tree.set_parent(a, Some(foreign)),
            Err(FrameError::UnknownFrame(foreign))
        );
    }

    #[test]
    fn error_messages() {
        let err = FrameError::Cycle {
            frame: FrameId(0),
            parent: FrameId(3),
        };
        assert_eq!(
            err.to_string(),
            "making #3 the parent of #0 would create a cycle"
        );
    }

    #[test]
    fn offsets_2d() {
        let mut tree = FrameTree2::<f64>::new();
        let frame = tree.add_frame_2d(None, 0.0, 0.0, 0.0);
        tree.set_x_offset(frame, 4.0);
        tree.set_y_offset(frame, -1.0);
        tree.set_yaw_offset(frame, 0.5);
        assert_eq!(tree.x_offset(frame), 4.0);
        assert_eq!(tree.y_offset(frame), -1.0);
        assert_relative_eq!(tree.yaw_offset(frame), 0.5, epsilon = 1e-15);

        let pose = tree.local_pose(frame);
        assert_eq!((pose.x, pose.y), (4.0, -1.0));
        assert_relative_eq!(tree.local_transform(frame), pose.to_transform(), epsilon = 1e-15);
    }

    #[test]
    fn unit_circle() {
        let mut tree = FrameTree2::new();
        let world = tree.add_identity(None);
        let point = tree.add_frame_2d(Some(world), 1.0, 0.0, 0.0);

        let mut yaw = -PI;
        while yaw < PI {
            tree.set_yaw_offset(world, yaw);
            let pose = tree.xy_yaw(point);
            assert_abs_diff_eq!(pose.x, yaw.cos(), epsilon = 1e-9);
            assert_abs_diff_eq!(pose.y, yaw.sin(), epsilon = 1e-9);
            assert_abs_diff_eq!(pose.yaw, yaw, epsilon = 1e-9);
            yaw += 0.01;
        }
    }

    #[test]
    fn world_position_2d() {
        let mut tree = FrameTree2::new();
        let base = tree.add_frame_2d(None, 1.0, 1.0, FRAC_PI_2);
        let p = tree.world_position(base, vec2(2.0, 0.0));
        assert_abs_diff_eq!(p, vec2(1.0, 3.0), epsilon = 1e-12);
        assert_eq!(tree.world_position(base, vec2(0.0, 0.0)), tree.xy(base));
    }

    #[test]
    fn frames_3d() {
        let mut tree = FrameTree3::<f64>::new();
        // Quarter turn about z.
        #[rustfmt::skip]
        let rot_z = Matrix::from_rows([
            [0.0, -1.0, 0.0],
            [1.0,  0.0, 0.0],
            [0.0,  0.0, 1.0],
        ]);
        let base = tree.add_frame_3d(None, rot_z, vec3(0.0, 0.0, 1.0));
        let arm = tree.add_frame_3d(Some(base), Mat3d::identity(), Vec3d::X * 2.0);

        assert_eq!(tree.translation_offset(arm), vec3(2.0, 0.0, 0.0));
        assert_eq!(tree.rotation_offset(base), rot_z);
        assert_eq!(tree.world_origin(arm), vec3(0.0, 2.0, 1.0));
        assert_eq!(tree.world_position(arm, Vec3d::X), vec3(0.0, 3.0, 1.0));

        tree.set_z_offset(arm, 5.0);
        tree.set_x_offset(arm, 0.0);
        tree.set_y_offset(arm, 0.0);
        assert_eq!(
            (tree.x_offset(arm), tree.y_offset(arm), tree.z_offset(arm)),
            (0.0, 0.0, 5.0)
        );
        tree.set_translation_offset(base, Vec3d::ZERO);
        assert_eq!(tree.world_origin(arm), vec3(0.0, 0.0, 5.0));

        let expected: Mat4d = tree.local_transform(base) * tree.local_transform(arm);
        assert_eq!(tree.offset_from_world(arm), expected);
    }
}
