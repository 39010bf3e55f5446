use rigel_linalg::{Float, Mat3, Matrix};

/// Position and orientation in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose2<T> {
    pub x: T,
    pub y: T,
    /// Counter-clockwise rotation in radians.
    pub yaw: T,
}

impl<T: Float> Pose2<T> {
    pub fn new(x: T, y: T, yaw: T) -> Self {
        Self { x, y, yaw }
    }

    /// Returns the homogeneous 3×3 transform that rotates by `yaw` and then translates by
    /// `(x, y)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigel_geometry::*;
    /// # use rigel_linalg::*;
    /// let m = Pose2::new(3.0, -1.0, 0.0).to_transform();
    /// assert_eq!(m * vec3(1.0, 1.0, 1.0), vec3(4.0, 0.0, 1.0));
    /// ```
    pub fn to_transform(&self) -> Mat3<T> {
        let (sin, cos) = self.yaw.sin_cos();
        Matrix::from_rows([
            [cos, -sin, self.x],
            [sin, cos, self.y],
            [T::ZERO, T::ZERO, T::ONE],
        ])
    }

    /// Extracts the pose from a homogeneous 3×3 transform.
    ///
    /// The yaw is computed from the second row of the rotation block, so it lies in `[-π, π]`.
    pub fn from_transform(m: &Mat3<T>) -> Self {
        Self {
            x: m[(0, 2)],
            y: m[(1, 2)],
            yaw: m[(1, 0)].atan2(m[(1, 1)]),
        }
    }
}
