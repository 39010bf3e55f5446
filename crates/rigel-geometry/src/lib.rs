//! Geometry on top of `rigel-linalg`.
//!
//! - [`GeometryCalculator`] intersects parametric lines with each other and with axis-aligned
//!   slices, in any dimension with an [`Orthogonal`][rigel_linalg::Orthogonal] construction.
//! - [`Line`], [`Ray`] and [`LineSegment`] wrap those queries for the common shapes.
//! - [`FrameTree`] maintains hierarchies of 2D and 3D reference frames.
//! - [`SpatialTree`] subdivides space into quadtrees and octrees.
//! - The angle helpers ([`angle_difference`], [`zero_to_two_pi`], ...) wrap angles into a
//!   canonical range.

mod angle;
mod frame;
mod intersect;
mod line;
mod spatial;


pub use angle::*;
pub use frame::*;
pub use intersect::*;
pub use line::*;
pub use spatial::*;
