//! Fixed-size linear algebra with const generic dimensions.
//!
//! This crate provides the small, stack-allocated [`Vector`] and [`Matrix`] types that the rest of
//! the workspace builds its geometry on, plus an [`LuDecomposition`] for solving linear systems.
//!
//! # Goals & Non-Goals
//!
//! - Dimensions are part of the type. Mixing vectors or matrices of incompatible shapes is a
//!   compile error, never a runtime check. There are no dynamically-sized vectors or matrices.
//! - Storage is inline and contiguous: vectors are plain `[T; N]` arrays and matrices are
//!   row-major `[[T; C]; R]` arrays, without padding or heap allocation.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types.
//!   Operations that need square roots or tolerances require a [`Float`] element type.
//! - Numerical degeneracy (normalizing a zero vector, inverting a singular matrix) does not panic.
//!   The plain operations propagate NaN or infinite values, and each of them has a checked
//!   `try_*` counterpart that returns [`DegenerateInput`] instead.
//! - Approximate comparisons go through the [`approx`] traits, which are implemented for both
//!   [`Vector`] and [`Matrix`].

mod error;
mod lu;
mod matrix;
mod traits;
mod vector;


pub use error::*;
pub use lu::*;
pub use matrix::*;
pub use traits::*;
pub use vector::*;
