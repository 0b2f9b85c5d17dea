pub mod convexity;
pub mod orientation;
pub mod polygon_3d;
pub mod triangle;

pub use convexity::{is_convex, reflex_indices};
pub use orientation::{estimate_normal, turning_angle};
pub use triangle::{point_in_triangle, Triangle};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Tolerance for comparing computed areas and lengths.
///
/// The predicates themselves compare against exact zero.
pub const TOLERANCE: f64 = 1e-10;

/// Index of the vertex before `index` in a closed loop of `len` vertices.
#[inline]
#[must_use]
pub(crate) fn prev_index(index: usize, len: usize) -> usize {
    (index + len - 1) % len
}

/// Index of the vertex after `index` in a closed loop of `len` vertices.
#[inline]
#[must_use]
pub(crate) fn next_index(index: usize, len: usize) -> usize {
    (index + 1) % len
}
