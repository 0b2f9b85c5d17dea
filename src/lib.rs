//! Ear-clipping triangulation of simple polygons given as ordered 3D points.
//!
//! [`triangulate`] is the lenient entry point: degenerate input gives an
//! empty triangle list rather than an error. [`EarClip`] and
//! [`TriangulatePolygon`] run the same algorithm but report degenerate or
//! incomplete results through [`MeshError`].

pub mod error;
pub mod math;
pub mod tessellation;

pub use error::{MeshError, Result};
pub use math::{Point3, Triangle, Vector3};
pub use tessellation::{triangulate, EarClip, EarClipParams, TriangleMesh, TriangulatePolygon};
