use crate::error::Result;
use crate::math::Point3;

use super::{EarClip, EarClipParams, TriangleMesh};

/// Triangulates a planar polygon into an indexed triangle mesh.
pub struct TriangulatePolygon {
    points: Vec<Point3>,
    params: EarClipParams,
}

impl TriangulatePolygon {
    /// Creates a new `TriangulatePolygon` operation over a copy of `points`.
    #[must_use]
    pub fn new(points: &[Point3]) -> Self {
        Self {
            points: points.to_vec(),
            params: EarClipParams::default(),
        }
    }

    /// Sets custom ear-clipping parameters.
    #[must_use]
    pub fn with_params(mut self, params: EarClipParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the triangulation, returning a mesh whose vertex normals are
    /// the polygon's right-handed normal.
    ///
    /// # Errors
    ///
    /// Returns an error if the polygon is degenerate or cannot be fully
    /// triangulated, see [`EarClip::execute`].
    pub fn execute(&self) -> Result<TriangleMesh> {
        let (normal, triangles) = EarClip::new(&self.points)
            .with_params(self.params)
            .clip()?;
        Ok(TriangleMesh::from_triangles(&triangles, normal))
    }
}
