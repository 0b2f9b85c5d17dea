mod ear_clip;
mod triangulate_polygon;

pub use ear_clip::{triangulate, EarClip};
pub use triangulate_polygon::TriangulatePolygon;

use std::collections::HashMap;

use crate::math::{Point3, Triangle, Vector3};

/// Parameters controlling the ear-clipping loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct EarClipParams {
    /// Maximum number of scanning passes over the remaining polygon before
    /// giving up. `None` uses the number of input vertices.
    pub max_passes: Option<usize>,
}

impl EarClipParams {
    /// Resolves the pass budget for a polygon of `vertex_count` vertices.
    #[must_use]
    pub fn pass_budget(&self, vertex_count: usize) -> usize {
        self.max_passes.unwrap_or(vertex_count)
    }
}

/// A triangle mesh with shared vertices.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Builds an indexed mesh from a triangle list, merging corners with
    /// bit-identical coordinates. Every vertex gets `normal`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_triangles(triangles: &[Triangle], normal: Vector3) -> Self {
        let mut mesh = Self::default();
        let mut vertex_map: HashMap<[u64; 3], u32> = HashMap::new();

        for tri in triangles {
            let mut tri_indices = [0u32; 3];
            for (i, p) in tri.vertices().iter().enumerate() {
                let key = [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()];
                tri_indices[i] = *vertex_map.entry(key).or_insert_with(|| {
                    let new_idx = mesh.vertices.len() as u32;
                    mesh.vertices.push(*p);
                    mesh.normals.push(normal);
                    new_idx
                });
            }
            mesh.indices.push(tri_indices);
        }

        mesh
    }

    /// Returns the triangle at `index` with its corner positions resolved.
    #[must_use]
    pub fn triangle(&self, index: usize) -> Option<Triangle> {
        let [a, b, c] = *self.indices.get(index)?;
        Some(Triangle::new(
            self.vertices[a as usize],
            self.vertices[b as usize],
            self.vertices[c as usize],
        ))
    }

    /// Returns the total area of all triangles.
    #[must_use]
    pub fn area(&self) -> f64 {
        (0..self.indices.len())
            .filter_map(|i| self.triangle(i))
            .map(|tri| tri.area())
            .sum()
    }
}
