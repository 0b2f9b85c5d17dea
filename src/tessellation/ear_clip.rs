use tracing::{debug, trace, warn};

use crate::error::{GeometryError, Result, TessellationError};
use crate::math::{
    estimate_normal, is_convex, next_index, point_in_triangle, prev_index, Point3, Triangle,
    Vector3,
};

use super::EarClipParams;

/// Triangulates a simple planar polygon by ear clipping.
///
/// Never fails: fewer than 3 points or a polygon without a determinable
/// normal yield an empty list, and a polygon that stops producing ears before
/// the pass budget runs out yields the triangles clipped so far. Use
/// [`EarClip`] to have those cases reported as errors.
///
/// The input is not modified; every output triangle holds copies of the
/// input coordinates.
#[must_use]
pub fn triangulate(points: &[Point3]) -> Vec<Triangle> {
    if points.len() < 3 {
        return Vec::new();
    }
    let Some(normal) = estimate_normal(points) else {
        return Vec::new();
    };
    clip_ears(points.to_vec(), &normal, points.len()).triangles
}

/// Ear-clipping triangulation of a polygon, reporting degenerate input and
/// incomplete results as errors.
pub struct EarClip {
    points: Vec<Point3>,
    params: EarClipParams,
}

impl EarClip {
    /// Creates a new `EarClip` operation over a copy of `points`.
    #[must_use]
    pub fn new(points: &[Point3]) -> Self {
        Self {
            points: points.to_vec(),
            params: EarClipParams::default(),
        }
    }

    /// Sets custom parameters.
    #[must_use]
    pub fn with_params(mut self, params: EarClipParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the triangulation, returning `N - 2` triangles.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewVertices` for fewer than 3 points,
    /// `GeometryError::Degenerate` if no normal can be determined, and
    /// `TessellationError::Incomplete` if the pass budget runs out before
    /// the polygon is fully clipped.
    pub fn execute(&self) -> Result<Vec<Triangle>> {
        self.clip().map(|(_, triangles)| triangles)
    }

    /// Runs the triangulation and also returns the polygon normal used.
    pub(crate) fn clip(&self) -> Result<(Vector3, Vec<Triangle>)> {
        let count = self.points.len();
        if count < 3 {
            return Err(GeometryError::TooFewVertices { count }.into());
        }
        let normal = estimate_normal(&self.points).ok_or_else(|| {
            GeometryError::Degenerate("polygon vertices are collinear".into())
        })?;

        let outcome = clip_ears(
            self.points.clone(),
            &normal,
            self.params.pass_budget(count),
        );
        if outcome.remaining > 2 {
            return Err(TessellationError::Incomplete {
                produced: outcome.triangles.len(),
                expected: count - 2,
                remaining: outcome.remaining,
            }
            .into());
        }

        Ok((normal, outcome.triangles))
    }
}

struct ClipOutcome {
    triangles: Vec<Triangle>,
    /// Vertices left in the working polygon, at most 2 on success.
    remaining: usize,
}

/// Repeatedly scans `polygon` and clips every ear found, for at most
/// `max_passes` passes.
///
/// Ears are removed in place as soon as they are found and the scan moves on
/// to the next index of the shrunk polygon, so the vertex that slid into the
/// removed slot waits for the next pass.
fn clip_ears(mut polygon: Vec<Point3>, normal: &Vector3, max_passes: usize) -> ClipOutcome {
    let mut triangles = Vec::with_capacity(polygon.len().saturating_sub(2));
    let mut passes = 0;

    while polygon.len() > 2 && passes < max_passes {
        let mut i = 0;
        while i < polygon.len() && polygon.len() > 2 {
            if is_convex(i, &polygon, normal) {
                let ear = triangle_at(&polygon, i);
                if is_ear(i, &polygon, &ear) {
                    trace!(index = i, remaining = polygon.len() - 1, "clipped ear");
                    triangles.push(ear);
                    polygon.remove(i);
                }
            }
            i += 1;
        }
        passes += 1;
    }

    if polygon.len() > 2 {
        warn!(
            passes,
            remaining = polygon.len(),
            produced = triangles.len(),
            "ear clipping gave up with vertices left"
        );
    } else {
        debug!(passes, triangles = triangles.len(), "ear clipping complete");
    }

    ClipOutcome {
        triangles,
        remaining: polygon.len(),
    }
}

/// The candidate ear with its tip at `index`: `(previous, tip, next)`.
fn triangle_at(polygon: &[Point3], index: usize) -> Triangle {
    let n = polygon.len();
    Triangle::new(
        polygon[prev_index(index, n)],
        polygon[index],
        polygon[next_index(index, n)],
    )
}

/// Checks that no vertex other than the ear's own corners lies in `ear`.
fn is_ear(index: usize, polygon: &[Point3], ear: &Triangle) -> bool {
    let n = polygon.len();
    let prev = prev_index(index, n);
    let next = next_index(index, n);
    polygon
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != index && j != prev && j != next)
        .all(|(_, point)| !point_in_triangle(point, ear))
}
