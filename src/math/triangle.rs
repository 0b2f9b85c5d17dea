use super::{Point3, Vector3};

/// A triangle in 3D space, stored as three owned corner points.
///
/// The corner order is the winding: for an ear clipped from a polygon it is
/// `(previous, tip, next)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Point3; 3],
}

impl Triangle {
    /// Creates a triangle from its three corners, in winding order.
    #[must_use]
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Returns the corners in winding order.
    #[must_use]
    pub fn vertices(&self) -> &[Point3; 3] {
        &self.vertices
    }

    /// Returns the area of the triangle.
    #[must_use]
    pub fn area(&self) -> f64 {
        let [a, b, c] = &self.vertices;
        (b - a).cross(&(c - a)).norm() * 0.5
    }

    /// Returns the unit normal given by the winding (right-hand rule).
    ///
    /// Returns `None` if the triangle is degenerate.
    #[must_use]
    pub fn normal(&self) -> Option<Vector3> {
        let [a, b, c] = &self.vertices;
        (b - a).cross(&(c - a)).try_normalize(0.0)
    }

    /// Returns the same triangle with the opposite winding.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let [a, b, c] = self.vertices;
        Self::new(c, b, a)
    }

    /// Returns the centroid of the triangle.
    #[must_use]
    pub fn centroid(&self) -> Point3 {
        let [a, b, c] = &self.vertices;
        Point3::from((a.coords + b.coords + c.coords) / 3.0)
    }

    /// Checks whether `point` lies inside or on the boundary of the triangle.
    ///
    /// See [`point_in_triangle`].
    #[must_use]
    pub fn contains(&self, point: &Point3) -> bool {
        point_in_triangle(point, self)
    }
}

impl From<[Point3; 3]> for Triangle {
    fn from(vertices: [Point3; 3]) -> Self {
        Self { vertices }
    }
}

/// Checks whether `p1` and `p2` lie on the same side of the line through `a`
/// and `b`, within the plane spanned by the four points.
fn is_same_side(p1: &Point3, p2: &Point3, a: &Point3, b: &Point3) -> bool {
    let ab = b - a;
    let cp1 = ab.cross(&(p1 - a));
    let cp2 = ab.cross(&(p2 - a));
    cp1.dot(&cp2) >= 0.0
}

/// Point-in-triangle test using the same-side technique.
///
/// For each edge the point must be on the same side as the opposite corner.
/// Works directly on 3D coordinates, so no projection to 2D is needed; a point
/// off the triangle's plane is tested by its projection.
///
/// The test is boundary inclusive: points on an edge or corner count as
/// inside. A degenerate (zero-area) triangle therefore contains every point
/// coplanar with it, which makes a collinear ear candidate never clip while
/// other vertices remain.
#[must_use]
pub fn point_in_triangle(point: &Point3, triangle: &Triangle) -> bool {
    let [a, b, c] = &triangle.vertices;
    is_same_side(point, a, b, c) && is_same_side(point, b, c, a) && is_same_side(point, c, a, b)
}
