use super::{Point3, Vector3};

/// Computes the signed area of a 3D polygon (coplanar points) about `normal`.
///
/// Positive when the polygon winds counter-clockwise seen from the side
/// `normal` points to, negative otherwise. `normal` is expected to be a unit
/// vector.
#[must_use]
pub fn signed_area_3d(points: &[Point3], normal: &Vector3) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let n = points.len();
    let mut cross_sum = Vector3::zeros();
    let o = &points[0];
    for i in 1..n {
        let a = points[i] - o;
        let b = points[(i + 1) % n] - o;
        cross_sum += a.cross(&b);
    }
    0.5 * cross_sum.dot(normal)
}

/// Computes the unsigned area of a 3D polygon (coplanar points).
///
/// Uses the cross-product summation method projected along the polygon normal.
#[must_use]
pub fn polygon_area_3d(points: &[Point3], normal: &Vector3) -> f64 {
    signed_area_3d(points, normal).abs()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn unit_square() -> Vec<Point3> {
        vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn unit_square_area() {
        assert_relative_eq!(polygon_area_3d(&unit_square(), &Vector3::z()), 1.0);
    }

    #[test]
    fn signed_area_follows_winding() {
        let mut square = unit_square();
        assert_relative_eq!(signed_area_3d(&square, &Vector3::z()), 1.0);
        square.reverse();
        assert_relative_eq!(signed_area_3d(&square, &Vector3::z()), -1.0);
        assert_relative_eq!(polygon_area_3d(&square, &Vector3::z()), 1.0);
    }

    #[test]
    fn concave_polygon_area() {
        let notched = [
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(0.5, 0.5, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ];
        assert_relative_eq!(polygon_area_3d(&notched, &Vector3::z()), 0.75);
    }

    #[test]
    fn tilted_polygon_area() {
        // 1 x sqrt(2) rectangle in the plane x = z.
        let rect = [
            p(0.0, 0.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(1.0, 1.0, 1.0),
            p(1.0, 0.0, 1.0),
        ];
        let normal = Vector3::new(1.0, 0.0, -1.0).normalize();
        assert_relative_eq!(polygon_area_3d(&rect, &normal), 2.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn degenerate_area_is_zero() {
        assert_relative_eq!(polygon_area_3d(&[], &Vector3::z()), 0.0);
        assert_relative_eq!(polygon_area_3d(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)], &Vector3::z()), 0.0);
    }
}
