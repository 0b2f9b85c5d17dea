use super::{next_index, prev_index, Point3, Vector3};

/// Checks whether the vertex at `index` is convex with respect to `normal`.
///
/// Indices wrap around the closed loop. A straight vertex (zero cross
/// product) counts as convex.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
#[must_use]
pub fn is_convex(index: usize, polygon: &[Point3], normal: &Vector3) -> bool {
    let n = polygon.len();
    let from = polygon[index] - polygon[prev_index(index, n)];
    let to = polygon[next_index(index, n)] - polygon[index];
    from.cross(&to).dot(normal) >= 0.0
}

/// Returns the indices of all reflex vertices, in ascending order.
#[must_use]
pub fn reflex_indices(polygon: &[Point3], normal: &Vector3) -> Vec<usize> {
    (0..polygon.len())
        .filter(|&i| !is_convex(i, polygon, normal))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn notched_square() -> Vec<Point3> {
        vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(0.5, 0.5, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn square_corners_are_convex() {
        let square = [
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ];
        for i in 0..square.len() {
            assert!(is_convex(i, &square, &Vector3::z()), "vertex {i}");
        }
    }

    #[test]
    fn notch_is_reflex() {
        let polygon = notched_square();
        assert!(!is_convex(2, &polygon, &Vector3::z()));
        assert!(is_convex(1, &polygon, &Vector3::z()));
        assert!(is_convex(3, &polygon, &Vector3::z()));
    }

    #[test]
    fn opposite_normal_swaps_classification() {
        let polygon = notched_square();
        assert!(is_convex(2, &polygon, &-Vector3::z()));
        assert!(!is_convex(0, &polygon, &-Vector3::z()));
    }

    #[test]
    fn straight_vertex_is_convex() {
        let polygon = [
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(2.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
        ];
        assert!(is_convex(1, &polygon, &Vector3::z()));
    }

    #[test]
    fn first_vertex_wraps_to_last() {
        // Vertex 0 is reflex only when its predecessor is taken from the end.
        let polygon = [
            p(0.5, 0.5, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
        ];
        assert!(!is_convex(0, &polygon, &Vector3::z()));
    }

    #[test]
    fn reflex_indices_lists_notch() {
        assert_eq!(reflex_indices(&notched_square(), &Vector3::z()), vec![2]);
    }

    #[test]
    fn convex_polygon_has_no_reflex_vertices() {
        let triangle = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)];
        assert!(reflex_indices(&triangle, &Vector3::z()).is_empty());
    }
}
