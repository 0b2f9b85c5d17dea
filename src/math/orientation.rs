use std::f64::consts::PI;

use tracing::debug;

use super::{Point3, Vector3};

/// Estimates the right-handed unit normal of a closed polygon.
///
/// A test normal is taken from the first consecutive vertex triple that
/// actually turns. Its sign is then checked against the total signed turning
/// around the whole loop: for a simple polygon the turns agreeing with the
/// winding outweigh the ones against it, so the test normal is flipped when
/// the negative turns dominate.
///
/// Returns `None` if the polygon has fewer than 3 vertices or all of its
/// vertices are collinear.
#[must_use]
pub fn estimate_normal(polygon: &[Point3]) -> Option<Vector3> {
    if polygon.len() < 3 {
        return None;
    }

    let Some(test_normal) = first_turn_normal(polygon) else {
        debug!(vertices = polygon.len(), "polygon is collinear, no normal");
        return None;
    };

    let n = polygon.len();
    let mut positives = 0.0;
    let mut negatives = 0.0;
    for i in 0..n {
        let Some(theta) = turning_angle(
            &polygon[i],
            &polygon[(i + 1) % n],
            &polygon[(i + 2) % n],
            &test_normal,
        ) else {
            continue;
        };
        if theta > 0.0 {
            positives += theta;
        } else {
            negatives += theta;
        }
    }

    if positives > -negatives {
        Some(test_normal)
    } else {
        Some(-test_normal)
    }
}

/// Unit normal of the first non-degenerate triple `(i, i + 1, i + 2)`,
/// without wrapping around the end of the loop.
fn first_turn_normal(polygon: &[Point3]) -> Option<Vector3> {
    polygon.windows(3).find_map(|w| {
        let ab = w[1] - w[0];
        let bc = w[2] - w[1];
        ab.cross(&bc).try_normalize(0.0)
    })
}

/// Signed turning angle at `b` when walking `a -> b -> c`, in radians.
///
/// The magnitude is the bend between the two edges, in `[0, PI]`. The sign is
/// positive when the local turn agrees with `reference` and negative
/// otherwise; a straight or reversing vertex counts as disagreeing.
///
/// Returns `None` if either edge has zero length.
#[must_use]
pub fn turning_angle(a: &Point3, b: &Point3, c: &Point3, reference: &Vector3) -> Option<f64> {
    let ab = b - a;
    let bc = c - b;
    let lengths = ab.norm() * bc.norm();
    if lengths <= 0.0 {
        return None;
    }

    let cross = ab.cross(&bc);
    // Clamp for ratios such as 1.000_000_000_2.
    let alpha = (cross.norm() / lengths).clamp(-1.0, 1.0).asin();
    let bend = if ab.dot(&bc) / lengths > 0.0 {
        alpha
    } else {
        PI - alpha
    };

    if cross.dot(reference) > 0.0 {
        Some(bend)
    } else {
        Some(-bend)
    }
}
