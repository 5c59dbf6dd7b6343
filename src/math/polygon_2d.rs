use crate::scalar::{Scalar, Sign};

use super::predicates::orient2d;
use super::Vector2;

/// Where a point lies relative to a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointInPolygon {
    /// Strictly interior.
    Interior,
    /// Strictly exterior.
    Exterior,
    /// On an edge, but not at a vertex.
    OnEdge,
    /// Coincides with a vertex.
    OnVertex,
}

impl PointInPolygon {
    /// Single-character code: `'i'`, `'o'`, `'e'` or `'v'`.
    #[must_use]
    pub fn code(self) -> char {
        match self {
            Self::Interior => 'i',
            Self::Exterior => 'o',
            Self::OnEdge => 'e',
            Self::OnVertex => 'v',
        }
    }
}

/// Ray-crossing point-in-polygon test.
///
/// Casts a horizontal ray in both directions from `q` and counts edge
/// crossings on each side. Each crossing's side is decided by an orientation
/// predicate rather than by computing the crossing abscissa, so the result
/// is exact for any scalar. Differing parities mean `q` is on an edge.
///
/// # Panics
///
/// Panics if the polygon has fewer than three vertices.
#[must_use]
pub fn point_in_polygon_2d<S: Scalar>(q: &Vector2<S>, polygon: &[Vector2<S>]) -> PointInPolygon {
    let n = polygon.len();
    assert!(n >= 3, "polygon needs at least 3 vertices, got {n}");

    let mut right_crossings = 0_usize;
    let mut left_crossings = 0_usize;

    for i in 0..n {
        let current = &polygon[i];
        if current == q {
            return PointInPolygon::OnVertex;
        }
        let previous = &polygon[(i + n - 1) % n];

        // Straddle tests bias vertices on the ray upward (right) or
        // downward (left).
        let right_straddle = (current.y > q.y) != (previous.y > q.y);
        let left_straddle = (current.y < q.y) != (previous.y < q.y);
        if !(right_straddle || left_straddle) {
            continue;
        }

        // Sign of the crossing abscissa relative to q: q lies to the left of
        // an upward edge exactly when the crossing lies to its right.
        let side = orient2d(previous, current, q);
        let side = if previous.y > current.y { -side } else { side };

        if right_straddle && side == Sign::Positive {
            right_crossings += 1;
        }
        if left_straddle && side == Sign::Negative {
            left_crossings += 1;
        }
    }

    if right_crossings % 2 != left_crossings % 2 {
        PointInPolygon::OnEdge
    } else if right_crossings % 2 == 1 {
        PointInPolygon::Interior
    } else {
        PointInPolygon::Exterior
    }
}

/// Twice the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d<S: Scalar>(points: &[Vector2<S>]) -> S {
    let n = points.len();
    if n < 3 {
        return S::zero();
    }
    (0..n).fold(S::zero(), |sum, i| {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        sum + a.x.clone() * b.y.clone() - b.x.clone() * a.y.clone()
    })
}
