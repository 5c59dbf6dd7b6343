use tracing::debug;

use crate::scalar::{Scalar, Sign};

use super::polygon_2d::{point_in_polygon_2d, PointInPolygon};
use super::{cross_product, dot_product, Matrix, Vector2, Vector3};

/// Supporting plane `normal · x = d` of a polygon.
///
/// The normal is not normalized. `dominant_axis` is the index of its
/// largest-magnitude component and selects the coordinate dropped when the
/// polygon is projected to 2D.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPlane<S> {
    pub normal: Vector3<S>,
    pub d: S,
    pub dominant_axis: usize,
}

impl<S: Scalar> PolygonPlane<S> {
    /// Wraps raw plane coefficients, deriving the dominant axis.
    #[must_use]
    pub fn new(normal: Vector3<S>, d: S) -> Self {
        let dominant_axis = dominant_axis(&normal);
        Self {
            normal,
            d,
            dominant_axis,
        }
    }

    /// `true` when every normal component is zero (collinear or repeated
    /// vertices).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.normal.x.is_zero() && self.normal.y.is_zero() && self.normal.z.is_zero()
    }
}

/// Index of the largest-magnitude component. Ties go to the lower index.
fn dominant_axis<S: Scalar>(normal: &Vector3<S>) -> usize {
    let mut axis = 0;
    let mut largest = normal[0].abs();
    for i in 1..3 {
        let candidate = normal[i].abs();
        if candidate > largest {
            largest = candidate;
            axis = i;
        }
    }
    axis
}

/// Plane coefficients of a polygon.
///
/// The normal is the sum of the fan cross products
/// `(v[i] - v[0]) × (v[i+1] - v[0])`, which is twice the vector area and so
/// points away from the counter-clockwise side. `d` is `normal · v[0]`.
///
/// # Panics
///
/// Panics if the polygon has fewer than three vertices.
#[must_use]
pub fn compute_polygon_plane_coefficients<S: Scalar>(polygon: &[Vector3<S>]) -> PolygonPlane<S> {
    assert!(
        polygon.len() >= 3,
        "polygon needs at least 3 vertices, got {}",
        polygon.len()
    );

    let origin = &polygon[0];
    let normal = polygon[1..]
        .windows(2)
        .fold(Vector3::zero(), |acc, edge| {
            acc + cross_product(&(&edge[0] - origin), &(&edge[1] - origin))
        });
    let d = dot_product(origin, &normal);
    let plane = PolygonPlane::new(normal, d);

    if plane.is_degenerate() {
        debug!(
            vertices = polygon.len(),
            "polygon has a zero normal; its vertices are collinear"
        );
    }
    plane
}

/// 2x3 matrix that drops the dominant axis of `plane`.
///
/// The kept axes follow the cyclic order `(y, z)`, `(z, x)` or `(x, y)`, and
/// the two rows are swapped when the dominant component is negative. A
/// polygon that is counter-clockwise around its normal therefore stays
/// counter-clockwise in 2D.
#[must_use]
pub fn projection_matrix<S: Scalar>(plane: &PolygonPlane<S>) -> Matrix<S> {
    let k = plane.dominant_axis;
    let (mut first, mut second) = ((k + 1) % 3, (k + 2) % 3);
    if plane.normal[k].sign() == Sign::Negative {
        std::mem::swap(&mut first, &mut second);
    }

    let mut selection = Matrix::new(2, 3);
    selection[(0, first)] = S::one();
    selection[(1, second)] = S::one();
    selection
}

/// Projects every vertex onto the plane of the two non-dominant axes.
#[must_use]
pub fn project_to_2d<S: Scalar>(polygon: &[Vector3<S>], plane: &PolygonPlane<S>) -> Vec<Vector2<S>> {
    let selection = projection_matrix(plane);
    polygon
        .iter()
        .map(|v| selection.transform_3_to_2(v))
        .collect()
}

/// Point-in-polygon test for a point coplanar with a 3D polygon.
///
/// Both are projected along the dominant axis of `plane`, then classified
/// in 2D. A point off the plane is classified by its projection.
///
/// # Panics
///
/// Panics if the polygon has fewer than three vertices.
#[must_use]
pub fn point_in_polygon_3d<S: Scalar>(
    q: &Vector3<S>,
    polygon: &[Vector3<S>],
    plane: &PolygonPlane<S>,
) -> PointInPolygon {
    let selection = projection_matrix(plane);
    let projected: Vec<Vector2<S>> = polygon
        .iter()
        .map(|v| selection.transform_3_to_2(v))
        .collect();
    point_in_polygon_2d(&selection.transform_3_to_2(q), &projected)
}
