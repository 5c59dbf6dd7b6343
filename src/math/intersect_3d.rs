use crate::scalar::{self, Rational, Scalar, Sign};

use super::polygon_3d::{projection_matrix, PolygonPlane};
use super::predicates::{orient2d, orient3d, plane_side, projection_sign};
use super::{dot_product, Vector3};

/// Relationship between an infinite line and a plane.
#[derive(Debug, Clone, PartialEq)]
pub enum LinePlaneIntersection<S> {
    /// Parallel and off the plane, or the plane normal is zero.
    NoIntersection,
    /// Single crossing at `q + (r - q) * t`.
    Point { point: Vector3<S>, t: S },
    /// The whole line lies in the plane.
    InPlane,
}

impl<S> LinePlaneIntersection<S> {
    /// Single-character code: `'0'`, `'1'` or `'p'`.
    #[must_use]
    pub fn code(&self) -> char {
        match self {
            Self::NoIntersection => '0',
            Self::Point { .. } => '1',
            Self::InPlane => 'p',
        }
    }
}

/// Topological class of a segment against a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentPlaneType {
    /// Both endpoints lie on the plane.
    InPlane,
    /// Only the first endpoint `q` lies on the plane.
    FirstEndpoint,
    /// Only the second endpoint `r` lies on the plane.
    SecondEndpoint,
    /// Both endpoints strictly on the same side.
    Disjoint,
    /// Endpoints strictly on opposite sides.
    Proper,
}

impl SegmentPlaneType {
    /// Single-character code: `'p'`, `'q'`, `'r'`, `'0'` or `'1'`.
    #[must_use]
    pub fn code(self) -> char {
        match self {
            Self::InPlane => 'p',
            Self::FirstEndpoint => 'q',
            Self::SecondEndpoint => 'r',
            Self::Disjoint => '0',
            Self::Proper => '1',
        }
    }

    /// Classifies from the sides of the two endpoints.
    fn from_sides(q_side: Sign, r_side: Sign) -> Self {
        match (q_side, r_side) {
            (Sign::Zero, Sign::Zero) => Self::InPlane,
            (Sign::Zero, _) => Self::FirstEndpoint,
            (_, Sign::Zero) => Self::SecondEndpoint,
            (a, b) if a == b => Self::Disjoint,
            _ => Self::Proper,
        }
    }
}

/// Segment-plane classification with the intersection point where one
/// exists.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentPlaneIntersection<S> {
    InPlane,
    FirstEndpoint { point: Vector3<S> },
    SecondEndpoint { point: Vector3<S> },
    Disjoint,
    /// Interior crossing at `q + (r - q) * t`, `t` clamped into `[0, 1]`.
    Proper { point: Vector3<S>, t: S },
}

impl<S> SegmentPlaneIntersection<S> {
    #[must_use]
    pub fn kind(&self) -> SegmentPlaneType {
        match self {
            Self::InPlane => SegmentPlaneType::InPlane,
            Self::FirstEndpoint { .. } => SegmentPlaneType::FirstEndpoint,
            Self::SecondEndpoint { .. } => SegmentPlaneType::SecondEndpoint,
            Self::Disjoint => SegmentPlaneType::Disjoint,
            Self::Proper { .. } => SegmentPlaneType::Proper,
        }
    }

    #[must_use]
    pub fn code(&self) -> char {
        self.kind().code()
    }

    /// The intersection point, if the class carries one.
    #[must_use]
    pub fn point(&self) -> Option<&Vector3<S>> {
        match self {
            Self::FirstEndpoint { point }
            | Self::SecondEndpoint { point }
            | Self::Proper { point, .. } => Some(point),
            Self::InPlane | Self::Disjoint => None,
        }
    }
}

/// Intersects the infinite line through `q` and `r` with `plane`.
///
/// Parallelism and containment are decided by exact sign tests, so a line
/// that is parallel to the plane never yields a far-away point.
#[must_use]
pub fn line_plane_intersection<S: Scalar>(
    q: &Vector3<S>,
    r: &Vector3<S>,
    plane: &PolygonPlane<S>,
) -> LinePlaneIntersection<S> {
    if plane.is_degenerate() {
        return LinePlaneIntersection::NoIntersection;
    }

    let normal = &plane.normal;
    if projection_sign(normal, q, r) == Sign::Zero {
        return if plane_side(normal, &plane.d, q) == Sign::Zero {
            LinePlaneIntersection::InPlane
        } else {
            LinePlaneIntersection::NoIntersection
        };
    }

    let direction = r - q;
    let numerator = plane.d.clone() - dot_product(normal, q);
    let denominator = dot_product(normal, &direction);
    let t = if denominator.is_zero() {
        exact_line_parameter(q, r, plane)
    } else {
        let t = numerator / denominator;
        if t.to_f64().is_finite() {
            t
        } else {
            exact_line_parameter(q, r, plane)
        }
    };
    let point = q + &(direction * t.clone());
    LinePlaneIntersection::Point { point, t }
}

/// Line parameter `(d - n·q) / n·(r - q)` evaluated in rational arithmetic.
///
/// Used when the rounded denominator cancels to zero although
/// [`projection_sign`] proved it non-zero.
fn exact_line_parameter<S: Scalar>(q: &Vector3<S>, r: &Vector3<S>, plane: &PolygonPlane<S>) -> S {
    let lift = |v: &Vector3<S>| {
        Vector3::new(
            Rational::from_f64(v.x.to_f64()),
            Rational::from_f64(v.y.to_f64()),
            Rational::from_f64(v.z.to_f64()),
        )
    };
    let (q, r, normal) = (lift(q), lift(r), lift(&plane.normal));
    let d = Rational::from_f64(plane.d.to_f64());
    let t = (d - dot_product(&normal, &q)) / dot_product(&normal, &(&r - &q));
    S::from_f64(t.to_f64())
}

/// Intersects the closed segment `q r` with `plane`.
///
/// Endpoint sides come from [`plane_side`], so the class is exact for the
/// given coefficients. On a proper crossing `t` is clamped into `[0, 1]` to
/// absorb rounding in floating-point mode.
#[must_use]
pub fn segment_plane_intersection<S: Scalar>(
    q: &Vector3<S>,
    r: &Vector3<S>,
    plane: &PolygonPlane<S>,
) -> SegmentPlaneIntersection<S> {
    let q_side = plane_side(&plane.normal, &plane.d, q);
    let r_side = plane_side(&plane.normal, &plane.d, r);

    match SegmentPlaneType::from_sides(q_side, r_side) {
        SegmentPlaneType::InPlane => SegmentPlaneIntersection::InPlane,
        SegmentPlaneType::FirstEndpoint => {
            SegmentPlaneIntersection::FirstEndpoint { point: q.clone() }
        }
        SegmentPlaneType::SecondEndpoint => {
            SegmentPlaneIntersection::SecondEndpoint { point: r.clone() }
        }
        SegmentPlaneType::Disjoint => SegmentPlaneIntersection::Disjoint,
        SegmentPlaneType::Proper => {
            let q_distance = dot_product(&plane.normal, q) - plane.d.clone();
            let r_distance = dot_product(&plane.normal, r) - plane.d.clone();
            let denominator = q_distance.clone() - r_distance;
            let t = if denominator.is_zero() {
                exact_line_parameter(q, r, plane)
            } else {
                q_distance / denominator
            };
            let t = scalar::clamp(&t, &S::zero(), &S::one());
            let point = q + &((r - q) * t.clone());
            SegmentPlaneIntersection::Proper { point, t }
        }
    }
}

/// Classifies the segment `q r` against the plane of `polygon` without
/// constructing a point.
///
/// The sides are taken from [`orient3d`] against three non-collinear polygon
/// vertices, which is exact even when the rounded plane coefficients are
/// not. A polygon whose vertices are all collinear falls back to the
/// coefficients in `plane`.
///
/// # Panics
///
/// Panics if the polygon has fewer than three vertices.
#[must_use]
pub fn segment_plane_intersection_type<S: Scalar>(
    q: &Vector3<S>,
    r: &Vector3<S>,
    polygon: &[Vector3<S>],
    plane: &PolygonPlane<S>,
) -> SegmentPlaneType {
    let n = polygon.len();
    assert!(n >= 3, "polygon needs at least 3 vertices, got {n}");

    let selection = projection_matrix(plane);
    let projected: Vec<_> = polygon
        .iter()
        .map(|v| selection.transform_3_to_2(v))
        .collect();

    let reference = (0..n).find_map(|i| {
        let (a, b, c) = (i, (i + 1) % n, (i + 2) % n);
        (orient2d(&projected[a], &projected[b], &projected[c]) != Sign::Zero)
            .then(|| (&polygon[a], &polygon[b], &polygon[c]))
    });

    match reference {
        Some((a, b, c)) => {
            SegmentPlaneType::from_sides(orient3d(a, b, c, q), orient3d(a, b, c, r))
        }
        None => SegmentPlaneType::from_sides(
            plane_side(&plane.normal, &plane.d, q),
            plane_side(&plane.normal, &plane.d, r),
        ),
    }
}
