use crate::scalar::{self, Scalar, Sign};

use super::predicates::orient2d;
use super::{BoundingBox, Vector2};

/// Classification of two closed 2D segments `a b` and `c d`.
///
/// `s` parametrizes `a b` and `t` parametrizes `c d`, both in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentIntersection<S> {
    /// The segments are collinear and share at least `point`.
    CollinearOverlap { point: Vector2<S> },
    /// An endpoint of one segment lies on the other.
    EndpointTouch { point: Vector2<S>, s: S, t: S },
    /// The interiors cross at a single point.
    Proper { point: Vector2<S>, s: S, t: S },
    Disjoint,
}

impl<S> SegmentIntersection<S> {
    /// Single-character code: `'e'`, `'v'`, `'1'` or `'0'`.
    #[must_use]
    pub fn code(&self) -> char {
        match self {
            Self::CollinearOverlap { .. } => 'e',
            Self::EndpointTouch { .. } => 'v',
            Self::Proper { .. } => '1',
            Self::Disjoint => '0',
        }
    }

    #[must_use]
    pub fn point(&self) -> Option<&Vector2<S>> {
        match self {
            Self::CollinearOverlap { point }
            | Self::EndpointTouch { point, .. }
            | Self::Proper { point, .. } => Some(point),
            Self::Disjoint => None,
        }
    }
}

/// Closed-box test for a point already known to be collinear with `a b`.
fn between<S: Scalar>(a: &Vector2<S>, b: &Vector2<S>, c: &Vector2<S>) -> bool {
    BoundingBox::from_points([a, b]).contains(c)
}

/// `num / denom` clamped into `[0, 1]`; zero when `denom` rounded to zero.
fn parameter<S: Scalar>(num: S, denom: &S) -> S {
    if denom.is_zero() {
        return S::zero();
    }
    scalar::clamp(&(num / denom.clone()), &S::zero(), &S::one())
}

/// Intersects the closed segments `a b` and `c d`.
///
/// The class is decided from the four orientation signs alone, so it is
/// exact for both scalar representations. Segments whose bounding boxes do
/// not overlap are always [`Disjoint`](SegmentIntersection::Disjoint).
#[must_use]
pub fn compute_segment_intersection<S: Scalar>(
    a: &Vector2<S>,
    b: &Vector2<S>,
    c: &Vector2<S>,
    d: &Vector2<S>,
) -> SegmentIntersection<S> {
    let first = BoundingBox::from_points([a, b]);
    let second = BoundingBox::from_points([c, d]);
    if !first.intersects(&second) {
        return SegmentIntersection::Disjoint;
    }

    let c_side = orient2d(a, b, c);
    let d_side = orient2d(a, b, d);
    let a_side = orient2d(c, d, a);
    let b_side = orient2d(c, d, b);

    if [c_side, d_side, a_side, b_side].iter().all(|s| s.is_zero()) {
        return collinear_intersection(a, b, c, d);
    }

    if c_side * d_side == Sign::Positive || a_side * b_side == Sign::Positive {
        return SegmentIntersection::Disjoint;
    }

    let denom = a.x.clone() * (d.y.clone() - c.y.clone())
        + b.x.clone() * (c.y.clone() - d.y.clone())
        + d.x.clone() * (b.y.clone() - a.y.clone())
        + c.x.clone() * (a.y.clone() - b.y.clone());
    let s_num = a.x.clone() * (d.y.clone() - c.y.clone())
        + c.x.clone() * (a.y.clone() - d.y.clone())
        + d.x.clone() * (c.y.clone() - a.y.clone());
    let t_num = -(a.x.clone() * (c.y.clone() - b.y.clone())
        + b.x.clone() * (a.y.clone() - c.y.clone())
        + c.x.clone() * (b.y.clone() - a.y.clone()));

    let mut s = parameter(s_num, &denom);
    let mut t = parameter(t_num, &denom);

    let touching = [c_side, d_side, a_side, b_side].iter().any(|s| s.is_zero());
    if !touching {
        let point = a + &((b - a) * s.clone());
        return SegmentIntersection::Proper { point, s, t };
    }

    // Snap the parameters of whichever endpoints lie on the other segment.
    if a_side.is_zero() {
        s = S::zero();
    } else if b_side.is_zero() {
        s = S::one();
    }
    if c_side.is_zero() {
        t = S::zero();
    } else if d_side.is_zero() {
        t = S::one();
    }

    let point = if a_side.is_zero() {
        a.clone()
    } else if b_side.is_zero() {
        b.clone()
    } else if c_side.is_zero() {
        c.clone()
    } else {
        d.clone()
    };
    SegmentIntersection::EndpointTouch { point, s, t }
}

fn collinear_intersection<S: Scalar>(
    a: &Vector2<S>,
    b: &Vector2<S>,
    c: &Vector2<S>,
    d: &Vector2<S>,
) -> SegmentIntersection<S> {
    let shared = if between(a, b, c) {
        Some(c)
    } else if between(a, b, d) {
        Some(d)
    } else if between(c, d, a) {
        Some(a)
    } else if between(c, d, b) {
        Some(b)
    } else {
        None
    };

    shared.map_or(SegmentIntersection::Disjoint, |point| {
        SegmentIntersection::CollinearOverlap {
            point: point.clone(),
        }
    })
}
