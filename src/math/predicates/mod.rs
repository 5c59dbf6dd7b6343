//! Sign-exact orientation predicates.
//!
//! Every function here returns the sign of the true, infinite-precision
//! value regardless of the scalar representation. Doubles go through the
//! adaptive filters in [`adaptive`]; exact scalars evaluate the determinant
//! directly.

pub(crate) mod adaptive;
pub(crate) mod exact;
mod expansion;

use crate::scalar::{Scalar, Sign};

use super::{Vector2, Vector3};

/// Sign of the signed area of triangle `(a, b, c)`; positive when
/// counter-clockwise.
#[must_use]
pub fn orient2d<S: Scalar>(a: &Vector2<S>, b: &Vector2<S>, c: &Vector2<S>) -> Sign {
    S::orient2d(a, b, c)
}

/// Sign of the signed volume of tetrahedron `(a, b, c, d)`; positive when `d`
/// lies below the plane of counter-clockwise `(a, b, c)`.
#[must_use]
pub fn orient3d<S: Scalar>(a: &Vector3<S>, b: &Vector3<S>, c: &Vector3<S>, d: &Vector3<S>) -> Sign {
    S::orient3d(a, b, c, d)
}

/// Positive when `d` lies inside the circle through counter-clockwise
/// `(a, b, c)`, zero when cocircular.
#[must_use]
pub fn incircle<S: Scalar>(a: &Vector2<S>, b: &Vector2<S>, c: &Vector2<S>, d: &Vector2<S>) -> Sign {
    S::incircle(a, b, c, d)
}

/// Positive when `e` lies inside the sphere through `(a, b, c, d)`, which
/// must be positively oriented, zero when cospherical.
#[must_use]
pub fn insphere<S: Scalar>(
    a: &Vector3<S>,
    b: &Vector3<S>,
    c: &Vector3<S>,
    d: &Vector3<S>,
    e: &Vector3<S>,
) -> Sign {
    S::insphere(a, b, c, d, e)
}

#[must_use]
pub fn collinear<S: Scalar>(a: &Vector2<S>, b: &Vector2<S>, c: &Vector2<S>) -> bool {
    orient2d(a, b, c) == Sign::Zero
}

#[must_use]
pub fn coplanar<S: Scalar>(a: &Vector3<S>, b: &Vector3<S>, c: &Vector3<S>, d: &Vector3<S>) -> bool {
    orient3d(a, b, c, d) == Sign::Zero
}

/// Sign of `normal · point - d`, i.e. which side of the plane
/// `normal · x = d` the point lies on.
#[must_use]
pub fn plane_side<S: Scalar>(normal: &Vector3<S>, d: &S, point: &Vector3<S>) -> Sign {
    S::plane_side(normal, d, point)
}

/// Sign of `normal · (r - q)`. Zero when the direction `q -> r` is parallel
/// to planes with that normal.
#[must_use]
pub fn projection_sign<S: Scalar>(normal: &Vector3<S>, q: &Vector3<S>, r: &Vector3<S>) -> Sign {
    S::projection_sign(normal, q, r)
}
