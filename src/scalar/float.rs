use crate::math::predicates::adaptive;
use crate::math::{Vector2, Vector3};

use super::{Scalar, Sign};

impl Scalar for f64 {
    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(&self) -> f64 {
        *self
    }

    fn abs(&self) -> Self {
        f64::abs(*self)
    }

    fn sign(&self) -> Sign {
        if *self > 0.0 {
            Sign::Positive
        } else if *self < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    fn sqrt(&self) -> Self {
        f64::sqrt(*self)
    }

    fn upper_sentinel() -> Self {
        f64::INFINITY
    }

    fn orient2d(a: &Vector2<Self>, b: &Vector2<Self>, c: &Vector2<Self>) -> Sign {
        adaptive::orient2d(a, b, c)
    }

    fn orient3d(a: &Vector3<Self>, b: &Vector3<Self>, c: &Vector3<Self>, d: &Vector3<Self>) -> Sign {
        adaptive::orient3d(a, b, c, d)
    }

    fn incircle(a: &Vector2<Self>, b: &Vector2<Self>, c: &Vector2<Self>, d: &Vector2<Self>) -> Sign {
        adaptive::incircle(a, b, c, d)
    }

    fn insphere(
        a: &Vector3<Self>,
        b: &Vector3<Self>,
        c: &Vector3<Self>,
        d: &Vector3<Self>,
        e: &Vector3<Self>,
    ) -> Sign {
        adaptive::insphere(a, b, c, d, e)
    }

    fn plane_side(normal: &Vector3<Self>, d: &Self, point: &Vector3<Self>) -> Sign {
        adaptive::plane_side(normal, *d, point)
    }

    fn projection_sign(normal: &Vector3<Self>, q: &Vector3<Self>, r: &Vector3<Self>) -> Sign {
        adaptive::projection_sign(normal, q, r)
    }
}
