//! Scalar representations the kernel is generic over.
//!
//! Two implementations exist: `f64`, whose predicates use adaptive-precision
//! expansion arithmetic, and [`Rational`], whose arithmetic is exact and
//! whose predicates evaluate determinants directly.

mod float;
mod quantizer;
mod rational;

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

use crate::math::{Vector2, Vector3};

pub use quantizer::Quantizer;
pub use rational::{Rational, LATTICE_HALF_WIDTH};

/// Tri-state sign of a determinant or plane evaluation.
///
/// Classification routines consume this instead of raw differences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Negative side (clockwise, below).
    Negative,
    /// On the oriented boundary.
    Zero,
    /// Positive side (counter-clockwise, above).
    Positive,
}

impl Sign {
    /// Sign of an ordering relative to zero.
    #[must_use]
    pub fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Negative,
            Ordering::Equal => Self::Zero,
            Ordering::Greater => Self::Positive,
        }
    }

    /// Numeric code: -1, 0 or 1.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Negative => -1,
            Self::Zero => 0,
            Self::Positive => 1,
        }
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self == Self::Zero
    }

    /// `true` when both signs are non-zero and differ.
    #[must_use]
    pub fn opposes(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Negative, Self::Positive) | (Self::Positive, Self::Negative)
        )
    }

    /// `true` when both signs are non-zero and equal.
    #[must_use]
    pub fn agrees(self, other: Self) -> bool {
        self == other && self != Self::Zero
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Zero => Self::Zero,
            Self::Positive => Self::Negative,
        }
    }
}

impl Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_ordering((self.as_i32() * rhs.as_i32()).cmp(&0))
    }
}

/// Capability set shared by every scalar representation.
///
/// Orientation predicates live on the trait so each representation picks its
/// own evaluation strategy at compile time. The `num_traits` identities and
/// the assigning operators let matrices over any scalar be handed to
/// nalgebra.
pub trait Scalar:
    Clone
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Zero
    + One
    + Send
    + Sync
    + 'static
{
    /// Converts a double into this representation. Exact for both
    /// implementations.
    ///
    /// # Panics
    ///
    /// Exact representations panic on non-finite input.
    fn from_f64(value: f64) -> Self;

    /// Nearest double to this value.
    fn to_f64(&self) -> f64;

    fn abs(&self) -> Self;

    fn sign(&self) -> Sign;

    /// Square root. Approximate for exact representations: the value passes
    /// through `f64::sqrt`.
    fn sqrt(&self) -> Self;

    /// Largest representable bound, used as the empty bounding-box sentinel.
    fn upper_sentinel() -> Self;

    /// Sign of the signed area of triangle `(a, b, c)`.
    fn orient2d(a: &Vector2<Self>, b: &Vector2<Self>, c: &Vector2<Self>) -> Sign;

    /// Sign of the signed volume of tetrahedron `(a, b, c, d)`. Positive when
    /// `d` lies below the plane through `a, b, c`, seen counter-clockwise
    /// from above.
    fn orient3d(a: &Vector3<Self>, b: &Vector3<Self>, c: &Vector3<Self>, d: &Vector3<Self>)
        -> Sign;

    /// Positive when `d` is inside the circle through counter-clockwise
    /// `a, b, c`.
    fn incircle(a: &Vector2<Self>, b: &Vector2<Self>, c: &Vector2<Self>, d: &Vector2<Self>)
        -> Sign;

    /// Positive when `e` is inside the sphere through `a, b, c, d`, given
    /// `orient3d(a, b, c, d)` is positive.
    fn insphere(
        a: &Vector3<Self>,
        b: &Vector3<Self>,
        c: &Vector3<Self>,
        d: &Vector3<Self>,
        e: &Vector3<Self>,
    ) -> Sign;

    /// Sign of `normal · point - d`.
    fn plane_side(normal: &Vector3<Self>, d: &Self, point: &Vector3<Self>) -> Sign;

    /// Sign of `normal · (r - q)`.
    fn projection_sign(normal: &Vector3<Self>, q: &Vector3<Self>, r: &Vector3<Self>) -> Sign;
}

/// Smaller of two scalars, preferring `a` on ties.
#[must_use]
pub fn min<S: Scalar>(a: &S, b: &S) -> S {
    if b < a {
        b.clone()
    } else {
        a.clone()
    }
}

/// Larger of two scalars, preferring `a` on ties.
#[must_use]
pub fn max<S: Scalar>(a: &S, b: &S) -> S {
    if a < b {
        b.clone()
    } else {
        a.clone()
    }
}

/// Clamps `value` into `[lower, upper]`.
#[must_use]
pub fn clamp<S: Scalar>(value: &S, lower: &S, upper: &S) -> S {
    max(lower, &min(value, upper))
}

#[must_use]
pub fn absolute_value<S: Scalar>(value: &S) -> S {
    value.abs()
}

#[must_use]
pub fn sign<S: Scalar>(value: &S) -> Sign {
    value.sign()
}
