use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::math::predicates::exact;
use crate::math::{Vector2, Vector3};

use super::{Scalar, Sign};

/// Half-width of the integer lattice quantized coordinates live on.
pub const LATTICE_HALF_WIDTH: i64 = 1 << 26;

const LATTICE_SCALE: f64 = 67_108_864.0;

/// Exact rational number.
///
/// Arithmetic never rounds. Coordinates enter through [`Rational::quantize`]
/// so operands stay small integers rather than arbitrary binary fractions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rational(BigRational);

impl Rational {
    /// Creates `numer / denom`.
    ///
    /// # Panics
    ///
    /// Panics if `denom` is zero.
    #[must_use]
    pub fn new(numer: i64, denom: i64) -> Self {
        assert!(denom != 0, "rational denominator must be non-zero");
        Self(BigRational::new(BigInt::from(numer), BigInt::from(denom)))
    }

    #[must_use]
    pub fn from_integer(value: i64) -> Self {
        Self(BigRational::from_integer(BigInt::from(value)))
    }

    #[must_use]
    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    #[must_use]
    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    #[must_use]
    pub fn into_inner(self) -> BigRational {
        self.0
    }

    /// Maps `d` from `[-m, m]` onto the integer lattice
    /// `[-2^26, 2^26]`, truncating towards zero.
    ///
    /// # Panics
    ///
    /// Panics if `m` is zero or `|d| > m`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn quantize(d: f64, m: f64) -> Self {
        assert!(m != 0.0, "quantization multiplier must be non-zero");
        assert!(d.abs() <= m, "cannot quantize {d}: magnitude exceeds multiplier {m}");

        if d == 0.0 {
            return Self::zero();
        }

        let normalized = d / m;
        Self::from_integer((normalized * LATTICE_SCALE) as i64)
    }

    /// Inverse of [`Rational::quantize`], rounded to the nearest double.
    ///
    /// # Panics
    ///
    /// Panics if the value lies outside the lattice `[-2^26, 2^26]`.
    #[must_use]
    pub fn dequantize(&self, m: f64) -> f64 {
        if self.0.is_zero() {
            return 0.0;
        }

        let bound = Self::from_integer(LATTICE_HALF_WIDTH);
        assert!(
            self.abs() <= bound,
            "cannot dequantize {self}: outside lattice half-width {LATTICE_HALF_WIDTH}"
        );

        let normalized = self.clone() / bound;
        let result = (normalized * Self::from_f64(m)).to_f64();

        assert!(
            result.abs() <= m.abs(),
            "dequantized value {result} exceeds multiplier {m}"
        );
        result
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(BigRational::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(BigRational::one())
    }
}

impl Scalar for Rational {
    fn from_f64(value: f64) -> Self {
        match BigRational::from_float(value) {
            Some(r) => Self(r),
            None => panic!("cannot represent non-finite value {value} exactly"),
        }
    }

    fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }

    fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    fn sign(&self) -> Sign {
        if self.0.is_positive() {
            Sign::Positive
        } else if self.0.is_negative() {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    fn sqrt(&self) -> Self {
        Self::from_f64(self.to_f64().sqrt())
    }

    fn upper_sentinel() -> Self {
        Self::from_f64(f64::MAX)
    }

    fn orient2d(a: &Vector2<Self>, b: &Vector2<Self>, c: &Vector2<Self>) -> Sign {
        exact::orient2d(a, b, c)
    }

    fn orient3d(a: &Vector3<Self>, b: &Vector3<Self>, c: &Vector3<Self>, d: &Vector3<Self>) -> Sign {
        exact::orient3d(a, b, c, d)
    }

    fn incircle(a: &Vector2<Self>, b: &Vector2<Self>, c: &Vector2<Self>, d: &Vector2<Self>) -> Sign {
        exact::incircle(a, b, c, d)
    }

    fn insphere(
        a: &Vector3<Self>,
        b: &Vector3<Self>,
        c: &Vector3<Self>,
        d: &Vector3<Self>,
        e: &Vector3<Self>,
    ) -> Sign {
        exact::insphere(a, b, c, d, e)
    }

    fn plane_side(normal: &Vector3<Self>, d: &Self, point: &Vector3<Self>) -> Sign {
        exact::plane_side(normal, d, point)
    }

    fn projection_sign(normal: &Vector3<Self>, q: &Vector3<Self>, r: &Vector3<Self>) -> Sign {
        exact::projection_sign(normal, q, r)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<BigRational> for Rational {
    fn from(value: BigRational) -> Self {
        Self(value)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        assert!(!rhs.0.is_zero(), "division of {self} by zero");
        Self(self.0 / rhs.0)
    }
}

impl AddAssign for Rational {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Rational {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl MulAssign for Rational {
    fn mul_assign(&mut self, rhs: Self) {
        self.0 *= rhs.0;
    }
}

impl DivAssign for Rational {
    fn div_assign(&mut self, rhs: Self) {
        assert!(!rhs.0.is_zero(), "division of {self} by zero");
        self.0 /= rhs.0;
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}
