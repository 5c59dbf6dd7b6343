//! Floating-point expansion arithmetic.
//!
//! An expansion is a sum of non-overlapping doubles stored in order of
//! increasing magnitude. Sums and products of expansions are exact, so the
//! sign of the most significant term is the sign of the true value.

use std::ops::{Add, Mul, Neg, Sub};

use crate::scalar::Sign;

/// `a + b` as a rounded sum and its exact rounding error.
#[inline]
pub(crate) fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let x = a + b;
    let b_virtual = x - a;
    let a_virtual = x - b_virtual;
    let b_round = b - b_virtual;
    let a_round = a - a_virtual;
    (x, a_round + b_round)
}

/// `a * b` as a rounded product and its exact rounding error.
#[inline]
pub(crate) fn two_product(a: f64, b: f64) -> (f64, f64) {
    let x = a * b;
    (x, a.mul_add(b, -x))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Expansion {
    // increasing magnitude, non-overlapping, zero-free
    terms: Vec<f64>,
}

impl Expansion {
    pub(crate) fn from_value(value: f64) -> Self {
        let mut terms = Vec::with_capacity(1);
        push_nonzero(&mut terms, value);
        Self { terms }
    }

    fn from_pair((hi, lo): (f64, f64)) -> Self {
        let mut terms = Vec::with_capacity(2);
        push_nonzero(&mut terms, lo);
        push_nonzero(&mut terms, hi);
        Self { terms }
    }

    /// Exact `a - b`.
    pub(crate) fn difference(a: f64, b: f64) -> Self {
        Self::from_pair(two_sum(a, -b))
    }

    /// Exact `a * b`.
    pub(crate) fn product(a: f64, b: f64) -> Self {
        Self::from_pair(two_product(a, b))
    }

    pub(crate) fn sign(&self) -> Sign {
        match self.terms.last() {
            Some(v) if *v > 0.0 => Sign::Positive,
            Some(v) if *v < 0.0 => Sign::Negative,
            _ => Sign::Zero,
        }
    }

    #[cfg(test)]
    fn estimate(&self) -> f64 {
        self.terms.iter().sum()
    }

    /// Adds a single double.
    fn grow(&self, b: f64) -> Self {
        let mut terms = Vec::with_capacity(self.terms.len() + 1);
        let mut q = b;
        for &e in &self.terms {
            let (sum, err) = two_sum(q, e);
            push_nonzero(&mut terms, err);
            q = sum;
        }
        push_nonzero(&mut terms, q);
        Self { terms }
    }

    /// Multiplies by a single double.
    fn scale(&self, b: f64) -> Self {
        let Some((&first, rest)) = self.terms.split_first() else {
            return Self::default();
        };
        if b == 0.0 {
            return Self::default();
        }

        let mut terms = Vec::with_capacity(2 * self.terms.len());
        let (mut q, lo) = two_product(first, b);
        push_nonzero(&mut terms, lo);
        for &e in rest {
            let (p_hi, p_lo) = two_product(e, b);
            let (sum, err) = two_sum(q, p_lo);
            push_nonzero(&mut terms, err);
            let (next, err) = two_sum(p_hi, sum);
            push_nonzero(&mut terms, err);
            q = next;
        }
        push_nonzero(&mut terms, q);
        Self { terms }
    }
}

fn push_nonzero(terms: &mut Vec<f64>, value: f64) {
    if value != 0.0 {
        terms.push(value);
    }
}

impl Add for &Expansion {
    type Output = Expansion;

    fn add(self, rhs: Self) -> Expansion {
        rhs.terms.iter().fold(self.clone(), |acc, &f| acc.grow(f))
    }
}

impl Neg for &Expansion {
    type Output = Expansion;

    fn neg(self) -> Expansion {
        Expansion {
            terms: self.terms.iter().map(|t| -t).collect(),
        }
    }
}

impl Sub for &Expansion {
    type Output = Expansion;

    fn sub(self, rhs: Self) -> Expansion {
        self + &(-rhs)
    }
}

impl Mul for &Expansion {
    type Output = Expansion;

    fn mul(self, rhs: Self) -> Expansion {
        rhs.terms
            .iter()
            .fold(Expansion::default(), |acc, &f| &acc + &self.scale(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_sum_captures_lost_bits() {
        let (hi, lo) = two_sum(1.0, 1e-20);
        assert!((hi - 1.0).abs() < f64::EPSILON);
        assert!((lo - 1e-20).abs() < 1e-36);
    }

    #[test]
    fn two_product_is_exact() {
        let a = 1.0 + f64::EPSILON;
        let (hi, lo) = two_product(a, a);
        // (1 + e)^2 = 1 + 2e + e^2, and e^2 falls off the rounded product.
        assert!((hi - (1.0 + 2.0 * f64::EPSILON)).abs() < f64::MIN_POSITIVE);
        assert!((lo - f64::EPSILON * f64::EPSILON).abs() < f64::MIN_POSITIVE);
    }

    #[test]
    fn cancellation_leaves_only_the_residue() {
        let big = Expansion::from_value(1e30);
        let tiny = Expansion::from_value(1.0);
        let sum = &(&big + &tiny) - &big;
        assert_eq!(sum.sign(), Sign::Positive);
        assert!((sum.estimate() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn product_of_differences() {
        // (0.1 - 0.3) * (0.7 - 0.2) evaluated exactly, then compared against
        // the same value assembled in another order.
        let a = Expansion::difference(0.1, 0.3);
        let b = Expansion::difference(0.7, 0.2);
        let ab = &a * &b;
        let ba = &b * &a;
        assert_eq!((&ab - &ba).sign(), Sign::Zero);
        assert_eq!(ab.sign(), Sign::Negative);
    }

    #[test]
    fn empty_expansion_is_zero() {
        assert_eq!(Expansion::default().sign(), Sign::Zero);
        assert_eq!(Expansion::product(0.0, 5.0).sign(), Sign::Zero);
        assert_eq!(Expansion::difference(3.0, 3.0).sign(), Sign::Zero);
    }
}
