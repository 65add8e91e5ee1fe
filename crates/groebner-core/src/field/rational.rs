//! Exact rational coefficients
//!
//! Wraps [`num_rational::BigRational`], which already maintains the
//! canonical form spec.md §3 requires of field elements: reduced with
//! `gcd(|numerator|, denominator) = 1` and `denominator > 0`. Backing
//! the numerator and denominator with [`num_bigint::BigInt`] avoids the
//! fixed-width-integer overflow spec.md §9 calls out as a known
//! limitation of the naive implementation.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::Field;

/// An exact rational number, always in canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rational(BigRational);

impl Rational {
    /// Construct from a numerator and denominator, canonicalizing.
    ///
    /// Panics if `denominator` is zero.
    pub fn new(numerator: i64, denominator: i64) -> Self {
        assert!(denominator != 0, "rational denominator must be nonzero");
        Rational(BigRational::new(BigInt::from(numerator), BigInt::from(denominator)))
    }

    /// Construct an integer rational `n/1`.
    pub fn from_integer(n: i64) -> Self {
        Rational(BigRational::from_integer(BigInt::from(n)))
    }

    /// The numerator of the canonical representation.
    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    /// The denominator of the canonical representation (always > 0).
    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }
}

impl Field for Rational {
    fn zero() -> Self {
        Rational(BigRational::zero())
    }

    fn one() -> Self {
        Rational(BigRational::one())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn neg(&self) -> Self {
        Rational(-&self.0)
    }

    fn add(&self, other: &Self) -> Self {
        Rational(&self.0 + &other.0)
    }

    fn sub(&self, other: &Self) -> Self {
        Rational(&self.0 - &other.0)
    }

    fn mul(&self, other: &Self) -> Self {
        Rational(&self.0 * &other.0)
    }

    fn inv(&self) -> Self {
        assert!(!self.0.is_zero(), "division by zero in Rational field");
        Rational(self.0.recip())
    }

    fn div(&self, other: &Self) -> Self {
        assert!(!other.0.is_zero(), "division by zero in Rational field");
        Rational(&self.0 / &other.0)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_form() {
        let r = Rational::new(4, -8);
        assert_eq!(r.numer(), &BigInt::from(-1));
        assert_eq!(r.denom(), &BigInt::from(2));
    }

    #[test]
    fn test_field_laws() {
        let a = Rational::new(1, 2);
        let b = Rational::new(1, 3);
        let c = Rational::new(1, 5);

        assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        assert_eq!(a.add(&Rational::zero()), a);
        assert_eq!(a.add(&a.neg()), Rational::zero());
        assert_eq!(a.mul(&Rational::one()), a);
        assert_eq!(a.mul(&b), b.mul(&a));
        assert_eq!(a.mul(&a.inv()), Rational::one());
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_division_by_zero_panics() {
        let a = Rational::new(1, 2);
        let _ = a.div(&Rational::zero());
    }
}
