//! Coefficient field arithmetic
//!
//! The completion engines are polymorphic over the capability set
//! `{zero, one, add, sub, mul, div, neg, eq}` via the [`Field`] trait,
//! realized with parametric generics rather than dynamic dispatch so
//! the hot reduction loops pay no per-operation indirection cost (see
//! spec.md §9, "Polymorphism over the field").
//!
//! Two concrete variants are provided: [`Rational`] (exact fractions
//! of arbitrary-precision integers) and [`PrimeField`] (residues modulo
//! a compile-time prime).

mod prime;
mod rational;

pub use prime::PrimeField;
pub use rational::Rational;

/// A field: the coefficient domain of a polynomial.
///
/// Implementations must be values — copyable, equality-comparable,
/// with no hidden state (spec.md §9). Division by zero is a fatal
/// invariant violation and must panic rather than return an error;
/// callers are expected to check `is_zero` themselves when division by
/// a computed value is not structurally guaranteed to be nonzero.
pub trait Field: Clone + PartialEq + std::fmt::Debug + std::fmt::Display {
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// `true` iff `self == Self::zero()`.
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Additive inverse.
    fn neg(&self) -> Self;

    /// `self + other`.
    fn add(&self, other: &Self) -> Self;

    /// `self - other`.
    fn sub(&self, other: &Self) -> Self;

    /// `self * other`.
    fn mul(&self, other: &Self) -> Self;

    /// Multiplicative inverse of a nonzero element. Panics on zero.
    fn inv(&self) -> Self;

    /// `self / other`. Panics if `other` is zero.
    fn div(&self, other: &Self) -> Self {
        assert!(!other.is_zero(), "division by zero field element");
        self.mul(&other.inv())
    }
}
