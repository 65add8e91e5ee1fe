//! Monomial orderings
//!
//! Grounded on `algebra::groebner::monomial_order::MonomialOrder` in the
//! teacher, adapted from the teacher's `Expression`-walking comparator
//! to compare [`crate::Term`] exponent vectors directly. The ordering
//! is a parameter of [`crate::Polynomial`] and must stay fixed for the
//! duration of a computation (spec.md §6, "switching orderings
//! mid-computation is undefined").

use std::cmp::Ordering;

use crate::term::Term;

/// A total, multiplicative, well-founded order on terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonomialOrder {
    /// Lexicographic: compare from the first variable forward, larger
    /// exponent first.
    Lex,

    /// Degree-reverse-lexicographic (the default): compare total
    /// degree first; on a tie, compare from the last variable
    /// backward, preferring the smaller last exponent.
    Grevlex,
}

impl Default for MonomialOrder {
    fn default() -> Self {
        MonomialOrder::Grevlex
    }
}

impl MonomialOrder {
    /// Compare two terms under this ordering.
    pub fn compare(&self, a: &Term, b: &Term) -> Ordering {
        match self {
            MonomialOrder::Lex => a.cmp_lex(b),
            MonomialOrder::Grevlex => a.cmp_grevlex(b),
        }
    }
}
