//! Test-support utilities: the Gröbner-basis property checker.
//!
//! spec.md §8 requires that the Buchberger criterion — every S-pair's
//! S-polynomial reduces to zero against the candidate basis — be
//! implemented as reusable test support rather than re-derived in each
//! test module, plus a cross-engine equivalence check comparing the
//! basis produced by different engines on the same input. There is no
//! teacher counterpart to this module (the teacher's tests inline their
//! own ad hoc assertions); it is grounded directly on spec.md's
//! "Testable properties" section.

use crate::field::Field;
use crate::groebner::s_polynomial;
use crate::polynomial::Polynomial;
use crate::reduction::reduce_to_zero;

/// `true` iff `basis` is a Gröbner basis by Buchberger's criterion:
/// every pairwise S-polynomial reduces to zero against it. Quadratic in
/// the basis size; intended for tests on small inputs, not for use
/// inside a completion engine's hot loop.
pub fn is_groebner_basis<F: Field>(basis: &[Polynomial<F>]) -> bool {
    let refs: Vec<&Polynomial<F>> = basis.iter().collect();
    for i in 0..refs.len() {
        for j in (i + 1)..refs.len() {
            let s = s_polynomial(refs[i], refs[j]);
            let (_, is_zero) = reduce_to_zero(&s, &refs);
            if !is_zero {
                return false;
            }
        }
    }
    true
}

/// `true` iff every generator in `basis` reduces to zero against
/// `ideal_generators` and vice versa — a (necessary, not sufficient on
/// its own, but combined with [`is_groebner_basis`] on both sides
/// sufficient) membership check that two bases generate the same
/// ideal. Used to compare the output of different completion engines
/// on the same input: both must be Gröbner bases, and each must reduce
/// to zero against the other.
pub fn same_ideal<F: Field>(a: &[Polynomial<F>], b: &[Polynomial<F>]) -> bool {
    let a_refs: Vec<&Polynomial<F>> = a.iter().collect();
    let b_refs: Vec<&Polynomial<F>> = b.iter().collect();

    let a_reduces_into_b = a.iter().all(|f| reduce_to_zero(f, &b_refs).1);
    let b_reduces_into_a = b.iter().all(|g| reduce_to_zero(g, &a_refs).1);
    a_reduces_into_b && b_reduces_into_a
}
