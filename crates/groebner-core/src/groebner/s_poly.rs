//! S-polynomial construction
//!
//! Grounded on `algebra::groebner::s_polynomial` and on
//! `efficient_buchberger::s_polynomial_sparse`, adapted to
//! [`Polynomial`] instead of `SparsePolynomial`.

use crate::field::Field;
use crate::polynomial::{Monomial, Polynomial};
use crate::term::Term;

/// `S(f, g) = (L / head(f)) * f - (L / head(g)) * g`, where
/// `L = lcm(lt(f), lt(g))`. Panics if `f` or `g` is zero.
pub fn s_polynomial<F: Field>(f: &Polynomial<F>, g: &Polynomial<F>) -> Polynomial<F> {
    let f_lead = f.leading_monomial().expect("s_polynomial requires a nonzero f");
    let g_lead = g.leading_monomial().expect("s_polynomial requires a nonzero g");

    let lcm_term: Term = f_lead.term().lcm(g_lead.term());
    let lcm_mono = Monomial::new(lcm_term, F::one());

    let f_factor = lcm_mono.checked_div(f_lead).expect("lcm is divisible by lt(f)");
    let g_factor = lcm_mono.checked_div(g_lead).expect("lcm is divisible by lt(g)");

    let scaled_f = f.mul_monomial(&f_factor);
    let scaled_g = g.mul_monomial(&g_factor);

    scaled_f.sub(&scaled_g)
}
