//! The reduction kernel
//!
//! Grounded on the teacher's `poly_reduce` / `poly_reduce_completely`
//! pair in `algebra::groebner::reduction`, and on the sparse variant in
//! `algebra::groebner::efficient_buchberger::poly_reduce_completely_sparse`
//! which drives reduction from [`Monomial::checked_div`] rather than
//! walking an `Expression` tree. spec.md §4.4 splits this into two
//! named operations that the teacher's single `poly_reduce_completely`
//! conflates: leading-term-only reduction, and full reduction to a
//! normal form that also eliminates non-leading terms.

use crate::field::Field;
use crate::polynomial::{Monomial, Polynomial};

/// One reduction step: if `g` is nonzero and its leading term divides
/// `f`'s leading term, return `f - g * (head(f) / head(g))`.
fn reduce_step<F: Field>(f: &Polynomial<F>, g: &Polynomial<F>) -> Option<Polynomial<F>> {
    let f_lead = f.leading_monomial()?;
    let g_lead = g.leading_monomial()?;
    let quotient = f_lead.checked_div(g_lead)?;
    Some(f.sub(&g.mul_monomial(&quotient)))
}

/// Single-polynomial reduction (spec.md §4.4): while `f` is nonzero and
/// its leading term is divisible by the leading term of some `g` in
/// `basis`, replace `f` with the cancelling difference. Iterates until
/// no element of `basis` divides the (possibly new) leading term. This
/// reduces the *leading* term only — non-leading terms are untouched.
///
/// Deterministic given a fixed iteration order over `basis`; the
/// Gröbner-basis property does not depend on that order.
pub fn reduce_leading_term<F: Field>(f: &Polynomial<F>, basis: &[&Polynomial<F>]) -> Polynomial<F> {
    let mut current = f.clone();
    'outer: loop {
        if current.is_zero() {
            break;
        }
        for g in basis {
            if g.is_zero() {
                continue;
            }
            if let Some(reduced) = reduce_step(&current, g) {
                current = reduced;
                continue 'outer;
            }
        }
        break;
    }
    current
}

/// Full reduction to a normal form (spec.md §4.4 `ReduceToZero`):
/// repeat leading-term reduction; once the head is irreducible, set it
/// aside and continue reducing the remaining tail, until the whole
/// polynomial is exhausted or no sweep produces further change.
/// Returns `(normal_form, reduced_to_zero)`.
pub fn reduce_to_zero<F: Field>(f: &Polynomial<F>, basis: &[&Polynomial<F>]) -> (Polynomial<F>, bool) {
    let mut current = reduce_leading_term(f, basis);
    let mut set_aside: Vec<Monomial<F>> = Vec::new();

    while !current.is_zero() {
        // The head is now irreducible (reduce_leading_term guarantees
        // this); bank it and keep reducing the tail.
        let lead = current.leading_monomial().expect("nonzero polynomial has a leading monomial").clone();
        set_aside.push(lead);

        let tail: Vec<Monomial<F>> = current.terms()[1..].to_vec();
        let tail_poly = Polynomial::new(tail, current.num_vars(), current.order());
        current = reduce_leading_term(&tail_poly, basis);
    }

    let normal_form = Polynomial::new(set_aside, f.num_vars(), f.order());
    let is_zero = normal_form.is_zero();
    (normal_form, is_zero)
}

/// Rescale a nonzero polynomial so its leading coefficient is one.
fn monic<F: Field>(f: &Polynomial<F>) -> Polynomial<F> {
    let lc = f.leading_coefficient().expect("monic requires a nonzero polynomial").clone();
    if lc == F::one() {
        return f.clone();
    }
    let inv = lc.inv();
    let scaled: Vec<Monomial<F>> = f
        .terms()
        .iter()
        .map(|m| Monomial::new(m.term().clone(), m.coefficient().mul(&inv)))
        .collect();
    Polynomial::new(scaled, f.num_vars(), f.order())
}

/// Reduce a Gröbner basis to its unique reduced form (spec.md §6's
/// optional post-step, matching the teacher's always-on
/// auto-reduction): drop any generator whose leading term is properly
/// divisible by another's (minimalization), fully reduce each
/// survivor's tail against the rest of the minimal set, and rescale
/// every leading coefficient to one.
pub fn reduce_basis<F: Field>(basis: &[Polynomial<F>]) -> Vec<Polynomial<F>> {
    let nonzero: Vec<&Polynomial<F>> = basis.iter().filter(|p| !p.is_zero()).collect();

    let minimal: Vec<Polynomial<F>> = nonzero
        .iter()
        .enumerate()
        .filter(|(i, f)| {
            let lt = f.leading_term().expect("filtered to nonzero above");
            !nonzero.iter().enumerate().any(|(j, g)| {
                j != *i && {
                    let glt = g.leading_term().expect("filtered to nonzero above");
                    glt.divides(lt) && glt != lt
                }
            })
        })
        .map(|(_, f)| (*f).clone())
        .collect();

    let mut reduced = Vec::with_capacity(minimal.len());
    for i in 0..minimal.len() {
        let others: Vec<&Polynomial<F>> = minimal
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, p)| p)
            .collect();
        let (normal_form, is_zero) = reduce_to_zero(&minimal[i], &others);
        if !is_zero {
            reduced.push(normal_form);
        }
    }

    reduced.iter().map(monic).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Rational;
    use crate::ordering::MonomialOrder;
    use crate::term::Term;

    fn r(n: i64) -> Rational {
        Rational::from_integer(n)
    }

    fn mono(exps: Vec<u32>, c: i64) -> Monomial<Rational> {
        Monomial::new(Term::new(exps), r(c))
    }

    fn poly(monos: Vec<Monomial<Rational>>, num_vars: usize) -> Polynomial<Rational> {
        Polynomial::new(monos, num_vars, MonomialOrder::Lex)
    }

    #[test]
    fn test_reduce_leading_term_simple() {
        // f = x^2, g = x  =>  f reduces to 0 (x^2 - x*x = 0)
        let f = poly(vec![mono(vec![2], 1)], 1);
        let g = poly(vec![mono(vec![1], 1)], 1);
        let reduced = reduce_leading_term(&f, &[&g]);
        assert!(reduced.is_zero());
    }

    #[test]
    fn test_reduce_leading_term_no_reduction() {
        let f = poly(vec![mono(vec![0, 1], 1)], 2); // y
        let g = poly(vec![mono(vec![2, 0], 1)], 2); // x^2
        let reduced = reduce_leading_term(&f, &[&g]);
        assert_eq!(reduced, f);
    }

    #[test]
    fn test_reduce_to_zero_full_division() {
        // f = x^2 + 1, g = x - y  =>  remainder is y^2 + 1 (full reduction, not just head)
        let f = poly(vec![mono(vec![2, 0], 1), mono(vec![0, 0], 1)], 2);
        let g = poly(vec![mono(vec![1, 0], 1), mono(vec![0, 1], -1)], 2);
        let (remainder, is_zero) = reduce_to_zero(&f, &[&g]);
        assert!(!is_zero);
        assert!(!remainder.is_zero());
    }

    #[test]
    fn test_reduce_to_zero_detects_membership() {
        let f = poly(vec![mono(vec![1], 1)], 1);
        let basis = vec![f.clone()];
        let basis_refs: Vec<&Polynomial<Rational>> = basis.iter().collect();
        let (remainder, is_zero) = reduce_to_zero(&f, &basis_refs);
        assert!(is_zero);
        assert!(remainder.is_zero());
    }

    #[test]
    fn test_reduce_basis_drops_redundant_generator_and_normalizes() {
        // 2x is redundant once x is present, and should come out monic.
        let x = poly(vec![mono(vec![1], 1)], 1);
        let two_x = poly(vec![mono(vec![1], 2)], 1);
        let reduced = reduce_basis(&[x.clone(), two_x]);
        assert_eq!(reduced.len(), 1);
        assert_eq!(reduced[0].leading_coefficient(), Some(&r(1)));
    }

    #[test]
    fn test_reduce_basis_has_no_redundant_leading_terms() {
        // x^2 and x*y: x does not divide y, so both leading terms survive
        // minimalization, and tail reduction has nothing to do.
        let x2 = poly(vec![mono(vec![2, 0], 1)], 2);
        let xy = poly(vec![mono(vec![1, 1], 1)], 2);
        let reduced = reduce_basis(&[x2, xy]);
        assert_eq!(reduced.len(), 2);
        for p in &reduced {
            assert_eq!(p.leading_coefficient(), Some(&r(1)));
        }
    }
}
