//! The F4 completion engine (spec.md §4.7): a matrix-based batch
//! generalization of Buchberger's algorithm.
//!
//! Each round first prunes the pending pair set with the same product
//! and chain criteria [`super::criteria`] applies (spec.md §4.7 step 1,
//! "compute the current pair set (with criteria as in 4.6)"), selects
//! every surviving pair whose S-polynomial lcm has minimal total
//! degree, builds a single matrix from the two scaled multiples of
//! each selected pair plus the reducer rows symbolic preprocessing
//! pulls in, row-reduces it once, and harvests pivot rows whose pivot
//! monomial is not already a known leading term as new basis elements
//! — row reduction cancels each pair's shared leading column itself,
//! rather than this engine precomputing the S-polynomial difference.
//! The underlying term and reduction vocabulary is grounded on the
//! same teacher primitives as [`super::buchberger`]; the batching and
//! matrix construction have no teacher counterpart and follow spec.md's
//! description of Faugère's algorithm directly.

use std::collections::{HashMap, HashSet};

use crate::error::{GroebnerError, GroebnerResult};
use crate::field::Field;
use crate::ideal::{Pair, WorkSet};
use crate::matrix::Matrix;
use crate::polynomial::{Monomial, Polynomial};
use crate::term::Term;
use crate::EngineConfig;

use super::criteria::{chain_criterion, product_criterion};

/// Find an active basis element whose leading term divides `t`, and
/// return it scaled so its leading term becomes exactly `t`.
fn find_reductor<F: Field>(work: &WorkSet<F>, t: &Term) -> Option<Polynomial<F>> {
    work.active_indices().find_map(|i| {
        let g = work.get(i);
        let lt = g.leading_term()?;
        if !lt.divides(t) {
            return None;
        }
        let quotient_term = t.checked_div(lt).expect("divisibility already checked");
        Some(g.mul_monomial(&Monomial::new(quotient_term, F::one())))
    })
}

/// Complete `generators` into a Gröbner basis using the F4 algorithm.
pub fn f4<F: Field>(generators: Vec<Polynomial<F>>, config: &EngineConfig) -> GroebnerResult<Vec<Polynomial<F>>> {
    let (order, num_vars) = match generators.iter().find(|p| !p.is_zero()) {
        Some(p) => (p.order(), p.num_vars()),
        None => return Ok(Vec::new()),
    };

    let mut work: WorkSet<F> = WorkSet::new(generators);
    let mut pairs: Vec<Pair> = Vec::new();
    for i in 0..work.len() {
        for j in (i + 1)..work.len() {
            pairs.push(Pair::new(i, j));
        }
    }

    let mut iterations = 0usize;

    while !pairs.is_empty() {
        iterations += 1;
        if iterations > config.max_iterations {
            return Err(GroebnerError::MaxIterationsReached { max_iterations: config.max_iterations });
        }
        if let Some(cancel) = &config.should_cancel {
            if cancel() {
                return Err(GroebnerError::Cancelled);
            }
        }

        // Prune with Buchberger's product and chain criteria before
        // picking this round's batch, exactly as `criteria::run` prunes
        // before processing a dequeued pair.
        let pending_snapshot = pairs.clone();
        pairs.retain(|pair| {
            let fi = work.get(pair.i);
            let fj = work.get(pair.j);
            if product_criterion(fi, fj) {
                return false;
            }
            !chain_criterion(*pair, &work, |p| pending_snapshot.contains(p))
        });
        if pairs.is_empty() {
            break;
        }

        let lcm_degree = |pair: &Pair| -> u32 {
            let li = work.get(pair.i).leading_term().expect("active generators are nonzero");
            let lj = work.get(pair.j).leading_term().expect("active generators are nonzero");
            li.lcm(lj).total_degree()
        };
        let min_degree = pairs.iter().map(lcm_degree).min().expect("pairs is nonempty");

        let mut selected = Vec::new();
        let mut rest = Vec::new();
        for pair in pairs {
            if lcm_degree(&pair) == min_degree {
                selected.push(pair);
            } else {
                rest.push(pair);
            }
        }
        pairs = rest;

        // Seed rows: both multiples (L/head(fi))*fi and (L/head(fj))*fj
        // for each selected pair, not the precomputed S-polynomial — row
        // reduction cancels their shared leading column itself, which is
        // what lets a single elimination pass absorb many pairs at once.
        let mut seed_rows: Vec<Polynomial<F>> = Vec::with_capacity(selected.len() * 2);
        for pair in &selected {
            let fi = work.get(pair.i);
            let fj = work.get(pair.j);
            let lt_i = fi.leading_term().expect("active generators are nonzero");
            let lt_j = fj.leading_term().expect("active generators are nonzero");
            let lcm = lt_i.lcm(lt_j);

            let factor_i = Monomial::new(lcm.checked_div(lt_i).expect("lcm is divisible by lt(fi)"), F::one());
            let factor_j = Monomial::new(lcm.checked_div(lt_j).expect("lcm is divisible by lt(fj)"), F::one());
            seed_rows.push(fi.mul_monomial(&factor_i));
            seed_rows.push(fj.mul_monomial(&factor_j));
        }
        if seed_rows.is_empty() {
            continue;
        }

        // Symbolic preprocessing: for every monomial touched (directly,
        // or introduced by a reducer's own terms), pull in a reducer row
        // if one exists, until the frontier is exhausted.
        let mut rows: Vec<Polynomial<F>> = seed_rows.clone();
        let mut seen: HashSet<Term> = HashSet::new();
        let mut frontier: Vec<Term> = seed_rows.iter().flat_map(|p| p.terms().iter().map(|m| m.term().clone())).collect();

        while let Some(t) = frontier.pop() {
            if !seen.insert(t.clone()) {
                continue;
            }
            if let Some(scaled) = find_reductor(&work, &t) {
                frontier.extend(scaled.terms().iter().map(|m| m.term().clone()));
                rows.push(scaled);
            }
        }

        let mut columns: Vec<Term> = seen.into_iter().collect();
        columns.sort_by(|a, b| order.compare(b, a));
        let col_index: HashMap<Term, usize> = columns.iter().cloned().zip(0..).collect();

        let mut matrix: Matrix<F> = Matrix::new(columns.clone());
        for row_poly in &rows {
            let mut row = vec![F::zero(); columns.len()];
            for m in row_poly.terms() {
                row[col_index[m.term()]] = m.coefficient().clone();
            }
            matrix.push_row(row);
        }

        // Step 8's extraction test looks at the leading terms the matrix
        // *entered* row reduction with, not the basis's current leading
        // terms — a pivot surviving at one of those columns reconfirms a
        // known relation rather than discovering a new one.
        let input_leading_terms: HashSet<Term> = rows.iter().filter_map(|p| p.leading_term().cloned()).collect();

        let pivots = matrix.row_reduce();
        let reduced_rows = matrix.into_rows();

        for (row, &pivot_col) in reduced_rows.iter().zip(pivots.iter()) {
            let pivot_term = columns[pivot_col].clone();
            if input_leading_terms.contains(&pivot_term) {
                continue;
            }

            let monomials: Vec<Monomial<F>> = row
                .iter()
                .enumerate()
                .filter(|(_, c)| !c.is_zero())
                .map(|(i, c)| Monomial::new(columns[i].clone(), c.clone()))
                .collect();
            if monomials.is_empty() {
                continue;
            }

            let new_poly = Polynomial::new(monomials, num_vars, order);
            let new_idx = work.push(new_poly);
            for k in work.active_indices() {
                if k != new_idx {
                    pairs.push(Pair::new(k, new_idx));
                }
            }
        }
    }

    Ok(work.compact())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::PrimeField;
    use crate::groebner::s_polynomial;
    use crate::ordering::MonomialOrder;
    use crate::reduction::reduce_to_zero;

    type F31 = PrimeField<31>;

    fn c(n: i64) -> F31 {
        F31::new(n)
    }

    fn mono(exps: Vec<u32>, v: i64) -> Monomial<F31> {
        Monomial::new(Term::new(exps), c(v))
    }

    fn poly(monos: Vec<Monomial<F31>>, num_vars: usize) -> Polynomial<F31> {
        Polynomial::new(monos, num_vars, MonomialOrder::Grevlex)
    }

    #[test]
    fn test_empty_generators_is_empty_basis() {
        let config = EngineConfig::default();
        let basis = f4::<F31>(vec![], &config).unwrap();
        assert!(basis.is_empty());
    }

    #[test]
    fn test_f4_satisfies_groebner_basis_property() {
        let f = poly(vec![mono(vec![2, 0], 1), mono(vec![0, 0], -1)], 2); // x^2 - 1
        let g = poly(vec![mono(vec![1, 1], 1), mono(vec![0, 0], -1)], 2); // xy - 1
        let config = EngineConfig::default();
        let basis = f4(vec![f, g], &config).unwrap();

        let refs: Vec<&Polynomial<F31>> = basis.iter().collect();
        for i in 0..refs.len() {
            for j in (i + 1)..refs.len() {
                let s = s_polynomial(refs[i], refs[j]);
                let (_, is_zero) = reduce_to_zero(&s, &refs);
                assert!(is_zero);
            }
        }
    }

    #[test]
    fn test_max_iterations_reached() {
        let f = poly(vec![mono(vec![2, 0], 1), mono(vec![0, 0], -1)], 2);
        let g = poly(vec![mono(vec![1, 1], 1), mono(vec![0, 0], -1)], 2);
        let config = EngineConfig { max_iterations: 0, should_cancel: None };
        let result = f4(vec![f, g], &config);
        assert_eq!(result, Err(GroebnerError::MaxIterationsReached { max_iterations: 0 }));
    }
}
