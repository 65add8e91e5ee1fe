//! Buchberger's algorithm with Buchberger's first and second criteria,
//! and a retiring variant that also drops generators subsumed by newer
//! ones (spec.md §4.6).
//!
//! Grounded on `algebra::groebner::buchberger::{can_skip_pair,
//! are_relatively_prime}`: the product criterion (coprime leading
//! terms guarantee the S-polynomial reduces to zero) and the chain
//! criterion (a third generator already certifies the pair) are kept
//! exactly as the teacher states them. The retiring variant has no
//! direct teacher counterpart — the teacher's `efficient_buchberger`
//! only tail-reduces the *final* basis after completion — and is built
//! here as an online generalization: whenever a new generator's leading
//! term divides an existing active generator's leading term, that
//! generator is retired immediately rather than waiting for a final
//! pass, per spec.md §4.6's "retirement" lifecycle in [`crate::ideal`].

use std::collections::VecDeque;

use crate::error::{GroebnerError, GroebnerResult};
use crate::field::Field;
use crate::ideal::{Pair, WorkSet};
use crate::polynomial::Polynomial;
use crate::reduction::reduce_to_zero;
use crate::term::Term;
use crate::EngineConfig;

use super::s_poly::s_polynomial;

/// `true` iff `fi` and `fj` have coprime leading terms, in which case
/// their S-polynomial is guaranteed to reduce to zero and the pair can
/// be skipped outright (Buchberger's first criterion). Shared with
/// [`super::f4`]'s pair-selection step.
pub(super) fn product_criterion<F: Field>(fi: &Polynomial<F>, fj: &Polynomial<F>) -> bool {
    match (fi.leading_term(), fj.leading_term()) {
        (Some(a), Some(b)) => a.is_coprime_to(b),
        _ => false,
    }
}

/// `true` iff some active generator other than `i` and `j` already
/// certifies the pair: its leading term divides `lcm(lt(i), lt(j))` and
/// neither of its pairs with `i` or `j` remains pending. `is_pending`
/// abstracts over the caller's pending-pair container (a `VecDeque`
/// here, a `Vec` in [`super::f4`]).
pub(super) fn chain_criterion<F: Field>(
    pair: Pair,
    work: &WorkSet<F>,
    is_pending: impl Fn(&Pair) -> bool,
) -> bool {
    let li = match work.get(pair.i).leading_term() {
        Some(t) => t.clone(),
        None => return false,
    };
    let lj = match work.get(pair.j).leading_term() {
        Some(t) => t.clone(),
        None => return false,
    };
    let lcm_ij: Term = li.lcm(&lj);

    for k in work.active_indices() {
        if k == pair.i || k == pair.j {
            continue;
        }
        let lk = match work.get(k).leading_term() {
            Some(t) => t,
            None => continue,
        };
        if !lk.divides(&lcm_ij) {
            continue;
        }
        let ik = Pair::new(pair.i, k);
        let kj = Pair::new(k, pair.j);
        if !is_pending(&ik) && !is_pending(&kj) {
            return true;
        }
    }
    false
}

fn run<F: Field>(
    generators: Vec<Polynomial<F>>,
    config: &EngineConfig,
    retiring: bool,
) -> GroebnerResult<Vec<Polynomial<F>>> {
    let mut work: WorkSet<F> = WorkSet::new(generators);
    let mut pairs: VecDeque<Pair> = VecDeque::new();
    for i in 0..work.len() {
        for j in (i + 1)..work.len() {
            pairs.push_back(Pair::new(i, j));
        }
    }

    let mut iterations = 0usize;
    while let Some(pair) = pairs.pop_front() {
        iterations += 1;
        if iterations > config.max_iterations {
            return Err(GroebnerError::MaxIterationsReached { max_iterations: config.max_iterations });
        }
        if let Some(cancel) = &config.should_cancel {
            if cancel() {
                return Err(GroebnerError::Cancelled);
            }
        }

        // A retired generator's pairs are stale: the generator it names
        // has already been subsumed and contributes nothing.
        if work.is_retired(pair.i) || work.is_retired(pair.j) {
            continue;
        }

        let fi = work.get(pair.i);
        let fj = work.get(pair.j);
        if product_criterion(fi, fj) {
            continue;
        }
        if chain_criterion(pair, &work, |p| pairs.contains(p)) {
            continue;
        }

        let s = s_polynomial(fi, fj);
        let basis_refs: Vec<&Polynomial<F>> = work.active_polynomials().collect();
        let (remainder, is_zero) = reduce_to_zero(&s, &basis_refs);
        if is_zero {
            continue;
        }

        let new_idx = work.push(remainder);

        if retiring {
            let new_lead = work
                .get(new_idx)
                .leading_term()
                .expect("a nonzero remainder has a leading term")
                .clone();
            for k in work.active_indices().collect::<Vec<_>>() {
                if k == new_idx {
                    continue;
                }
                if let Some(lk) = work.get(k).leading_term() {
                    if new_lead.divides(lk) {
                        work.retire(k);
                    }
                }
            }
        }

        for k in work.active_indices() {
            if k != new_idx {
                pairs.push_back(Pair::new(k, new_idx));
            }
        }
    }

    Ok(work.compact())
}

/// Buchberger's algorithm with the product and chain criteria applied
/// to skip pairs known in advance not to contribute.
pub fn buchberger_with_criteria<F: Field>(
    generators: Vec<Polynomial<F>>,
    config: &EngineConfig,
) -> GroebnerResult<Vec<Polynomial<F>>> {
    run(generators, config, false)
}

/// As [`buchberger_with_criteria`], additionally retiring generators
/// whose leading term becomes divisible by a newly discovered one, as
/// soon as that happens rather than in a final cleanup pass.
pub fn buchberger_with_criteria_retiring<F: Field>(
    generators: Vec<Polynomial<F>>,
    config: &EngineConfig,
) -> GroebnerResult<Vec<Polynomial<F>>> {
    run(generators, config, true)
}
