//! Plain Buchberger's algorithm (spec.md §4.5): no pair-skipping
//! criteria, no retirement, every pair's S-polynomial is reduced fully
//! before the next pair is considered.
//!
//! Grounded on `algebra::groebner::buchberger::buchberger_algorithm`:
//! the same `VecDeque` FIFO pair queue seeded with every initial pair,
//! growing the basis and enqueueing `{k, new}` for every existing `k`
//! whenever an S-polynomial reduces to a nonzero remainder.

use std::collections::VecDeque;

use crate::error::{GroebnerError, GroebnerResult};
use crate::field::Field;
use crate::ideal::{Pair, WorkSet};
use crate::polynomial::Polynomial;
use crate::reduction::reduce_to_zero;
use crate::EngineConfig;

use super::s_poly::s_polynomial;

/// Complete `generators` into a Gröbner basis using plain Buchberger's
/// algorithm. The input order of surviving generators is preserved;
/// new elements are appended as they are discovered.
pub fn buchberger_plain<F: Field>(
    generators: Vec<Polynomial<F>>,
    config: &EngineConfig,
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

        let s = s_polynomial(work.get(pair.i), work.get(pair.j));
        let basis_refs: Vec<&Polynomial<F>> = work.active_polynomials().collect();
        let (remainder, is_zero) = reduce_to_zero(&s, &basis_refs);
        if is_zero {
            continue;
        }

        let new_idx = work.push(remainder);
        for k in 0..new_idx {
            pairs.push_back(Pair::new(k, new_idx));
        }
    }

    Ok(work.compact())
}
