//! The work set: an ideal's generators under completion
//!
//! Grounded on the teacher's pair-queue shape in
//! `algebra::groebner::buchberger::buchberger_algorithm` (a growing
//! `Vec` of basis polynomials plus a `VecDeque<(usize, usize)>` of
//! pending pairs), generalized with the retirement flag spec.md §3 and
//! §4.6 require: entries are never deleted mid-algorithm so pair
//! indices stay stable, and a final compaction drops retired entries
//! (spec.md's "Lifecycle").

use crate::polynomial::Polynomial;
use crate::field::Field;

/// An unordered index pair `{i, j}` with `i < j` into a work set,
/// representing a potential S-polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    pub i: usize,
    pub j: usize,
}

impl Pair {
    /// Construct a pair, normalizing so `i < j`. Panics if `i == j`.
    pub fn new(a: usize, b: usize) -> Self {
        assert_ne!(a, b, "a pair must relate two distinct indices");
        if a < b {
            Pair { i: a, j: b }
        } else {
            Pair { i: b, j: a }
        }
    }
}

/// One entry in the work set: a polynomial plus its retirement bit.
#[derive(Debug, Clone)]
struct Entry<F: Field> {
    poly: Polynomial<F>,
    retired: bool,
}

/// The growing set of polynomials a completion engine works against.
///
/// Entries are appended monotonically; [`WorkSet::retire`] marks an
/// entry dead without removing it, so existing [`Pair`] indices never
/// need rewriting. [`WorkSet::compact`] is the one-shot cleanup that
/// drops retired entries and returns the final basis in insertion
/// order (spec.md §3, "A final compaction step drops retired
/// entries").
#[derive(Debug, Clone)]
pub struct WorkSet<F: Field> {
    entries: Vec<Entry<F>>,
}

impl<F: Field> WorkSet<F> {
    /// Build a work set from the input generators, dropping zero
    /// polynomials (the zero polynomial contributes nothing to the
    /// ideal and cannot be a leading-term reductor).
    pub fn new(generators: Vec<Polynomial<F>>) -> Self {
        let entries = generators
            .into_iter()
            .filter(|p| !p.is_zero())
            .map(|poly| Entry { poly, retired: false })
            .collect();
        WorkSet { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a new polynomial, returning its index.
    pub fn push(&mut self, poly: Polynomial<F>) -> usize {
        let idx = self.entries.len();
        self.entries.push(Entry { poly, retired: false });
        idx
    }

    pub fn get(&self, idx: usize) -> &Polynomial<F> {
        &self.entries[idx].poly
    }

    pub fn is_retired(&self, idx: usize) -> bool {
        self.entries[idx].retired
    }

    /// Mark an entry retired. It stays in place (preserving indices)
    /// but is skipped by [`WorkSet::active_indices`] and reduction.
    pub fn retire(&mut self, idx: usize) {
        self.entries[idx].retired = true;
    }

    /// Indices of all non-retired entries, in insertion order.
    pub fn active_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().enumerate().filter(|(_, e)| !e.retired).map(|(i, _)| i)
    }

    /// Non-retired polynomials, in insertion order, borrowed for
    /// read-only reduction against the set under construction.
    pub fn active_polynomials(&self) -> impl Iterator<Item = &Polynomial<F>> + '_ {
        self.entries.iter().filter(|e| !e.retired).map(|e| &e.poly)
    }

    /// Drop retired entries and zero polynomials, returning the final
    /// basis in insertion order. Consumes the work set.
    pub fn compact(self) -> Vec<Polynomial<F>> {
        self.entries
            .into_iter()
            .filter(|e| !e.retired && !e.poly.is_zero())
            .map(|e| e.poly)
            .collect()
    }
}
