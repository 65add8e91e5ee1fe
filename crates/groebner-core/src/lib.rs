//! A Gröbner basis computation engine over exact fields.
//!
//! Mirrors the module layout the teacher uses for its own algebra
//! engines (`algebra::groebner::*` in `mathhook-core`): a field
//! abstraction, a sparse polynomial representation, a monomial-order
//! parameter, and a set of completion engines built on a shared
//! reduction kernel. See [`groebner`] for the four public entry points.

pub mod error;
pub mod field;
pub mod groebner;
pub mod ideal;
pub mod ordering;
pub mod polynomial;
pub mod reduction;
pub mod term;
pub mod testing;

mod matrix;

pub use error::{GroebnerError, GroebnerResult};
pub use field::Field;
pub use groebner::{buchberger_plain, buchberger_with_criteria, buchberger_with_criteria_retiring, f4};
pub use ideal::{Pair, WorkSet};
pub use ordering::MonomialOrder;
pub use polynomial::{Monomial, Polynomial};
pub use reduction::reduce_basis;
pub use term::Term;

/// Resource limits for a completion run, generalizing the teacher's
/// hard-coded `max_iterations: usize = 10000` constant in
/// `buchberger_algorithm` into a caller-supplied configuration (spec.md
/// §5, "Resource limits must be configurable, not hard-coded").
pub struct EngineConfig {
    /// Upper bound on the number of pairs processed (Buchberger engines)
    /// or rounds run (F4) before giving up with
    /// [`GroebnerError::MaxIterationsReached`].
    pub max_iterations: usize,

    /// Optional cooperative cancellation check, polled once per
    /// iteration; if it returns `true` the engine stops with
    /// [`GroebnerError::Cancelled`] (spec.md §5's single-threaded
    /// cancellation point — there is no background thread to signal).
    pub should_cancel: Option<Box<dyn Fn() -> bool>>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig { max_iterations: 10_000, should_cancel: None }
    }
}

impl std::fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineConfig")
            .field("max_iterations", &self.max_iterations)
            .field("should_cancel", &self.should_cancel.is_some())
            .finish()
    }
}
