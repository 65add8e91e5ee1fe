//! Completion engines: plain Buchberger, Buchberger with criteria (and
//! its retiring variant), and F4.
//!
//! Grounded on `algebra::groebner::{buchberger, efficient_buchberger}`
//! in the teacher, split here into the three named engines spec.md §4.5
//! and §4.6 distinguish, plus the matrix-based F4 engine of §4.7, which
//! has no teacher counterpart and is grounded directly on spec.md's
//! description, scaled up from the teacher's S-polynomial and reduction
//! primitives.

mod buchberger;
mod criteria;
mod f4;
mod s_poly;

pub use buchberger::buchberger_plain;
pub use criteria::{buchberger_with_criteria, buchberger_with_criteria_retiring};
pub use f4::f4;
pub use s_poly::s_polynomial;
