//! A dense matrix over a [`Field`], row-reduced by Gaussian elimination.
//!
//! The F4 engine ([`crate::groebner::f4`]) is the only caller: each
//! round builds one matrix whose columns are the monomials touched by
//! that round's S-polynomials and their reducers, and whose rows are
//! those polynomials' coefficient vectors. There is no teacher
//! counterpart for this — `mathhook-core`'s Buchberger engines never
//! batch into a matrix — so this module is grounded on the F4
//! description in spec.md §4.7 directly, implemented as a textbook
//! reduced row echelon form.

use crate::field::Field;
use crate::term::Term;

/// A matrix whose columns are labeled by [`Term`]s, sorted descending
/// under the round's active monomial order before construction.
pub struct Matrix<F: Field> {
    columns: Vec<Term>,
    rows: Vec<Vec<F>>,
}

impl<F: Field> Matrix<F> {
    pub fn new(columns: Vec<Term>) -> Self {
        Matrix { columns, rows: Vec::new() }
    }

    pub fn num_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn push_row(&mut self, row: Vec<F>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    /// Reduce to reduced row echelon form in place. Returns the pivot
    /// column of each pivot row, in row order; rows without a pivot
    /// (all-zero after elimination, i.e. linearly dependent on earlier
    /// rows) are left in place but have no entry in the returned list
    /// and sort to the bottom of `into_rows`'s output only in the sense
    /// that their index exceeds `pivots.len()`.
    pub fn row_reduce(&mut self) -> Vec<usize> {
        let num_rows = self.rows.len();
        let num_cols = self.columns.len();
        let mut pivot_row = 0;
        let mut pivots = Vec::new();

        for col in 0..num_cols {
            if pivot_row >= num_rows {
                break;
            }
            let found = (pivot_row..num_rows).find(|&r| !self.rows[r][col].is_zero());
            let Some(r) = found else { continue };
            self.rows.swap(pivot_row, r);

            let pivot_inv = self.rows[pivot_row][col].inv();
            for c in col..num_cols {
                self.rows[pivot_row][c] = self.rows[pivot_row][c].mul(&pivot_inv);
            }

            for r in 0..num_rows {
                if r == pivot_row {
                    continue;
                }
                let factor = self.rows[r][col].clone();
                if factor.is_zero() {
                    continue;
                }
                for c in col..num_cols {
                    let delta = self.rows[pivot_row][c].mul(&factor);
                    self.rows[r][c] = self.rows[r][c].sub(&delta);
                }
            }

            pivots.push(col);
            pivot_row += 1;
        }

        pivots
    }

    pub fn into_rows(self) -> Vec<Vec<F>> {
        self.rows
    }

    pub fn columns(&self) -> &[Term] {
        &self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::PrimeField;

    type F7 = PrimeField<7>;

    fn f(n: i64) -> F7 {
        F7::new(n)
    }

    #[test]
    fn test_row_reduce_identifies_pivots() {
        let columns = vec![Term::new(vec![2]), Term::new(vec![1]), Term::new(vec![0])];
        let mut m: Matrix<F7> = Matrix::new(columns);
        // [1 2 3]
        // [2 4 1]  (a multiple of row 0's first two columns plus noise)
        m.push_row(vec![f(1), f(2), f(3)]);
        m.push_row(vec![f(2), f(4), f(1)]);
        let pivots = m.row_reduce();
        assert_eq!(pivots.len(), 2);
        assert_eq!(pivots[0], 0);
    }

    #[test]
    fn test_row_reduce_dependent_row_has_no_pivot() {
        let columns = vec![Term::new(vec![1]), Term::new(vec![0])];
        let mut m: Matrix<F7> = Matrix::new(columns);
        m.push_row(vec![f(1), f(1)]);
        m.push_row(vec![f(2), f(2)]); // 2x the first row
        let pivots = m.row_reduce();
        assert_eq!(pivots.len(), 1);
    }
}
