//! Augmented linear systems `[A | b]`.
//!
//! Rows are owned vectors so pivoting is a `Vec::swap` of row handles
//! rather than an entry-by-entry copy.

use std::ops::{Index, IndexMut};

use extinct_rings::traits::Ring;

use crate::error::SolveError;

/// `K` equations in `K` unknowns; every row holds `K + 1` entries, the
/// last one being the constant column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentedSystem<R> {
    rows: Vec<Vec<R>>,
}

impl<R: Ring> AugmentedSystem<R> {
    /// Creates a system from its rows.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Shape`] if any row does not have exactly
    /// `rows.len() + 1` entries.
    pub fn from_rows(rows: Vec<Vec<R>>) -> Result<Self, SolveError> {
        let unknowns = rows.len();
        if let Some(bad) = rows.iter().find(|row| row.len() != unknowns + 1) {
            return Err(SolveError::Shape {
                rows: unknowns,
                cols: bad.len(),
            });
        }
        Ok(Self { rows })
    }

    /// Number of unknowns (and equations).
    #[must_use]
    pub fn num_unknowns(&self) -> usize {
        self.rows.len()
    }

    /// Index of the constant column.
    #[must_use]
    pub fn constant_column(&self) -> usize {
        self.rows.len()
    }

    /// Returns the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[R] {
        &self.rows[row]
    }

    /// Returns all rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<R>] {
        &self.rows
    }

    /// Consumes the system, returning its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<R>> {
        self.rows
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.rows.swap(i, j);
    }

    /// Counts the nonzero entries, constant column included.
    #[must_use]
    pub fn nonzero_entries(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|e| !e.is_zero()).count())
            .sum()
    }

    /// Borrows row `fixed` immutably and row `target` mutably.
    ///
    /// # Panics
    ///
    /// Panics if the two indices are equal.
    pub(crate) fn row_pair(&mut self, fixed: usize, target: usize) -> (&[R], &mut [R]) {
        assert_ne!(fixed, target, "a row cannot be eliminated against itself");
        if fixed < target {
            let (head, tail) = self.rows.split_at_mut(target);
            (head[fixed].as_slice(), tail[0].as_mut_slice())
        } else {
            let (head, tail) = self.rows.split_at_mut(fixed);
            (tail[0].as_slice(), head[target].as_mut_slice())
        }
    }
}

impl<R> Index<(usize, usize)> for AugmentedSystem<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.rows[row][col]
    }
}

impl<R> IndexMut<(usize, usize)> for AugmentedSystem<R> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.rows[row][col]
    }
}
