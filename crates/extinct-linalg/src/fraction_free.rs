//! Fraction-free Gauss-Jordan elimination.
//!
//! Every update is a cross-multiplication
//!
//! ```text
//! e(j,k) <- e(j,k)*e(i,i) - e(i,k)*e(j,i)
//! ```
//!
//! which stays inside the entry ring. After each row update the touched
//! entries are divided by their common gcd, which keeps entry growth in
//! check without ever leaving the ring.

use log::{debug, trace};

use extinct_rings::traits::GcdDomain;

use crate::augmented::AugmentedSystem;
use crate::error::SolveError;

/// The value of one unknown as an unreduced quotient of ring elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quotient<R> {
    /// Final constant-column entry of the unknown's row.
    pub numerator: R,
    /// Final diagonal entry of the unknown's row; its leading sign is
    /// positive.
    pub denominator: R,
}

impl<R: GcdDomain> AugmentedSystem<R> {
    /// Solves the system, returning one quotient per unknown.
    ///
    /// Row swaps permute equations only: the answer for unknown `i` is
    /// always read from row `i`.
    ///
    /// # Errors
    ///
    /// [`SolveError::Singular`] if some column has no pivot, and
    /// [`SolveError::InexactDivision`] if a row is not divisible by the gcd
    /// of its entries.
    pub fn solve(mut self) -> Result<Vec<Quotient<R>>, SolveError> {
        debug!(
            "fraction-free solve: {} unknowns, {} nonzero entries",
            self.num_unknowns(),
            self.nonzero_entries()
        );
        self.forward_eliminate()?;
        debug!("forward elimination done, {} nonzero entries", self.nonzero_entries());
        self.back_substitute()?;

        let k = self.constant_column();
        Ok(self
            .into_rows()
            .into_iter()
            .enumerate()
            .map(|(i, mut row)| Quotient {
                numerator: row.swap_remove(k),
                denominator: row.swap_remove(i),
            })
            .collect())
    }

    /// Reduces the system to upper-triangular form.
    ///
    /// # Errors
    ///
    /// See [`AugmentedSystem::solve`].
    pub fn forward_eliminate(&mut self) -> Result<(), SolveError> {
        let n = self.num_unknowns();
        let k = self.constant_column();

        for i in 0..n {
            let pivot = (i..n)
                .find(|&j| !self[(j, i)].is_zero())
                .ok_or(SolveError::Singular { column: i })?;
            if pivot != i {
                trace!("column {i}: swapping rows {i} and {pivot}");
                self.swap_rows(i, pivot);
            }

            for j in (i + 1)..n {
                let (pivot_row, row) = self.row_pair(i, j);
                if let Some(common) = cross_eliminate(pivot_row, row, i, (i + 1)..=k) {
                    divide_out(row, &common, j, (i + 1)..=k)?;
                }
            }

            if (i + 1) % 64 == 0 {
                debug!("forward elimination: {} of {n} columns", i + 1);
            }
        }
        Ok(())
    }

    /// Clears everything above the diagonal of an upper-triangular system
    /// and gives every diagonal entry a positive leading sign.
    ///
    /// # Errors
    ///
    /// See [`AugmentedSystem::solve`].
    pub fn back_substitute(&mut self) -> Result<(), SolveError> {
        let n = self.num_unknowns();
        let k = self.constant_column();

        for i in (0..n).rev() {
            for j in (0..i).rev() {
                let (pivot_row, row) = self.row_pair(i, j);
                let columns = (j..=k).filter(move |&c| c != i);
                if let Some(common) = cross_eliminate(pivot_row, row, i, columns.clone()) {
                    divide_out(row, &common, j, columns)?;
                }
            }

            if self[(i, i)].leading_sign() < 0 {
                self[(i, i)] = -self[(i, i)].clone();
                self[(i, k)] = -self[(i, k)].clone();
            }
        }
        Ok(())
    }
}

/// Clears `row[col]` against `pivot`, updating `columns` by
/// cross-multiplication. Returns the gcd of the nonzero updated entries,
/// seeded with the first of them as-is, or `None` if all are zero.
fn cross_eliminate<R: GcdDomain>(
    pivot: &[R],
    row: &mut [R],
    col: usize,
    columns: impl Iterator<Item = usize>,
) -> Option<R> {
    let factor = row[col].clone();
    let diagonal = &pivot[col];
    let mut common: Option<R> = None;

    for c in columns {
        let updated = row[c].clone() * diagonal.clone() - pivot[c].clone() * factor.clone();
        if !updated.is_zero() {
            common = Some(match common {
                None => updated.clone(),
                Some(g) => g.gcd(&updated),
            });
        }
        row[c] = updated;
    }
    row[col] = R::zero();
    common
}

fn divide_out<R: GcdDomain>(
    row: &mut [R],
    common: &R,
    row_index: usize,
    columns: impl Iterator<Item = usize>,
) -> Result<(), SolveError> {
    for c in columns {
        if row[c].is_zero() {
            continue;
        }
        row[c] = row[c].div_exact(common).ok_or(SolveError::InexactDivision {
            row: row_index,
            column: c,
        })?;
    }
    Ok(())
}
