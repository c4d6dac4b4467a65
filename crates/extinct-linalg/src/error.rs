//! Elimination errors.

use thiserror::Error;

/// Errors that can occur while solving an augmented system.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SolveError {
    /// No row at or below the diagonal has a nonzero entry in `column`.
    #[error("degenerate system: no pivot in column {column}")]
    Singular {
        /// Column that has no pivot.
        column: usize,
    },

    /// A row gcd failed to divide one of the row's entries.
    #[error("inexact division in row {row}, column {column}")]
    InexactDivision {
        /// Row being simplified.
        row: usize,
        /// Entry the gcd did not divide.
        column: usize,
    },

    /// A row does not have `rows + 1` entries.
    #[error("row of {cols} entries in a system of {rows} unknowns")]
    Shape {
        /// Number of unknowns.
        rows: usize,
        /// Length of the offending row.
        cols: usize,
    },
}
