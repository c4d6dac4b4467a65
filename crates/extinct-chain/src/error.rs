//! Errors of an extinction-time run.

use extinct_graph::GraphError;
use extinct_integers::Rational;
use extinct_linalg::SolveError;
use thiserror::Error;

/// Errors that can occur while computing extinction times.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExtinctionError {
    /// The input graph is malformed.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Elimination failed.
    #[error(transparent)]
    Solve(#[from] SolveError),

    /// Evaluation hit a root of a denominator.
    #[error("rate ratio {at} is a pole of the extinction time of class {class}")]
    Pole {
        /// Class whose denominator vanishes.
        class: usize,
        /// Rate ratio that was requested.
        at: Rational,
    },

    /// A post-solve check failed.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}
