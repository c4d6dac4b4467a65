//! # extinct
//!
//! Exact expected extinction times of the SIS epidemic on small graphs.
//!
//! For every class of automorphically equivalent infection patterns the
//! expected time until nobody is infected is a rational function of the
//! infection/recovery rate ratio `x`, with integer coefficients.
//!
//! ## Features
//!
//! - **Exact Arithmetic**: arbitrary precision integers, no floating point
//! - **Symmetry Reduction**: one equation per automorphism class
//! - **Fraction-Free Solving**: Gauss-Jordan elimination over `Z[x]` with
//!   gcd row reduction
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use extinct::prelude::*;
//!
//! let edge = Graph::from_edges(2, &[(0, 1)])?;
//! let report = ExtinctionRun::new(&edge).run()?;
//! assert_eq!(report.to_string(), " 1 2, (x+2)/2\n 3, (x+3)/2\n");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use extinct_chain as chain;
pub use extinct_graph as graph;
pub use extinct_integers as integers;
pub use extinct_linalg as linalg;
pub use extinct_poly as poly;
pub use extinct_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use extinct_chain::{
        ExtinctionConfig, ExtinctionError, ExtinctionReport, ExtinctionRun, ExtinctionTime, Partition, State,
    };
    pub use extinct_graph::{BacktrackOracle, ColoringOracle, Graph, GraphError, MAX_NODES};
    pub use extinct_integers::{Integer, ParseRationalError, Rational};
    pub use extinct_linalg::{AugmentedSystem, SolveError};
    pub use extinct_poly::DensePoly;
    pub use extinct_rings::{GcdDomain, Ring, Z};
}
