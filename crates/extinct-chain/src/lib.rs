//! # extinct-chain
//!
//! Exact expected extinction times of the SIS epidemic on a small graph.
//!
//! Every infected node recovers at rate 1 and infects each susceptible
//! neighbor at rate `x`. The run:
//!
//! 1. partitions the `2^N - 1` non-absorbing infection patterns into
//!    automorphism equivalence classes ([`Partition`]);
//! 2. writes one hitting-time equation per class over `Z[x]`
//!    ([`build_system`]);
//! 3. solves the system by fraction-free elimination, giving each class a
//!    reduced rational function ([`ExtinctionTime`]).
//!
//! ```rust,ignore
//! use extinct_chain::ExtinctionRun;
//! use extinct_graph::Graph;
//!
//! let triangle = Graph::from_edges(3, &[(0, 1), (1, 2), (2, 0)])?;
//! let report = ExtinctionRun::new(&triangle).run()?;
//! // " 1 2 4, (2*x^2+3*x+3)/3" ...
//! print!("{report}");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod answer;
pub mod classify;
pub mod config;
pub mod equations;
pub mod error;
pub mod pipeline;
pub mod state;

pub use answer::{ClassResult, ExtinctionReport, ExtinctionTime};
pub use classify::{EquivalenceClass, Partition};
pub use config::ExtinctionConfig;
pub use equations::{build_system, ClassTransitions};
pub use error::ExtinctionError;
pub use pipeline::ExtinctionRun;
pub use state::{State, StateSpace};

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;
