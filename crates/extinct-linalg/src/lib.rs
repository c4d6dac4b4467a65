//! # extinct-linalg
//!
//! Exact linear algebra for the extinction-time equations.
//!
//! This crate provides:
//! - `AugmentedSystem<R>`: `K` equations in `K` unknowns plus a constant
//!   column, stored as owned row vectors
//! - Fraction-free Gauss-Jordan elimination over any `GcdDomain`, dividing
//!   each updated row by the gcd of its entries to keep them small
//!
//! Nothing is ever divided inexactly: the solution for unknown `i` is the
//! pair `(e(i,K), e(i,i))` read off the final diagonal form.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod augmented;
pub mod error;
pub mod fraction_free;

pub use augmented::AugmentedSystem;
pub use error::SolveError;
pub use fraction_free::Quotient;
