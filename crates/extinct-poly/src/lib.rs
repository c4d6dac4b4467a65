//! # extinct-poly
//!
//! Dense univariate polynomials over an integral coefficient ring.
//!
//! This crate provides:
//! - `DensePoly<R>` with Karatsuba multiplication
//! - Content, primitive part and primitive-PRS gcd
//! - Exact division, used by fraction-free elimination
//! - Compact `2*x^2+3*x+3` style printing
//!
//! ## Algorithm Selection
//!
//! Multiplication automatically selects the algorithm:
//! - Fewer than 32 coefficients: Schoolbook O(n²)
//! - Otherwise: Karatsuba O(n^1.58)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod dense;

#[cfg(test)]
mod proptests;

pub use dense::{DensePoly, PolyDisplay};
