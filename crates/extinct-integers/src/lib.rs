//! # extinct-integers
//!
//! Arbitrary precision integer and rational arithmetic for exact
//! extinction-time computation.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`), the coefficient type of
//!   every polynomial in the workspace
//! - Arbitrary precision rationals (`Rational`), used to evaluate the
//!   resulting rational functions at a concrete rate ratio

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::{ParseRationalError, Rational};
