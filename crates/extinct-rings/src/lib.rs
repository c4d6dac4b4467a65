//! # extinct-rings
//!
//! Algebraic structures for exact extinction-time computation.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `EuclideanDomain`, `GcdDomain`
//! - The ring of integers `Z`
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── CommutativeRing
//!       └── IntegralDomain
//!            ├── EuclideanDomain   (coefficients: Z)
//!            └── GcdDomain         (matrix entries: Z[x])
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integers;
pub mod traits;

pub use integers::Z;
pub use traits::{CommutativeRing, EuclideanDomain, GcdDomain, IntegralDomain, OrderedRing, Ring};
