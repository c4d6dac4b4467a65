//! Polynomial algorithms.
//!
//! - Karatsuba multiplication
//! - Primitive PRS gcd and exact division over Z[x]

pub mod gcd;
pub mod karatsuba;
