//! # extinct-graph
//!
//! Small undirected simple graphs stored as neighbor bitsets, and the
//! colored-automorphism oracle used to group infection patterns.
//!
//! A graph has at most [`MAX_NODES`] nodes, so a subset of its nodes
//! always fits in a `u32` mask.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod graph;
pub mod oracle;

pub use error::GraphError;
pub use graph::{bits, Graph, MAX_NODES};
pub use oracle::{BacktrackOracle, ColoringOracle};
