//! Graph construction errors.

use thiserror::Error;

/// Errors that can occur while building a graph.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The node count is zero.
    #[error("a graph needs at least one node")]
    NoNodes,

    /// The node count does not fit a state bitmask.
    #[error("{nodes} nodes requested, at most {max} are supported")]
    TooManyNodes {
        /// Requested node count.
        nodes: usize,
        /// Largest supported node count.
        max: usize,
    },

    /// An edge endpoint is not a node of the graph.
    #[error("node {node} is out of range for a graph with {nodes} nodes")]
    NodeOutOfRange {
        /// The offending endpoint.
        node: usize,
        /// Node count of the graph.
        nodes: usize,
    },

    /// An edge joins a node to itself.
    #[error("self-loop at node {node}")]
    SelfLoop {
        /// The looped node.
        node: usize,
    },
}
