//! Immutable undirected simple graphs on at most 31 nodes.

use log::warn;

use crate::error::GraphError;

/// Largest supported node count; node subsets are `u32` masks with the
/// top bit unused.
pub const MAX_NODES: usize = 31;

#[inline]
const fn bit(v: usize) -> u32 {
    1u32 << v
}

/// Iterates over the indices of the set bits of `mask`, lowest first.
pub fn bits(mut mask: u32) -> impl Iterator<Item = usize> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let v = mask.trailing_zeros() as usize;
        mask &= mask - 1;
        Some(v)
    })
}

/// An undirected simple graph.
///
/// Representation: `adj[v]` is the neighbor bitset of node `v`. The
/// adjacency is symmetric and has no self-loops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    adj: Vec<u32>,
}

impl Graph {
    /// Builds a graph on `nodes` nodes from an edge list.
    ///
    /// Repeated edges (in either orientation) are collapsed into one.
    ///
    /// # Errors
    ///
    /// Fails if `nodes` is zero or exceeds [`MAX_NODES`], if an endpoint
    /// is not below `nodes`, or if an edge is a self-loop.
    pub fn from_edges(nodes: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        if nodes == 0 {
            return Err(GraphError::NoNodes);
        }
        if nodes > MAX_NODES {
            return Err(GraphError::TooManyNodes {
                nodes,
                max: MAX_NODES,
            });
        }

        let mut adj = vec![0u32; nodes];
        for &(u, v) in edges {
            for node in [u, v] {
                if node >= nodes {
                    return Err(GraphError::NodeOutOfRange { node, nodes });
                }
            }
            if u == v {
                return Err(GraphError::SelfLoop { node: u });
            }
            if adj[u] & bit(v) != 0 {
                warn!("duplicate edge {u}-{v} ignored");
                continue;
            }
            adj[u] |= bit(v);
            adj[v] |= bit(u);
        }

        Ok(Self { adj })
    }

    /// Number of nodes.
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.adj.len()
    }

    /// Number of distinct edges.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.adj.iter().map(|m| m.count_ones() as usize).sum::<usize>() / 2
    }

    /// Returns true if `u` and `v` are adjacent.
    #[must_use]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adj[u] & bit(v) != 0
    }

    /// Number of neighbors of `v`.
    #[must_use]
    pub fn degree(&self, v: usize) -> u32 {
        self.adj[v].count_ones()
    }

    /// Neighbor bitset of `v`.
    #[must_use]
    pub fn neighbor_mask(&self, v: usize) -> u32 {
        self.adj[v]
    }

    /// Neighbors of `v` in increasing order.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> {
        bits(self.adj[v])
    }

    /// Each edge once, as `(u, v)` with `u < v`, in lexicographic order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(u, &m)| bits(m & !((bit(u) << 1) - 1)).map(move |v| (u, v)))
    }

    /// Mask with one bit set per node.
    #[must_use]
    pub fn full_mask(&self) -> u32 {
        (bit(self.num_nodes())) - 1
    }

    /// Returns true if every node is reachable from node 0.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        let mut seen = bit(0);
        let mut frontier = bit(0);
        while frontier != 0 {
            let next = bits(frontier).fold(0, |acc, v| acc | self.adj[v]) & !seen;
            seen |= next;
            frontier = next;
        }
        seen == self.full_mask()
    }

    /// Returns the isomorphic graph in which node `v` is renamed `perm[v]`.
    ///
    /// # Panics
    ///
    /// Panics if `perm` is not a permutation of `0..num_nodes()`.
    #[must_use]
    pub fn relabel(&self, perm: &[usize]) -> Self {
        let n = self.num_nodes();
        assert_eq!(perm.len(), n, "permutation has the wrong length");
        let image = perm.iter().fold(0u32, |acc, &p| acc | bit(p));
        assert_eq!(image, self.full_mask(), "not a permutation of the nodes");

        let mut adj = vec![0u32; n];
        for (u, v) in self.edges() {
            adj[perm[u]] |= bit(perm[v]);
            adj[perm[v]] |= bit(perm[u]);
        }
        Self { adj }
    }
}
