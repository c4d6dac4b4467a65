//! Colored automorphism testing.
//!
//! Two infection patterns `a` and `b` of the same graph are equivalent when
//! some automorphism of the graph maps the infected set of `a` exactly onto
//! the infected set of `b`. Equivalent patterns have identical extinction
//! times, so only one of them needs an equation.

use log::trace;

use crate::graph::{bits, Graph};

/// Decides equivalence of two node colorings under the graph's automorphisms.
///
/// Implementations must behave as an equivalence relation on masks over
/// `0..graph.num_nodes()`.
pub trait ColoringOracle {
    /// Returns true if an automorphism of `graph` maps the set bits of `a`
    /// onto the set bits of `b`.
    fn equivalent(&self, graph: &Graph, a: u32, b: u32) -> bool;
}

/// Backtracking search for a color-preserving automorphism.
///
/// Nodes are mapped in increasing order. A candidate image must be unused
/// and agree on color, degree and number of infected neighbors, and its
/// adjacency to every already-mapped image must mirror the original.
#[derive(Clone, Copy, Debug, Default)]
pub struct BacktrackOracle;

impl BacktrackOracle {
    /// Creates the oracle.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ColoringOracle for BacktrackOracle {
    fn equivalent(&self, graph: &Graph, a: u32, b: u32) -> bool {
        let found = a == b || (invariants_match(graph, a, b) && Search::new(graph, a, b).extend(0));
        trace!("{a:#b} ~ {b:#b}: {found}");
        found
    }
}

/// Cheap necessary conditions: equal infected counts and equal degree
/// multisets of the infected nodes.
fn invariants_match(graph: &Graph, a: u32, b: u32) -> bool {
    if a.count_ones() != b.count_ones() {
        return false;
    }
    let degrees = |mask: u32| {
        let mut d: Vec<u32> = bits(mask).map(|v| graph.degree(v)).collect();
        d.sort_unstable();
        d
    };
    degrees(a) == degrees(b)
}

struct Search<'g> {
    graph: &'g Graph,
    a: u32,
    b: u32,
    image: Vec<usize>,
    used: u32,
}

impl<'g> Search<'g> {
    fn new(graph: &'g Graph, a: u32, b: u32) -> Self {
        Self {
            graph,
            a,
            b,
            image: vec![0; graph.num_nodes()],
            used: 0,
        }
    }

    fn extend(&mut self, v: usize) -> bool {
        let n = self.graph.num_nodes();
        if v == n {
            return true;
        }
        for w in 0..n {
            if self.used & (1 << w) != 0 || !self.compatible(v, w) {
                continue;
            }
            self.image[v] = w;
            self.used |= 1 << w;
            if self.extend(v + 1) {
                return true;
            }
            self.used &= !(1 << w);
        }
        false
    }

    fn compatible(&self, v: usize, w: usize) -> bool {
        let g = self.graph;
        let infected = |mask: u32, node: usize| mask & (1 << node) != 0;

        if infected(self.a, v) != infected(self.b, w) || g.degree(v) != g.degree(w) {
            return false;
        }
        if (g.neighbor_mask(v) & self.a).count_ones() != (g.neighbor_mask(w) & self.b).count_ones() {
            return false;
        }
        (0..v).all(|u| g.has_edge(u, v) == g.has_edge(self.image[u], w))
    }
}
