//! Infection patterns and the state space of the SIS chain.

use std::fmt;

use extinct_graph::{bits, Graph};

/// An infection pattern: bit `i` is set iff node `i` is infected.
///
/// The empty pattern is the absorbing state of the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct State(u32);

impl State {
    /// The absorbing state (nobody infected).
    pub const ABSORBING: Self = Self(0);

    /// Wraps a bitmask.
    #[must_use]
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    /// The underlying bitmask.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns true if no node is infected.
    #[must_use]
    pub const fn is_absorbing(self) -> bool {
        self.0 == 0
    }

    /// Returns true if `node` is infected.
    #[must_use]
    pub const fn is_infected(self, node: usize) -> bool {
        self.0 & (1 << node) != 0
    }

    /// The pattern with `node` infected.
    #[must_use]
    pub const fn infect(self, node: usize) -> Self {
        Self(self.0 | (1 << node))
    }

    /// The pattern with `node` recovered.
    #[must_use]
    pub const fn recover(self, node: usize) -> Self {
        Self(self.0 & !(1 << node))
    }

    /// Number of infected nodes.
    #[must_use]
    pub const fn infected_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Infected nodes in increasing order.
    pub fn infected_nodes(self) -> impl Iterator<Item = usize> {
        bits(self.0)
    }

    /// The pattern after renaming node `v` to `perm[v]`.
    #[must_use]
    pub fn relabel(self, perm: &[usize]) -> Self {
        Self(self.infected_nodes().fold(0, |acc, v| acc | (1 << perm[v])))
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The non-absorbing states `1..2^N` of a graph's SIS chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateSpace {
    nodes: usize,
}

impl StateSpace {
    /// The state space of `graph`.
    #[must_use]
    pub fn of(graph: &Graph) -> Self {
        Self {
            nodes: graph.num_nodes(),
        }
    }

    /// Number of nodes.
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Number of non-absorbing states, `2^N - 1`.
    #[must_use]
    pub fn len(&self) -> usize {
        (1usize << self.nodes) - 1
    }

    /// Always false: a graph has at least one node.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes == 0
    }

    /// Returns true if `state` is a non-absorbing state of this space.
    #[must_use]
    pub fn contains(&self, state: State) -> bool {
        !state.is_absorbing() && (state.bits() as usize) <= self.len()
    }

    /// Dense index of a non-absorbing state.
    #[must_use]
    pub fn index(&self, state: State) -> Option<usize> {
        self.contains(state).then(|| state.bits() as usize - 1)
    }

    /// Non-absorbing states in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = State> {
        let top = u32::try_from(self.len()).unwrap_or(u32::MAX);
        (1..=top).map(State)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_ops() {
        let s = State::new(0b101);
        assert!(s.is_infected(0));
        assert!(!s.is_infected(1));
        assert_eq!(s.infect(1), State::new(0b111));
        assert_eq!(s.recover(2), State::new(0b001));
        assert_eq!(s.recover(1), s);
        assert_eq!(s.infected_count(), 2);
        assert_eq!(s.infected_nodes().collect::<Vec<_>>(), vec![0, 2]);
        assert!(s.recover(0).recover(2).is_absorbing());
        assert_eq!(s.to_string(), "5");
    }

    #[test]
    fn test_relabel() {
        // 0 -> 2, 1 -> 0, 2 -> 1
        assert_eq!(State::new(0b011).relabel(&[2, 0, 1]), State::new(0b101));
    }

    #[test]
    fn test_state_space() {
        let g = Graph::from_edges(3, &[(0, 1)]).unwrap();
        let space = StateSpace::of(&g);
        assert_eq!(space.len(), 7);
        assert_eq!(space.iter().map(State::bits).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(space.index(State::new(1)), Some(0));
        assert_eq!(space.index(State::ABSORBING), None);
        assert_eq!(space.index(State::new(8)), None);
    }
}
