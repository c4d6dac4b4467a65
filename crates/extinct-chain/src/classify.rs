//! Grouping of states into automorphism equivalence classes.

use log::debug;

use extinct_graph::{ColoringOracle, Graph};

use crate::state::{State, StateSpace};

/// States that some automorphism of the graph maps onto each other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EquivalenceClass {
    members: Vec<State>,
}

impl EquivalenceClass {
    fn open(representative: State) -> Self {
        Self {
            members: vec![representative],
        }
    }

    /// The lowest-numbered member.
    #[must_use]
    pub fn representative(&self) -> State {
        self.members[0]
    }

    /// All members in increasing order, representative first.
    #[must_use]
    pub fn members(&self) -> &[State] {
        &self.members
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false: a class holds at least its representative.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// A partition of the non-absorbing states into equivalence classes,
/// numbered in order of creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition {
    space: StateSpace,
    classes: Vec<EquivalenceClass>,
    assignment: Vec<Option<usize>>,
}

impl Partition {
    /// Classifies every non-absorbing state of `graph`.
    ///
    /// States are scanned in increasing order. An unclassified state opens
    /// a new class as its representative, and every later unclassified
    /// state equivalent to it joins that class.
    pub fn classify<O: ColoringOracle>(graph: &Graph, oracle: &O) -> Self {
        let space = StateSpace::of(graph);
        let mut classes: Vec<EquivalenceClass> = Vec::new();
        let mut assignment: Vec<Option<usize>> = vec![None; space.len()];

        for (idx, state) in space.iter().enumerate() {
            if assignment[idx].is_some() {
                continue;
            }
            let class = classes.len();
            let mut current = EquivalenceClass::open(state);
            assignment[idx] = Some(class);

            for (other_idx, other) in space.iter().enumerate().skip(idx + 1) {
                if assignment[other_idx].is_none() && oracle.equivalent(graph, state.bits(), other.bits()) {
                    assignment[other_idx] = Some(class);
                    current.members.push(other);
                }
            }
            classes.push(current);
        }

        debug!(
            "classified {} states of a {}-node graph into {} classes",
            space.len(),
            space.nodes(),
            classes.len()
        );

        Self {
            space,
            classes,
            assignment,
        }
    }

    /// Number of classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if there are no classes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// All classes in creation order.
    #[must_use]
    pub fn classes(&self) -> &[EquivalenceClass] {
        &self.classes
    }

    /// The class with the given index.
    #[must_use]
    pub fn class(&self, index: usize) -> &EquivalenceClass {
        &self.classes[index]
    }

    /// Index of the class containing `state`; `None` for the absorbing
    /// state and for states outside the space.
    #[must_use]
    pub fn class_of(&self, state: State) -> Option<usize> {
        self.space.index(state).and_then(|idx| self.assignment[idx])
    }

    /// The state space that was partitioned.
    #[must_use]
    pub fn space(&self) -> StateSpace {
        self.space
    }

    /// Consumes the partition, returning its classes.
    #[must_use]
    pub fn into_classes(self) -> Vec<EquivalenceClass> {
        self.classes
    }
}
