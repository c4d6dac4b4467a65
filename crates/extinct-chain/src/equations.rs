//! Hitting-time equations of the SIS chain, one per equivalence class.
//!
//! Every infected node recovers at rate 1 and infects each susceptible
//! neighbor at rate `x`. For the representative of class `i` the expected
//! extinction time `T_i` satisfies
//!
//! ```text
//! -(infection_escape*x + recovery_escape) T_i + sum_j a_ij T_j = -1
//! ```
//!
//! with `a_ij = w` for a recovery weight `w > 0` and `a_ij = |w|*x` for an
//! infection weight `w < 0`.

use log::debug;

use extinct_graph::Graph;
use extinct_linalg::AugmentedSystem;
use extinct_poly::DensePoly;
use extinct_rings::integers::Z;

use crate::classify::Partition;
use crate::error::ExtinctionError;
use crate::state::State;

/// Transition tallies of one class representative.
///
/// Recovery moves add `+1` to the target class, infection moves add `-1`;
/// a class reached both ways keeps only the net count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassTransitions {
    /// Net weight per target class.
    pub weights: Vec<i64>,
    /// Total constant (recovery) rate out of the state.
    pub recovery_escape: i64,
    /// Total coefficient of `x` (infection) in the rate out of the state.
    pub infection_escape: i64,
}

impl ClassTransitions {
    /// Tallies the moves out of the representative of class `class`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtinctionError::InvariantViolation`] if a reachable state
    /// has no class, which only happens for an incomplete partition.
    pub fn tally(graph: &Graph, partition: &Partition, class: usize) -> Result<Self, ExtinctionError> {
        let now = partition.class(class).representative();
        let class_of = |target: State| {
            partition.class_of(target).ok_or_else(|| {
                ExtinctionError::InvariantViolation(format!("state {target} belongs to no class"))
            })
        };

        let mut weights = vec![0i64; partition.len()];
        let mut recovery_escape = 0i64;
        let mut infection_escape = 0i64;

        for node in now.infected_nodes() {
            let target = now.recover(node);
            if target.is_absorbing() {
                recovery_escape += 1;
            } else {
                weights[class_of(target)?] += 1;
            }

            for neighbor in graph.neighbors(node) {
                if !now.is_infected(neighbor) {
                    weights[class_of(now.infect(neighbor))?] -= 1;
                }
            }
        }

        for &w in &weights {
            if w < 0 {
                infection_escape -= w;
            } else {
                recovery_escape += w;
            }
        }

        Ok(Self {
            weights,
            recovery_escape,
            infection_escape,
        })
    }

    /// The equation row of class `class`: one entry per class followed by
    /// the constant `-1`.
    #[must_use]
    pub fn row(&self, class: usize) -> Vec<DensePoly<Z>> {
        let mut row: Vec<DensePoly<Z>> = self
            .weights
            .iter()
            .map(|&w| match w {
                w if w < 0 => DensePoly::from_i64s(&[0, -w]),
                0 => DensePoly::zero(),
                w => DensePoly::from_i64s(&[w]),
            })
            .collect();
        row[class] = DensePoly::from_i64s(&[-self.recovery_escape, -self.infection_escape]);
        row.push(DensePoly::from_i64s(&[-1]));
        row
    }
}

/// Builds the augmented system with one row and one unknown per class.
///
/// # Errors
///
/// Fails if the partition does not cover a reachable state.
pub fn build_system(graph: &Graph, partition: &Partition) -> Result<AugmentedSystem<DensePoly<Z>>, ExtinctionError> {
    let rows = (0..partition.len())
        .map(|class| ClassTransitions::tally(graph, partition, class).map(|t| t.row(class)))
        .collect::<Result<Vec<_>, _>>()?;
    let system = AugmentedSystem::from_rows(rows)?;
    debug!(
        "built {} equations with {} nonzero entries",
        system.num_unknowns(),
        system.nonzero_entries()
    );
    Ok(system)
}
