//! The run context tying classification, equation building and solving
//! together.

use log::{debug, info};

use extinct_graph::{BacktrackOracle, ColoringOracle, Graph};
use extinct_integers::Rational;
use extinct_linalg::AugmentedSystem;
use extinct_poly::DensePoly;
use extinct_rings::integers::Z;

use crate::answer::{ClassResult, ExtinctionReport, ExtinctionTime};
use crate::classify::Partition;
use crate::config::ExtinctionConfig;
use crate::equations::build_system;
use crate::error::ExtinctionError;

/// Candidate rate ratios tried when checking the solution by substitution.
const SAMPLE_POINTS: i64 = 64;

/// One extinction-time computation on a borrowed graph.
#[derive(Clone, Debug)]
pub struct ExtinctionRun<'g, O = BacktrackOracle> {
    graph: &'g Graph,
    oracle: O,
    config: ExtinctionConfig,
}

impl<'g> ExtinctionRun<'g, BacktrackOracle> {
    /// A run with the backtracking oracle and default configuration.
    #[must_use]
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            oracle: BacktrackOracle::new(),
            config: ExtinctionConfig::default(),
        }
    }
}

impl<'g, O: ColoringOracle> ExtinctionRun<'g, O> {
    /// Replaces the automorphism oracle.
    #[must_use]
    pub fn with_oracle<P: ColoringOracle>(self, oracle: P) -> ExtinctionRun<'g, P> {
        ExtinctionRun {
            graph: self.graph,
            oracle,
            config: self.config,
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ExtinctionConfig) -> Self {
        self.config = config;
        self
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &ExtinctionConfig {
        &self.config
    }

    /// Partitions the states into automorphism classes.
    #[must_use]
    pub fn classify(&self) -> Partition {
        Partition::classify(self.graph, &self.oracle)
    }

    /// Classifies, builds and solves, returning one result per class.
    ///
    /// # Errors
    ///
    /// Propagates solver failures, reports a pole when the configured
    /// evaluation point is a root of some denominator, and reports failed
    /// checks when they are enabled.
    pub fn run(&self) -> Result<ExtinctionReport, ExtinctionError> {
        let partition = self.classify();
        let system = build_system(self.graph, &partition)?;
        let original = self.config.check_invariants.then(|| system.clone());

        let times: Vec<ExtinctionTime> = system
            .solve()?
            .into_iter()
            .map(|q| ExtinctionTime::new(q.numerator, q.denominator))
            .collect();
        debug!(
            "solved {} classes; largest numerator degree {}, largest coefficient {} bits",
            times.len(),
            times.iter().map(|t| t.numerator().degree()).max().unwrap_or(0),
            times
                .iter()
                .map(|t| t.numerator().max_coeff_bits().max(t.denominator().max_coeff_bits()))
                .max()
                .unwrap_or(0)
        );

        if let Some(system) = &original {
            self.check(&partition, system, &times)?;
            info!("all checks passed for {} classes", times.len());
        }

        let classes = partition
            .into_classes()
            .into_iter()
            .zip(times)
            .enumerate()
            .map(|(index, (class, time))| {
                let value = match &self.config.evaluate_at {
                    None => None,
                    Some(at) => Some(time.eval(at).ok_or_else(|| ExtinctionError::Pole {
                        class: index,
                        at: at.clone(),
                    })?),
                };
                Ok(ClassResult { class, time, value })
            })
            .collect::<Result<Vec<_>, ExtinctionError>>()?;

        Ok(ExtinctionReport {
            classes,
            variable: self.config.variable.clone(),
        })
    }

    /// Verifies a solved system: the partition covers every state once,
    /// every denominator has a positive leading coefficient, connected
    /// graphs show the `N - 1` degree gap, and the answers satisfy the
    /// original equations at a sample rate ratio.
    fn check(
        &self,
        partition: &Partition,
        system: &AugmentedSystem<DensePoly<Z>>,
        times: &[ExtinctionTime],
    ) -> Result<(), ExtinctionError> {
        check_partition(partition)?;

        for (class, time) in times.iter().enumerate() {
            if time.denominator().leading_sign() <= 0 {
                return Err(violation(format!(
                    "class {class}: denominator {} is not positive",
                    time.denominator()
                )));
            }
        }

        if self.graph.is_connected() {
            let expected = self.graph.num_nodes() as i64 - 1;
            if let Some((class, time)) = times
                .iter()
                .enumerate()
                .find(|(_, t)| t.degree_gap() != expected)
            {
                return Err(violation(format!(
                    "class {class}: degree gap {} instead of {expected}",
                    time.degree_gap()
                )));
            }
        }

        check_substitution(system, times)
    }
}

fn violation(message: String) -> ExtinctionError {
    ExtinctionError::InvariantViolation(message)
}

fn check_partition(partition: &Partition) -> Result<(), ExtinctionError> {
    let space = partition.space();
    let mut hits = vec![0usize; space.len()];

    for (index, class) in partition.classes().iter().enumerate() {
        if !class.members().windows(2).all(|w| w[0] < w[1]) {
            return Err(violation(format!("class {index}: members are not increasing")));
        }
        for &state in class.members() {
            let slot = space
                .index(state)
                .ok_or_else(|| violation(format!("class {index}: state {state} is outside the space")))?;
            hits[slot] += 1;
            if partition.class_of(state) != Some(index) {
                return Err(violation(format!("state {state} is misassigned")));
            }
        }
    }

    match hits.iter().position(|&h| h != 1) {
        Some(slot) => Err(violation(format!(
            "state {} appears in {} classes",
            slot + 1,
            hits[slot]
        ))),
        None => Ok(()),
    }
}

/// Substitutes the answers into the original equations at the first
/// positive integer rate ratio where no denominator vanishes.
fn check_substitution(
    system: &AugmentedSystem<DensePoly<Z>>,
    times: &[ExtinctionTime],
) -> Result<(), ExtinctionError> {
    let Some((at, values)) = (1..=SAMPLE_POINTS).find_map(|p| {
        let at = Rational::from(p);
        let values: Option<Vec<Rational>> = times.iter().map(|t| t.eval(&at)).collect();
        values.map(|v| (at, v))
    }) else {
        debug!("no sample point avoids every pole; substitution check skipped");
        return Ok(());
    };

    let k = system.constant_column();
    for (i, row) in system.rows().iter().enumerate() {
        let lhs = row[..k]
            .iter()
            .zip(&values)
            .fold(Rational::from(0i64), |acc, (a, v)| acc + a.eval_rational(&at) * v);
        let rhs = row[k].eval_rational(&at);
        if lhs != rhs {
            return Err(violation(format!(
                "equation {i} fails at rate ratio {at}: {lhs} != {rhs}"
            )));
        }
    }
    Ok(())
}
