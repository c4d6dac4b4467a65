//! Run configuration.

use extinct_integers::Rational;

/// Configuration for an extinction-time run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtinctionConfig {
    /// Symbol used for the infection/recovery rate ratio when printing.
    pub variable: String,
    /// Rate ratio at which every answer is additionally evaluated.
    pub evaluate_at: Option<Rational>,
    /// Verify the solved system before reporting it.
    pub check_invariants: bool,
}

impl Default for ExtinctionConfig {
    fn default() -> Self {
        Self {
            variable: "x".to_string(),
            evaluate_at: None,
            check_invariants: false,
        }
    }
}

impl ExtinctionConfig {
    /// Sets the printed variable name.
    #[must_use]
    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }

    /// Evaluates every answer at `ratio`.
    #[must_use]
    pub fn with_evaluation(mut self, ratio: Rational) -> Self {
        self.evaluate_at = Some(ratio);
        self
    }

    /// Enables or disables the post-solve checks.
    #[must_use]
    pub fn with_checks(mut self, enabled: bool) -> Self {
        self.check_invariants = enabled;
        self
    }
}
