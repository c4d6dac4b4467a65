//! Exact extinction times and their textual form.

use std::fmt;

use extinct_integers::Rational;
use extinct_poly::DensePoly;
use extinct_rings::integers::Z;

use crate::classify::EquivalenceClass;

/// Expected time to extinction as a rational function of the rate ratio.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtinctionTime {
    numerator: DensePoly<Z>,
    denominator: DensePoly<Z>,
}

impl ExtinctionTime {
    /// Creates an answer from a solved numerator/denominator pair.
    #[must_use]
    pub fn new(numerator: DensePoly<Z>, denominator: DensePoly<Z>) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// The numerator polynomial.
    #[must_use]
    pub fn numerator(&self) -> &DensePoly<Z> {
        &self.numerator
    }

    /// The denominator polynomial.
    #[must_use]
    pub fn denominator(&self) -> &DensePoly<Z> {
        &self.denominator
    }

    /// `deg(numerator) - deg(denominator)`.
    #[must_use]
    pub fn degree_gap(&self) -> i64 {
        self.numerator.degree() as i64 - self.denominator.degree() as i64
    }

    /// Evaluates the answer at a rational rate ratio.
    ///
    /// Returns `None` if the denominator vanishes there.
    #[must_use]
    pub fn eval(&self, at: &Rational) -> Option<Rational> {
        let den = self.denominator.eval_rational(at).checked_recip()?;
        Some(self.numerator.eval_rational(at) * den)
    }

    /// Displays the answer in the variable `var`.
    #[must_use]
    pub fn display_in<'a>(&'a self, var: &'a str) -> AnswerDisplay<'a> {
        AnswerDisplay { time: self, var }
    }
}

/// Display adapter returned by [`ExtinctionTime::display_in`].
///
/// A unit denominator prints as the bare numerator; otherwise the
/// numerator is parenthesized and so is a non-constant denominator:
/// `(2*x^2+3*x+3)/3`, `(x+1)/(x+2)`.
pub struct AnswerDisplay<'a> {
    time: &'a ExtinctionTime,
    var: &'a str,
}

impl fmt::Display for AnswerDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num = self.time.numerator.display_in(self.var);
        let den = &self.time.denominator;
        if den.is_one() {
            write!(f, "{num}")
        } else if den.degree() > 0 {
            write!(f, "({num})/({})", den.display_in(self.var))
        } else {
            write!(f, "({num})/{}", den.display_in(self.var))
        }
    }
}

impl fmt::Display for ExtinctionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_in("x"), f)
    }
}

/// One output record: a class, its extinction time and, optionally, the
/// time's value at a concrete rate ratio.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassResult {
    /// The equivalence class.
    pub class: EquivalenceClass,
    /// Its extinction time.
    pub time: ExtinctionTime,
    /// The extinction time evaluated at the configured rate ratio.
    pub value: Option<Rational>,
}

impl ClassResult {
    /// Renders the record as ` m1 m2 ..., answer` with ` = value` appended
    /// when a value is present.
    #[must_use]
    pub fn line(&self, var: &str) -> String {
        let mut line: String = self
            .class
            .members()
            .iter()
            .map(|s| format!(" {s}"))
            .collect();
        line.push_str(", ");
        line.push_str(&self.time.display_in(var).to_string());
        if let Some(value) = &self.value {
            line.push_str(&format!(" = {value}"));
        }
        line
    }
}

/// All class results of a run, in class order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtinctionReport {
    /// One result per class.
    pub classes: Vec<ClassResult>,
    /// The printed variable name.
    pub variable: String,
}

impl ExtinctionReport {
    /// Number of classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if the report has no classes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Output lines, one per class.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.classes.iter().map(|c| c.line(&self.variable))
    }
}

impl fmt::Display for ExtinctionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
