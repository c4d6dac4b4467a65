//! Arbitrary precision rational numbers.
//!
//! Used to evaluate extinction-time rational functions exactly at a
//! concrete rate ratio.

use dashu::base::{Inverse, UnsignedAbs};
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;
use thiserror::Error;

use crate::Integer;

/// An arbitrary precision rational number.
///
/// Rationals are always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: Integer, denominator: Integer) -> Self {
        assert!(!denominator.is_zero(), "denominator cannot be zero");
        let negative = denominator.is_negative();
        let value = RBig::from_parts(numerator.into_inner(), denominator.into_inner().unsigned_abs());
        if negative {
            Self(-value)
        } else {
            Self(value)
        }
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self(RBig::from(n.into_inner()))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        Integer::from(self.0.numerator().clone())
    }

    /// Returns the denominator (always positive).
    #[must_use]
    pub fn denominator(&self) -> Integer {
        Integer::from(dashu::integer::IBig::from(self.0.denominator().clone()))
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Returns the reciprocal, or `None` for zero.
    #[must_use]
    pub fn checked_recip(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self(self.0.clone().inv()))
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({})", self.0)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

/// Error returned when a string is not of the form `p` or `p/q`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseRationalError {
    /// The numerator or denominator is not an integer.
    #[error("invalid integer {0:?}")]
    InvalidInteger(String),
    /// The denominator is zero.
    #[error("denominator is zero")]
    ZeroDenominator,
}

impl FromStr for Rational {
    type Err = ParseRationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| {
            part.parse::<Integer>()
                .map_err(|_| ParseRationalError::InvalidInteger(part.trim().to_string()))
        };
        match s.split_once('/') {
            None => Ok(Self::from_integer(parse(s)?)),
            Some((num, den)) => {
                let num = parse(num)?;
                let den = parse(den)?;
                if den.is_zero() {
                    return Err(ParseRationalError::ZeroDenominator);
                }
                Ok(Self::new(num, den))
            }
        }
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let a = Rational::from_i64(1, 2);
        let b = Rational::from_i64(1, 3);

        // 1/2 + 1/3 = 5/6
        let sum = a.clone() + b.clone();
        assert_eq!(sum.numerator().to_i64(), Some(5));
        assert_eq!(sum.denominator().to_i64(), Some(6));

        // 1/2 * 1/3 = 1/6
        let prod = a * b;
        assert_eq!(prod.numerator().to_i64(), Some(1));
        assert_eq!(prod.denominator().to_i64(), Some(6));
    }

    #[test]
    fn test_reduction_and_sign() {
        let r = Rational::from_i64(4, -6);
        assert_eq!(r.numerator().to_i64(), Some(-2));
        assert_eq!(r.denominator().to_i64(), Some(3));
        assert!(r.numerator().is_negative());
    }

    #[test]
    fn test_display() {
        assert_eq!(Rational::from_i64(3, 1).to_string(), "3");
        assert_eq!(Rational::from_i64(2, 3).to_string(), "2/3");
        assert_eq!(Rational::from_i64(-2, 3).to_string(), "-2/3");
    }

    #[test]
    fn test_parse() {
        assert_eq!("7".parse::<Rational>(), Ok(Rational::from(7i64)));
        assert_eq!("6/4".parse::<Rational>(), Ok(Rational::from_i64(3, 2)));
        assert_eq!("-1/3".parse::<Rational>(), Ok(Rational::from_i64(-1, 3)));
        assert_eq!(
            "1/0".parse::<Rational>(),
            Err(ParseRationalError::ZeroDenominator)
        );
        assert!(matches!(
            "a/2".parse::<Rational>(),
            Err(ParseRationalError::InvalidInteger(_))
        ));
        assert_eq!(
            "x".parse::<Rational>().unwrap_err().to_string(),
            "invalid integer \"x\""
        );
        assert_eq!(ParseRationalError::ZeroDenominator.to_string(), "denominator is zero");
    }

    #[test]
    fn test_recip() {
        assert_eq!(
            Rational::from_i64(-2, 5).checked_recip(),
            Some(Rational::from_i64(-5, 2))
        );
        assert_eq!(Rational::zero().checked_recip(), None);
    }
}
