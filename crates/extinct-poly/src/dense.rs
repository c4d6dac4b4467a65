//! Dense univariate polynomials.
//!
//! `DensePoly<Z>` is the entry type of the extinction-time linear system:
//! every transition weight, escape rate and solved numerator/denominator is
//! one of these, in the rate-ratio variable `x`.

use std::fmt;

use extinct_integers::Rational;
use extinct_rings::integers::Z;
use extinct_rings::traits::{CommutativeRing, EuclideanDomain, GcdDomain, IntegralDomain, OrderedRing, Ring};

use crate::algorithms::gcd;
use crate::algorithms::karatsuba::karatsuba_mul;

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order with trailing zeros
/// stripped; the zero polynomial is the single coefficient `[0]`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DensePoly<R: Ring> {
    coeffs: Vec<R>,
}

impl<R: Ring> DensePoly<R> {
    /// Creates a new polynomial from coefficients.
    #[must_use]
    pub fn new(mut coeffs: Vec<R>) -> Self {
        while coeffs.len() > 1 && coeffs.last().is_some_and(Ring::is_zero) {
            coeffs.pop();
        }

        if coeffs.is_empty() {
            coeffs.push(R::zero());
        }

        Self { coeffs }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![R::zero()],
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![R::one()],
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::new(vec![c])
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: R, n: usize) -> Self {
        let mut coeffs = vec![R::zero(); n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// Returns the degree of the polynomial (0 for constants and zero).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Returns true if this is the constant polynomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_one()
    }

    /// Returns the leading coefficient (zero for the zero polynomial).
    #[must_use]
    pub fn leading_coeff(&self) -> &R {
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        self.coeffs
            .iter()
            .rev()
            .fold(R::zero(), |acc, c| acc * x.clone() + c.clone())
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let result = (0..len).map(|i| self.coeff(i) + other.coeff(i)).collect();
        Self::new(result)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| -c.clone()).collect(),
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let result = (0..len).map(|i| self.coeff(i) - other.coeff(i)).collect();
        Self::new(result)
    }

    /// Multiplies two polynomials.
    ///
    /// Schoolbook below 32 coefficients, Karatsuba above.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        Self::new(karatsuba_mul(&self.coeffs, &other.coeffs))
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self::new(self.coeffs.iter().map(|x| x.clone() * c.clone()).collect())
    }
}

impl<R: OrderedRing> DensePoly<R> {
    /// Sign of the leading coefficient: -1, 0 (zero polynomial), or 1.
    #[must_use]
    pub fn leading_sign(&self) -> i8 {
        self.leading_coeff().signum()
    }
}

impl DensePoly<Z> {
    /// Builds a polynomial over Z from small integer coefficients
    /// (ascending degree order).
    #[must_use]
    pub fn from_i64s(coeffs: &[i64]) -> Self {
        Self::new(coeffs.iter().map(|&c| Z::new(c)).collect())
    }

    /// Evaluates the polynomial exactly at a rational point.
    #[must_use]
    pub fn eval_rational(&self, x: &Rational) -> Rational {
        self.coeffs.iter().rev().fold(Rational::from(0i64), |acc, c| {
            acc * x + Rational::from_integer(c.0.clone())
        })
    }

    /// Bit length of the largest coefficient, used to report growth.
    #[must_use]
    pub fn max_coeff_bits(&self) -> usize {
        self.coeffs.iter().map(|c| c.0.bit_len()).max().unwrap_or(0)
    }
}

impl<R: OrderedRing + fmt::Display> DensePoly<R> {
    /// Returns a displayable view that prints the polynomial in `var`.
    ///
    /// Terms appear in descending degree, `x^2-2*x+1` style: unit
    /// coefficients are elided on non-constant terms and no spaces are
    /// emitted.
    #[must_use]
    pub fn display_in<'a>(&'a self, var: &'a str) -> PolyDisplay<'a, R> {
        PolyDisplay { poly: self, var }
    }
}

/// Display adapter returned by [`DensePoly::display_in`].
pub struct PolyDisplay<'a, R: Ring> {
    poly: &'a DensePoly<R>,
    var: &'a str,
}

impl<R: OrderedRing + fmt::Display> fmt::Display for PolyDisplay<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.poly.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (i, c) in self.poly.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }

            let negative = c.signum() < 0;
            if negative {
                write!(f, "-")?;
            } else if !first {
                write!(f, "+")?;
            }
            first = false;

            let magnitude = c.abs();
            if i == 0 {
                write!(f, "{magnitude}")?;
                continue;
            }
            if !magnitude.is_one() {
                write!(f, "{magnitude}*")?;
            }
            if i == 1 {
                write!(f, "{}", self.var)?;
            } else {
                write!(f, "{}^{i}", self.var)?;
            }
        }
        Ok(())
    }
}

impl<R: OrderedRing + fmt::Display> fmt::Display for DensePoly<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_in("x"), f)
    }
}

// Ring structure on R[x], so polynomials can be matrix entries.

impl<R: Ring> std::ops::Add for DensePoly<R> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        DensePoly::add(&self, &rhs)
    }
}

impl<R: Ring> std::ops::Sub for DensePoly<R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        DensePoly::sub(&self, &rhs)
    }
}

impl<R: Ring> std::ops::Mul for DensePoly<R> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        DensePoly::mul(&self, &rhs)
    }
}

impl<R: Ring> std::ops::Neg for DensePoly<R> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        DensePoly::neg(&self)
    }
}

impl<R: Ring> Ring for DensePoly<R> {
    fn zero() -> Self {
        Self {
            coeffs: vec![R::zero()],
        }
    }

    fn one() -> Self {
        Self {
            coeffs: vec![R::one()],
        }
    }

    fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_one()
    }
}

impl<R: CommutativeRing> CommutativeRing for DensePoly<R> {}
impl<R: IntegralDomain> IntegralDomain for DensePoly<R> {}

impl<R: EuclideanDomain + OrderedRing> GcdDomain for DensePoly<R> {
    fn gcd(&self, other: &Self) -> Self {
        gcd::poly_gcd(self, other)
    }

    fn div_exact(&self, other: &Self) -> Option<Self> {
        gcd::div_exact(self, other)
    }

    fn leading_sign(&self) -> i8 {
        self.leading_coeff().signum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(coeffs: &[i64]) -> DensePoly<Z> {
        DensePoly::from_i64s(coeffs)
    }

    #[test]
    fn test_normalization() {
        let p = poly(&[1, 2, 0, 0]);
        assert_eq!(p.degree(), 1);
        assert_eq!(p.coeffs().len(), 2);
        assert!(poly(&[]).is_zero());
        assert!(poly(&[0, 0]).is_zero());
        assert!(poly(&[1]).is_one());
    }

    #[test]
    fn test_basic_ops() {
        let p = poly(&[1, 2]); // 1 + 2x
        let q = poly(&[3, 4]); // 3 + 4x

        assert_eq!(p.add(&q), poly(&[4, 6]));
        assert_eq!(p.sub(&q), poly(&[-2, -2]));
        assert_eq!(p.sub(&p), DensePoly::zero());
        assert_eq!(p.neg(), poly(&[-1, -2]));
        assert_eq!(p.scale(&Z::new(3)), poly(&[3, 6]));
    }

    #[test]
    fn test_mul() {
        // (1 + 2x)(3 + 4x) = 3 + 10x + 8x^2
        assert_eq!(poly(&[1, 2]).mul(&poly(&[3, 4])), poly(&[3, 10, 8]));
        assert!(poly(&[1, 2]).mul(&DensePoly::zero()).is_zero());
    }

    #[test]
    fn test_ring_operators() {
        let p = poly(&[1, 1]);
        let q = poly(&[-1, 1]);
        assert_eq!(p.clone() * q.clone(), poly(&[-1, 0, 1]));
        assert_eq!(p.clone() - q.clone(), poly(&[2]));
        assert_eq!(-p, poly(&[-1, -1]));
        assert!(<DensePoly<Z> as Ring>::zero().is_zero());
    }

    #[test]
    fn test_eval() {
        // p(x) = 1 + 2x + 3x^2, p(2) = 17
        let p = poly(&[1, 2, 3]);
        assert_eq!(p.eval(&Z::new(2)), Z::new(17));
        assert_eq!(
            p.eval_rational(&Rational::from_i64(1, 2)),
            Rational::from_i64(11, 4)
        );
    }

    #[test]
    fn test_leading_sign() {
        assert_eq!(poly(&[5, -3]).leading_sign(), -1);
        assert_eq!(poly(&[-5, 3]).leading_sign(), 1);
        assert_eq!(DensePoly::<Z>::zero().leading_sign(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(poly(&[3, 3, 2]).to_string(), "2*x^2+3*x+3");
        assert_eq!(poly(&[1, -2, 1]).to_string(), "x^2-2*x+1");
        assert_eq!(poly(&[0, -1]).to_string(), "-x");
        assert_eq!(poly(&[-6]).to_string(), "-6");
        assert_eq!(poly(&[1]).to_string(), "1");
        assert_eq!(DensePoly::<Z>::zero().to_string(), "0");
        assert_eq!(poly(&[0, 0, -1, 4]).display_in("r").to_string(), "4*r^3-r^2");
    }
}
