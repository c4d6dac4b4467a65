//! The ring of integers Z.

use crate::traits::{CommutativeRing, EuclideanDomain, IntegralDomain, OrderedRing, Ring};
use extinct_integers::Integer;

/// The ring of integers.
///
/// Wraps `extinct_integers::Integer` and implements the algebraic traits,
/// so it can serve as the coefficient ring of `DensePoly`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Z(pub Integer);

impl Z {
    /// Creates a new integer.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(Integer::new(value))
    }

    /// Returns the inner Integer.
    #[must_use]
    pub fn into_inner(self) -> Integer {
        self.0
    }

    /// Returns a reference to the inner Integer.
    #[must_use]
    pub fn as_inner(&self) -> &Integer {
        &self.0
    }
}

impl Ring for Z {
    fn zero() -> Self {
        Self(Integer::new(0))
    }

    fn one() -> Self {
        Self(Integer::new(1))
    }

    fn is_zero(&self) -> bool {
        use num_traits::Zero;
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        use num_traits::One;
        self.0.is_one()
    }

    fn pow(&self, n: u32) -> Self {
        Self(self.0.pow(n))
    }
}

impl CommutativeRing for Z {}
impl IntegralDomain for Z {}

impl EuclideanDomain for Z {
    /// Truncating division: the remainder takes the sign of `self`.
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        let q = self.0.clone() / other.0.clone();
        let r = self.0.clone() % other.0.clone();
        (Self(q), Self(r))
    }

    fn gcd(&self, other: &Self) -> Self {
        Self(self.0.gcd(&other.0))
    }
}

impl OrderedRing for Z {
    fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    fn signum(&self) -> i8 {
        self.0.signum()
    }
}

impl std::ops::Add for Z {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Z {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Z {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Neg for Z {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Z {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Integer> for Z {
    fn from(value: Integer) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Z {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_laws() {
        let a = Z::new(10);
        let b = Z::new(3);

        assert!(Z::zero().is_zero());
        assert!(Z::one().is_one());

        assert_eq!((a.clone() + b.clone()).0.to_i64(), Some(13));
        assert_eq!((a.clone() * b.clone()).0.to_i64(), Some(30));
        assert_eq!((a - b).0.to_i64(), Some(7));
    }

    #[test]
    fn test_euclidean_domain() {
        let a = Z::new(17);
        let b = Z::new(5);

        let (q, r) = a.div_rem(&b);
        assert_eq!(q, Z::new(3));
        assert_eq!(r, Z::new(2));

        let (q, r) = Z::new(-17).div_rem(&b);
        assert_eq!(q, Z::new(-3));
        assert_eq!(r, Z::new(-2));
    }

    #[test]
    fn test_gcd_normalized() {
        assert_eq!(EuclideanDomain::gcd(&Z::new(-12), &Z::new(18)), Z::new(6));
        assert_eq!(EuclideanDomain::gcd(&Z::new(0), &Z::new(-7)), Z::new(7));
    }

    #[test]
    fn test_pow_and_sign() {
        assert_eq!(Z::new(-2).pow(3), Z::new(-8));
        assert_eq!(Z::new(5).pow(0), Z::new(1));
        assert_eq!(Z::new(-4).signum(), -1);
        assert_eq!(Z::new(-4).abs(), Z::new(4));
    }

    #[test]
    fn test_gcd_of_zeros() {
        assert!(EuclideanDomain::gcd(&Z::zero(), &Z::zero()).is_zero());
        assert_eq!(EuclideanDomain::gcd(&Z::new(-4), &Z::zero()), Z::new(4));
    }
}
