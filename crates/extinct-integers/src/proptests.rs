//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn integer_additive_inverse(a in small_int()) {
            let a = Integer::new(a);
            let neg_a = -a.clone();
            prop_assert!((a + neg_a).is_zero());
        }

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);

            prop_assert!(g.signum() > 0);
            prop_assert!((a % g.clone()).is_zero());
            prop_assert!((b % g).is_zero());
        }

        #[test]
        fn gcd_with_zero_is_abs(a in small_int()) {
            let a = Integer::new(a);
            prop_assert_eq!(a.gcd(&Integer::zero()), a.abs());
            prop_assert_eq!(Integer::zero().gcd(&a), a.abs());
        }

        #[test]
        fn exact_division_inverts_multiplication(a in small_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let product = a.clone() * b.clone();
            prop_assert!((product.clone() % b.clone()).is_zero());
            prop_assert_eq!(product / b, a);
        }

        #[test]
        fn rational_parse_display_agree(num in small_int(), den in non_zero_int()) {
            let r = Rational::from_i64(num, den);
            let parsed: Rational = r.to_string().parse().unwrap();
            prop_assert_eq!(parsed, r);
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            let inv = a.checked_recip().unwrap();
            prop_assert!((a * inv).is_one());
        }
    }
}
