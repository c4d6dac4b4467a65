//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::algorithms::gcd::{div_exact, poly_gcd};
    use crate::algorithms::karatsuba::schoolbook_mul;
    use crate::dense::DensePoly;
    use extinct_rings::integers::Z;

    // Strategy for generating small integer coefficients
    fn small_coeff() -> impl Strategy<Value = Z> {
        (-100i64..100i64).prop_map(Z::new)
    }

    // Strategy for generating small polynomials (degree 0-4)
    fn small_poly() -> impl Strategy<Value = DensePoly<Z>> {
        proptest::collection::vec(small_coeff(), 1..=5).prop_map(DensePoly::new)
    }

    // Strategy for generating non-zero polynomials
    fn nonzero_poly() -> impl Strategy<Value = DensePoly<Z>> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    proptest! {
        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
            prop_assert_eq!(a.sub(&a), DensePoly::zero());
        }

        #[test]
        fn poly_mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
            // Z has no zero divisors: deg(a * b) = deg(a) + deg(b)
            prop_assert_eq!(a.mul(&b).degree(), a.degree() + b.degree());
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in -5i64..5i64) {
            // (a * b)(x) = a(x) * b(x)
            let x = Z::new(x);
            prop_assert_eq!(a.mul(&b).eval(&x), a.eval(&x) * b.eval(&x));
        }

        // Karatsuba vs schoolbook equivalence

        #[test]
        fn karatsuba_matches_schoolbook(
            a_coeffs in proptest::collection::vec(-10i64..10i64, 30..=70),
            b_coeffs in proptest::collection::vec(-10i64..10i64, 30..=70)
        ) {
            let a = DensePoly::from_i64s(&a_coeffs);
            let b = DensePoly::from_i64s(&b_coeffs);

            let reference = DensePoly::new(schoolbook_mul(a.coeffs(), b.coeffs()));
            prop_assert_eq!(a.mul(&b), reference);
        }

        // GCD and exact division

        #[test]
        fn gcd_divides_both(a in nonzero_poly(), b in nonzero_poly()) {
            let g = poly_gcd(&a, &b);
            prop_assert_eq!(g.leading_sign(), 1);
            prop_assert!(div_exact(&a, &g).is_some());
            prop_assert!(div_exact(&b, &g).is_some());
        }

        #[test]
        fn gcd_finds_common_factor(a in nonzero_poly(), b in nonzero_poly(), c in nonzero_poly()) {
            // c divides gcd(a*c, b*c)
            let g = poly_gcd(&a.mul(&c), &b.mul(&c));
            prop_assert!(div_exact(&g, &c).is_some());
        }

        #[test]
        fn div_exact_recovers_factor(a in small_poly(), b in nonzero_poly()) {
            prop_assert_eq!(div_exact(&a.mul(&b), &b), Some(a));
        }
    }
}
