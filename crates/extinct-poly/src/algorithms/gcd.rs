//! Polynomial GCD over a Euclidean coefficient ring.
//!
//! The gcd is computed with a primitive pseudo-remainder sequence, so no
//! coefficient ever leaves the ring. The result is normalized to a positive
//! leading coefficient and carries the gcd of the two contents.

use extinct_rings::traits::{EuclideanDomain, OrderedRing, Ring};

use crate::dense::DensePoly;

/// Computes the content of a polynomial (non-negative gcd of all
/// coefficients). The content of zero is zero.
pub fn content<R: EuclideanDomain + OrderedRing>(p: &DensePoly<R>) -> R {
    p.coeffs()
        .iter()
        .fold(R::zero(), |acc, c| acc.gcd(c))
        .abs()
}

/// Computes the primitive part of a polynomial (divided by content).
///
/// The sign of the input is kept.
pub fn primitive_part<R: EuclideanDomain + OrderedRing>(p: &DensePoly<R>) -> DensePoly<R> {
    let c = content(p);
    if c.is_zero() || c.is_one() {
        return p.clone();
    }
    DensePoly::new(p.coeffs().iter().map(|x| x.div(&c)).collect())
}

/// Pseudo-remainder of `a` by `b`: the remainder of `lc(b)^(δ+1) * a`
/// divided by `b`, where `δ = deg a - deg b`.
///
/// # Panics
///
/// Panics if `b` is zero.
pub fn pseudo_remainder<R: EuclideanDomain>(a: &DensePoly<R>, b: &DensePoly<R>) -> DensePoly<R> {
    assert!(!b.is_zero(), "pseudo-remainder by the zero polynomial");

    let deg_a = a.degree();
    let deg_b = b.degree();
    if a.is_zero() || deg_a < deg_b {
        return a.clone();
    }

    let lead_b = b.leading_coeff();
    let delta = deg_a - deg_b;
    let scale = lead_b.pow(u32::try_from(delta + 1).unwrap_or(u32::MAX));
    let mut r: Vec<R> = a.coeffs().iter().map(|c| c.clone() * scale.clone()).collect();

    for i in (0..=delta).rev() {
        let top = r[i + deg_b].clone();
        if top.is_zero() {
            continue;
        }
        // Exact: every coefficient was pre-multiplied by enough powers of lc(b).
        let q = top.div(lead_b);
        for (j, bc) in b.coeffs().iter().enumerate() {
            r[i + j] = r[i + j].clone() - q.clone() * bc.clone();
        }
    }

    DensePoly::new(r)
}

/// Computes the gcd of two polynomials.
///
/// `gcd(0, b)` is `b` with a positive leading coefficient, and
/// `gcd(0, 0)` is zero.
pub fn poly_gcd<R: EuclideanDomain + OrderedRing>(a: &DensePoly<R>, b: &DensePoly<R>) -> DensePoly<R> {
    if a.is_zero() {
        return with_positive_lead(b.clone());
    }
    if b.is_zero() {
        return with_positive_lead(a.clone());
    }

    let c = content(a).gcd(&content(b)).abs();

    let (mut p, mut q) = if a.degree() >= b.degree() {
        (primitive_part(a), primitive_part(b))
    } else {
        (primitive_part(b), primitive_part(a))
    };

    while q.degree() > 0 {
        let r = pseudo_remainder(&p, &q);
        if r.is_zero() {
            break;
        }
        p = q;
        q = primitive_part(&r);
    }

    let g = if q.degree() == 0 {
        DensePoly::one()
    } else {
        with_positive_lead(primitive_part(&q))
    };
    g.scale(&c)
}

/// Divides `a` by `b` when the division is exact in `R[x]`.
///
/// Returns `None` if `b` is zero, if a leading coefficient does not divide,
/// or if a nonzero remainder is left over.
pub fn div_exact<R: EuclideanDomain>(a: &DensePoly<R>, b: &DensePoly<R>) -> Option<DensePoly<R>> {
    if b.is_zero() {
        return None;
    }
    if a.is_zero() {
        return Some(DensePoly::zero());
    }
    if a.degree() < b.degree() {
        return None;
    }

    let deg_b = b.degree();
    let lead_b = b.leading_coeff();
    let mut remainder = a.coeffs().to_vec();
    let mut quotient = vec![R::zero(); a.degree() - deg_b + 1];

    for i in (0..quotient.len()).rev() {
        let top = remainder[i + deg_b].clone();
        if top.is_zero() {
            continue;
        }
        let (q, rem) = top.div_rem(lead_b);
        if !rem.is_zero() {
            return None;
        }
        for (j, bc) in b.coeffs().iter().enumerate() {
            remainder[i + j] = remainder[i + j].clone() - q.clone() * bc.clone();
        }
        quotient[i] = q;
    }

    if remainder.iter().any(|c| !c.is_zero()) {
        return None;
    }
    Some(DensePoly::new(quotient))
}

fn with_positive_lead<R: OrderedRing>(p: DensePoly<R>) -> DensePoly<R> {
    if p.leading_sign() < 0 {
        -p
    } else {
        p
    }
}
