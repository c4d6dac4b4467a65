//! Coefficient-slice multiplication.
//!
//! Schoolbook multiplication for short operands, Karatsuba's
//! divide-and-conquer scheme once both operands reach
//! [`KARATSUBA_THRESHOLD`] coefficients.

use extinct_rings::traits::Ring;

/// Below this many coefficients schoolbook multiplication is used.
pub const KARATSUBA_THRESHOLD: usize = 32;

/// Multiplies two coefficient slices (ascending degree order).
///
/// The result may carry trailing zeros; callers normalize through
/// `DensePoly::new`.
pub fn karatsuba_mul<R: Ring>(a: &[R], b: &[R]) -> Vec<R> {
    if a.len() < KARATSUBA_THRESHOLD || b.len() < KARATSUBA_THRESHOLD {
        return schoolbook_mul(a, b);
    }

    let size = a.len().max(b.len()).next_power_of_two();
    let half = size / 2;

    let mut a_ext = a.to_vec();
    let mut b_ext = b.to_vec();
    a_ext.resize(size, R::zero());
    b_ext.resize(size, R::zero());

    // a = a0 + a1*x^half, b = b0 + b1*x^half
    let (a0, a1) = a_ext.split_at(half);
    let (b0, b1) = b_ext.split_at(half);

    let z0 = karatsuba_mul(a0, b0);
    let z2 = karatsuba_mul(a1, b1);

    let a01: Vec<R> = a0.iter().zip(a1).map(|(x, y)| x.clone() + y.clone()).collect();
    let b01: Vec<R> = b0.iter().zip(b1).map(|(x, y)| x.clone() + y.clone()).collect();

    // z1 = (a0+a1)(b0+b1) - z0 - z2
    let mut z1 = karatsuba_mul(&a01, &b01);
    for part in [&z0, &z2] {
        for (slot, c) in z1.iter_mut().zip(part.iter()) {
            *slot = slot.clone() - c.clone();
        }
    }

    let mut result = vec![R::zero(); 2 * size - 1];
    add_shifted(&mut result, &z0, 0);
    add_shifted(&mut result, &z1, half);
    add_shifted(&mut result, &z2, 2 * half);
    result
}

/// Schoolbook multiplication: O(n·m).
pub fn schoolbook_mul<R: Ring>(a: &[R], b: &[R]) -> Vec<R> {
    if a.is_empty() || b.is_empty() {
        return vec![R::zero()];
    }

    let mut result = vec![R::zero(); a.len() + b.len() - 1];
    for (i, ai) in a.iter().enumerate() {
        if ai.is_zero() {
            continue;
        }
        for (j, bj) in b.iter().enumerate() {
            result[i + j] = result[i + j].clone() + ai.clone() * bj.clone();
        }
    }
    result
}

fn add_shifted<R: Ring>(target: &mut [R], part: &[R], shift: usize) {
    for (slot, c) in target[shift..].iter_mut().zip(part.iter()) {
        *slot = slot.clone() + c.clone();
    }
}
