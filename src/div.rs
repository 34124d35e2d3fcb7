//! Long division over magnitudes.
//!
//! Produces one quotient limb per step while keeping a running remainder,
//! following Knuth's Algorithm D (TAOCP vol. 2, 4.3.1) for multi-limb
//! divisors. Signs are handled by the caller.

use crate::math::*;

/// Divide a magnitude by a single non-zero limb.
///
/// Returns the normalized quotient and the remainder.
pub(crate) fn div_rem_small(x: &[Limb], y: Limb) -> (LimbVec, Limb) {
    debug_assert!(y != 0);

    let mut q: LimbVec = vec![0; x.len()];
    let mut rem: Wide = 0;
    let y = y as Wide;
    for (qi, &xi) in q.iter_mut().zip(x.iter()).rev() {
        let dd = (rem << LIMB_BITS) | xi as Wide;
        *qi = (dd / y) as Limb;
        rem = dd % y;
    }
    small::normalize(&mut q);
    (q, rem as Limb)
}

/// Divide magnitude `x` by non-empty magnitude `y`.
///
/// Returns the normalized (quotient, remainder) pair with
/// `x == quotient * y + remainder` and `remainder < y`.
pub(crate) fn div_rem(x: &[Limb], y: &[Limb]) -> (LimbVec, LimbVec) {
    debug_assert!(!y.is_empty());

    if large::less(x, y) {
        return (LimbVec::new(), x.to_vec());
    }
    if let [y0] = y {
        let (q, r) = div_rem_small(x, *y0);
        let r = if r == 0 { LimbVec::new() } else { vec![r] };
        return (q, r);
    }

    // D1. Normalize so the top bit of the divisor is set. This keeps each
    // quotient estimate within 2 of the true digit.
    let shift = small::leading_zeros(y);
    let v = small::shl(y, shift);
    let mut u = small::shl(x, shift);
    u.resize(x.len() + 1, 0);

    let n = v.len();
    let m = u.len() - n;
    let base: Wide = 1 << LIMB_BITS;
    let vtop = v[n - 1] as Wide;
    let vnext = v[n - 2] as Wide;
    let mut q: LimbVec = vec![0; m];

    // D2. Loop over the quotient limbs, most significant first.
    for j in (0..m).rev() {
        // D3. Estimate the quotient limb from the top two limbs of the
        // current remainder window.
        let num = ((u[j + n] as Wide) << LIMB_BITS) | u[j + n - 1] as Wide;
        let mut qhat = num / vtop;
        let mut rhat = num % vtop;
        while qhat >= base || qhat * vnext > ((rhat << LIMB_BITS) | u[j + n - 2] as Wide) {
            qhat -= 1;
            rhat += vtop;
            if rhat >= base {
                break;
            }
        }

        // D4. Multiply and subtract.
        let mut mul_carry: Limb = 0;
        let mut borrow = false;
        for i in 0..n {
            let (lo, hi) = scalar::mul(v[i], qhat as Limb, mul_carry);
            mul_carry = hi;
            let mut tmp = scalar::isub(&mut u[i + j], lo);
            if borrow {
                tmp |= scalar::isub(&mut u[i + j], 1);
            }
            borrow = tmp;
        }
        let mut negative = scalar::isub(&mut u[j + n], mul_carry);
        if borrow {
            negative |= scalar::isub(&mut u[j + n], 1);
        }

        // D5/D6. The estimate was one too large: add the divisor back.
        if negative {
            qhat -= 1;
            let mut carry = false;
            for i in 0..n {
                let mut tmp = scalar::iadd(&mut u[i + j], v[i]);
                if carry {
                    tmp |= scalar::iadd(&mut u[i + j], 1);
                }
                carry = tmp;
            }
            u[j + n] = u[j + n].wrapping_add(carry as Limb);
        }

        q[j] = qhat as Limb;
    }

    // D8. Unnormalize the remainder.
    u.truncate(n);
    small::normalize(&mut u);
    small::ishr(&mut u, shift);
    small::normalize(&mut q);
    (q, u)
}
