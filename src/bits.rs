//! Bitwise operations and bit counting.
//!
//! Values are stored as sign and magnitude, but `and`, `or` and `xor` behave
//! as if both operands were written in two's complement and sign-extended
//! with infinitely many copies of their sign bit. Each operation converts
//! the operands into a common finite width, one limb wider than the longer
//! magnitude, which is always enough to hold the sign bit of both inputs and
//! of the result.

use crate::math::*;
use std::cmp;

/// Width, in bits, of the window bit counts are reported against.
///
/// A value occupies the smallest multiple of this width that holds all of
/// its significant bits (at least one window, so zero occupies 32 bits).
pub const BIT_WINDOW: u64 = 32;

/// A limb-wise boolean operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum BitOp {
    And,
    Or,
    Xor,
}

impl BitOp {
    #[inline]
    fn apply(self, x: Limb, y: Limb) -> Limb {
        match self {
            BitOp::And => x & y,
            BitOp::Or => x | y,
            BitOp::Xor => x ^ y,
        }
    }
}

/// Negate a fixed-width two's-complement buffer in place, modulo `B^len`.
fn negate(x: &mut [Limb]) {
    let mut carry = true;
    for xi in x.iter_mut() {
        *xi = !*xi;
        if carry {
            carry = scalar::iadd(xi, 1);
        }
    }
}

/// Expand a sign and magnitude into `len` limbs of two's complement.
fn to_twos_complement(x: &[Limb], negative: bool, len: usize) -> LimbVec {
    debug_assert!(x.len() < len);
    let mut v = LimbVec::with_capacity(len);
    v.extend_from_slice(x);
    v.resize(len, 0);
    if negative {
        negate(&mut v);
    }
    v
}

/// Apply `op` to two signed magnitudes under two's-complement semantics.
///
/// Returns the sign (true when negative) and normalized magnitude of the
/// result.
pub(crate) fn bitwise(
    op: BitOp,
    x: &[Limb],
    xneg: bool,
    y: &[Limb],
    yneg: bool,
) -> (bool, LimbVec) {
    let len = cmp::max(x.len(), y.len()) + 1;
    let a = to_twos_complement(x, xneg, len);
    let b = to_twos_complement(y, yneg, len);
    let mut z: LimbVec = a.iter().zip(&b).map(|(&ai, &bi)| op.apply(ai, bi)).collect();

    let negative = z[len - 1] >> (LIMB_BITS - 1) == 1;
    if negative {
        negate(&mut z);
    }
    small::normalize(&mut z);
    (negative && !z.is_empty(), z)
}

// COUNTING

/// Number of significant bits: index of the highest set bit plus one.
#[inline]
pub(crate) fn significant_bits(x: &[Limb]) -> u64 {
    small::bit_length(x) as u64
}

/// Bits occupied by `x` in the counting window.
#[inline]
pub(crate) fn window_bits(x: &[Limb]) -> u64 {
    let bits = significant_bits(x);
    cmp::max(1, (bits + BIT_WINDOW - 1) / BIT_WINDOW) * BIT_WINDOW
}

/// Population count of the magnitude.
#[inline]
pub(crate) fn count_ones(x: &[Limb]) -> u64 {
    x.iter().map(|xi| xi.count_ones() as u64).sum()
}

/// Zero bits below the lowest set bit, or the whole window for zero.
pub(crate) fn trailing_zeros(x: &[Limb]) -> u64 {
    match x.iter().position(|&xi| xi != 0) {
        Some(i) => (i * LIMB_BITS) as u64 + x[i].trailing_zeros() as u64,
        None => BIT_WINDOW,
    }
}

/// Zero bits above the highest set bit, up to the top of the window.
#[inline]
pub(crate) fn leading_zeros(x: &[Limb]) -> u64 {
    window_bits(x) - significant_bits(x)
}

// SINGLE BITS

/// Test bit `n` of the magnitude.
#[inline]
pub(crate) fn bit(x: &[Limb], n: u64) -> bool {
    let limb = match usize::try_from(n / LIMB_BITS as u64) {
        Ok(limb) => limb,
        Err(_) => return false,
    };
    match x.get(limb) {
        Some(xi) => (xi >> (n % LIMB_BITS as u64)) & 1 == 1,
        None => false,
    }
}

/// Copy of the magnitude with bit `n` set or cleared.
///
/// A limb index past `usize::MAX` cannot be stored, so the copy is returned
/// unchanged.
pub(crate) fn with_bit(x: &[Limb], n: u64, set: bool) -> LimbVec {
    let mut z = x.to_vec();
    let limb = match usize::try_from(n / LIMB_BITS as u64) {
        Ok(limb) => limb,
        Err(_) => return z,
    };
    let mask: Limb = 1 << (n % LIMB_BITS as u64);
    if set {
        if z.len() <= limb {
            z.resize(limb + 1, 0);
        }
        z[limb] |= mask;
    } else if let Some(zi) = z.get_mut(limb) {
        *zi &= !mask;
        small::normalize(&mut z);
    }
    z
}
