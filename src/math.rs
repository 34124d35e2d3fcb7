//! Building-blocks for arbitrary-precision magnitudes.
//!
//! These algorithms assume little-endian order for the large integer
//! buffers, so for a `vec![0, 1, 2, 3]`, `3` is the most significant limb,
//! and `0` is the least significant limb.
//!
//! Every function accepting a slice expects it to be normalized (no
//! most-significant zero limbs) unless stated otherwise, and every function
//! producing a buffer leaves it normalized.

use crate::stats::OpStats;
use std::{cmp, iter};

// ALIASES
// -------

//  Type for a single limb of the big integer.
//
//  A limb is analogous to a digit in base10, except, it stores 32-bit
//  or 64-bit numbers instead. The width is picked by `build.rs` from the
//  target architecture: 64-bit limbs wherever the platform can produce the
//  high half of a 64x64 multiplication cheaply.

// 32-BIT LIMB
#[cfg(limb_width_32)]
pub type Limb = u32;

#[cfg(limb_width_32)]
pub(crate) type Wide = u64;

// 64-BIT LIMB
#[cfg(limb_width_64)]
pub type Limb = u64;

#[cfg(limb_width_64)]
pub(crate) type Wide = u128;

/// Number of bits in a single limb.
pub(crate) const LIMB_BITS: usize = Limb::BITS as usize;

pub(crate) type LimbVec = Vec<Limb>;

/// Cast to wide type.
#[inline(always)]
fn as_wide(x: Limb) -> Wide {
    x as Wide
}

// CONVERSIONS
// -----------

/// Split a native integer into normalized limbs, in little-endian order.
#[inline]
pub(crate) fn from_u128(mut x: u128) -> LimbVec {
    let mut v = LimbVec::new();
    while x != 0 {
        v.push(x as Limb);
        x >>= LIMB_BITS;
    }
    v
}

/// Join limbs back into a native integer, if they fit.
#[inline]
pub(crate) fn to_u128(x: &[Limb]) -> Option<u128> {
    if x.len() * LIMB_BITS > 128 {
        return None;
    }
    Some(x.iter().rev().fold(0, |acc, &xi| (acc << LIMB_BITS) | xi as u128))
}

/// Build normalized limbs from little-endian 32-bit digits.
#[cfg(limb_width_32)]
pub(crate) fn from_u32_digits(x: &[u32]) -> LimbVec {
    let mut v: LimbVec = x.to_vec();
    small::normalize(&mut v);
    v
}

/// Build normalized limbs from little-endian 32-bit digits.
#[cfg(limb_width_64)]
pub(crate) fn from_u32_digits(x: &[u32]) -> LimbVec {
    let mut v = LimbVec::with_capacity((x.len() + 1) / 2);
    for xi in x.chunks(2) {
        match xi {
            [lo] => v.push(*lo as u64),
            [lo, hi] => v.push(((*hi as u64) << 32) | (*lo as u64)),
            _ => unreachable!(),
        }
    }
    small::normalize(&mut v);
    v
}

/// Split limbs into little-endian 32-bit digits, without high zero digits.
#[cfg(limb_width_32)]
pub(crate) fn to_u32_digits(x: &[Limb]) -> Vec<u32> {
    x.to_vec()
}

/// Split limbs into little-endian 32-bit digits, without high zero digits.
#[cfg(limb_width_64)]
pub(crate) fn to_u32_digits(x: &[Limb]) -> Vec<u32> {
    let mut v: Vec<u32> = x
        .iter()
        .flat_map(|&xi| [xi as u32, (xi >> 32) as u32])
        .collect();
    while v.last() == Some(&0) {
        v.pop();
    }
    v
}

// SCALAR
// ------

// Scalar-to-scalar operations, for building-blocks for arbitrary-precision
// operations.

pub(crate) mod scalar {
    use super::*;

    // ADDITION

    /// Add two small integers and return the resulting value and if overflow happens.
    #[inline]
    pub fn add(x: Limb, y: Limb) -> (Limb, bool) {
        x.overflowing_add(y)
    }

    /// AddAssign two small integers and return if overflow happens.
    #[inline]
    pub fn iadd(x: &mut Limb, y: Limb) -> bool {
        let t = add(*x, y);
        *x = t.0;
        t.1
    }

    // SUBTRACTION

    /// Subtract two small integers and return the resulting value and if overflow happens.
    #[inline]
    pub fn sub(x: Limb, y: Limb) -> (Limb, bool) {
        x.overflowing_sub(y)
    }

    /// SubAssign two small integers and return if overflow happens.
    #[inline]
    pub fn isub(x: &mut Limb, y: Limb) -> bool {
        let t = sub(*x, y);
        *x = t.0;
        t.1
    }

    // MULTIPLICATION

    /// Multiply two small integers (with carry) (and return the overflow contribution).
    ///
    /// Returns the (low, high) components.
    #[inline]
    pub fn mul(x: Limb, y: Limb, carry: Limb) -> (Limb, Limb) {
        // Cannot overflow, as long as wide is 2x as wide. This is because
        // the following is always true:
        // `Wide::MAX - (Narrow::MAX * Narrow::MAX) >= Narrow::MAX`
        let z: Wide = as_wide(x) * as_wide(y) + as_wide(carry);
        (z as Limb, (z >> LIMB_BITS) as Limb)
    }

    /// Multiply two small integers (with carry) (and return if overflow happens).
    #[inline]
    pub fn imul(x: &mut Limb, y: Limb, carry: Limb) -> Limb {
        let t = mul(*x, y, carry);
        *x = t.0;
        t.1
    }

    /// Multiply-accumulate: `acc + x * y + carry`.
    ///
    /// Returns the (low, high) components. `(B-1)^2 + 2(B-1)` is exactly
    /// `B^2 - 1`, so the wide type never overflows.
    #[inline]
    pub fn mac(acc: Limb, x: Limb, y: Limb, carry: Limb) -> (Limb, Limb) {
        let z: Wide = as_wide(acc) + as_wide(x) * as_wide(y) + as_wide(carry);
        (z as Limb, (z >> LIMB_BITS) as Limb)
    }
}

// SMALL
// -----

// Large-to-small operations, to modify a big integer from a native scalar.

pub(crate) mod small {
    use super::*;

    // ADDITION

    /// Implied AddAssign implementation for adding a small integer to bigint.
    ///
    /// Allows us to choose a start-index in x to store, to allow incrementing
    /// from a non-zero start.
    #[inline]
    pub fn iadd_impl(x: &mut LimbVec, y: Limb, xstart: usize) {
        if x.len() <= xstart {
            x.resize(xstart, 0);
            x.push(y);
        } else {
            // Initial add
            let mut carry = scalar::iadd(&mut x[xstart], y);

            // Increment until overflow stops occurring.
            let mut size = xstart + 1;
            while carry && size < x.len() {
                carry = scalar::iadd(&mut x[size], 1);
                size += 1;
            }

            // If we overflowed the buffer entirely, need to add 1 to the end
            // of the buffer.
            if carry {
                x.push(1);
            }
        }
        normalize(x);
    }

    /// AddAssign small integer to bigint.
    #[inline]
    pub fn iadd(x: &mut LimbVec, y: Limb) {
        iadd_impl(x, y, 0);
    }

    // SUBTRACTION

    /// SubAssign small integer to bigint.
    /// Does not do overflowing subtraction.
    #[inline]
    pub fn isub_impl(x: &mut LimbVec, y: Limb, xstart: usize) {
        debug_assert!(x.len() > xstart && (x[xstart] >= y || x.len() > xstart + 1));

        // Initial subtraction
        let mut carry = scalar::isub(&mut x[xstart], y);

        // Increment until overflow stops occurring.
        let mut size = xstart + 1;
        while carry && size < x.len() {
            carry = scalar::isub(&mut x[size], 1);
            size += 1;
        }
        normalize(x);
    }

    // MULTIPLICATION

    /// MulAssign small integer to bigint.
    #[inline]
    pub fn imul(x: &mut LimbVec, y: Limb) {
        if y == 0 {
            x.clear();
            return;
        }

        // Multiply iteratively over all elements, adding the carry each time.
        let mut carry: Limb = 0;
        for xi in x.iter_mut() {
            carry = scalar::imul(xi, y, carry);
        }

        // Overflow of value, add to end.
        if carry != 0 {
            x.push(carry);
        }
    }

    // BIT LENGTH

    /// Get number of leading zero bits in the storage.
    #[inline]
    pub fn leading_zeros(x: &[Limb]) -> usize {
        match x.last() {
            None => 0,
            Some(hi) => hi.leading_zeros() as usize,
        }
    }

    /// Calculate the bit-length of the big-integer.
    #[inline]
    pub fn bit_length(x: &[Limb]) -> usize {
        // Avoid overflowing, calculate via total number of bits
        // minus leading zero bits.
        let nlz = leading_zeros(x);
        LIMB_BITS
            .checked_mul(x.len())
            .map(|v| v - nlz)
            .unwrap_or(usize::MAX)
    }

    /// Bit index of the only set bit, if the magnitude is a power of two.
    #[inline]
    pub fn power_of_two_exponent(x: &[Limb]) -> Option<usize> {
        let (hi, rest) = x.split_last()?;
        if hi.is_power_of_two() && rest.iter().all(|&xi| xi == 0) {
            Some(rest.len() * LIMB_BITS + hi.trailing_zeros() as usize)
        } else {
            None
        }
    }

    // SHL

    /// Shift-left bits inside a buffer.
    ///
    /// Assumes `n < Limb::BITS`, IE, internally shifting bits.
    #[inline]
    pub fn ishl_bits(x: &mut LimbVec, n: usize) {
        // Need to shift by the number of `bits % Limb::BITS)`.
        debug_assert!(n < LIMB_BITS);
        if n == 0 {
            return;
        }

        // Internally, for each item, we shift left by n, and add the previous
        // right shifted limb-bits.
        // For example, we transform (for u8) shifted left 2, to:
        //      b10100100 b01000010
        //      b10 b10010001 b00001000
        let rshift = LIMB_BITS - n;
        let lshift = n;
        let mut prev: Limb = 0;
        for xi in x.iter_mut() {
            let tmp = *xi;
            *xi <<= lshift;
            *xi |= prev >> rshift;
            prev = tmp;
        }

        let carry = prev >> rshift;
        if carry != 0 {
            x.push(carry);
        }
    }

    /// Shift-left `n` limbs inside a buffer.
    #[inline]
    pub fn ishl_limbs(x: &mut LimbVec, n: usize) {
        if n != 0 && !x.is_empty() {
            x.splice(0..0, iter::repeat(0).take(n));
        }
    }

    /// Shift-left buffer by n bits.
    #[inline]
    pub fn ishl(x: &mut LimbVec, n: usize) {
        // Need to pad with zeros for the number of `bits / Limb::BITS`,
        // and shift-left with carry for `bits % Limb::BITS`.
        let rem = n % LIMB_BITS;
        let div = n / LIMB_BITS;
        ishl_bits(x, rem);
        ishl_limbs(x, div);
    }

    /// Shift-left a magnitude by n bits into a new buffer.
    #[inline]
    pub fn shl(x: &[Limb], n: usize) -> LimbVec {
        // Zero stays zero; the capacity below scales with `n`.
        if x.is_empty() {
            return LimbVec::new();
        }
        let mut z = LimbVec::with_capacity(x.len() + n / LIMB_BITS + 1);
        z.extend_from_slice(x);
        ishl(&mut z, n);
        z
    }

    // SHR

    /// Shift-right bits inside a buffer, discarding the bits shifted out.
    ///
    /// Assumes `n < Limb::BITS`.
    #[inline]
    pub fn ishr_bits(x: &mut LimbVec, n: usize) {
        debug_assert!(n < LIMB_BITS);
        if n == 0 {
            return;
        }

        // Mirror of `ishl_bits`: walk from the most significant limb and
        // pull in the low bits of the limb above.
        let lshift = LIMB_BITS - n;
        let rshift = n;
        let mut prev: Limb = 0;
        for xi in x.iter_mut().rev() {
            let tmp = *xi;
            *xi >>= rshift;
            *xi |= prev << lshift;
            prev = tmp;
        }
        normalize(x);
    }

    /// Shift-right `n` limbs inside a buffer.
    #[inline]
    pub fn ishr_limbs(x: &mut LimbVec, n: usize) {
        if n >= x.len() {
            x.clear();
        } else if n != 0 {
            x.drain(..n);
        }
    }

    /// Shift-right buffer by n bits.
    #[inline]
    pub fn ishr(x: &mut LimbVec, n: usize) {
        ishr_limbs(x, n / LIMB_BITS);
        ishr_bits(x, n % LIMB_BITS);
    }

    /// Shift-right a magnitude by n bits into a new buffer.
    #[inline]
    pub fn shr(x: &[Limb], n: usize) -> LimbVec {
        let skip = n / LIMB_BITS;
        if skip >= x.len() {
            return LimbVec::new();
        }
        let mut z = x[skip..].to_vec();
        ishr_bits(&mut z, n % LIMB_BITS);
        z
    }

    // NORMALIZE

    /// Normalize the container by popping any leading zeros.
    #[inline]
    pub fn normalize(x: &mut LimbVec) {
        while x.last() == Some(&0) {
            x.pop();
        }
    }

    /// Drop the most-significant zero limbs from a borrowed view.
    #[inline]
    pub fn trim(x: &[Limb]) -> &[Limb] {
        let len = x.iter().rposition(|&xi| xi != 0).map_or(0, |i| i + 1);
        &x[..len]
    }
}

// LARGE
// -----

// Large-to-large operations, to modify a big integer from another big integer.

pub(crate) mod large {
    use super::*;

    // RELATIVE OPERATORS

    /// Compare `x` to `y`, in little-endian order.
    #[inline]
    pub fn compare(x: &[Limb], y: &[Limb]) -> cmp::Ordering {
        if x.len() > y.len() {
            cmp::Ordering::Greater
        } else if x.len() < y.len() {
            cmp::Ordering::Less
        } else {
            let iter = x.iter().rev().zip(y.iter().rev());
            for (&xi, &yi) in iter {
                if xi > yi {
                    return cmp::Ordering::Greater;
                } else if xi < yi {
                    return cmp::Ordering::Less;
                }
            }
            // Equal case.
            cmp::Ordering::Equal
        }
    }

    /// Check if x is less than y.
    #[inline]
    pub fn less(x: &[Limb], y: &[Limb]) -> bool {
        compare(x, y) == cmp::Ordering::Less
    }

    /// Check if x is greater than or equal to y.
    #[inline]
    pub fn greater_equal(x: &[Limb], y: &[Limb]) -> bool {
        !less(x, y)
    }

    // ADDITION

    /// Implied AddAssign implementation for bigints.
    ///
    /// Allows us to choose a start-index in x to store, so we can avoid
    /// padding the buffer with zeros when not needed, optimized for vectors.
    pub fn iadd_impl(x: &mut LimbVec, y: &[Limb], xstart: usize) {
        // The effective x buffer is from `xstart..x.len()`, so we need to treat
        // that as the current range. If the effective y buffer is longer, need
        // to resize to that, + the start index.
        if x.len() < xstart + y.len() {
            x.resize(xstart + y.len(), 0);
        }

        // Iteratively add elements from y to x.
        let mut carry = false;
        for (xi, yi) in x[xstart..].iter_mut().zip(y.iter()) {
            // Only one op of the two can overflow, since we added at max
            // Limb::MAX + Limb::MAX. Add the previous carry,
            // and store the current carry for the next.
            let mut tmp = scalar::iadd(xi, *yi);
            if carry {
                tmp |= scalar::iadd(xi, 1);
            }
            carry = tmp;
        }

        // Overflow from the previous bit.
        if carry {
            small::iadd_impl(x, 1, y.len() + xstart);
        }
    }

    /// AddAssign bigint to bigint.
    #[inline]
    pub fn iadd(x: &mut LimbVec, y: &[Limb]) {
        iadd_impl(x, y, 0)
    }

    /// Add bigint to bigint.
    #[inline]
    pub fn add(x: &[Limb], y: &[Limb]) -> LimbVec {
        let mut z = LimbVec::with_capacity(cmp::max(x.len(), y.len()) + 1);
        z.extend_from_slice(x);
        iadd(&mut z, y);
        z
    }

    // SUBTRACTION

    /// SubAssign bigint to bigint.
    pub fn isub(x: &mut LimbVec, y: &[Limb]) {
        // Basic underflow checks.
        debug_assert!(greater_equal(x, y));

        // Iteratively subtract elements of y from x.
        let mut carry = false;
        for (xi, yi) in x.iter_mut().zip(y.iter()) {
            // Only one op of the two can underflow, since we subtracted at
            // max Limb::MAX + 1. Subtract the previous borrow,
            // and store the current borrow for the next.
            let mut tmp = scalar::isub(xi, *yi);
            if carry {
                tmp |= scalar::isub(xi, 1);
            }
            carry = tmp;
        }

        if carry {
            small::isub_impl(x, 1, y.len());
        } else {
            small::normalize(x);
        }
    }

    /// Sub bigint from bigint. Assumes `x >= y`.
    #[inline]
    pub fn sub(x: &[Limb], y: &[Limb]) -> LimbVec {
        let mut z = x.to_vec();
        isub(&mut z, y);
        z
    }

    // MULTIPLICATION

    /// Number of limbs at which to bottom-out to the quadratic algorithm.
    ///
    /// Karatsuba pays for its extra additions once the shorter operand spans
    /// a few thousand bits; `benches/mul.rs` measures both sides of this
    /// cutoff.
    pub const KARATSUBA_CUTOFF: usize = 32;

    /// Grade-school multiplication algorithm.
    ///
    /// Each of the `y.len()` rows multiplies all of `x` by one limb of `y`
    /// and accumulates into the product buffer at that row's offset, so it
    /// works in O(n*m) time.
    pub fn long_mul(x: &[Limb], y: &[Limb], stats: &mut OpStats) -> LimbVec {
        let mut z: LimbVec = vec![0; x.len() + y.len()];

        for (i, &yi) in y.iter().enumerate() {
            stats.iterations += x.len() as u64;
            if yi == 0 {
                continue;
            }
            let mut carry: Limb = 0;
            for (j, &xj) in x.iter().enumerate() {
                let (lo, hi) = scalar::mac(z[i + j], xj, yi, carry);
                z[i + j] = lo;
                carry = hi;
            }
            // The slot above this row has not been written yet.
            z[i + x.len()] = carry;
        }

        small::normalize(&mut z);
        z
    }

    /// Split a buffer at limb `m`, into (lo, hi).
    ///
    /// The low half is trimmed so it is normalized on its own.
    #[inline]
    pub fn karatsuba_split(z: &[Limb], m: usize) -> (&[Limb], &[Limb]) {
        (small::trim(&z[..m]), &z[m..])
    }

    /// Karatsuba multiplication algorithm with roughly equal input sizes.
    ///
    /// Assumes `y.len() >= x.len()`.
    fn karatsuba_mul(x: &[Limb], y: &[Limb], stats: &mut OpStats) -> LimbVec {
        debug_assert!(y.len() >= x.len());
        if x.is_empty() {
            LimbVec::new()
        } else if x.len() <= KARATSUBA_CUTOFF {
            // Bottom-out to long multiplication for small cases.
            long_mul(x, y, stats)
        } else if x.len() <= y.len() / 2 {
            karatsuba_uneven_mul(x, y, stats)
        } else {
            stats.splits += 1;

            // Do our 3 multiplications. Since `x.len() > y.len() / 2`, both
            // high halves are non-empty.
            let m = y.len() / 2;
            let (xl, xh) = karatsuba_split(x, m);
            let (yl, yh) = karatsuba_split(y, m);
            let sumx = add(xl, xh);
            let sumy = add(yl, yh);
            let z0 = karatsuba_mul_fwd(xl, yl, stats);
            let mut z1 = karatsuba_mul_fwd(&sumx, &sumy, stats);
            let z2 = karatsuba_mul_fwd(xh, yh, stats);
            // Properly scale z1, which is `z1 - z2 - zo`.
            isub(&mut z1, &z2);
            isub(&mut z1, &z0);

            // Create our result, which is equal to, in little-endian order:
            // [z0, z1 - z2 - z0, z2]
            //  z1 must be shifted m limbs over.
            //  z2 must be shifted 2*m limbs over.
            let mut result = LimbVec::with_capacity(x.len() + y.len());
            result.extend_from_slice(&z0);
            iadd_impl(&mut result, &z1, m);
            iadd_impl(&mut result, &z2, 2 * m);
            small::normalize(&mut result);

            result
        }
    }

    /// Karatsuba multiplication algorithm where y is substantially larger than x.
    ///
    /// Assumes `y.len() >= x.len()`.
    fn karatsuba_uneven_mul(x: &[Limb], mut y: &[Limb], stats: &mut OpStats) -> LimbVec {
        let mut result: LimbVec = vec![0; x.len() + y.len()];

        // This effectively is like grade-school multiplication between
        // two numbers, except we're using splits on `y`, and the intermediate
        // step is a Karatsuba multiplication.
        let mut start = 0;
        while !y.is_empty() {
            let m = x.len().min(y.len());
            let (yl, yh) = karatsuba_split(y, m);
            let prod = karatsuba_mul_fwd(x, yl, stats);
            iadd_impl(&mut result, &prod, start);
            y = yh;
            start += m;
        }
        small::normalize(&mut result);

        result
    }

    /// Forwarder to the proper Karatsuba algorithm.
    #[inline]
    fn karatsuba_mul_fwd(x: &[Limb], y: &[Limb], stats: &mut OpStats) -> LimbVec {
        if x.len() <= y.len() {
            karatsuba_mul(x, y, stats)
        } else {
            karatsuba_mul(y, x, stats)
        }
    }

    /// Mul bigint to bigint.
    pub fn mul(x: &[Limb], y: &[Limb], stats: &mut OpStats) -> LimbVec {
        if x.is_empty() || y.is_empty() {
            return LimbVec::new();
        }
        if cmp::min(x.len(), y.len()) > KARATSUBA_CUTOFF {
            tracing::trace!(
                x_limbs = x.len(),
                y_limbs = y.len(),
                "multiplying with karatsuba"
            );
        }
        karatsuba_mul_fwd(x, y, stats)
    }
}

pub use self::large::KARATSUBA_CUTOFF;

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    fn from_u32(x: &[u32]) -> LimbVec {
        from_u32_digits(x)
    }

    #[test]
    fn compare_test() {
        // Simple
        let x = from_u32(&[1]);
        let y = from_u32(&[2]);
        assert_eq!(large::compare(&x, &y), cmp::Ordering::Less);
        assert_eq!(large::compare(&x, &x), cmp::Ordering::Equal);
        assert_eq!(large::compare(&y, &x), cmp::Ordering::Greater);

        // Check asymmetric
        let x = from_u32(&[5, 1]);
        let y = from_u32(&[2]);
        assert_eq!(large::compare(&x, &y), cmp::Ordering::Greater);
        assert_eq!(large::compare(&y, &x), cmp::Ordering::Less);

        // Check when we use reverse ordering properly.
        let x = from_u32(&[5, 1, 9]);
        let y = from_u32(&[6, 2, 8]);
        assert_eq!(large::compare(&x, &y), cmp::Ordering::Greater);
        assert_eq!(large::compare(&y, &x), cmp::Ordering::Less);

        // Complex scenario, check it properly uses reverse ordering.
        let x = from_u32(&[0, 1, 9]);
        let y = from_u32(&[4294967295, 0, 9]);
        assert_eq!(large::compare(&x, &y), cmp::Ordering::Greater);
        assert_eq!(large::compare(&y, &x), cmp::Ordering::Less);
    }

    #[test]
    fn bit_length_test() {
        assert_eq!(small::bit_length(&from_u32(&[0, 0, 0, 1])), 97);
        assert_eq!(small::bit_length(&from_u32(&[0, 0, 0, 3])), 98);
        assert_eq!(small::bit_length(&from_u32(&[1 << 31])), 32);
        assert_eq!(small::bit_length(&[]), 0);
    }

    #[test]
    fn power_of_two_test() {
        assert_eq!(small::power_of_two_exponent(&from_u32(&[1])), Some(0));
        assert_eq!(small::power_of_two_exponent(&from_u32(&[0, 0, 8])), Some(67));
        assert_eq!(small::power_of_two_exponent(&from_u32(&[1, 0, 8])), None);
        assert_eq!(small::power_of_two_exponent(&from_u32(&[6])), None);
        assert_eq!(small::power_of_two_exponent(&[]), None);
    }

    #[test]
    fn iadd_small_test() {
        // Overflow check (single)
        let mut x = from_u32(&[4294967295]);
        small::iadd(&mut x, 5);
        assert_eq!(x, from_u32(&[4, 1]));

        // No overflow, single value
        let mut x = from_u32(&[5]);
        small::iadd(&mut x, 7);
        assert_eq!(x, from_u32(&[12]));

        // Single carry, internal overflow
        let mut x = from_u128(0x80000000FFFFFFFF);
        small::iadd(&mut x, 7);
        assert_eq!(x, from_u32(&[6, 0x80000001]));

        // Double carry, overflow
        let mut x = from_u128(0xFFFFFFFFFFFFFFFF);
        small::iadd(&mut x, 7);
        assert_eq!(x, from_u32(&[6, 0, 1]));

        // Adding into an empty buffer
        let mut x = LimbVec::new();
        small::iadd(&mut x, 0);
        assert!(x.is_empty());
    }

    #[test]
    fn imul_small_test() {
        // No overflow check, 1-int.
        let mut x = from_u32(&[5]);
        small::imul(&mut x, 7);
        assert_eq!(x, from_u32(&[35]));

        // No overflow check, 2-ints.
        let mut x = from_u128(0x4000000040000);
        small::imul(&mut x, 5);
        assert_eq!(x, from_u32(&[0x00140000, 0x140000]));

        // Overflow, 1 carry.
        let mut x = from_u32(&[0x33333334]);
        small::imul(&mut x, 5);
        assert_eq!(x, from_u32(&[4, 1]));

        // Overflow, 1 carry, internal.
        let mut x = from_u128(0x133333334);
        small::imul(&mut x, 5);
        assert_eq!(x, from_u32(&[4, 6]));

        // Overflow, 2 carries.
        let mut x = from_u128(0x3333333333333334);
        small::imul(&mut x, 5);
        assert_eq!(x, from_u32(&[4, 0, 1]));

        // Multiplying by zero clears the buffer.
        let mut x = from_u32(&[7, 7]);
        small::imul(&mut x, 0);
        assert!(x.is_empty());
    }

    #[test]
    fn shl_test() {
        // Pattern generated via `''.join(["1" +"0"*i for i in range(20)])`
        let mut big = from_u32(&[0xD2210408]);
        small::ishl(&mut big, 5);
        assert_eq!(big, from_u32(&[0x44208100, 0x1A]));
        small::ishl(&mut big, 32);
        assert_eq!(big, from_u32(&[0, 0x44208100, 0x1A]));
        small::ishl(&mut big, 27);
        assert_eq!(big, from_u32(&[0, 0, 0xD2210408]));

        // 96-bits of previous pattern
        let mut big = from_u32(&[0x20020010, 0x8040100, 0xD2210408]);
        small::ishl(&mut big, 5);
        assert_eq!(big, from_u32(&[0x400200, 0x802004, 0x44208101, 0x1A]));
        small::ishl(&mut big, 32);
        assert_eq!(big, from_u32(&[0, 0x400200, 0x802004, 0x44208101, 0x1A]));
        small::ishl(&mut big, 27);
        assert_eq!(big, from_u32(&[0, 0, 0x20020010, 0x8040100, 0xD2210408]));

        assert!(small::shl(&[], usize::MAX).is_empty());
    }

    #[test]
    fn shr_test() {
        // Reverse of the shl pattern.
        let big = from_u32(&[0, 0, 0x20020010, 0x8040100, 0xD2210408]);
        let big = small::shr(&big, 27);
        assert_eq!(big, from_u32(&[0, 0x400200, 0x802004, 0x44208101, 0x1A]));
        let big = small::shr(&big, 32);
        assert_eq!(big, from_u32(&[0x400200, 0x802004, 0x44208101, 0x1A]));
        let big = small::shr(&big, 5);
        assert_eq!(big, from_u32(&[0x20020010, 0x8040100, 0xD2210408]));

        // Shifting everything out leaves zero.
        assert!(small::shr(&big, 96).is_empty());
        assert!(small::shr(&big, 1000).is_empty());
    }

    #[test]
    fn isub_test() {
        // Borrow across every limb.
        let mut x = from_u32(&[0, 0, 1]);
        large::isub(&mut x, &from_u32(&[1]));
        assert_eq!(x, from_u32(&[0xFFFFFFFF, 0xFFFFFFFF]));

        // Exact cancellation normalizes to empty.
        let mut x = from_u32(&[5, 9]);
        large::isub(&mut x, &from_u32(&[5, 9]));
        assert!(x.is_empty());
    }

    #[test]
    fn iadd_offset_test() {
        // Adding past the end of a short buffer pads with zeros.
        let mut x = from_u32(&[1]);
        large::iadd_impl(&mut x, &[3], 3);
        let mut expected = from_u32(&[1]);
        expected.resize(3, 0);
        expected.push(3);
        assert_eq!(x, expected);
    }

    fn pseudo_random_limbs(len: usize, seed: u64) -> LimbVec {
        let mut state = seed;
        let mut v: LimbVec = (0..len)
            .map(|_| {
                state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                (state >> 11) as Limb
            })
            .collect();
        if let Some(hi) = v.last_mut() {
            *hi |= 1;
        }
        v
    }

    #[test]
    fn karatsuba_matches_long_mul() {
        let cases = [
            (KARATSUBA_CUTOFF + 1, KARATSUBA_CUTOFF + 1),
            (KARATSUBA_CUTOFF * 2, KARATSUBA_CUTOFF * 2 + 3),
            (KARATSUBA_CUTOFF + 5, KARATSUBA_CUTOFF * 5),
            (KARATSUBA_CUTOFF * 4 + 1, KARATSUBA_CUTOFF * 4),
            (3, KARATSUBA_CUTOFF * 3),
        ];
        for (i, &(xlen, ylen)) in cases.iter().enumerate() {
            let x = pseudo_random_limbs(xlen, i as u64 + 1);
            let y = pseudo_random_limbs(ylen, i as u64 + 100);
            let mut fast = OpStats::default();
            let mut slow = OpStats::default();
            let expected = large::long_mul(&x, &y, &mut slow);
            assert_eq!(large::mul(&x, &y, &mut fast), expected);
            assert_eq!(large::mul(&y, &x, &mut OpStats::default()), expected);
            assert_eq!(slow.iterations, (xlen * ylen) as u64);
        }
    }

    #[test]
    fn karatsuba_with_sparse_halves() {
        // Low halves entirely zero exercise the trimmed split.
        let mut x: LimbVec = vec![0; KARATSUBA_CUTOFF * 2];
        x.push(1);
        let mut y: LimbVec = vec![0; KARATSUBA_CUTOFF * 2 + 1];
        y[0] = Limb::MAX;
        y.push(Limb::MAX);
        let mut stats = OpStats::default();
        let expected = large::long_mul(&x, &y, &mut OpStats::default());
        assert_eq!(large::mul(&x, &y, &mut stats), expected);
        assert!(stats.splits > 0);
    }

    #[test]
    fn u128_roundtrip() {
        for &n in &[0u128, 1, u64::MAX as u128, u64::MAX as u128 + 1, u128::MAX] {
            assert_eq!(to_u128(&from_u128(n)), Some(n));
        }
        let mut too_wide = from_u128(u128::MAX);
        small::iadd(&mut too_wide, 1);
        assert_eq!(to_u128(&too_wide), None);
    }

    #[test]
    fn u32_digits_roundtrip() {
        let digits = [0xDEADBEEF, 0, 0x12345678];
        assert_eq!(to_u32_digits(&from_u32_digits(&digits)), digits);
        assert!(from_u32_digits(&[0, 0]).is_empty());
    }
}
