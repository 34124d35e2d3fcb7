//! Text conversion in radix 2 through 36.
//!
//! Parsing validates the whole literal before building any limbs, so an
//! error always points at the first offending character. Power-of-two radices
//! pack digit bits straight into limbs; every other radix accumulates chunks
//! of digits, each chunk being as many digits as fit in a single limb.

use crate::div;
use crate::error::{Error, ErrorCode, Result};
use crate::math::*;

pub(crate) const MIN_RADIX: u32 = 2;
pub(crate) const MAX_RADIX: u32 = 36;

/// A literal that passed validation.
#[derive(Debug)]
pub(crate) struct Literal<'a> {
    pub negative: bool,
    pub radix: u32,
    /// ASCII digits of `radix`, most significant first. Never empty.
    pub digits: &'a [u8],
}

#[inline]
pub(crate) fn check_radix(radix: u32) -> Result<()> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(Error::syntax(ErrorCode::UnsupportedRadix(radix), 0))
    }
}

#[inline]
fn digit_value(c: u8) -> Option<u32> {
    (c as char).to_digit(MAX_RADIX)
}

/// Split `text` into sign, radix and digits, rejecting anything malformed.
///
/// With `radix == None` the literal is decimal unless its digits start with
/// one of the `0x`, `0o` or `0b` prefixes. An explicit radix disables prefix
/// detection.
pub(crate) fn scan(text: &str, radix: Option<u32>) -> Result<Literal<'_>> {
    let bytes = text.as_bytes();
    let (negative, mut offset) = match bytes.first() {
        Some(b'-') => (true, 1),
        _ => (false, 0),
    };

    let radix = match radix {
        Some(radix) => {
            tri!(check_radix(radix));
            radix
        }
        None => {
            let prefixed = match bytes.get(offset..offset + 2) {
                Some(b"0x") => Some(16),
                Some(b"0o") => Some(8),
                Some(b"0b") => Some(2),
                _ => None,
            };
            match prefixed {
                Some(radix) => {
                    offset += 2;
                    radix
                }
                None => 10,
            }
        }
    };

    let digits = &bytes[offset..];
    if digits.is_empty() {
        return Err(Error::syntax(ErrorCode::Empty, offset));
    }

    // Every byte before a bad one is an ASCII digit, so the bad one starts a
    // character.
    if let Some(i) = digits
        .iter()
        .position(|&c| digit_value(c).map_or(true, |d| d >= radix))
    {
        let at = offset + i;
        let c = text[at..].chars().next().unwrap_or('\u{fffd}');
        return Err(Error::syntax(ErrorCode::InvalidDigit(c), at));
    }

    Ok(Literal {
        negative,
        radix,
        digits,
    })
}

/// Largest power of `radix` that fits in a limb, with its exponent.
fn radix_base(radix: u32) -> (Limb, usize) {
    let radix = radix as Limb;
    let mut base = radix;
    let mut power = 1;
    while let Some(next) = base.checked_mul(radix) {
        base = next;
        power += 1;
    }
    (base, power)
}

/// Build the magnitude of a validated literal.
pub(crate) fn parse_magnitude(literal: &Literal) -> LimbVec {
    let radix = literal.radix;
    if radix.is_power_of_two() {
        from_bitwise_digits(literal.digits, radix.trailing_zeros() as usize)
    } else {
        from_chunked_digits(literal.digits, radix)
    }
}

fn from_bitwise_digits(digits: &[u8], bits: usize) -> LimbVec {
    let total = digits.len() * bits;
    let mut v: LimbVec = vec![0; (total + LIMB_BITS - 1) / LIMB_BITS];
    for (i, &c) in digits.iter().rev().enumerate() {
        let d = digit_value(c).unwrap_or(0) as Limb;
        let bit = i * bits;
        let limb = bit / LIMB_BITS;
        let shift = bit % LIMB_BITS;
        v[limb] |= d << shift;
        if shift + bits > LIMB_BITS {
            v[limb + 1] |= d >> (LIMB_BITS - shift);
        }
    }
    small::normalize(&mut v);
    v
}

fn from_chunked_digits(digits: &[u8], radix: u32) -> LimbVec {
    let (base, power) = radix_base(radix);
    let mut v = LimbVec::new();

    // The first chunk takes the leftover digits so every other chunk is full.
    let head = match digits.len() % power {
        0 => power,
        n => n,
    };
    let (first, rest) = digits.split_at(head);
    small::iadd(&mut v, chunk_value(first, radix));
    for chunk in rest.chunks(power) {
        small::imul(&mut v, base);
        small::iadd(&mut v, chunk_value(chunk, radix));
    }
    v
}

#[inline]
fn chunk_value(chunk: &[u8], radix: u32) -> Limb {
    chunk.iter().fold(0, |acc, &c| {
        acc * radix as Limb + digit_value(c).unwrap_or(0) as Limb
    })
}

// FORMATTING

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Render a magnitude as lowercase ASCII digits, most significant first.
///
/// Zero renders as `"0"`. The radix must already be validated.
pub(crate) fn to_digits(x: &[Limb], radix: u32) -> Vec<u8> {
    debug_assert!((MIN_RADIX..=MAX_RADIX).contains(&radix));
    if x.is_empty() {
        return vec![b'0'];
    }

    let mut digits = if radix.is_power_of_two() {
        to_bitwise_digits_le(x, radix.trailing_zeros() as usize)
    } else {
        to_chunked_digits_le(x, radix)
    };
    digits.reverse();
    for d in digits.iter_mut() {
        *d = DIGITS[*d as usize];
    }
    digits
}

fn to_bitwise_digits_le(x: &[Limb], bits: usize) -> Vec<u8> {
    let mask: Limb = (1 << bits) - 1;
    let ndigits = (small::bit_length(x) + bits - 1) / bits;
    (0..ndigits)
        .map(|i| {
            let bit = i * bits;
            let limb = bit / LIMB_BITS;
            let shift = bit % LIMB_BITS;
            let mut d = x[limb] >> shift;
            if shift + bits > LIMB_BITS && limb + 1 < x.len() {
                d |= x[limb + 1] << (LIMB_BITS - shift);
            }
            (d & mask) as u8
        })
        .collect()
}

fn to_chunked_digits_le(x: &[Limb], radix: u32) -> Vec<u8> {
    let (base, power) = radix_base(radix);
    let radix = radix as Limb;
    let mut digits = Vec::with_capacity(small::bit_length(x) / 3 + 1);
    let mut q = x.to_vec();

    while !q.is_empty() {
        let (next, mut r) = div::div_rem_small(&q, base);
        q = next;
        // Inner chunks are zero-padded to full width; the last chunk stops at
        // its highest non-zero digit.
        let mut n = 0;
        while n < power && (r != 0 || !q.is_empty()) {
            digits.push((r % radix) as u8);
            r /= radix;
            n += 1;
        }
    }
    digits
}
