//! The arbitrary-precision signed integer.

use crate::bits::{self, BitOp};
use crate::div;
use crate::error::{Error, ErrorCode, Result};
use crate::math::*;
use crate::radix;
use crate::stats::OpStats;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::ops;
use std::str::FromStr;
use std::sync::OnceLock;

/// The sign of a [`BigInt`].
///
/// Ordered so that `Negative < Zero < Positive`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl ops::Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

impl ops::Mul for Sign {
    type Output = Sign;

    fn mul(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (a, b) if a == b => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

/// An arbitrary-precision signed integer.
///
/// Stored as a sign and a little-endian magnitude of machine-word limbs with
/// no most-significant zero limbs, so every value has exactly one
/// representation and equality and hashing work on the fields directly.
/// Zero has an empty magnitude and [`Sign::Zero`].
///
/// Values whose magnitude fits in a single limb are *small*: addition,
/// subtraction, multiplication and division of two small values run in
/// native double-width arithmetic without touching the limb algorithms.
/// Whether a value is small is never observable in its results.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    data: LimbVec,
}

/// Frequently used values, built once per process.
///
/// ```
/// use arbint::BigInt;
///
/// let c = BigInt::constants();
/// assert_eq!(&c.two * &c.two, BigInt::from(4));
/// ```
#[derive(Debug)]
pub struct Constants {
    pub minus_one: BigInt,
    pub zero: BigInt,
    pub one: BigInt,
    pub two: BigInt,
    pub ten: BigInt,
}

impl BigInt {
    /// The value zero.
    pub const fn zero() -> Self {
        BigInt {
            sign: Sign::Zero,
            data: Vec::new(),
        }
    }

    /// The value one.
    pub fn one() -> Self {
        Self::constants().one.clone()
    }

    /// Shared instances of -1, 0, 1, 2 and 10.
    ///
    /// The table is built on first use; every later call, from any thread,
    /// returns the same instances.
    pub fn constants() -> &'static Constants {
        static CONSTANTS: OnceLock<Constants> = OnceLock::new();
        CONSTANTS.get_or_init(|| {
            tracing::trace!("building constant table");
            Constants {
                minus_one: BigInt::from_parts(true, from_u128(1)),
                zero: BigInt::zero(),
                one: BigInt::from_parts(false, from_u128(1)),
                two: BigInt::from_parts(false, from_u128(2)),
                ten: BigInt::from_parts(false, from_u128(10)),
            }
        })
    }

    /// Build a value from a sign flag and a possibly unnormalized magnitude.
    pub(crate) fn from_parts(negative: bool, mut data: LimbVec) -> Self {
        small::normalize(&mut data);
        let sign = if data.is_empty() {
            Sign::Zero
        } else if negative {
            Sign::Negative
        } else {
            Sign::Positive
        };
        BigInt { sign, data }
    }

    fn with_sign(sign: Sign, data: LimbVec) -> Self {
        match sign {
            Sign::Zero => BigInt::zero(),
            _ => BigInt::from_parts(sign == Sign::Negative, data),
        }
    }

    /// Build a value from a sign and little-endian 32-bit digits.
    ///
    /// High zero digits are ignored. [`Sign::Zero`] always yields zero,
    /// whatever the digits.
    ///
    /// ```
    /// use arbint::{BigInt, Sign};
    ///
    /// let x = BigInt::from_slice(Sign::Negative, &[0, 1]);
    /// assert_eq!(x, BigInt::from(-(1i64 << 32)));
    /// ```
    pub fn from_slice(sign: Sign, digits: &[u32]) -> Self {
        BigInt::with_sign(sign, from_u32_digits(digits))
    }

    /// The sign and little-endian 32-bit digits of this value.
    ///
    /// Zero has no digits.
    pub fn to_u32_digits(&self) -> (Sign, Vec<u32>) {
        (self.sign, to_u32_digits(&self.data))
    }

    #[inline]
    pub(crate) fn magnitude(&self) -> &[Limb] {
        &self.data
    }

    // PREDICATES

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive
    }

    /// Whether the magnitude fits in a single limb.
    #[inline]
    pub fn is_small(&self) -> bool {
        self.data.len() <= 1
    }

    /// -1, 0 or 1 according to the sign.
    pub fn signum(&self) -> BigInt {
        let c = Self::constants();
        match self.sign {
            Sign::Negative => c.minus_one.clone(),
            Sign::Zero => BigInt::zero(),
            Sign::Positive => c.one.clone(),
        }
    }

    pub fn abs(&self) -> BigInt {
        BigInt::with_sign(
            if self.is_zero() {
                Sign::Zero
            } else {
                Sign::Positive
            },
            self.data.clone(),
        )
    }

    #[inline]
    fn small_magnitude(&self) -> Option<Limb> {
        match self.data[..] {
            [] => Some(0),
            [x] => Some(x),
            _ => None,
        }
    }

    #[inline]
    fn small_value(&self) -> Option<i128> {
        let x = self.small_magnitude()? as i128;
        Some(if self.is_negative() { -x } else { x })
    }

    pub(crate) fn negated(mut self) -> BigInt {
        self.sign = -self.sign;
        self
    }

    // TEXT

    /// Parse a decimal literal, or a hexadecimal, octal or binary one when
    /// prefixed with `0x`, `0o` or `0b`.
    ///
    /// A single leading `-` is allowed before the prefix. Any other
    /// character outside the digits of the resolved radix is an error,
    /// including `+` and whitespace.
    ///
    /// ```
    /// use arbint::BigInt;
    ///
    /// assert_eq!(BigInt::parse("-0xff")?, BigInt::from(-255));
    /// assert!(BigInt::parse("12 ").is_err());
    /// # Ok::<(), arbint::Error>(())
    /// ```
    pub fn parse(text: &str) -> Result<BigInt> {
        BigInt::parse_literal(text, None)
    }

    /// Parse a literal in the given radix, which must be in `2..=36`.
    ///
    /// Digits above 9 are letters in either case. No prefix is recognized.
    pub fn parse_radix(text: &str, radix: u32) -> Result<BigInt> {
        BigInt::parse_literal(text, Some(radix))
    }

    fn parse_literal(text: &str, radix: Option<u32>) -> Result<BigInt> {
        let literal = tri!(radix::scan(text, radix));
        let data = radix::parse_magnitude(&literal);
        tracing::trace!(
            radix = literal.radix,
            digits = literal.digits.len(),
            limbs = data.len(),
            "parsed integer literal"
        );
        Ok(BigInt::from_parts(literal.negative, data))
    }

    /// Render in the given radix, with lowercase letters for digits above 9
    /// and a leading `-` for negative values.
    ///
    /// ```
    /// use arbint::BigInt;
    ///
    /// assert_eq!(BigInt::from(-255).to_string_radix(16)?, "-ff");
    /// # Ok::<(), arbint::Error>(())
    /// ```
    pub fn to_string_radix(&self, radix: u32) -> Result<String> {
        tri!(radix::check_radix(radix));
        let mut s = String::new();
        if self.is_negative() {
            s.push('-');
        }
        s.push_str(&self.magnitude_string(radix));
        Ok(s)
    }

    fn magnitude_string(&self, radix: u32) -> String {
        match self.small_magnitude() {
            Some(x) if radix == 10 => itoa::Buffer::new().format(x).to_owned(),
            _ => radix::to_digits(&self.data, radix)
                .into_iter()
                .map(char::from)
                .collect(),
        }
    }

    fn fmt_radix(
        &self,
        f: &mut fmt::Formatter,
        radix: u32,
        prefix: &str,
        upper: bool,
    ) -> fmt::Result {
        let mut digits = self.magnitude_string(radix);
        if upper {
            digits.make_ascii_uppercase();
        }
        f.pad_integral(!self.is_negative(), prefix, &digits)
    }

    // ADDITION

    fn add_signed(xs: Sign, x: &[Limb], ys: Sign, y: &[Limb]) -> BigInt {
        match (xs, ys) {
            (_, Sign::Zero) => BigInt::with_sign(xs, x.to_vec()),
            (Sign::Zero, _) => BigInt::with_sign(ys, y.to_vec()),
            _ if xs == ys => BigInt::with_sign(xs, large::add(x, y)),
            _ => match large::compare(x, y) {
                Ordering::Greater => BigInt::with_sign(xs, large::sub(x, y)),
                Ordering::Less => BigInt::with_sign(ys, large::sub(y, x)),
                Ordering::Equal => BigInt::zero(),
            },
        }
    }

    pub(crate) fn add_ref(&self, other: &BigInt) -> BigInt {
        if let (Some(x), Some(y)) = (self.small_value(), other.small_value()) {
            return BigInt::from(x + y);
        }
        BigInt::add_signed(self.sign, &self.data, other.sign, &other.data)
    }

    pub(crate) fn sub_ref(&self, other: &BigInt) -> BigInt {
        if let (Some(x), Some(y)) = (self.small_value(), other.small_value()) {
            return BigInt::from(x - y);
        }
        BigInt::add_signed(self.sign, &self.data, -other.sign, &other.data)
    }

    // MULTIPLICATION

    pub(crate) fn mul_ref(&self, other: &BigInt) -> BigInt {
        self.mul_impl(other, &mut OpStats::default())
    }

    /// Multiply, recording the work done in `stats`.
    ///
    /// `stats` is reset first. Products where either magnitude is a power of
    /// two, or where both operands are small, are computed without the limb
    /// multiplication loops and leave every counter at zero.
    ///
    /// ```
    /// use arbint::{BigInt, OpStats};
    ///
    /// let x = BigInt::parse(&"9".repeat(100))?;
    /// let mut stats = OpStats::default();
    /// let square = x.mul_with_stats(&x, &mut stats);
    /// assert_eq!(square.to_string().len(), 200);
    /// assert!(stats.iterations > 0);
    /// # Ok::<(), arbint::Error>(())
    /// ```
    pub fn mul_with_stats(&self, other: &BigInt, stats: &mut OpStats) -> BigInt {
        stats.clear();
        let product = self.mul_impl(other, stats);
        tracing::debug!(
            x_limbs = self.data.len(),
            y_limbs = other.data.len(),
            iterations = stats.iterations,
            splits = stats.splits,
            "multiplication finished"
        );
        product
    }

    fn mul_impl(&self, other: &BigInt, stats: &mut OpStats) -> BigInt {
        let sign = self.sign * other.sign;
        if sign == Sign::Zero {
            return BigInt::zero();
        }
        if let Some(shift) = small::power_of_two_exponent(&other.data) {
            return BigInt::with_sign(sign, small::shl(&self.data, shift));
        }
        if let Some(shift) = small::power_of_two_exponent(&self.data) {
            return BigInt::with_sign(sign, small::shl(&other.data, shift));
        }
        if let (Some(x), Some(y)) = (self.small_magnitude(), other.small_magnitude()) {
            let product = x as Wide * y as Wide;
            return BigInt::with_sign(sign, from_u128(product as u128));
        }
        BigInt::with_sign(sign, large::mul(&self.data, &other.data, stats))
    }

    /// `self * self`.
    pub fn square(&self) -> BigInt {
        self.mul_ref(self)
    }

    // DIVISION

    /// Truncating division, returning `(quotient, remainder)`.
    ///
    /// The quotient is rounded toward zero and the remainder takes the sign
    /// of the dividend, so `self == quotient * other + remainder` and
    /// `|remainder| < |other|`.
    ///
    /// ```
    /// use arbint::BigInt;
    ///
    /// let (q, r) = BigInt::from(-7).div_rem(&BigInt::from(2))?;
    /// assert_eq!((q, r), (BigInt::from(-3), BigInt::from(-1)));
    /// assert!(BigInt::from(1).div_rem(&BigInt::zero()).is_err());
    /// # Ok::<(), arbint::Error>(())
    /// ```
    pub fn div_rem(&self, other: &BigInt) -> Result<(BigInt, BigInt)> {
        if other.is_zero() {
            return Err(Error::arithmetic(ErrorCode::DivisionByZero));
        }
        if let (Some(x), Some(y)) = (self.small_value(), other.small_value()) {
            return Ok((BigInt::from(x / y), BigInt::from(x % y)));
        }

        let (q, r) = match small::power_of_two_exponent(&other.data) {
            Some(shift) => {
                let q = small::shr(&self.data, shift);
                let r = large::sub(&self.data, &small::shl(&q, shift));
                (q, r)
            }
            None => div::div_rem(&self.data, &other.data),
        };
        let quotient = BigInt::from_parts(self.is_negative() != other.is_negative(), q);
        let remainder = BigInt::from_parts(self.is_negative(), r);
        Ok((quotient, remainder))
    }

    /// Truncating quotient, or an error when `other` is zero.
    pub fn checked_div(&self, other: &BigInt) -> Result<BigInt> {
        self.div_rem(other).map(|(q, _)| q)
    }

    /// Remainder with the sign of `self`, or an error when `other` is zero.
    pub fn checked_rem(&self, other: &BigInt) -> Result<BigInt> {
        self.div_rem(other).map(|(_, r)| r)
    }

    // POWERS

    /// Raise to a non-negative power by repeated squaring.
    ///
    /// Any value to the power zero is one, zero included.
    ///
    /// ```
    /// use arbint::BigInt;
    ///
    /// assert_eq!(BigInt::from(-3).pow(3)?, BigInt::from(-27));
    /// assert!(BigInt::from(2).pow(-1).is_err());
    /// # Ok::<(), arbint::Error>(())
    /// ```
    pub fn pow(&self, exponent: i64) -> Result<BigInt> {
        self.pow_with_stats(exponent, &mut OpStats::default())
    }

    /// Like [`pow`](BigInt::pow), recording the work done in `stats`.
    ///
    /// `stats` is reset first. `iterations` counts exponent bits consumed and
    /// `multiplications` counts both squarings and accumulating products.
    pub fn pow_with_stats(&self, exponent: i64, stats: &mut OpStats) -> Result<BigInt> {
        let exponent = match u64::try_from(exponent) {
            Ok(exponent) => exponent,
            Err(_) => return Err(Error::arithmetic(ErrorCode::NegativeExponent)),
        };
        Ok(self.pow_magnitude(&from_u128(exponent as u128), stats))
    }

    /// Raise to a power given as a `BigInt`.
    pub fn pow_big(&self, exponent: &BigInt) -> Result<BigInt> {
        if exponent.is_negative() {
            return Err(Error::arithmetic(ErrorCode::NegativeExponent));
        }
        Ok(self.pow_magnitude(&exponent.data, &mut OpStats::default()))
    }

    fn pow_magnitude(&self, exponent: &[Limb], stats: &mut OpStats) -> BigInt {
        stats.clear();

        // Bases of magnitude 0 or 1 need no work, whatever the exponent.
        match self.small_magnitude() {
            Some(0) if !exponent.is_empty() => return BigInt::zero(),
            Some(1) if !exponent.is_empty() => {
                let odd = exponent[0] & 1 == 1;
                return if self.is_negative() && odd {
                    self.clone()
                } else {
                    BigInt::one()
                };
            }
            _ => {}
        }

        let nbits = bits::significant_bits(exponent);
        let mut result = BigInt::one();
        let mut base = self.clone();
        for i in 0..nbits {
            stats.iterations += 1;
            if bits::bit(exponent, i) {
                result = result.mul_ref(&base);
                stats.multiplications += 1;
            }
            if i + 1 < nbits {
                base = base.square();
                stats.multiplications += 1;
            }
        }
        tracing::debug!(
            exponent_bits = nbits,
            multiplications = stats.multiplications,
            "power finished"
        );
        result
    }

    // BITWISE

    fn bitwise(&self, op: BitOp, other: &BigInt) -> BigInt {
        let (negative, data) = bits::bitwise(
            op,
            &self.data,
            self.is_negative(),
            &other.data,
            other.is_negative(),
        );
        BigInt::from_parts(negative, data)
    }

    /// Bitwise and, in two's complement.
    ///
    /// ```
    /// use arbint::BigInt;
    ///
    /// assert_eq!(BigInt::from(-12).and(&BigInt::from(14)), BigInt::from(4));
    /// ```
    pub fn and(&self, other: &BigInt) -> BigInt {
        self.bitwise(BitOp::And, other)
    }

    /// Bitwise or, in two's complement.
    pub fn or(&self, other: &BigInt) -> BigInt {
        self.bitwise(BitOp::Or, other)
    }

    /// Bitwise exclusive or, in two's complement.
    pub fn xor(&self, other: &BigInt) -> BigInt {
        self.bitwise(BitOp::Xor, other)
    }

    /// Bitwise inversion in two's complement: `-(self + 1)`.
    pub fn inv(&self) -> BigInt {
        self.add_ref(&Self::constants().one).negated()
    }

    /// Shift the magnitude left by `bits`, keeping the sign.
    pub fn shl(&self, bits: usize) -> BigInt {
        BigInt::with_sign(self.sign, small::shl(&self.data, bits))
    }

    /// Shift the magnitude right by `bits`, keeping the sign.
    ///
    /// This truncates toward zero: `-5 >> 1` is `-2`. Shifting every bit
    /// out yields zero.
    pub fn shr(&self, bits: usize) -> BigInt {
        BigInt::from_parts(self.is_negative(), small::shr(&self.data, bits))
    }

    // BIT COUNTS
    //
    // Counts look at the magnitude only and report against a window that is
    // the smallest multiple of 32 bits holding every significant bit.

    /// Zero bits below the lowest set bit of the magnitude; 32 for zero.
    pub fn trailing_zeros(&self) -> u64 {
        bits::trailing_zeros(&self.data)
    }

    /// Zero bits between the highest set bit of the magnitude and the top of
    /// its 32-bit window; 32 for zero.
    ///
    /// ```
    /// use arbint::BigInt;
    ///
    /// assert_eq!(BigInt::from(0xFFFF).leading_zeros(), 16);
    /// assert_eq!(BigInt::from(1u64 << 40).leading_zeros(), 23);
    /// ```
    pub fn leading_zeros(&self) -> u64 {
        bits::leading_zeros(&self.data)
    }

    /// Number of set bits in the magnitude.
    pub fn count_bits(&self) -> u64 {
        bits::count_ones(&self.data)
    }

    /// Bit length of the magnitude; 0 for zero.
    pub fn significant_bits(&self) -> u64 {
        bits::significant_bits(&self.data)
    }

    /// Test bit `n` of the magnitude.
    pub fn bit(&self, n: u64) -> bool {
        bits::bit(&self.data, n)
    }

    /// Copy with bit `n` of the magnitude set or cleared, keeping the sign.
    pub fn with_bit(&self, n: u64, value: bool) -> BigInt {
        BigInt::from_parts(self.is_negative(), bits::with_bit(&self.data, n, value))
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &BigInt) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => match self.sign {
                Sign::Positive => large::compare(&self.data, &other.data),
                Sign::Negative => large::compare(&other.data, &self.data),
                Sign::Zero => Ordering::Equal,
            },
            ord => ord,
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// TEXT TRAITS

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<BigInt> {
        BigInt::parse(s)
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_radix(f, 10, "", false)
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}

impl fmt::Binary for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_radix(f, 2, "0b", false)
    }
}

impl fmt::Octal for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_radix(f, 8, "0o", false)
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_radix(f, 16, "0x", false)
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_radix(f, 16, "0x", true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn big(s: &str) -> BigInt {
        BigInt::parse(s).unwrap()
    }

    #[test]
    fn normalized_zero() {
        assert_eq!(BigInt::from_slice(Sign::Negative, &[0, 0]), BigInt::zero());
        assert_eq!(BigInt::from_slice(Sign::Zero, &[5]), BigInt::zero());
        assert_eq!(big("-0"), BigInt::zero());
        assert_eq!(big("-0").sign(), Sign::Zero);
        assert_eq!(big("5").sub_ref(&big("5")), BigInt::zero());
    }

    #[test]
    fn small_flag() {
        assert!(BigInt::zero().is_small());
        assert!(BigInt::from(u32::MAX).is_small());
        assert!(!big("340282366920938463463374607431768211455").is_small());
    }

    #[test]
    fn constants_are_shared() {
        let a = BigInt::constants();
        let b = BigInt::constants();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.minus_one, BigInt::from(-1));
        assert_eq!(a.ten, BigInt::from(10));
    }

    #[test]
    fn ordering() {
        let mut values = vec![
            big("5"),
            big("-18446744073709551617"),
            BigInt::zero(),
            big("-3"),
            big("18446744073709551617"),
        ];
        values.sort();
        let sorted: Vec<String> = values.iter().map(BigInt::to_string).collect();
        assert_eq!(
            sorted,
            ["-18446744073709551617", "-3", "0", "5", "18446744073709551617"]
        );
    }

    #[test]
    fn power_of_two_mul_skips_limb_loops() {
        let x = big("123456789012345678901234567890123456789");
        let mut stats = OpStats::default();
        let product = x.mul_with_stats(&BigInt::from(1u64 << 40), &mut stats);
        assert_eq!(product, x.shl(40));
        assert_eq!(stats, OpStats::default());
    }

    #[test]
    fn karatsuba_counts_splits() {
        let x = BigInt::from(7).pow(2000).unwrap();
        let mut stats = OpStats::default();
        let square = x.mul_with_stats(&x, &mut stats);
        assert!(stats.splits > 0);
        assert!(stats.iterations > 0);
        assert_eq!(square, BigInt::from(7).pow(4000).unwrap());
    }

    #[test]
    fn pow_stats() {
        let mut stats = OpStats::default();
        let x = BigInt::from(3).pow_with_stats(13, &mut stats).unwrap();
        assert_eq!(x, BigInt::from(1594323));
        // 13 = 0b1101: four bits, three squarings, three products.
        assert_eq!(stats.iterations, 4);
        assert_eq!(stats.multiplications, 6);
    }

    #[test]
    fn pow_trivial_bases() {
        let huge = big("100000000000000000000000000000000000001");
        assert_eq!(BigInt::zero().pow_big(&huge).unwrap(), BigInt::zero());
        assert_eq!(BigInt::from(-1).pow_big(&huge).unwrap(), BigInt::from(-1));
        assert_eq!(BigInt::from(-1).pow_big(&(&huge + 1u32)).unwrap(), BigInt::one());
        assert_eq!(BigInt::zero().pow(0).unwrap(), BigInt::one());
        assert!(BigInt::from(2).pow_big(&BigInt::from(-1)).is_err());
    }

    #[test]
    fn shift_zero_by_any_count() {
        assert_eq!(BigInt::zero().shl(usize::MAX), BigInt::zero());
        assert_eq!(BigInt::zero().shr(usize::MAX), BigInt::zero());
        assert_eq!(BigInt::from(3).shr(usize::MAX), BigInt::zero());
    }

    #[test]
    fn shift_truncates_toward_zero() {
        assert_eq!(BigInt::from(-5).shr(1), BigInt::from(-2));
        assert_eq!(BigInt::from(-1).shr(1), BigInt::zero());
        assert_eq!(BigInt::from(-5).shl(2), BigInt::from(-20));
    }

    #[test]
    fn formatting_traits() {
        let x = BigInt::from(-255);
        assert_eq!(format!("{:x}", x), "-ff");
        assert_eq!(format!("{:#X}", x), "-0xFF");
        assert_eq!(format!("{:#b}", BigInt::from(5)), "0b101");
        assert_eq!(format!("{:o}", BigInt::from(8)), "10");
        assert_eq!(format!("{:>6}", BigInt::from(42)), "    42");
        assert_eq!(format!("{:?}", x), "BigInt(-255)");
    }

    #[quickcheck]
    fn div_rem_identity(x: BigInt, y: BigInt) -> bool {
        match x.div_rem(&y) {
            Ok((q, r)) => {
                &(&q * &y) + &r == x
                    && r.abs() < y.abs()
                    && (r.is_zero() || r.sign() == x.sign())
            }
            Err(_) => y.is_zero(),
        }
    }

    #[quickcheck]
    fn add_sub_inverse(x: BigInt, y: BigInt) -> bool {
        &(&x + &y) - &y == x
    }

    #[quickcheck]
    fn decimal_roundtrip(x: BigInt) -> bool {
        big(&x.to_string()) == x
    }

    #[quickcheck]
    fn inv_is_xor_minus_one(x: BigInt) -> bool {
        x.inv() == x.xor(&BigInt::from(-1))
    }

    #[quickcheck]
    fn add_commutes(x: BigInt, y: BigInt) -> bool {
        &x + &y == &y + &x
    }

    #[quickcheck]
    fn mul_commutes(x: BigInt, y: BigInt) -> bool {
        &x * &y == &y * &x
    }

    #[quickcheck]
    fn add_associates(a: BigInt, b: BigInt, c: BigInt) -> bool {
        &(&a + &b) + &c == &a + &(&b + &c)
    }

    #[quickcheck]
    fn mul_associates(a: BigInt, b: BigInt, c: BigInt) -> bool {
        &(&a * &b) * &c == &a * &(&b * &c)
    }

    #[quickcheck]
    fn sign_closure(x: BigInt) -> bool {
        let neg = -&x;
        (&x + &neg).is_zero() && neg.sign() == -x.sign() && neg.abs() == x.abs()
    }

    #[quickcheck]
    fn mul_pow2_is_shl(x: BigInt, k: u8) -> bool {
        let k = k as usize;
        &x * &BigInt::one().shl(k) == x.shl(k)
    }

    #[quickcheck]
    fn radix_roundtrip(x: BigInt, r: u8) -> bool {
        let radix = 2 + r as u32 % 35;
        match x.to_string_radix(radix) {
            Ok(text) => BigInt::parse_radix(&text, radix).ok() == Some(x),
            Err(_) => false,
        }
    }
}
