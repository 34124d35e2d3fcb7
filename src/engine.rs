//! Interchangeable arithmetic back ends.
//!
//! [`Portable`] runs the algorithms in this crate. [`Accelerated`] hands the
//! arithmetic to `num-bigint` and is available with the `accelerated`
//! feature. Both parse with the same validation, so they accept and reject
//! exactly the same text with the same [`ErrorCode`](crate::ErrorCode), and
//! both produce the same results for every operation.
//!
//! ```
//! use arbint::{Engine, Portable};
//!
//! fn square_text<E: Engine>(engine: &E, text: &str) -> arbint::Result<String> {
//!     let x = engine.parse(text)?;
//!     engine.format(&engine.mul(&x, &x), 10)
//! }
//!
//! assert_eq!(square_text(&Portable::new(), "-0x10")?, "256");
//! # Ok::<(), arbint::Error>(())
//! ```

use crate::bigint::BigInt;
use crate::error::Result;
use std::cmp::Ordering;
use std::fmt::Debug;

/// The capability set shared by every back end.
pub trait Engine {
    /// The integer type this engine computes with.
    type Value: Clone + Debug + Ord;

    /// Short name for logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Parse with `0x`/`0o`/`0b` prefix detection, like [`BigInt::parse`].
    fn parse(&self, text: &str) -> Result<Self::Value>;

    /// Parse in an explicit radix, like [`BigInt::parse_radix`].
    fn parse_radix(&self, text: &str, radix: u32) -> Result<Self::Value>;

    /// Render in `radix`, like [`BigInt::to_string_radix`].
    fn format(&self, value: &Self::Value, radix: u32) -> Result<String>;

    fn add(&self, x: &Self::Value, y: &Self::Value) -> Self::Value;

    fn sub(&self, x: &Self::Value, y: &Self::Value) -> Self::Value;

    fn mul(&self, x: &Self::Value, y: &Self::Value) -> Self::Value;

    /// Truncating division. Fails when `y` is zero.
    fn div_rem(&self, x: &Self::Value, y: &Self::Value) -> Result<(Self::Value, Self::Value)>;

    fn and(&self, x: &Self::Value, y: &Self::Value) -> Self::Value;

    fn or(&self, x: &Self::Value, y: &Self::Value) -> Self::Value;

    fn xor(&self, x: &Self::Value, y: &Self::Value) -> Self::Value;

    /// Two's-complement inversion, `-(x + 1)`.
    fn not(&self, x: &Self::Value) -> Self::Value;

    fn compare(&self, x: &Self::Value, y: &Self::Value) -> Ordering {
        x.cmp(y)
    }
}

/// The engine backed by this crate's own algorithms.
#[derive(Copy, Clone, Debug, Default)]
pub struct Portable;

impl Portable {
    pub fn new() -> Self {
        tracing::trace!(engine = "portable", "engine constructed");
        Portable
    }
}

impl Engine for Portable {
    type Value = BigInt;

    fn name(&self) -> &'static str {
        "portable"
    }

    fn parse(&self, text: &str) -> Result<BigInt> {
        BigInt::parse(text)
    }

    fn parse_radix(&self, text: &str, radix: u32) -> Result<BigInt> {
        BigInt::parse_radix(text, radix)
    }

    fn format(&self, value: &BigInt, radix: u32) -> Result<String> {
        value.to_string_radix(radix)
    }

    fn add(&self, x: &BigInt, y: &BigInt) -> BigInt {
        x + y
    }

    fn sub(&self, x: &BigInt, y: &BigInt) -> BigInt {
        x - y
    }

    fn mul(&self, x: &BigInt, y: &BigInt) -> BigInt {
        x * y
    }

    fn div_rem(&self, x: &BigInt, y: &BigInt) -> Result<(BigInt, BigInt)> {
        x.div_rem(y)
    }

    fn and(&self, x: &BigInt, y: &BigInt) -> BigInt {
        x.and(y)
    }

    fn or(&self, x: &BigInt, y: &BigInt) -> BigInt {
        x.or(y)
    }

    fn xor(&self, x: &BigInt, y: &BigInt) -> BigInt {
        x.xor(y)
    }

    fn not(&self, x: &BigInt) -> BigInt {
        x.inv()
    }
}

#[cfg(feature = "accelerated")]
pub use self::accelerated::Accelerated;

#[cfg(feature = "accelerated")]
mod accelerated {
    use super::Engine;
    use crate::error::{Error, ErrorCode, Result};
    use crate::radix;
    use num_bigint::{BigInt, BigUint};

    /// The engine backed by `num-bigint`.
    #[derive(Copy, Clone, Debug, Default)]
    pub struct Accelerated;

    impl Accelerated {
        pub fn new() -> Self {
            tracing::trace!(engine = "accelerated", "engine constructed");
            Accelerated
        }

        fn parse_literal(text: &str, radix: Option<u32>) -> Result<BigInt> {
            let literal = tri!(radix::scan(text, radix));
            // Validated digits always parse.
            let magnitude = match BigUint::parse_bytes(literal.digits, literal.radix) {
                Some(magnitude) => magnitude,
                None => return Err(Error::syntax(ErrorCode::Empty, text.len())),
            };
            let value = BigInt::from(magnitude);
            Ok(if literal.negative { -value } else { value })
        }
    }

    impl Engine for Accelerated {
        type Value = BigInt;

        fn name(&self) -> &'static str {
            "accelerated"
        }

        fn parse(&self, text: &str) -> Result<BigInt> {
            Accelerated::parse_literal(text, None)
        }

        fn parse_radix(&self, text: &str, radix: u32) -> Result<BigInt> {
            Accelerated::parse_literal(text, Some(radix))
        }

        fn format(&self, value: &BigInt, radix: u32) -> Result<String> {
            tri!(radix::check_radix(radix));
            Ok(value.to_str_radix(radix))
        }

        fn add(&self, x: &BigInt, y: &BigInt) -> BigInt {
            x + y
        }

        fn sub(&self, x: &BigInt, y: &BigInt) -> BigInt {
            x - y
        }

        fn mul(&self, x: &BigInt, y: &BigInt) -> BigInt {
            x * y
        }

        fn div_rem(&self, x: &BigInt, y: &BigInt) -> Result<(BigInt, BigInt)> {
            if y.sign() == num_bigint::Sign::NoSign {
                return Err(Error::arithmetic(ErrorCode::DivisionByZero));
            }
            Ok((x / y, x % y))
        }

        fn and(&self, x: &BigInt, y: &BigInt) -> BigInt {
            x & y
        }

        fn or(&self, x: &BigInt, y: &BigInt) -> BigInt {
            x | y
        }

        fn xor(&self, x: &BigInt, y: &BigInt) -> BigInt {
            x ^ y
        }

        fn not(&self, x: &BigInt) -> BigInt {
            !x
        }
    }
}
