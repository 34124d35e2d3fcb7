//! # arbint
//!
//! Arbitrary-precision signed integers.
//!
//! A [`BigInt`] holds an exact integer of any size. Arithmetic never
//! overflows; the only operations that can fail are division by zero and
//! raising to a negative power, which report an [`Error`] instead of a
//! partial result.
//!
//! ```
//! use arbint::BigInt;
//!
//! let x: BigInt = "123456789012345678901234567890".parse()?;
//! let y = BigInt::parse("-0xdeadbeef")?;
//!
//! assert_eq!((&x * &y).to_string(), "-461225743873659625387365962538275370510");
//! assert_eq!(format!("{:x}", y), "-deadbeef");
//! # Ok::<(), arbint::Error>(())
//! ```
//!
//! # Text
//!
//! [`BigInt::parse`] reads decimal literals and recognizes `0x`, `0o` and
//! `0b` prefixes after an optional `-`. [`BigInt::parse_radix`] reads any
//! radix from 2 to 36. Parsing is strict: `+`, whitespace, separators and
//! empty digit strings are all errors, and the error carries the byte offset
//! of the first bad character.
//!
//! # Arithmetic
//!
//! All the standard operators are implemented for owned and borrowed
//! values. Division truncates toward zero and the remainder takes the sign
//! of the dividend, matching the native integer types. `/` and `%` panic on
//! a zero divisor; [`BigInt::div_rem`] returns an error instead.
//!
//! Bitwise `&`, `|`, `^` and `!` treat values as infinitely sign-extended
//! two's complement, so `!x == -(x + 1)`. Shifts move the magnitude and keep
//! the sign, truncating toward zero.
//!
//! # Engines
//!
//! The [`Engine`] trait abstracts over back ends. [`Portable`] runs this
//! crate's algorithms. With the default `accelerated` feature,
//! [`Accelerated`] delegates arithmetic to `num-bigint` while sharing the
//! same parser validation, which makes the two easy to cross-check.
//!
//! # Features
//!
//! - `accelerated` (default): the `Accelerated` engine and conversions
//!   to and from `num_bigint::BigInt`.
//! - `arb`: `quickcheck::Arbitrary` for `BigInt`.
//!
//! The crate logs through `tracing`: one `debug` event per completed
//! `mul_with_stats` or `pow_with_stats` call, and `trace` events from the
//! parser and when multiplication switches to the Karatsuba strategy.

#![doc(html_root_url = "https://docs.rs/arbint/0.1.0")]
// Ignored clippy_pedantic lints
#![allow(
    // limb arithmetic is built from these casts
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    // things are often more readable this way
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::should_implement_trait,
    clippy::many_single_char_names,
    clippy::similar_names,
    // noisy
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::inline_always,
)]

// We only use our own error type; no need for the From conversions provided by
// the `?` operator.
macro_rules! tri {
    ($e:expr $(,)?) => {
        match $e {
            core::result::Result::Ok(val) => val,
            core::result::Result::Err(err) => return core::result::Result::Err(err),
        }
    };
}

#[doc(inline)]
pub use crate::bigint::{BigInt, Constants, Sign};
#[cfg(feature = "accelerated")]
#[doc(inline)]
pub use crate::engine::Accelerated;
#[doc(inline)]
pub use crate::engine::{Engine, Portable};
#[doc(inline)]
pub use crate::error::{Category, Error, ErrorCode, Result};
pub use crate::math::{Limb, KARATSUBA_CUTOFF};
pub use crate::stats::OpStats;

pub use crate::bits::BIT_WINDOW;

mod bigint;
mod bits;
mod convert;
mod de;
mod div;
pub mod engine;
pub mod error;
mod math;
mod ops;
mod radix;
mod ser;
mod stats;

#[cfg(any(test, feature = "arb"))]
mod arb;
